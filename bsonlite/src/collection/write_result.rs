use crate::types::ObjectId;

/// The result of a write operation.
///
/// `WriteResult` contains information about a write operation, including the
/// list of document ids that were affected. Because documents themselves do
/// not carry an injected id field, this is how callers learn which ids the
/// store assigned.
///
/// # Examples
///
/// ```rust,ignore
/// let result = collection.insert(doc)?;
///
/// // Get the ids of inserted documents
/// for id in result.affected_ids() {
///     println!("Inserted document with id: {}", id);
/// }
/// ```
#[derive(Debug)]
pub struct WriteResult {
    object_ids: Vec<ObjectId>,
}

impl WriteResult {
    /// Creates a new `WriteResult` with the specified affected ids.
    pub fn new(object_ids: Vec<ObjectId>) -> Self {
        Self { object_ids }
    }

    /// Gets the list of document ids affected by the write operation.
    pub fn affected_ids(&self) -> &Vec<ObjectId> {
        &self.object_ids
    }

    /// Gets the number of affected documents.
    pub fn affected_count(&self) -> usize {
        self.object_ids.len()
    }
}

impl Iterator for WriteResult {
    type Item = ObjectId;

    fn next(&mut self) -> Option<Self::Item> {
        self.object_ids.pop()
    }
}
