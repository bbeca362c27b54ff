use bsonlite::bsonlite::Bsonlite;
use bsonlite::errors::BsonliteResult;
use bsonlite::seed::{seed_all_types, ALL_TYPES_COLLECTION, SAMPLE_DB};

fn main() -> BsonliteResult<()> {
    let engine = Bsonlite::new();
    seed_all_types(&engine)?;

    // one success line, nothing else on stdout
    println!(
        "Collection '{}' created in '{}' and sample data inserted successfully!",
        ALL_TYPES_COLLECTION, SAMPLE_DB
    );

    engine.close()
}
