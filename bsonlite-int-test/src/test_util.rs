use bsonlite::bsonlite::Bsonlite;
use bsonlite::errors::BsonliteResult;
use std::backtrace::Backtrace;

/// Runs a test with setup, teardown, and panic handling.
/// Tests run on the current thread to avoid thread exhaustion when running many tests in parallel.
pub fn run_test<T, B, A>(before: B, test: T, after: A)
where
    T: Fn(TestContext) -> BsonliteResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    B: Fn() -> BsonliteResult<TestContext> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
    A: Fn(TestContext) -> BsonliteResult<()> + std::panic::UnwindSafe + std::panic::RefUnwindSafe,
{
    let result = std::panic::catch_unwind(|| {
        let backtrace = Backtrace::capture();
        match before() {
            Ok(ctx) => {
                let test_result = test(ctx.clone());
                match test_result {
                    Ok(_) => match after(ctx.clone()) {
                        Ok(_) => Ok(()),
                        Err(e) => Err((
                            format!("After run failed: {:?}", e),
                            backtrace.to_string(),
                        )),
                    },
                    Err(e) => {
                        let _ = after(ctx.clone());
                        Err((format!("Test failed: {:?}", e), backtrace.to_string()))
                    }
                }
            }
            Err(e) => Err((format!("Before run failed: {:?}", e), backtrace.to_string())),
        }
    });

    match result {
        Ok(Ok(_)) => (),
        Ok(Err((e, bt))) => {
            if !bt.is_empty() && !bt.contains("disabled") {
                eprintln!("\nBacktrace:\n{}", bt);
            }
            panic!("{}", e);
        }
        Err(panic_err) => {
            let err_msg = if let Some(s) = panic_err.downcast_ref::<&str>() {
                s.to_string()
            } else if let Some(s) = panic_err.downcast_ref::<String>() {
                s.clone()
            } else {
                format!("Unknown panic: {:?}", panic_err.type_id())
            };
            panic!("Panic: {}", err_msg);
        }
    }
}

#[derive(Clone)]
pub struct TestContext {
    db: Bsonlite,
}

impl TestContext {
    pub fn new(db: Bsonlite) -> Self {
        Self { db }
    }

    pub fn db(&self) -> Bsonlite {
        self.db.clone()
    }
}

pub fn create_test_context() -> BsonliteResult<TestContext> {
    Ok(TestContext::new(Bsonlite::new()))
}

pub fn cleanup(ctx: TestContext) -> BsonliteResult<()> {
    ctx.db().close()
}

/// Generates a database or collection name unique to the calling test.
pub fn random_name() -> String {
    uuid::Uuid::new_v4().to_string()
}
