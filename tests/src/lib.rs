#[macro_use]
mod macros;

pub use weft::{Db, Value};

use std::sync::Once;

/// Installs a test-writer subscriber once per test binary. Set `RUST_LOG`
/// to see mapper events.
pub fn init_tracing() {
    static INIT: Once = Once::new();

    INIT.call_once(|| {
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();
    });
}

/// Opens a fresh in-memory database and runs `schema`, a `;`-separated list
/// of statements.
pub fn setup(schema: &str) -> Db {
    init_tracing();

    let db = assert_ok!(Db::connect("sqlite::memory:"));

    for statement in schema.split(';').map(str::trim).filter(|s| !s.is_empty()) {
        assert_ok!(db.execute(statement, &[]));
    }

    db
}

/// Inserts one row per parameter list.
pub fn insert_all(db: &Db, sql: &str, rows: impl IntoIterator<Item = Vec<Value>>) {
    for params in rows {
        assert_ok!(db.execute(sql, &params));
    }
}
