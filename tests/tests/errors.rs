use tests::{assert_err, assert_ok, setup, Value};

use weft::{schema, Record};

const SCHEMA: &str = "
    CREATE TABLE items (id INTEGER PRIMARY KEY, name TEXT, flag INTEGER, score REAL);
    INSERT INTO items VALUES (1, 'one', 1, 0.5)
";

#[derive(Debug, Default, Record)]
struct Item {
    id: i64,
    name: String,
}

#[test]
fn no_rows_is_distinct_from_failure() {
    let db = setup(SCHEMA);

    let err = assert_err!(db.get::<Item>(
        "SELECT id, name FROM items WHERE id = ?1",
        &[Value::from(2)]
    ));
    assert!(err.is_record_not_found());
    assert!(!err.is_driver_operation_failed());

    let err = assert_err!(db.get::<Item>("SELECT id, name FROM missing_table", &[]));
    assert!(err.is_driver_operation_failed());
    assert!(!err.is_record_not_found());
}

#[test]
fn unselected_column_is_reported() {
    let db = setup(SCHEMA);

    let err = assert_err!(db.get::<Item>("SELECT id, score FROM items", &[]));
    assert!(err.is_unmapped_column());
    assert_eq!(err.to_string(), "column `score` does not map to any field");
}

#[derive(Debug, Default, Record)]
struct Strict {
    id: i64,
    #[column("score")]
    flag: bool,
}

#[test]
fn numeric_never_becomes_bool() {
    let db = setup(SCHEMA);

    let err = assert_err!(db.get::<Strict>("SELECT id, score FROM items", &[]));
    assert!(err.is_type_conversion());
    assert_eq!(
        err.to_string(),
        "scanning column `score`: cannot convert F64 to bool"
    );
}

#[derive(Debug, Default, Record)]
struct Node {
    id: i64,
    next: Option<Box<Node>>,
}

#[derive(Debug, Default, Record)]
struct Ring {
    id: i64,
    link: Option<Box<Link>>,
}

#[derive(Debug, Default, Record)]
struct Link {
    id: i64,
    ring: Vec<Ring>,
}

#[test]
fn recursive_types_are_rejected_before_any_row() {
    let db = setup(SCHEMA);

    let err = assert_err!(db.get::<Node>("SELECT id FROM items", &[]));
    assert!(err.is_invalid_shape());
    assert_eq!(
        err.to_string(),
        "invalid shape: `Node` is a recursive type (Node -> Node)"
    );

    let err = assert_err!(schema::describe::<Ring>());
    assert_eq!(
        err.to_string(),
        "invalid shape: `Ring` is a recursive type (Ring -> Link -> Ring)"
    );

    let err = assert_err!(weft::Db::builder().register::<Link>().connect("sqlite::memory:"));
    assert!(err.is_invalid_shape());
}

#[test]
fn single_record_destinations_only_for_single_rows() {
    let db = setup(SCHEMA);

    let mut items: Vec<Item> = vec![];
    let err = assert_err!(db.query_row(&mut items, "SELECT id, name FROM items", &[]));
    assert_eq!(
        err.to_string(),
        "invalid shape: not a mappable shape: `query_row` needs a single record, found a collection of records"
    );

    let mut item = Item::default();
    assert_ok!(db.query_row(&mut item, "SELECT id, name FROM items", &[]));
    assert_eq!(item.name, "one");
}
