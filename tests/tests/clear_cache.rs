//! Runs in its own binary so clearing the process-wide cache cannot race
//! other tests.

use std::sync::Arc;

use weft::{schema, Record};

#[derive(Debug, Default, Record)]
struct Tag {
    id: i64,
    label: String,
}

#[test]
fn clear_cache_forces_a_rebuild() {
    let before = schema::describe::<Tag>().unwrap();
    assert!(Arc::ptr_eq(&before, &schema::describe::<Tag>().unwrap()));

    schema::clear_cache();

    let after = schema::describe::<Tag>().unwrap();
    assert!(!Arc::ptr_eq(&before, &after));

    // Descriptors handed out earlier stay usable
    assert_eq!(before.fields.len(), 2);
    assert_eq!(before.fields[1].wire_name, after.fields[1].wire_name);
}
