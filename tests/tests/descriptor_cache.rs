use std::sync::Arc;

use weft::{schema, Record};

#[derive(Debug, Default, Record)]
struct Address {
    street: String,
    city: String,
}

#[derive(Debug, Default, Record)]
struct Order {
    #[column("orderID")]
    id: i64,
    shipping: Address,
    billing: Option<Box<Address>>,
    lines: Vec<Line>,
}

#[derive(Debug, Default, Record)]
struct Line {
    sku: String,
    qty: u32,
}

#[test]
fn concurrent_builds_share_one_descriptor() {
    tests::init_tracing();

    let descriptors = std::thread::scope(|scope| {
        let handles: Vec<_> = (0..16)
            .map(|_| scope.spawn(schema::describe::<Order>))
            .collect();

        handles
            .into_iter()
            .map(|handle| handle.join().expect("builder thread panicked"))
            .collect::<weft::Result<Vec<_>>>()
    })
    .unwrap();

    let first = &descriptors[0];
    assert!(descriptors.iter().all(|d| Arc::ptr_eq(d, first)));

    // Nested descriptors are shared through the cache too
    let address = schema::describe::<Address>().unwrap();
    let shipping = first.fields[1].nested().unwrap();
    let billing = first.fields[2].nested().unwrap();
    assert!(Arc::ptr_eq(shipping, &address));
    assert!(Arc::ptr_eq(billing, &address));
}

#[test]
fn wire_names() {
    let order = schema::describe::<Order>().unwrap();

    let names: Vec<_> = order
        .fields
        .iter()
        .map(|field| (field.name, field.wire_name.as_str()))
        .collect();

    assert_eq!(
        names,
        [
            ("id", "orderID"),
            ("shipping", "shipping"),
            ("billing", "billing"),
            ("lines", "lines"),
        ]
    );
    assert!(order.fields[0].matches("orderID"));
    assert!(order.fields[0].matches("id"));
    assert!(order.trailing_list().is_some());
    assert_eq!(order.leaf_count(), 5);
}
