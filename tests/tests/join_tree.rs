use tests::{assert_ok, insert_all, setup, Db, Value};

use pretty_assertions::assert_eq;
use std::collections::BTreeSet;
use weft::Record;

const SCHEMA: &str = "
    CREATE TABLE a (id INTEGER PRIMARY KEY, data INTEGER NOT NULL);
    CREATE TABLE b (id INTEGER PRIMARY KEY, a_id INTEGER NOT NULL, data INTEGER NOT NULL);
    CREATE TABLE c (id INTEGER PRIMARY KEY, b_id INTEGER NOT NULL, data INTEGER NOT NULL)
";

const TREE: &str = "
    SELECT a.id AS a, a.data AS data, b.id AS b, b.data AS data, c.id AS c, c.data AS data
    FROM a
    LEFT JOIN b ON b.a_id = a.id
    LEFT JOIN c ON c.b_id = b.id
    ORDER BY a.id, b.id, c.id
";

#[derive(Debug, Default, PartialEq, Record)]
struct A {
    a: i64,
    data: i64,
    bs: Vec<B>,
}

#[derive(Debug, Default, PartialEq, Record)]
struct B {
    b: i64,
    data: i64,
    cs: Option<Vec<C>>,
}

#[derive(Debug, Default, PartialEq, Record)]
struct C {
    c: i64,
    data: i64,
}

fn insert(db: &Db, table: &str, rows: Vec<[i64; 3]>) {
    let sql = match table {
        "a" => "INSERT INTO a (id, data) VALUES (?1, ?3)",
        "b" => "INSERT INTO b (id, a_id, data) VALUES (?1, ?2, ?3)",
        _ => "INSERT INTO c (id, b_id, data) VALUES (?1, ?2, ?3)",
    };
    insert_all(
        db,
        sql,
        rows.into_iter()
            .map(|row| row.into_iter().map(Value::from).collect()),
    );
}

fn tree(db: &Db) -> Vec<A> {
    let mut roots = vec![];
    assert_ok!(db.query_tree(&mut roots, TREE, &[]));
    roots
}

#[test]
fn same_parent_identity_is_merged() {
    let db = setup(SCHEMA);
    insert(&db, "a", vec![[1, 0, 10]]);
    insert(&db, "b", vec![[1, 1, 100], [2, 1, 200]]);

    let roots = tree(&db);

    assert_eq!(
        roots,
        vec![A {
            a: 1,
            data: 10,
            bs: vec![
                B {
                    b: 1,
                    data: 100,
                    cs: None,
                },
                B {
                    b: 2,
                    data: 200,
                    cs: None,
                },
            ],
        }]
    );
}

#[test]
fn row_without_children_yields_empty_collection() {
    let db = setup(SCHEMA);
    insert(&db, "a", vec![[1, 0, 1]]);

    let roots = tree(&db);

    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].data, 1);
    assert!(roots[0].bs.is_empty());
}

#[test]
fn three_levels_count_distinct_ids() {
    let db = setup(SCHEMA);

    // Uneven fan-out: grandparent i has i parents, parent j has j % 3 children
    let mut a_rows = vec![];
    let mut b_rows = vec![];
    let mut c_rows = vec![];
    let mut next_b = 100;
    let mut next_c = 1000;

    for a in 1..=4 {
        a_rows.push([a, 0, a]);
        for _ in 0..a {
            next_b += 1;
            b_rows.push([next_b, a, next_b]);
            for _ in 0..next_b % 3 {
                next_c += 1;
                c_rows.push([next_c, next_b, next_c]);
            }
        }
    }

    insert(&db, "a", a_rows.clone());
    insert(&db, "b", b_rows.clone());
    insert(&db, "c", c_rows.clone());

    let roots = tree(&db);

    let distinct_a: BTreeSet<_> = a_rows.iter().map(|row| row[0]).collect();
    assert_eq!(roots.len(), distinct_a.len());

    for root in &roots {
        let distinct_b: BTreeSet<_> = b_rows
            .iter()
            .filter(|row| row[1] == root.a)
            .map(|row| row[0])
            .collect();
        assert_eq!(root.bs.len(), distinct_b.len());

        for b in &root.bs {
            let expected: Vec<_> = c_rows
                .iter()
                .filter(|row| row[1] == b.b)
                .map(|row| row[0])
                .collect();
            let actual: Vec<_> = b
                .cs
                .iter()
                .flatten()
                .map(|c| c.c)
                .collect();
            assert_eq!(actual, expected);
        }
    }
}

#[test]
fn powers_of_data_across_three_levels() {
    let db = setup(SCHEMA);

    for x in [1_i64, 3, 5] {
        insert(&db, "a", vec![[x, 0, x]]);
        for j in 1..=3 {
            let b = x * 10 + j;
            insert(&db, "b", vec![[b, x, x.pow(2) + j]]);
            insert(&db, "c", vec![[b * 10, b, x.pow(3) + j], [b * 10 + 1, b, x.pow(4) + j]]);
        }
    }

    // Unrelated grandparent with nothing to join
    assert_ok!(db.execute(
        "INSERT INTO a (id, data) VALUES (?1, ?2)",
        &[Value::from(9), Value::from(81)]
    ));

    let roots = tree(&db);

    assert_eq!(roots.len(), 4);
    assert_eq!(
        roots.iter().map(|root| root.a).collect::<Vec<_>>(),
        vec![1, 3, 5, 9]
    );

    let third = &roots[2];
    assert_eq!(third.data, 5);
    assert_eq!(
        third.bs.iter().map(|b| b.data).collect::<Vec<_>>(),
        vec![26, 27, 28]
    );
    for (j, b) in (1..).zip(&third.bs) {
        assert_eq!(
            b.cs.as_deref().unwrap_or_default(),
            [
                C {
                    c: b.b * 10,
                    data: 125 + j,
                },
                C {
                    c: b.b * 10 + 1,
                    data: 625 + j,
                },
            ]
        );
    }

    let unrelated = &roots[3];
    assert_eq!(unrelated.data, 81);
    assert!(unrelated.bs.is_empty());
}

#[test]
fn query_tree_extends_existing_roots() {
    let db = setup(SCHEMA);
    insert(&db, "a", vec![[1, 0, 1], [2, 0, 2]]);
    insert(&db, "b", vec![[10, 1, 0], [20, 2, 0]]);

    let mut roots = vec![A {
        a: 2,
        data: 200,
        bs: vec![],
    }];
    assert_ok!(db.query_tree(&mut roots, TREE, &[]));

    assert_eq!(
        roots.iter().map(|root| (root.a, root.data, root.bs.len())).collect::<Vec<_>>(),
        vec![(2, 200, 1), (1, 1, 1)]
    );
}

#[test]
fn params_reach_the_executor() {
    let db = setup(SCHEMA);
    insert(&db, "a", vec![[1, 0, 1], [2, 0, 2]]);

    let mut roots: Vec<A> = vec![];
    assert_ok!(db.query_tree(
        &mut roots,
        "SELECT a.id AS a, a.data AS data, b.id AS b, b.data AS data, c.id AS c, c.data AS data
         FROM a LEFT JOIN b ON b.a_id = a.id LEFT JOIN c ON c.b_id = b.id
         WHERE a.id = ?1",
        &[Value::from(2)],
    ));

    assert_eq!(roots.len(), 1);
    assert_eq!(roots[0].a, 2);
}
