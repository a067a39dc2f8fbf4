use tests::{assert_ok, setup, Value};

use pretty_assertions::assert_eq;
use weft::Record;

const SCHEMA: &str = "
    CREATE TABLE users (
        id INTEGER PRIMARY KEY,
        name TEXT NOT NULL,
        email TEXT,
        age INTEGER NOT NULL,
        admin INTEGER NOT NULL,
        joined TEXT NOT NULL
    );
    INSERT INTO users VALUES (1, 'ann', 'ann@x.io', 31, 1, '2023-01-02T03:04:05Z');
    INSERT INTO users VALUES (2, 'bob', NULL, 42, 0, '2024-06-07T08:09:10Z');
";

#[derive(Debug, Default, PartialEq, Record)]
struct User {
    #[column("userID")]
    id: i64,
    name: String,
    email: Option<String>,
    age: u8,
    admin: bool,
    joined: Option<jiff::Timestamp>,
}

fn ts(src: &str) -> jiff::Timestamp {
    assert_ok!(src.parse())
}

#[test]
fn columns_match_declared_names() {
    let db = setup(SCHEMA);

    let user: User = assert_ok!(db.get(
        "SELECT id, name, email, age, admin, joined FROM users WHERE id = ?1",
        &[Value::from(1)],
    ));

    assert_eq!(
        user,
        User {
            id: 1,
            name: "ann".to_string(),
            email: Some("ann@x.io".to_string()),
            age: 31,
            admin: true,
            joined: Some(ts("2023-01-02T03:04:05Z")),
        }
    );
}

#[test]
fn tagged_column_names_bind() {
    let db = setup(SCHEMA);

    let user: User = assert_ok!(db.get(
        r#"SELECT id AS "userID", name FROM users WHERE id = 2"#,
        &[],
    ));

    assert_eq!(user.id, 2);
    assert_eq!(user.name, "bob");
    assert_eq!(user.age, 0);
}

#[test]
fn subset_populates_selected_fields_only() {
    let db = setup(SCHEMA);

    let mut users: Vec<User> = vec![];
    let count = assert_ok!(db.query(
        &mut users,
        "SELECT id, email, admin FROM users ORDER BY id",
        &[],
    ));

    assert_eq!(count, 2);
    assert_eq!(
        users,
        vec![
            User {
                id: 1,
                email: Some("ann@x.io".to_string()),
                admin: true,
                ..Default::default()
            },
            User {
                id: 2,
                admin: false,
                ..Default::default()
            },
        ]
    );
}

#[derive(Debug, Default, PartialEq, Record)]
struct Shuffled {
    age: i32,
    email: Option<String>,
    name: String,
}

#[test]
fn select_order_follows_field_order_of_the_destination() {
    let db = setup(SCHEMA);

    let row: Shuffled = assert_ok!(db.get(
        "SELECT age, email, name FROM users WHERE id = 2",
        &[],
    ));

    assert_eq!(
        row,
        Shuffled {
            age: 42,
            email: None,
            name: "bob".to_string(),
        }
    );
}

#[derive(Debug, Default, PartialEq, Record)]
struct Meta {
    id: i64,
    name: String,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Document {
    meta: Meta,
    id: i64,
    name: String,
    size: i64,
}

#[test]
fn embedded_record_declared_first_takes_the_first_match() {
    let db = setup(
        "CREATE TABLE meta (id INTEGER, name TEXT);
         CREATE TABLE docs (id INTEGER, meta_id INTEGER, name TEXT, size INTEGER);
         INSERT INTO meta VALUES (7, 'inner');
         INSERT INTO docs VALUES (1, 7, 'outer', 512)",
    );

    let doc: Document = assert_ok!(db.get(
        "SELECT meta.id AS id, meta.name AS name, docs.id AS id, docs.name AS name, docs.size AS size
         FROM docs JOIN meta ON meta.id = docs.meta_id",
        &[],
    ));

    assert_eq!(
        doc,
        Document {
            meta: Meta {
                id: 7,
                name: "inner".to_string(),
            },
            id: 1,
            name: "outer".to_string(),
            size: 512,
        }
    );
}

#[derive(Debug, Default, PartialEq, Record)]
struct Author {
    #[column("author_id")]
    id: i64,
    #[column("author_name")]
    name: String,
}

#[derive(Debug, Default, PartialEq, Record)]
struct Post {
    id: i64,
    title: String,
    author: Option<Box<Author>>,
}

#[test]
fn pointer_to_record_allocated_when_selected() {
    let db = setup(
        "CREATE TABLE authors (id INTEGER, name TEXT);
         CREATE TABLE posts (id INTEGER, title TEXT, author_id INTEGER);
         INSERT INTO authors VALUES (3, 'kim');
         INSERT INTO posts VALUES (1, 'hello', 3)",
    );

    let post: Post = assert_ok!(db.get(
        "SELECT posts.id AS id, posts.title AS title, authors.id AS author_id, authors.name AS author_name
         FROM posts JOIN authors ON authors.id = posts.author_id",
        &[],
    ));
    assert_eq!(
        post.author,
        Some(Box::new(Author {
            id: 3,
            name: "kim".to_string(),
        }))
    );

    let post: Post = assert_ok!(db.get("SELECT id, title FROM posts", &[]));
    assert_eq!(post.title, "hello");
    assert_eq!(post.author, None);
}
