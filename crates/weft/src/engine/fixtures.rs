use crate::Record;

#[derive(Debug, Default, PartialEq, Record)]
pub(crate) struct User {
    pub(crate) id: i64,
    #[column("userName")]
    pub(crate) name: String,
    pub(crate) email: Option<String>,
}

#[derive(Debug, Default, PartialEq, Record)]
pub(crate) struct Contact {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) phone: Option<String>,
}

#[derive(Debug, Default, PartialEq, Record)]
pub(crate) struct Account {
    pub(crate) id: i64,
    pub(crate) name: String,
    pub(crate) owner: Contact,
    pub(crate) balance: i64,
}

#[derive(Debug, Default, PartialEq, Record)]
pub(crate) struct Card {
    #[column("contact_id")]
    pub(crate) id: i64,
    #[column("contact_name")]
    pub(crate) name: String,
}

#[derive(Debug, Default, PartialEq, Record)]
pub(crate) struct Profile {
    pub(crate) id: i64,
    pub(crate) contact: Option<Box<Card>>,
}

#[derive(Debug, Default, PartialEq, Record)]
pub(crate) struct Grandparent {
    pub(crate) a: i64,
    pub(crate) data: i64,
    pub(crate) parents: Vec<Parent>,
}

#[derive(Debug, Default, PartialEq, Record)]
pub(crate) struct Parent {
    pub(crate) b: i64,
    pub(crate) data: i64,
    pub(crate) children: Option<Vec<Child>>,
}

#[derive(Debug, Default, PartialEq, Record)]
pub(crate) struct Child {
    pub(crate) c: i64,
    pub(crate) data: Option<f64>,
}

/// An order whose customer card sits behind a pointer, with a non-trailing
/// collection that join queries leave alone.
#[derive(Debug, Default, PartialEq, Record)]
pub(crate) struct Order {
    pub(crate) id: u32,
    pub(crate) notes: Vec<Contact>,
    pub(crate) customer: Option<Box<Card>>,
    pub(crate) total: f64,
    pub(crate) lines: Vec<Line>,
}

#[derive(Debug, Default, PartialEq, Record)]
pub(crate) struct Line {
    pub(crate) sku: String,
    pub(crate) qty: u8,
}

/// Holds its children by pointer.
#[derive(Debug, Default, PartialEq, Record)]
pub(crate) struct Bundle {
    pub(crate) id: i64,
    pub(crate) items: Vec<Box<Child>>,
}
