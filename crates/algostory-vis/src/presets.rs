//! Default datasets for each walkthrough.

use algostory_steps::{Graph, Result};

pub const EVIDENCE: [&str; 10] = [
    "Fingerprint",
    "Footprint",
    "DNA Sample",
    "Witness Statement",
    "Security Footage",
    "Phone Records",
    "Bank Statement",
    "Alibi Note",
    "Murder Weapon",
    "Blood Sample",
];
pub const EVIDENCE_TARGET: &str = "Murder Weapon";

/// Alphabetized, as binary search requires.
pub const SHELF: [&str; 12] = [
    "Alice in Wonderland",
    "Brave New World",
    "Catch-22",
    "Don Quixote",
    "Emma",
    "Fahrenheit 451",
    "Great Expectations",
    "Heart of Darkness",
    "Jane Eyre",
    "King Lear",
    "Lord of the Flies",
    "Moby Dick",
];
pub const SHELF_TARGET: &str = "Jane Eyre";

pub const BUBBLES: [i64; 8] = [8, 3, 5, 4, 7, 6, 1, 2];
pub const PAPERS: [i64; 7] = [38, 27, 43, 3, 9, 82, 10];
pub const TROOPS: [i64; 7] = [64, 34, 25, 12, 22, 11, 90];
pub const MOUNTAIN: [i64; 10] = [4, 10, 3, 5, 1, 8, 7, 6, 9, 2];

pub const TOWN_SOURCE: &str = "A";
pub const TOWN_TARGET: &str = "F";

const TOWN_PLACES: [(&str, &str); 6] = [
    ("A", "Market Square"),
    ("B", "Blacksmith"),
    ("C", "Bakery"),
    ("D", "Cathedral"),
    ("E", "Tavern"),
    ("F", "Castle"),
];

const TOWN_ROADS: [(&str, &str, u64); 8] = [
    ("A", "B", 4),
    ("A", "C", 2),
    ("B", "C", 1),
    ("B", "D", 5),
    ("C", "E", 10),
    ("D", "E", 3),
    ("D", "F", 2),
    ("E", "F", 4),
];

/// The six-place town the messenger crosses.
pub fn town_map() -> Result<Graph> {
    let mut graph = Graph::new();
    for (id, name) in TOWN_PLACES {
        graph.add_node(id, name)?;
    }
    for (from, to, weight) in TOWN_ROADS {
        graph.add_edge(from, to, weight)?;
    }
    Ok(graph)
}

pub const STARTING_PLATES: [&str; 3] = ["Dinner Plate", "Salad Plate", "Soup Bowl"];

pub const PLATE_TYPES: [&str; 9] = [
    "Dinner Plate",
    "Salad Plate",
    "Soup Bowl",
    "Dessert Plate",
    "Bread Plate",
    "Serving Platter",
    "Cake Plate",
    "Appetizer Plate",
    "Charger Plate",
];

pub const STARTING_CUSTOMERS: [&str; 3] = ["Baker Tom", "Mrs. Smith", "Young Peter"];

pub const CUSTOMER_NAMES: [&str; 10] = [
    "Baker Tom",
    "Mrs. Smith",
    "Young Peter",
    "Old Martha",
    "Farmer John",
    "Teacher Mary",
    "Doctor Brown",
    "Chef Alice",
    "Artist Bob",
    "Student Emma",
];
