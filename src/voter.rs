use std::io;
use std::path;

use serde::Deserialize;

use crate::error::Error;
use crate::records;

/// Someone asking to be put on the electoral roll. An empty `id` or `name` counts as missing, as
/// does an `age` that was absent or not a number. Any number is an age, fractions and negatives
/// included; it is up to validation to turn those away.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Voter {
    pub id : String,
    pub name : String,
    #[serde(deserialize_with = "csv::invalid_option")]
    pub age : Option<f64>,
}

impl Voter {
    /// Creates a voter with every field present.
    pub fn new(id : impl Into<String>, name : impl Into<String>, age : u32) -> Self {
        Voter {
            id : id.into(),
            name : name.into(),
            age : Some(f64::from(age)),
        }
    }

    /// Whether the id, name and age were all given.
    pub fn is_complete(&self) -> bool {
        !self.id.is_empty() && !self.name.is_empty() && self.age.is_some()
    }
}

/// Reads voters from a file with an `id,name,age` header.
pub fn from_file(path : &path::Path) -> Result<Vec<(u32, Voter)>, Error> {
    from_reader(records::open(path)?)
}

/// Reads voters from CSV text. Malformed ages load as missing rather than failing the read, so
/// that registration can turn the voter away.
pub fn from_reader<R : io::Read>(reader : R) -> Result<Vec<(u32, Voter)>, Error> {
    Ok(records::deserialize(reader)?)
}
