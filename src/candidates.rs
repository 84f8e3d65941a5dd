use std::collections::HashSet;
use std::io;
use std::path;

use serde::Deserialize;

use crate::error::Error;
use crate::records;

/// A person standing for election.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Candidate {
    pub id : String,
    pub name : String,
    pub party : String,
}

impl Candidate {
    /// Creates a new candidate.
    pub fn new(id : impl Into<String>, name : impl Into<String>, party : impl Into<String>) -> Self {
        Candidate {
            id : id.into(),
            name : name.into(),
            party : party.into(),
        }
    }
}

/// Reads the candidates from a file with an `id,name,party` header, in the order listed.
pub fn from_file(path : &path::Path) -> Result<Vec<Candidate>, Error> {
    from_reader(records::open(path)?)
}

/// Reads the candidates from CSV text. A repeated id is an error, since the election could not
/// tell the two apart.
pub fn from_reader<R : io::Read>(reader : R) -> Result<Vec<Candidate>, Error> {
    let rows : Vec<(u32, Candidate)> = records::deserialize(reader)?;

    let mut seen = HashSet::with_capacity(rows.len());
    let mut candidates = Vec::with_capacity(rows.len());

    for (_, candidate) in rows {
        if !seen.insert(candidate.id.clone()) {
            return Err(Error::DuplicateCandidate(candidate.id));
        }
        candidates.push(candidate);
    }

    Ok(candidates)
}
