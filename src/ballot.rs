use std::io;
use std::path;

use serde::Deserialize;

use crate::error::Error;
use crate::records;

/// A single vote as it appears in the votes file: who is voting, and for whom.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Ballot {
    #[serde(rename = "voter")]
    pub voter_id : String,
    #[serde(rename = "candidate")]
    pub candidate_id : String,
}

impl Ballot {
    /// Creates a new ballot.
    pub fn new(voter_id : impl Into<String>, candidate_id : impl Into<String>) -> Ballot {
        Ballot {
            voter_id : voter_id.into(),
            candidate_id : candidate_id.into(),
        }
    }
}

/// Reads ballots, in casting order, from a file with a `voter,candidate` header.
pub fn from_file(path : &path::Path) -> Result<Vec<(u32, Ballot)>, Error> {
    from_reader(records::open(path)?)
}

/// Reads ballots from CSV text.
pub fn from_reader<R : io::Read>(reader : R) -> Result<Vec<(u32, Ballot)>, Error> {
    Ok(records::deserialize(reader)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ballots_keep_casting_order() {
        let ballots = from_reader("voter,candidate\nV2,C1\nV1,C2\n".as_bytes()).unwrap();

        assert_eq!(
            ballots,
            vec![(2, Ballot::new("V2", "C1")), (3, Ballot::new("V1", "C2"))]
        );
    }

    #[test]
    fn short_rows_fail_the_read() {
        assert!(from_reader("voter,candidate\nV1\n".as_bytes()).is_err());
    }
}
