//! In-memory election simulation: voter registration, one vote per voter, results and winner,
//! plus the pure helpers used around it (vote validation, regional totals, tallies).

pub mod ballot;
pub mod candidates;
pub mod election;
pub mod error;
pub mod records;
pub mod regions;
pub mod reporting;
pub mod tally;
pub mod validator;
pub mod voter;

pub use candidates::Candidate;
pub use election::{Election, Standing, VoteError, VoteReceipt};
pub use error::Error;
pub use regions::{count_votes_in_regions, Region};
pub use tally::{tally_pure, Tally};
pub use validator::{Reason, Validation, ValidationRules, VoteValidator, VoterField};
pub use voter::Voter;
