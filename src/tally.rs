use std::collections::BTreeMap;

/// Vote counts keyed by candidate id.
pub type Tally = BTreeMap<String, u64>;

/// Returns a new tally with one more vote for `candidate_id`, adding the candidate if it was not
/// already present. The given tally is left as it was.
pub fn tally_pure(current : &Tally, candidate_id : &str) -> Tally {
    let mut next = current.clone();
    *next.entry(candidate_id.to_string()).or_insert(0) += 1;
    next
}

/// Total number of votes in a tally.
pub fn total(tally : &Tally) -> u64 {
    tally.values().sum()
}
