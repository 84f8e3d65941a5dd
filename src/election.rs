use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use thiserror::Error;

use crate::candidates::Candidate;
use crate::tally::Tally;
use crate::validator::{ValidationRules, VoteValidator};
use crate::voter::Voter;

/// Why a vote was turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum VoteError {
    #[error("Voter not registered")]
    NotRegistered,
    #[error("Candidate does not exist")]
    UnknownCandidate,
    #[error("Voter has already voted")]
    AlreadyVoted,
}

/// Handed to the caller when a vote has been recorded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VoteReceipt {
    pub voter_id : String,
    pub candidate_id : String,
}

/// A candidate along with the votes they hold at the time of asking.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Standing {
    pub id : String,
    pub name : String,
    pub party : String,
    pub votes : u64,
}

/// A single election: the candidates standing, the voters on the roll, and who each voter chose.
///
/// All state is private. It changes only through `register_voter` and `cast_vote` (or `vote`),
/// and the sum of the counts always equals the number of voters who have voted.
#[derive(Debug, Clone)]
pub struct Election {
    candidates : Vec<Candidate>,
    validator : VoteValidator,
    registered : HashSet<String>,
    votes : HashMap<String, u64>,
    voter_votes : HashMap<String, String>,
}

impl Election {
    /// Creates an election with the default voter rules (every field present, aged 18 or over).
    pub fn new(candidates : Vec<Candidate>) -> Self {
        Election::with_rules(candidates, ValidationRules::default())
    }

    /// Creates an election that admits voters according to `rules`.
    pub fn with_rules(candidates : Vec<Candidate>, rules : ValidationRules) -> Self {
        let votes =
            candidates
            .iter()
            .map(|c| (c.id.clone(), 0))
            .collect();

        Election {
            candidates,
            validator : VoteValidator::new(rules),
            registered : HashSet::new(),
            votes,
            voter_votes : HashMap::new(),
        }
    }

    /// Puts a voter on the roll. Returns false, leaving the roll alone, if the voter is
    /// incomplete, too young, or already registered.
    pub fn register_voter(&mut self, voter : &Voter) -> bool {
        if !voter.is_complete() || !self.validator.validate(voter).valid {
            return false;
        }

        self.registered.insert(voter.id.clone())
    }

    /// Records a vote, or says why it can't be. Checks are made in order: the voter is
    /// registered, the candidate exists, the voter hasn't voted yet. Nothing changes unless all
    /// three pass.
    pub fn vote(&mut self, voter_id : &str, candidate_id : &str) -> Result<VoteReceipt, VoteError> {
        if !self.registered.contains(voter_id) {
            return Err(VoteError::NotRegistered);
        }

        let count = match self.votes.get_mut(candidate_id) {
            Some(count) => count,
            None => return Err(VoteError::UnknownCandidate),
        };

        if self.voter_votes.contains_key(voter_id) {
            return Err(VoteError::AlreadyVoted);
        }

        *count += 1;
        self.voter_votes.insert(voter_id.to_string(), candidate_id.to_string());

        Ok(VoteReceipt {
            voter_id : voter_id.to_string(),
            candidate_id : candidate_id.to_string(),
        })
    }

    /// Records a vote as `vote` does, then hands the outcome to exactly one of `on_success` or
    /// `on_error` and returns whatever it returns.
    pub fn cast_vote<T, S, E>(&mut self, voter_id : &str, candidate_id : &str, on_success : S, on_error : E) -> T
    where
        S : FnOnce(VoteReceipt) -> T,
        E : FnOnce(VoteError) -> T,
    {
        match self.vote(voter_id, candidate_id) {
            Ok(receipt) => on_success(receipt),
            Err(error) => on_error(error),
        }
    }

    /// Current standing of every candidate, most votes first. Candidates on equal votes keep the
    /// order they were listed in.
    pub fn results(&self) -> Vec<Standing> {
        self.results_by(|a, b| b.votes.cmp(&a.votes))
    }

    /// Current standing of every candidate, in the order given by `compare`. The sort is stable.
    pub fn results_by<F>(&self, compare : F) -> Vec<Standing>
    where
        F : FnMut(&Standing, &Standing) -> Ordering,
    {
        let mut results : Vec<Standing> =
            self
            .candidates
            .iter()
            .map(|c| Standing {
                id : c.id.clone(),
                name : c.name.clone(),
                party : c.party.clone(),
                votes : self.votes.get(&c.id).copied().unwrap_or(0),
            })
            .collect();

        results.sort_by(compare);

        results
    }

    /// The candidate with the most votes, the first listed winning a tie. `None` when there are
    /// no candidates or nobody has voted.
    pub fn winner(&self) -> Option<Standing> {
        self
        .results()
        .into_iter()
        .next()
        .filter(|standing| standing.votes > 0)
    }

    /// The candidates, in the order they were given.
    pub fn candidates(&self) -> &[Candidate] {
        &self.candidates
    }

    /// Number of voters on the roll.
    pub fn registered_count(&self) -> usize {
        self.registered.len()
    }

    /// Number of votes recorded.
    pub fn votes_cast(&self) -> usize {
        self.voter_votes.len()
    }

    /// The candidate a voter chose, if they have voted.
    pub fn choice_of(&self, voter_id : &str) -> Option<&str> {
        self.voter_votes.get(voter_id).map(String::as_str)
    }

    /// A copy of the current counts.
    pub fn tally(&self) -> Tally {
        self
        .votes
        .iter()
        .map(|(id, votes)| (id.clone(), *votes))
        .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::tally;

    fn panchayat() -> Election {
        Election::new(vec![
            Candidate::new("C1", "Ram", "A"),
            Candidate::new("C2", "Sita", "B"),
        ])
    }

    fn registered(election : &mut Election, ids : &[&str]) {
        for id in ids {
            assert!(election.register_voter(&Voter::new(*id, "Voter", 30)));
        }
    }

    #[test]
    fn voters_register_exactly_once() {
        let mut election = panchayat();
        let mohan = Voter::new("V1", "Mohan", 25);

        assert!(election.register_voter(&mohan));
        assert!(!election.register_voter(&mohan));
        assert!(!election.register_voter(&Voter::new("V1", "Someone Else", 40)));
        assert_eq!(election.registered_count(), 1);
    }

    #[test]
    fn minors_are_not_registered() {
        let mut election = panchayat();

        for age in 0..18 {
            assert!(!election.register_voter(&Voter::new("V1", "Mohan", age)));
        }

        assert_eq!(election.registered_count(), 0);
        assert_eq!(election.cast_vote("V1", "C1", |_| true, |_| false), false);
    }

    #[test]
    fn incomplete_voters_are_not_registered() {
        let mut election = panchayat();

        assert!(!election.register_voter(&Voter::new("", "Mohan", 25)));
        assert!(!election.register_voter(&Voter::new("V1", "", 25)));
        assert!(!election.register_voter(&Voter { age : None, ..Voter::new("V1", "Mohan", 25) }));
        assert_eq!(election.registered_count(), 0);
    }

    #[test]
    fn any_numeric_age_is_weighed_against_the_minimum() {
        let mut election = panchayat();

        assert!(election.register_voter(&Voter { age : Some(30.0), ..Voter::new("V1", "Mohan", 0) }));
        assert!(election.register_voter(&Voter { age : Some(18.5), ..Voter::new("V2", "Gita", 0) }));
        assert!(!election.register_voter(&Voter { age : Some(-5.0), ..Voter::new("V3", "Hari", 0) }));
        assert!(!election.register_voter(&Voter { age : Some(17.99), ..Voter::new("V4", "Leela", 0) }));

        assert_eq!(election.registered_count(), 2);
    }

    #[test]
    fn candidates_keep_their_listed_order() {
        let election = panchayat();
        let ids : Vec<&str> = election.candidates().iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["C1", "C2"]);
    }

    #[test]
    fn minimum_age_follows_the_rules() {
        let rules = ValidationRules { min_age : 21, ..ValidationRules::default() };
        let mut election = Election::with_rules(vec![Candidate::new("C1", "Ram", "A")], rules);

        assert!(!election.register_voter(&Voter::new("V1", "Mohan", 20)));
        assert!(election.register_voter(&Voter::new("V2", "Gita", 21)));
    }

    #[test]
    fn successful_votes_reach_the_success_branch() {
        let mut election = panchayat();
        registered(&mut election, &["V1"]);

        let outcome = election.cast_vote(
            "V1",
            "C1",
            |receipt| format!("{} voted for {}", receipt.voter_id, receipt.candidate_id),
            |error| format!("error: {}", error),
        );

        assert_eq!(outcome, "V1 voted for C1");
        assert_eq!(election.choice_of("V1"), Some("C1"));
    }

    #[test]
    fn failures_are_checked_in_order() {
        let mut election = panchayat();

        // Unregistered and unknown candidate: registration is reported first.
        assert_eq!(election.vote("V9", "C9"), Err(VoteError::NotRegistered));

        registered(&mut election, &["V1"]);
        assert_eq!(election.vote("V1", "C9"), Err(VoteError::UnknownCandidate));

        assert!(election.vote("V1", "C1").is_ok());
        // Already voted and unknown candidate: the candidate is reported first.
        assert_eq!(election.vote("V1", "C9"), Err(VoteError::UnknownCandidate));
        assert_eq!(election.vote("V1", "C2"), Err(VoteError::AlreadyVoted));
    }

    #[test]
    fn error_branch_receives_the_reason() {
        let mut election = panchayat();

        let message = election.cast_vote("V1", "C1", |_| String::new(), |error| error.to_string());
        assert_eq!(message, "Voter not registered");

        registered(&mut election, &["V1"]);
        let message = election.cast_vote("V1", "C7", |_| String::new(), |error| error.to_string());
        assert_eq!(message, "Candidate does not exist");
    }

    #[test]
    fn second_votes_change_nothing() {
        let mut election = panchayat();
        registered(&mut election, &["V1"]);

        assert!(election.vote("V1", "C1").is_ok());
        let before = election.tally();

        for candidate in ["C1", "C2", "C1"] {
            let message = election.cast_vote("V1", candidate, |_| String::new(), |error| error.to_string());
            assert_eq!(message, "Voter has already voted");
        }

        assert_eq!(election.tally(), before);
        assert_eq!(election.choice_of("V1"), Some("C1"));
        assert_eq!(election.votes_cast(), 1);
    }

    #[test]
    fn failed_votes_leave_no_trace() {
        let mut election = panchayat();
        registered(&mut election, &["V1"]);

        assert!(election.vote("V1", "C3").is_err());
        assert!(election.vote("V2", "C1").is_err());

        assert_eq!(election.votes_cast(), 0);
        assert_eq!(election.choice_of("V1"), None);
        assert_eq!(tally::total(&election.tally()), 0);
    }

    #[test]
    fn total_votes_match_successful_casts() {
        let mut election = panchayat();
        registered(&mut election, &["V1", "V2", "V3", "V4"]);

        let attempts = [
            ("V1", "C1"), ("V2", "C2"), ("V1", "C2"), ("V5", "C1"),
            ("V3", "C4"), ("V3", "C1"), ("V4", "C1"), ("V4", "C1"),
        ];

        let successes =
            attempts
            .iter()
            .filter(|(voter, candidate)| election.vote(voter, candidate).is_ok())
            .count();

        assert_eq!(successes, 4);
        assert_eq!(tally::total(&election.tally()), successes as u64);
        assert_eq!(election.votes_cast(), successes);
    }

    #[test]
    fn results_cover_every_candidate() {
        let mut election = panchayat();
        registered(&mut election, &["V1"]);
        election.cast_vote("V1", "C1", |_| (), |_| ());

        let results = election.results();

        assert_eq!(
            results,
            vec![
                Standing { id : "C1".into(), name : "Ram".into(), party : "A".into(), votes : 1 },
                Standing { id : "C2".into(), name : "Sita".into(), party : "B".into(), votes : 0 },
            ]
        );
    }

    #[test]
    fn results_default_to_most_votes_first() {
        let mut election = panchayat();
        registered(&mut election, &["V1", "V2"]);
        election.vote("V1", "C2").unwrap();
        election.vote("V2", "C2").unwrap();

        let order : Vec<String> = election.results().into_iter().map(|s| s.id).collect();
        assert_eq!(order, vec!["C2", "C1"]);
    }

    #[test]
    fn results_can_be_ordered_by_the_caller() {
        let mut election = Election::new(vec![
            Candidate::new("C1", "Ram", "A"),
            Candidate::new("C2", "Sita", "B"),
            Candidate::new("C3", "Arjun", "A"),
        ]);
        registered(&mut election, &["V1"]);
        election.vote("V1", "C1").unwrap();

        let by_name : Vec<String> =
            election
            .results_by(|a, b| a.name.cmp(&b.name))
            .into_iter()
            .map(|s| s.name)
            .collect();
        assert_eq!(by_name, vec!["Arjun", "Ram", "Sita"]);

        // Fewest votes first; ties stay in listed order.
        let ascending : Vec<String> =
            election
            .results_by(|a, b| a.votes.cmp(&b.votes))
            .into_iter()
            .map(|s| s.id)
            .collect();
        assert_eq!(ascending, vec!["C2", "C3", "C1"]);
    }

    #[test]
    fn results_do_not_change_the_election() {
        let mut election = panchayat();
        registered(&mut election, &["V1"]);
        election.vote("V1", "C2").unwrap();

        let first = election.results();
        let _ = election.results_by(|a, b| a.id.cmp(&b.id));

        assert_eq!(election.results(), first);
        assert_eq!(election.votes_cast(), 1);
    }

    #[test]
    fn no_votes_means_no_winner() {
        let mut election = panchayat();
        registered(&mut election, &["V1"]);

        assert_eq!(election.winner(), None);
        assert_eq!(Election::new(Vec::new()).winner(), None);
    }

    #[test]
    fn ties_go_to_the_first_listed_candidate() {
        let mut election = panchayat();
        registered(&mut election, &["V1", "V2"]);
        election.vote("V1", "C2").unwrap();
        election.vote("V2", "C1").unwrap();

        assert_eq!(election.winner().map(|w| w.id), Some("C1".to_string()));
    }

    #[test]
    fn elections_do_not_share_state() {
        let mut first = panchayat();
        let mut second = panchayat();

        registered(&mut first, &["V1"]);
        first.vote("V1", "C1").unwrap();

        assert_eq!(second.registered_count(), 0);
        assert_eq!(second.vote("V1", "C1"), Err(VoteError::NotRegistered));
        assert_eq!(second.winner(), None);
    }

    #[test]
    fn a_full_election() {
        let mut election = panchayat();

        assert!(election.register_voter(&Voter::new("V1", "Mohan", 25)));

        let outcome = election.cast_vote("V1", "C1", |_| "voted!".to_string(), |e| format!("error: {}", e));
        assert_eq!(outcome, "voted!");

        let results = election.results();
        let votes_for = |id : &str| results.iter().find(|s| s.id == id).map(|s| s.votes);
        assert_eq!(votes_for("C1"), Some(1));
        assert_eq!(votes_for("C2"), Some(0));

        let winner = election.winner().unwrap();
        assert_eq!(winner.id, "C1");
        assert_eq!(winner.name, "Ram");
    }
}
