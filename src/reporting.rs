use colored::*;

use crate::ballot::Ballot;
use crate::election::{Standing, VoteError, VoteReceipt};
use crate::error::Error;
use crate::validator::Validation;
use crate::voter::Voter;

/// Displays a voter who could not be registered, and why.
pub fn rejected_voter(number : u32, voter : &Voter, verdict : &Validation, report : bool) {
    if report {
        // A voter who passes validation can only have been refused for being on the roll already.
        let reason = if verdict.valid {
            String::from("already registered")
        }
        else {
            verdict.reason.to_string()
        };

        let age = match voter.age {
            None => String::from("_"),
            Some(age) => age.to_string(),
        };

        println!("{} {},{},{} ({}) (line: {})", "Rejected Voter:".bright_green().bold(), voter.id, voter.name, age, reason, number);
    }
}

/// Displays a vote that was recorded.
pub fn accepted_vote(receipt : &VoteReceipt, report : bool) {
    if report {
        println!("    {} -> {}", receipt.voter_id, receipt.candidate_id);
    }
}

/// Displays a vote that was turned away, and why.
pub fn rejected_vote(number : u32, ballot : &Ballot, error : &VoteError, report : bool) {
    if report {
        println!("{} {} -> {} ({}) (line: {})", "Rejected Vote:".bright_magenta(), ballot.voter_id, ballot.candidate_id, error, number);
    }
}

/// Displays the standing of every candidate.
pub fn results(results : &[Standing]) {
    println!("{}", "Results:".bright_yellow().bold());

    for standing in results {
        println!("    {} ({}, {}) : {}", standing.name, standing.id, standing.party, standing.votes);
    }
}

/// Warns that the running tally of receipts disagrees with the election's own count.
pub fn audit_mismatch(candidate_id : &str, audited : u64, counted : u64) {
    println!("{} {} has {} recorded votes but {} receipts", "Warning:".yellow().bold(), candidate_id, counted, audited);
}

/// Displays a region whose vote count was missing or unreadable.
pub fn uncounted_region(number : u32, name : &str, report : bool) {
    if report {
        println!("{} {} has no usable vote count (line: {})", "Uncounted Region:".bright_green().bold(), name, number);
    }
}

/// Warns about a region that can't be placed in the tree.
pub fn orphan_region(number : u32, name : &str, parent : Option<&str>) {
    println!("{} region {} under {} is not part of the tree and was skipped (line: {})", "Warning:".yellow().bold(), name, parent.unwrap_or("_"), number);
}

/// Displays the regional total beside the number of votes counted here.
pub fn region_total(total : u64, counted : usize) {
    println!("{} {} (counted locally: {})", "Regional Total:".bright_cyan(), total, counted);
}

/// Displays the winner.
pub fn winner(winner : Option<&Standing>) {
    match winner {
        Some(winner) => println!("{} {} ({})", "Winner:".bright_blue(), winner.name, winner.party),
        None => println!("{}", "No votes were cast".bright_blue()),
    }
}

/// Displays an error that ended the run.
pub fn error(error : &Error) {
    match error {
        Error::Csv(error) => println!("{} {}", "CSV Error:".red().bold(), error),
        Error::AuditMismatch => println!("{} {}", "Audit Error:".red().bold(), error),
        other => println!("{} {}", "Input Error:".red().bold(), other),
    }
}
