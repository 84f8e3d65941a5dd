use std::cmp::Ordering;
use std::path;
use std::process;

use clap::{Parser, ValueEnum};

use election_sim::ballot::Ballot;
use election_sim::candidates::Candidate;
use election_sim::election::{Election, Standing};
use election_sim::error::Error;
use election_sim::tally::{self, Tally};
use election_sim::validator::{ValidationRules, VoteValidator, DEFAULT_MIN_AGE};
use election_sim::voter::Voter;
use election_sim::{ballot, candidates, regions, reporting, voter};

/// Order in which results are listed.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
enum SortKey {
    /// Most votes first.
    Votes,
    /// Alphabetical by candidate name.
    Name,
    /// Grouped by party, most votes first within each.
    Party,
}

impl SortKey {
    fn compare(self, a : &Standing, b : &Standing) -> Ordering {
        match self {
            SortKey::Votes => b.votes.cmp(&a.votes),
            SortKey::Name => a.name.cmp(&b.name),
            SortKey::Party => a.party.cmp(&b.party).then(b.votes.cmp(&a.votes)),
        }
    }
}

#[derive(Parser, Debug)]
#[clap(author, version)]
/// Stores the command line arguments.
struct Args {
    /// Path to the CSV of candidates (id,name,party).
    #[clap()]
    candidates : path::PathBuf,

    /// Path to the CSV of voters asking to register (id,name,age).
    #[clap()]
    voters : path::PathBuf,

    /// Path to the CSV of votes in casting order (voter,candidate).
    #[clap()]
    votes : path::PathBuf,

    /// Path to a CSV of regional vote counts (name,parent,votes) to total alongside the election.
    #[clap(long)]
    regions : Option<path::PathBuf>,

    /// Minimum age to register.
    #[clap(long, default_value_t = DEFAULT_MIN_AGE)]
    min_age : u32,

    /// Order of the results.
    #[clap(long, value_enum, default_value = "votes")]
    sort : SortKey,

    /// Generate report of registration and voting.
    #[clap(long, takes_value = false)]
    report : bool,
}

/// Compares the tally built from receipts with the election's count, warning about every
/// candidate where they differ. Returns whether they all agree.
fn audit(receipts : &Tally, election : &Election) -> bool {
    let counted = election.tally();
    let mut agree = true;

    for candidate in election.candidates() {
        let issued = receipts.get(&candidate.id).copied().unwrap_or(0);
        let recorded = counted.get(&candidate.id).copied().unwrap_or(0);
        if issued != recorded {
            reporting::audit_mismatch(&candidate.id, issued, recorded);
            agree = false;
        }
    }

    agree
}

/// Registers every voter then casts every ballot in order, returning the election along with
/// the tally of receipts handed out.
fn conduct(candidates : Vec<Candidate>, voters : Vec<(u32, Voter)>, ballots : Vec<(u32, Ballot)>, min_age : u32, report : bool) -> (Election, Tally) {
    let rules = ValidationRules { min_age, ..ValidationRules::default() };
    let validator = VoteValidator::new(rules.clone());

    let mut election = Election::with_rules(candidates, rules);

    for (line, voter) in voters {
        if !election.register_voter(&voter) {
            reporting::rejected_voter(line, &voter, &validator.validate(&voter), report);
        }
    }

    let mut receipts = Tally::new();

    for (line, ballot) in ballots {
        let next = election.cast_vote(
            &ballot.voter_id,
            &ballot.candidate_id,
            |receipt| {
                reporting::accepted_vote(&receipt, report);
                Some(tally::tally_pure(&receipts, &receipt.candidate_id))
            },
            |error| {
                reporting::rejected_vote(line, &ballot, &error, report);
                None
            },
        );

        if let Some(next) = next {
            receipts = next;
        }
    }

    (election, receipts)
}

/// Runs the election described by the input files.
fn run(args : Args) -> Result<(), Error> {
    let (election, receipts) = conduct(
        candidates::from_file(&args.candidates)?,
        voter::from_file(&args.voters)?,
        ballot::from_file(&args.votes)?,
        args.min_age,
        args.report,
    );

    reporting::results(&election.results_by(|a, b| args.sort.compare(a, b)));

    if let Some(path) = &args.regions {
        let root = regions::from_file(path, args.report)?;
        reporting::region_total(regions::count_votes_in_regions(Some(&root)), election.votes_cast());
    }

    reporting::winner(election.winner().as_ref());

    if !audit(&receipts, &election) {
        return Err(Error::AuditMismatch);
    }

    Ok(())
}

fn main() {
    let args = Args::parse();
    match run(args) {
        Ok(_) => {
            process::exit(exitcode::OK);
        },
        Err(error) => {
            reporting::error(&error);
            process::exit(error.exit_code());
        }
    }
}
