use std::fmt;

use crate::voter::Voter;

/// The youngest age at which a voter may register, unless the rules say otherwise.
pub const DEFAULT_MIN_AGE : u32 = 18;

/// A voter field whose presence can be demanded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VoterField {
    Id,
    Name,
    Age,
}

/// What a `VoteValidator` checks for.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationRules {
    pub min_age : u32,
    pub required_fields : Vec<VoterField>,
}

impl Default for ValidationRules {
    fn default() -> Self {
        ValidationRules {
            min_age : DEFAULT_MIN_AGE,
            required_fields : vec![VoterField::Id, VoterField::Name, VoterField::Age],
        }
    }
}

/// Why a voter was accepted or turned away.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reason {
    Allowed,
    NoAge,
    NoName,
    NoId,
    LessAge,
}

impl fmt::Display for Reason {
    fn fmt(&self, f : &mut fmt::Formatter<'_>) -> fmt::Result {
        let reason = match self {
            Reason::Allowed => "allowed",
            Reason::NoAge => "NoAge",
            Reason::NoName => "NoName",
            Reason::NoId => "NoId",
            Reason::LessAge => "less age",
        };
        write!(f, "{}", reason)
    }
}

/// The verdict on a single voter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Validation {
    pub valid : bool,
    pub reason : Reason,
}

impl Validation {
    fn allowed() -> Self {
        Validation { valid : true, reason : Reason::Allowed }
    }

    fn refused(reason : Reason) -> Self {
        Validation { valid : false, reason }
    }
}

/// Checks voters against a fixed set of rules.
#[derive(Debug, Clone)]
pub struct VoteValidator {
    rules : ValidationRules,
}

impl VoteValidator {
    /// Creates a validator for the given rules.
    pub fn new(rules : ValidationRules) -> Self {
        VoteValidator { rules }
    }

    /// The minimum age this validator enforces.
    pub fn min_age(&self) -> u32 {
        self.rules.min_age
    }

    fn requires(&self, field : VoterField) -> bool {
        self.rules.required_fields.contains(&field)
    }

    /// Gives the verdict on a voter. Missing fields are checked first (age, then name, then id),
    /// and only then the minimum age.
    pub fn validate(&self, voter : &Voter) -> Validation {
        // An age of zero (or NaN) says nothing about the voter, so it counts as missing.
        let age = voter.age.filter(|age| *age != 0.0 && !age.is_nan());

        if self.requires(VoterField::Age) && age.is_none() {
            Validation::refused(Reason::NoAge)
        }
        else if self.requires(VoterField::Name) && voter.name.is_empty() {
            Validation::refused(Reason::NoName)
        }
        else if self.requires(VoterField::Id) && voter.id.is_empty() {
            Validation::refused(Reason::NoId)
        }
        else if age.map_or(false, |age| age < f64::from(self.rules.min_age)) {
            Validation::refused(Reason::LessAge)
        }
        else {
            Validation::allowed()
        }
    }
}

impl Default for VoteValidator {
    fn default() -> Self {
        VoteValidator::new(ValidationRules::default())
    }
}
