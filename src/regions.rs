use std::collections::HashMap;
use std::io;
use std::path;

use serde::Deserialize;

use crate::error::Error;
use crate::records;
use crate::reporting;

/// Name given to the region that gathers every top-level region of a file.
pub const ROOT_NAME : &str = "All regions";

/// A region and the votes counted in it, with any smaller regions inside it. `votes` is `None`
/// where the count was absent or unreadable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Region {
    pub name : String,
    pub votes : Option<u64>,
    pub sub_regions : Vec<Region>,
}

impl Region {
    /// Creates a region with a known count and no sub-regions.
    pub fn new(name : impl Into<String>, votes : u64) -> Self {
        Region {
            name : name.into(),
            votes : Some(votes),
            sub_regions : Vec::new(),
        }
    }

    /// Replaces the sub-regions of this region.
    pub fn with_sub_regions(mut self, sub_regions : Vec<Region>) -> Self {
        self.sub_regions = sub_regions;
        self
    }
}

/// Total votes of a region and everything beneath it. A missing region counts as 0, as does a
/// region without a vote count.
pub fn count_votes_in_regions(region : Option<&Region>) -> u64 {
    // Explicit work list; depth is unbounded.
    let mut pending : Vec<&Region> = region.into_iter().collect();
    let mut total : u64 = 0;

    while let Some(region) = pending.pop() {
        total = total.saturating_add(region.votes.unwrap_or(0));
        pending.extend(region.sub_regions.iter());
    }

    total
}

/// A row of the regions file.
#[derive(Debug, Deserialize)]
struct RegionRecord {
    name : String,
    parent : Option<String>,
    #[serde(deserialize_with = "csv::invalid_option")]
    votes : Option<u64>,
}

/// Reads a region tree from a file with a `name,parent,votes` header.
pub fn from_file(path : &path::Path, report : bool) -> Result<Region, Error> {
    from_reader(records::open(path)?, report)
}

/// Reads a region tree from CSV text. Rows without a parent sit directly beneath a root named
/// `ROOT_NAME`. Rows that can't be reached from the root (unknown parent, or a parent cycle) are
/// left out and reported.
pub fn from_reader<R : io::Read>(reader : R, report : bool) -> Result<Region, Error> {
    let rows : Vec<(u32, RegionRecord)> = records::deserialize(reader)?;

    let mut index = HashMap::with_capacity(rows.len());
    for (position, (_, record)) in rows.iter().enumerate() {
        if index.insert(record.name.as_str(), position).is_some() {
            return Err(Error::DuplicateRegion(record.name.clone()));
        }
    }

    let mut children = vec![Vec::new(); rows.len()];
    let mut roots = Vec::new();

    for (position, (line, record)) in rows.iter().enumerate() {
        if record.votes.is_none() {
            reporting::uncounted_region(*line, &record.name, report);
        }

        match &record.parent {
            None => roots.push(position),
            Some(parent) => {
                if let Some(&parent) = index.get(parent.as_str()) {
                    children[parent].push(position);
                }
            }
        }
    }

    let mut visited = vec![false; rows.len()];

    let sub_regions =
        roots
        .into_iter()
        .map(|position| assemble(position, &rows, &children, &mut visited))
        .collect();

    for (position, (line, record)) in rows.iter().enumerate() {
        if !visited[position] {
            reporting::orphan_region(*line, &record.name, record.parent.as_deref());
        }
    }

    Ok(Region {
        name : String::from(ROOT_NAME),
        votes : None,
        sub_regions,
    })
}

/// Builds the region at `position` along with everything beneath it.
fn assemble(position : usize, rows : &[(u32, RegionRecord)], children : &[Vec<usize>], visited : &mut [bool]) -> Region {
    visited[position] = true;

    let record = &rows[position].1;

    let sub_regions =
        children[position]
        .iter()
        .map(|&child| assemble(child, rows, children, visited))
        .collect();

    Region {
        name : record.name.clone(),
        votes : record.votes,
        sub_regions,
    }
}
