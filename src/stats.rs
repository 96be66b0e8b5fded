//! Rider statistics: leaderboard ranking over ride counts.
//!
//! Input is a snapshot of the club's members feed — a JSON array of
//! riders with their season ride counts. Two orderings come out of it:
//!
//! - the **roster**, sorted by lowercased first name, for pick-a-rider
//!   listings;
//! - the **leaderboard**, ranked by descending ride count with standard
//!   competition ranking (tied counts share a rank, the next distinct
//!   count resumes numbering after all tied entries).
//!
//! One rider can be pinned to rank 1 unconditionally via
//! `[stats] pinned_rider` in the config. The pin is an override applied
//! around the generic ranking, not woven into it: the pinned rider is
//! pulled out first, everyone else is ranked starting at 2, and the
//! pinned rider is put back on top. This keeps [`competition_ranks`]
//! independently testable.

use serde::Deserialize;
use std::fs;
use std::io;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum StatsError {
    #[error("cannot read members file: {0}")]
    Io(#[from] io::Error),
    #[error("invalid members file: {0}")]
    Json(#[from] serde_json::Error),
}

/// A club member, as delivered by the members feed.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Rider {
    pub id: String,
    pub name: String,
    pub ride_count: u32,
}

/// A rider with its leaderboard position.
#[derive(Debug, Clone, PartialEq)]
pub struct RankedRider {
    pub rider: Rider,
    pub rank: u32,
}

/// Read a members snapshot: a JSON array of riders.
pub fn load_members(path: &Path) -> Result<Vec<Rider>, StatsError> {
    let content = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&content)?)
}

/// Sort riders by lowercased first name (first whitespace-separated word
/// of the full name). Used for the roster listing.
pub fn sort_by_first_name(riders: &mut [Rider]) {
    riders.sort_by_key(|r| first_name(&r.name));
}

fn first_name(full_name: &str) -> String {
    full_name
        .split_whitespace()
        .next()
        .unwrap_or(full_name)
        .to_lowercase()
}

/// Build the leaderboard: descending ride count, competition ranking,
/// with the pinned rider (exact name match) forced to rank 1 and excluded
/// from the generic computation.
///
/// Ties beyond the count are kept in input order (stable sort), matching
/// the feed's own ordering.
pub fn rank_riders(riders: Vec<Rider>, pinned_name: Option<&str>) -> Vec<RankedRider> {
    let (pinned, mut rest): (Vec<Rider>, Vec<Rider>) = riders
        .into_iter()
        .partition(|r| pinned_name.is_some_and(|name| r.name == name));

    rest.sort_by_key(|r| std::cmp::Reverse(r.ride_count));

    let counts: Vec<u32> = rest.iter().map(|r| r.ride_count).collect();
    let first_rank = if pinned.is_empty() { 1 } else { 2 };
    let ranks = competition_ranks(&counts, first_rank);

    let mut leaderboard: Vec<RankedRider> = pinned
        .into_iter()
        .map(|rider| RankedRider { rider, rank: 1 })
        .collect();
    leaderboard.extend(
        rest.into_iter()
            .zip(ranks)
            .map(|(rider, rank)| RankedRider { rider, rank }),
    );
    leaderboard
}

/// Standard competition ranking over counts already sorted descending.
///
/// Equal counts share a rank; the next distinct count resumes numbering
/// after all tied entries. `[10, 10, 7, 3]` with `first_rank` 1 ranks as
/// `[1, 1, 3, 4]`.
pub fn competition_ranks(sorted_counts: &[u32], first_rank: u32) -> Vec<u32> {
    let mut ranks = Vec::with_capacity(sorted_counts.len());
    for (i, count) in sorted_counts.iter().enumerate() {
        if i > 0 && *count == sorted_counts[i - 1] {
            ranks.push(ranks[i - 1]);
        } else {
            ranks.push(first_rank + i as u32);
        }
    }
    ranks
}
