//! Leaderboard ordering

use serde::{Deserialize, Serialize};

/// A user's entry before ranking
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankEntry {
    pub name: String,
    pub total_points: u32,
}

/// A ranked entry with its 1-based position
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankedEntry {
    pub position: usize,
    pub name: String,
    pub total_points: u32,
}

/// Order entries by points (descending), then name.
///
/// Equal point totals share a position and the next position skips ahead
/// ("1, 1, 3").
pub fn rank(mut entries: Vec<RankEntry>) -> Vec<RankedEntry> {
    entries.sort_by(|a, b| {
        b.total_points
            .cmp(&a.total_points)
            .then_with(|| a.name.cmp(&b.name))
    });

    let mut ranked: Vec<RankedEntry> = Vec::with_capacity(entries.len());
    for (index, entry) in entries.into_iter().enumerate() {
        let position = match ranked.last() {
            Some(prev) if prev.total_points == entry.total_points => prev.position,
            _ => index + 1,
        };
        ranked.push(RankedEntry {
            position,
            name: entry.name,
            total_points: entry.total_points,
        });
    }
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry(name: &str, total_points: u32) -> RankEntry {
        RankEntry {
            name: name.to_string(),
            total_points,
        }
    }

    #[test]
    fn test_rank_orders_by_points() {
        let ranked = rank(vec![entry("ana", 300), entry("luis", 1247), entry("eva", 80)]);
        let names: Vec<_> = ranked.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, ["luis", "ana", "eva"]);
        assert_eq!(ranked[0].position, 1);
        assert_eq!(ranked[2].position, 3);
    }

    #[test]
    fn test_ties_share_position() {
        let ranked = rank(vec![entry("b", 100), entry("a", 100), entry("c", 50)]);
        assert_eq!(ranked[0].name, "a");
        assert_eq!(
            ranked.iter().map(|r| r.position).collect::<Vec<_>>(),
            vec![1, 1, 3]
        );
    }

    #[test]
    fn test_empty_leaderboard() {
        assert!(rank(Vec::new()).is_empty());
    }
}
