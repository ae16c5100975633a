use serde::{Deserialize, Serialize};

pub mod handlers;

/// Name the seeded board uses for the signed-in user.
pub const CURRENT_USER_NAME: &str = "You";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub name: String,
    pub points: u32,
    pub courses: u32,
    pub streak: u32,
    pub hours_learned: u32,
    #[serde(default)]
    pub is_current_user: bool,
}

#[derive(Debug, Clone, Serialize)]
pub struct RankedEntry {
    pub rank: usize,
    #[serde(flatten)]
    pub entry: LeaderboardEntry,
}

#[derive(Debug, Clone, Serialize)]
pub struct Standing {
    pub rank: usize,
    pub points: u32,
    /// `None` when already first.
    pub next_rank: Option<usize>,
    pub points_to_next_rank: Option<u32>,
}

#[derive(Debug, Clone, Serialize)]
pub struct CommunityTotals {
    pub top_points: u32,
    pub total_courses: u32,
    pub total_hours: u32,
}

/// Ranks by points, highest first. Ties keep their input order.
pub fn rank_entries(entries: &[LeaderboardEntry]) -> Vec<RankedEntry> {
    let mut sorted = entries.to_vec();
    sorted.sort_by(|a, b| b.points.cmp(&a.points));
    sorted
        .into_iter()
        .enumerate()
        .map(|(i, entry)| RankedEntry { rank: i + 1, entry })
        .collect()
}

/// Finds the user by name (case-insensitive), or the flagged current user when
/// no name is given.
pub fn standing(ranked: &[RankedEntry], user: Option<&str>) -> Option<Standing> {
    let pos = match user {
        Some(name) => ranked
            .iter()
            .position(|r| r.entry.name.eq_ignore_ascii_case(name.trim()))?,
        None => ranked.iter().position(|r| r.entry.is_current_user)?,
    };
    let me = &ranked[pos];
    let above = pos.checked_sub(1).map(|i| &ranked[i]);

    Some(Standing {
        rank: me.rank,
        points: me.entry.points,
        next_rank: above.map(|a| a.rank),
        points_to_next_rank: above.map(|a| a.entry.points.saturating_sub(me.entry.points)),
    })
}

pub fn community_totals(entries: &[LeaderboardEntry]) -> CommunityTotals {
    CommunityTotals {
        top_points: entries.iter().map(|e| e.points).max().unwrap_or(0),
        total_courses: entries.iter().map(|e| e.courses).sum(),
        total_hours: entries.iter().map(|e| e.hours_learned).sum(),
    }
}

pub fn seed_entries() -> Vec<LeaderboardEntry> {
    [
        ("Alex Chen", 2847, 45, 21, 180),
        ("Sarah Johnson", 2653, 38, 18, 152),
        ("Mike Rodriguez", 2512, 42, 15, 168),
        ("Emma Wilson", 2341, 35, 12, 140),
        ("David Kim", 2189, 32, 10, 128),
        ("Lisa Anderson", 2056, 30, 9, 120),
        ("James Brown", 1923, 28, 8, 112),
        (CURRENT_USER_NAME, 73, 12, 7, 48),
        ("Maria Garcia", 1856, 25, 6, 100),
        ("John Smith", 1723, 22, 5, 88),
    ]
    .into_iter()
    .map(|(name, points, courses, streak, hours_learned)| LeaderboardEntry {
        name: name.to_string(),
        points,
        courses,
        streak,
        hours_learned,
        is_current_user: name == CURRENT_USER_NAME,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ranks_follow_points() {
        let ranked = rank_entries(&seed_entries());
        assert_eq!(ranked[0].entry.name, "Alex Chen");
        assert_eq!(ranked[9].entry.name, CURRENT_USER_NAME);
        assert!(ranked.windows(2).all(|w| w[0].entry.points >= w[1].entry.points));
        assert!(ranked.iter().enumerate().all(|(i, r)| r.rank == i + 1));
    }

    #[test]
    fn test_current_user_standing() {
        let ranked = rank_entries(&seed_entries());
        let s = standing(&ranked, None).unwrap();
        assert_eq!(s.rank, 10);
        assert_eq!(s.next_rank, Some(9));
        assert_eq!(s.points_to_next_rank, Some(1723 - 73));
    }

    #[test]
    fn test_leader_has_no_next_rank() {
        let ranked = rank_entries(&seed_entries());
        let s = standing(&ranked, Some("alex chen")).unwrap();
        assert_eq!(s.rank, 1);
        assert_eq!(s.points_to_next_rank, None);
        assert!(standing(&ranked, Some("nobody")).is_none());
    }

    #[test]
    fn test_ties_keep_input_order() {
        let mut entries = seed_entries();
        entries[1].points = entries[0].points;
        let ranked = rank_entries(&entries);
        assert_eq!(ranked[0].entry.name, "Alex Chen");
        assert_eq!(ranked[1].entry.name, "Sarah Johnson");
    }

    #[test]
    fn test_community_totals() {
        let totals = community_totals(&seed_entries());
        assert_eq!(totals.top_points, 2847);
        assert_eq!(totals.total_courses, 309);
        assert_eq!(totals.total_hours, 1236);
    }
}
