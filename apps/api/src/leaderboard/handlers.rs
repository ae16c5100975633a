use axum::{
    extract::{Query, State},
    Json,
};
use serde::{Deserialize, Serialize};

use crate::leaderboard::{community_totals, rank_entries, standing, CommunityTotals, RankedEntry, Standing};
use crate::state::AppState;

#[derive(Debug, Deserialize)]
pub struct LeaderboardQuery {
    pub user: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct LeaderboardResponse {
    pub entries: Vec<RankedEntry>,
    pub standing: Option<Standing>,
    pub totals: CommunityTotals,
}

/// GET /api/v1/leaderboard
pub async fn handle_leaderboard(
    State(state): State<AppState>,
    Query(params): Query<LeaderboardQuery>,
) -> Json<LeaderboardResponse> {
    let board = &state.catalog.leaderboard;
    let entries = rank_entries(board);
    let standing = standing(&entries, params.user.as_deref());
    Json(LeaderboardResponse {
        standing,
        totals: community_totals(board),
        entries,
    })
}
