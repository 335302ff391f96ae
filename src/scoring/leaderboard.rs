//! Competitive ranking of scored decks.
//!
//! Standard competition ranking: equal totals share a rank and the next
//! rank skips (1, 1, 3). Ties are listed by ascending user id, with unowned
//! decks last.

use std::cmp::Reverse;

use serde::Serialize;

use super::engine::DeckScoreResult;
use crate::core::UserId;

/// One row of a leaderboard.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    /// 1-based.
    pub rank: u32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user_id: Option<UserId>,
    pub total_score: i64,
}

/// Ranked scored decks, best first.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Leaderboard {
    entries: Vec<LeaderboardEntry>,
}

impl Leaderboard {
    pub fn from_results<'r>(results: impl IntoIterator<Item = &'r DeckScoreResult>) -> Self {
        let mut rows: Vec<(Option<UserId>, i64)> = results
            .into_iter()
            .map(|r| (r.deck.user_id(), r.total_score))
            .collect();
        rows.sort_by_key(|&(user_id, total)| (Reverse(total), user_id.is_none(), user_id));

        let mut entries: Vec<LeaderboardEntry> = Vec::with_capacity(rows.len());
        for (position, (user_id, total_score)) in rows.into_iter().enumerate() {
            let rank = match entries.last() {
                Some(prev) if prev.total_score == total_score => prev.rank,
                _ => position as u32 + 1,
            };
            entries.push(LeaderboardEntry {
                rank,
                user_id,
                total_score,
            });
        }

        Self { entries }
    }

    #[must_use]
    pub fn entries(&self) -> &[LeaderboardEntry] {
        &self.entries
    }

    /// Entries sharing first place.
    pub fn leaders(&self) -> impl Iterator<Item = &LeaderboardEntry> {
        self.entries.iter().take_while(|e| e.rank == 1)
    }

    #[must_use]
    pub fn rank_of(&self, user_id: UserId) -> Option<u32> {
        self.entries
            .iter()
            .find(|e| e.user_id == Some(user_id))
            .map(|e| e.rank)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
