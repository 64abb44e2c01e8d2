use std::cmp::Ordering;
use std::sync::Arc;

use crate::model::Game;

/// Comparator deciding the order of games in a summary snapshot.
///
/// Injected at board construction; [`by_score_then_recency`] is the default.
pub type SummaryOrdering = Arc<dyn Fn(&Game, &Game) -> Ordering + Send + Sync>;

/// Default summary order: highest combined score first, and among equal
/// totals the most recently started game first.
pub fn by_score_then_recency() -> SummaryOrdering {
    Arc::new(|a, b| {
        b.total_score()
            .cmp(&a.total_score())
            .then_with(|| b.started_at().cmp(&a.started_at()))
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{Score, Team};
    use chrono::{Duration, TimeZone, Utc};

    fn game(home: &str, away: &str, score: (i32, i32), offset_secs: i64) -> Game {
        let kickoff = Utc.with_ymd_and_hms(2024, 6, 14, 18, 0, 0).unwrap();
        Game::with_start(
            Team::new(home).unwrap(),
            Team::new(away).unwrap(),
            Score::new(score.0, score.1),
            kickoff + Duration::seconds(offset_secs),
        )
    }

    #[test]
    fn test_higher_total_ranks_first() {
        let ordering = by_score_then_recency();
        let high = game("Spain", "Brazil", (10, 2), 0);
        let low = game("Mexico", "Canada", (0, 5), 0);

        assert_eq!(ordering(&high, &low), Ordering::Less);
        assert_eq!(ordering(&low, &high), Ordering::Greater);
    }

    #[test]
    fn test_equal_totals_later_start_ranks_first() {
        let ordering = by_score_then_recency();
        let earlier = game("Spain", "Brazil", (10, 2), 0);
        let later = game("Uruguay", "Italy", (6, 6), 60);

        assert_eq!(ordering(&later, &earlier), Ordering::Less);
    }

    #[test]
    fn test_identical_total_and_start_compare_equal() {
        let ordering = by_score_then_recency();
        let a = game("Germany", "France", (2, 2), 0);
        let b = game("Argentina", "Australia", (3, 1), 0);

        assert_eq!(ordering(&a, &b), Ordering::Equal);
    }
}
