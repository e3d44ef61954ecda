use crate::matcher::scoring::score_vehicle;
use crate::model::{QuizAnswer, ScoredVehicle, Vehicle};
use tracing::info;

/// Vehicles scoring at least this are good matches.
pub const GOOD_MATCH_THRESHOLD: u8 = 25;
pub const SHORTLIST_SIZE: usize = 2;

/// Trait defining the interface for the quiz matcher.
pub trait Matcher: Send + Sync {
    fn score(&self, vehicle: &Vehicle, quiz: &QuizAnswer) -> u8;
    fn rank(&self, vehicles: &[Vehicle], quiz: &QuizAnswer) -> Vec<ScoredVehicle>;
}

pub struct MatcherImpl;

impl MatcherImpl {
    pub fn new() -> Self {
        Self
    }
}

impl Matcher for MatcherImpl {
    fn score(&self, vehicle: &Vehicle, quiz: &QuizAnswer) -> u8 {
        score_vehicle(vehicle, quiz)
    }

    /// Scores the whole catalog and returns at most two vehicles.
    ///
    /// Good matches are preferred; when fewer than two exist the best two of
    /// the full list are returned regardless of score. Ties keep catalog order.
    /// An empty catalog yields an empty list and the caller substitutes its
    /// fallback shortlist.
    fn rank(&self, vehicles: &[Vehicle], quiz: &QuizAnswer) -> Vec<ScoredVehicle> {
        let mut scored: Vec<ScoredVehicle> = vehicles
            .iter()
            .map(|v| ScoredVehicle {
                match_score: self.score(v, quiz),
                vehicle: v.clone(),
            })
            .collect();

        // sort_by is stable, so equal scores keep catalog order.
        scored.sort_by(|a, b| b.match_score.cmp(&a.match_score));

        let good_matches = scored
            .iter()
            .filter(|s| s.match_score >= GOOD_MATCH_THRESHOLD)
            .count();

        let shortlist: Vec<ScoredVehicle> = if good_matches >= SHORTLIST_SIZE {
            scored
                .into_iter()
                .filter(|s| s.match_score >= GOOD_MATCH_THRESHOLD)
                .take(SHORTLIST_SIZE)
                .collect()
        } else {
            scored.into_iter().take(SHORTLIST_SIZE).collect()
        };

        info!(
            "✅ Matched {} cars with scores: {:?}",
            shortlist.len(),
            shortlist.iter().map(|s| s.match_score).collect::<Vec<_>>()
        );
        shortlist
    }
}
