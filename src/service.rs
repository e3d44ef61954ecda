use crate::catalog::fallback::fallback_shortlist;
use crate::catalog::Catalog;
use crate::explainer::{fallback_explanation, Explainer};
use crate::matcher::Matcher;
use crate::model::{LeadCapture, QuizAnswer, ScoredVehicle, SearchRequest, Vehicle};
use crate::notifier::LeadChannel;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Shortlist plus the explanation shown alongside it.
#[derive(Debug, Clone)]
pub struct QuizOutcome {
    pub matches: Vec<ScoredVehicle>,
    pub explanation: String,
}

/// Ties the catalog, matcher, explainer and lead channel together.
/// Holds no per-request state, so one instance serves all requests.
#[derive(Clone)]
pub struct QuizService {
    catalog: Catalog,
    matcher: Arc<dyn Matcher>,
    explainer: Arc<dyn Explainer>,
    lead_channel: Arc<dyn LeadChannel>,
}

impl QuizService {
    pub fn new(
        catalog: Catalog,
        matcher: Arc<dyn Matcher>,
        explainer: Arc<dyn Explainer>,
        lead_channel: Arc<dyn LeadChannel>,
    ) -> Self {
        Self {
            catalog,
            matcher,
            explainer,
            lead_channel,
        }
    }

    /// Fetches the catalog, ranks it against the quiz, then explains the result.
    pub async fn submit_quiz(&self, quiz: &QuizAnswer) -> QuizOutcome {
        info!(
            "Processing quiz: {}, {}, {}",
            quiz.budget_range, quiz.vehicle_quality, quiz.fuel_preference
        );

        let vehicles = self.catalog.all_vehicles().await;
        let matches = if vehicles.is_empty() {
            warn!("⚠️ Catalog is empty, using reference shortlist");
            fallback_shortlist()
        } else {
            self.matcher.rank(&vehicles, quiz)
        };

        let explanation = match self.explainer.explain(&matches, quiz).await {
            Ok(text) => {
                info!("✅ Generated explanation");
                text
            }
            Err(e) => {
                warn!("❌ Explanation unavailable, using template: {}", e);
                fallback_explanation(&matches, quiz)
            }
        };

        QuizOutcome {
            matches,
            explanation,
        }
    }

    pub async fn search(&self, request: &SearchRequest) -> Vec<Vehicle> {
        info!("Searching for: {} {}", request.make, request.model);
        self.catalog.search(&request.make, &request.model).await
    }

    pub async fn all_vehicles(&self) -> Vec<Vehicle> {
        self.catalog.all_vehicles().await
    }

    pub async fn makes(&self) -> Vec<String> {
        self.catalog.makes().await
    }

    pub async fn models_for_make(&self, make: &str) -> Vec<String> {
        self.catalog.models_for_make(make).await
    }

    /// Forwards the lead to the sales team; `false` when delivery failed.
    pub async fn capture_lead(&self, lead: &LeadCapture) -> bool {
        info!("Capturing lead: {}", lead.customer_name);
        match self.lead_channel.deliver(lead).await {
            Ok(()) => true,
            Err(e) => {
                error!("❌ Error sending lead email: {}", e);
                false
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::catalog::tests::{raw, StubSource};
    use crate::matcher::scoring::tests::quiz;
    use crate::matcher::MatcherImpl;
    use crate::model::{ExplainError, NotifyError};
    use crate::notifier::template::tests::lead;
    use std::sync::atomic::{AtomicUsize, Ordering};

    pub(crate) struct FixedExplainer(pub Option<&'static str>);

    #[async_trait::async_trait]
    impl Explainer for FixedExplainer {
        async fn explain(&self, _: &[ScoredVehicle], _: &QuizAnswer) -> Result<String, ExplainError> {
            self.0.map(str::to_string).ok_or(ExplainError::EmptyCompletion)
        }
    }

    #[derive(Default)]
    pub(crate) struct CountingChannel {
        pub fail: bool,
        pub delivered: AtomicUsize,
    }

    #[async_trait::async_trait]
    impl LeadChannel for CountingChannel {
        async fn deliver(&self, _: &LeadCapture) -> Result<(), NotifyError> {
            if self.fail {
                return Err(NotifyError::Smtp("relay refused".into()));
            }
            self.delivered.fetch_add(1, Ordering::SeqCst);
            Ok(())
        }
    }

    pub(crate) fn service(
        source: StubSource,
        explanation: Option<&'static str>,
        channel: Arc<CountingChannel>,
    ) -> QuizService {
        QuizService::new(
            Catalog::new(Arc::new(source)),
            Arc::new(MatcherImpl::new()),
            Arc::new(FixedExplainer(explanation)),
            channel,
        )
    }

    #[tokio::test]
    async fn empty_catalog_gets_reference_shortlist() {
        let s = service(StubSource::Records(vec![]), Some("ok"), Arc::default());
        let outcome = s.submit_quiz(&quiz("Premium", "Hybrid", "$35k-$50k")).await;
        let scores: Vec<u8> = outcome.matches.iter().map(|m| m.match_score).collect();
        assert_eq!(scores, vec![95, 88]);
        assert_eq!(outcome.explanation, "ok");
    }

    #[tokio::test]
    async fn unavailable_catalog_is_scored_from_reference_data() {
        let s = service(StubSource::Failing, None, Arc::default());
        let q = quiz("Premium", "Hybrid", "$35k-$50k");
        let outcome = s.submit_quiz(&q).await;
        assert_eq!(outcome.matches.len(), 2);
        assert!(outcome.matches.iter().all(|m| m.vehicle.id.starts_with("dummy")));
        assert!(outcome.explanation.starts_with("Based on your preferences for Premium quality"));
    }

    #[tokio::test]
    async fn live_catalog_is_ranked() {
        let source = StubSource::Records(vec![
            raw("rec1", "Ferrari", "Roma"),
            raw("rec2", "Toyota", "Camry"),
            raw("rec3", "Honda", "Civic"),
        ]);
        let s = service(source, Some("explained"), Arc::default());
        let outcome = s.submit_quiz(&quiz("Everyday", "Petrol", "value")).await;
        let names: Vec<&str> = outcome.matches.iter().map(|m| m.vehicle.name.as_str()).collect();
        assert_eq!(names.len(), 2);
        assert!(!names.contains(&"Roma"));
    }

    #[tokio::test]
    async fn lead_capture_reports_delivery() {
        let ok = Arc::new(CountingChannel::default());
        let s = service(StubSource::Unconfigured, None, ok.clone());
        assert!(s.capture_lead(&lead()).await);
        assert_eq!(ok.delivered.load(Ordering::SeqCst), 1);

        let failing = Arc::new(CountingChannel { fail: true, ..Default::default() });
        let s = service(StubSource::Unconfigured, None, failing);
        assert!(!s.capture_lead(&lead()).await);
    }
}
