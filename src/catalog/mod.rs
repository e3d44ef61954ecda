// Catalog module: record-store access plus the fallback policy around it.

pub mod airtable;
pub mod fallback;
pub mod traits;

pub use airtable::AirtableSource;
pub use traits::CatalogSource;

use crate::model::{CatalogError, RawRecord, Vehicle};
use crate::normalizer::normalize_all;
use serde_json::Value;
use std::collections::BTreeSet;
use std::sync::Arc;
use tracing::{error, info, warn};

/// Wraps a [`CatalogSource`] so callers always get usable data: failures are
/// logged and replaced with reference data, never surfaced.
#[derive(Clone)]
pub struct Catalog {
    source: Arc<dyn CatalogSource>,
}

impl Catalog {
    pub fn new(source: Arc<dyn CatalogSource>) -> Self {
        Self { source }
    }

    pub async fn all_vehicles(&self) -> Vec<Vehicle> {
        match self.source.fetch_all_vehicles().await {
            Ok(records) => {
                let vehicles = normalize_all(&records);
                let with_images = vehicles.iter().filter(|v| !v.image_url.is_empty()).count();
                info!("🖼️ {} of {} cars have images", with_images, vehicles.len());
                vehicles
            }
            Err(CatalogError::NotConfigured) => {
                warn!("⚠️ Using fallback catalog - record store not configured");
                fallback::fallback_vehicles()
            }
            Err(e) => {
                error!("❌ Error fetching cars: {}", e);
                warn!("⚠️ Falling back to reference catalog");
                fallback::fallback_vehicles()
            }
        }
    }

    pub async fn search(&self, make: &str, model: &str) -> Vec<Vehicle> {
        match self.source.search_by_make_model(make, model).await {
            Ok(records) => {
                let vehicles = normalize_all(&records);
                info!("✅ Found {} matching cars", vehicles.len());
                vehicles
            }
            Err(CatalogError::NotConfigured) => {
                warn!("⚠️ Using fallback search - record store not configured");
                let make = make.to_lowercase();
                fallback::fallback_vehicles()
                    .into_iter()
                    .filter(|v| v.brand.to_lowercase().contains(&make))
                    .collect()
            }
            Err(e) => {
                error!("❌ Error searching cars: {}", e);
                Vec::new()
            }
        }
    }

    pub async fn makes(&self) -> Vec<String> {
        match self.source.fetch_all_vehicles().await {
            Ok(records) => {
                let makes = distinct_field(&records, "Brand");
                info!("✅ Found {} unique makes", makes.len());
                makes
            }
            Err(e) => {
                warn!("⚠️ Using fallback makes: {}", e);
                fallback::fallback_makes()
            }
        }
    }

    pub async fn models_for_make(&self, make: &str) -> Vec<String> {
        match self.source.records_for_make(make).await {
            Ok(records) => {
                let models = distinct_field(&records, "Model");
                info!("✅ Found {} models for {}", models.len(), make);
                models
            }
            Err(CatalogError::NotConfigured) => {
                warn!("⚠️ Using fallback models for {}", make);
                fallback::fallback_models(make)
            }
            Err(e) => {
                error!("❌ Error fetching models for {}: {}", make, e);
                Vec::new()
            }
        }
    }
}

/// Sorted, de-duplicated, trimmed non-empty string values of `key`.
fn distinct_field(records: &[RawRecord], key: &str) -> Vec<String> {
    records
        .iter()
        .filter_map(|r| r.fields.get(key).and_then(Value::as_str))
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_string)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use serde_json::json;

    pub(crate) enum StubSource {
        Records(Vec<RawRecord>),
        Unconfigured,
        Failing,
    }

    impl StubSource {
        fn result(&self) -> Result<Vec<RawRecord>, CatalogError> {
            match self {
                StubSource::Records(r) => Ok(r.clone()),
                StubSource::Unconfigured => Err(CatalogError::NotConfigured),
                StubSource::Failing => Err(CatalogError::InvalidResponse(503)),
            }
        }
    }

    #[async_trait::async_trait]
    impl CatalogSource for StubSource {
        async fn fetch_all_vehicles(&self) -> Result<Vec<RawRecord>, CatalogError> {
            self.result()
        }
        async fn search_by_make_model(&self, _: &str, _: &str) -> Result<Vec<RawRecord>, CatalogError> {
            self.result()
        }
        async fn records_for_make(&self, _: &str) -> Result<Vec<RawRecord>, CatalogError> {
            self.result()
        }
    }

    pub(crate) fn raw(id: &str, brand: &str, model: &str) -> RawRecord {
        serde_json::from_value(json!({
            "id": id,
            "fields": { "Brand": brand, "Model": model }
        }))
        .unwrap()
    }

    fn catalog(source: StubSource) -> Catalog {
        Catalog::new(Arc::new(source))
    }

    #[tokio::test]
    async fn failures_substitute_reference_catalog() {
        assert_eq!(catalog(StubSource::Failing).all_vehicles().await.len(), 3);
        assert_eq!(catalog(StubSource::Unconfigured).all_vehicles().await.len(), 3);
    }

    #[tokio::test]
    async fn records_are_normalized() {
        let c = catalog(StubSource::Records(vec![raw("rec1", "Kia", "Sportage")]));
        let vehicles = c.all_vehicles().await;
        assert_eq!(vehicles.len(), 1);
        assert_eq!(vehicles[0].fuel_type, "Petrol");
    }

    #[tokio::test]
    async fn unconfigured_search_filters_reference_by_make() {
        let c = catalog(StubSource::Unconfigured);
        let hits = c.search("honda", "anything").await;
        assert_eq!(hits.len(), 1);
        assert_eq!(hits[0].name, "CR-V Hybrid");
        assert!(catalog(StubSource::Failing).search("honda", "x").await.is_empty());
    }

    #[tokio::test]
    async fn makes_are_distinct_and_sorted() {
        let c = catalog(StubSource::Records(vec![
            raw("1", "Toyota", "RAV4"),
            raw("2", " Kia ", "Rio"),
            raw("3", "Toyota", "Camry"),
            raw("4", "", "Orphan"),
        ]));
        assert_eq!(c.makes().await, vec!["Kia", "Toyota"]);
        assert_eq!(catalog(StubSource::Failing).makes().await.len(), 10);
    }

    #[tokio::test]
    async fn models_fallback_depends_on_failure_kind() {
        assert_eq!(
            catalog(StubSource::Unconfigured).models_for_make("Audi").await[0],
            "A3"
        );
        assert!(catalog(StubSource::Failing).models_for_make("Audi").await.is_empty());
        let c = catalog(StubSource::Records(vec![raw("1", "Audi", "Q5"), raw("2", "Audi", "A4")]));
        assert_eq!(c.models_for_make("Audi").await, vec!["A4", "Q5"]);
    }
}
