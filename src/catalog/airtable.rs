// Airtable REST client for the vehicle catalog
use crate::catalog::traits::CatalogSource;
use crate::config::AirtableConfig;
use crate::model::{CatalogError, RawRecord};
use reqwest::{Client, Url};
use serde::Deserialize;
use std::time::Duration;
use tracing::{info, warn};

const AIRTABLE_API: &str = "https://api.airtable.com/v0";

#[derive(Debug, Deserialize)]
struct ListResponse {
    #[serde(default)]
    records: Vec<RawRecord>,
    #[serde(default)]
    offset: Option<String>,
}

pub struct AirtableSource {
    client: Client,
    config: AirtableConfig,
    api_base: String,
}

impl AirtableSource {
    pub fn new(config: AirtableConfig, timeout: Duration) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent("CarQuizMatcher/0.1")
            .timeout(timeout)
            .build()?;

        Ok(Self {
            client,
            config,
            api_base: AIRTABLE_API.to_string(),
        })
    }

    fn table_url(&self) -> Result<Url, CatalogError> {
        let mut url = Url::parse(&self.api_base).map_err(|e| CatalogError::Http(e.to_string()))?;
        url.path_segments_mut()
            .map_err(|_| CatalogError::Http(format!("cannot extend base url {}", self.api_base)))?
            .push(&self.config.base_id)
            .push(&self.config.table);
        Ok(url)
    }

    /// Lists every record of the table, following the `offset` cursor across pages.
    async fn list(&self, formula: Option<&str>) -> Result<Vec<RawRecord>, CatalogError> {
        if !self.config.is_configured() {
            return Err(CatalogError::NotConfigured);
        }

        let url = self.table_url()?;
        let mut records = Vec::new();
        let mut offset: Option<String> = None;

        loop {
            let request = {
                let mut query: Vec<(&str, &str)> = Vec::new();
                if let Some(f) = formula {
                    query.push(("filterByFormula", f));
                }
                if let Some(o) = offset.as_deref() {
                    query.push(("offset", o));
                }
                self.client
                    .get(url.clone())
                    .bearer_auth(&self.config.api_key)
                    .query(&query)
            };
            let response = request.send().await?;

            let status = response.status();
            if !status.is_success() {
                let body = response.text().await.unwrap_or_else(|_| "unknown".into());
                warn!("❌ Airtable responded [{}]: {}", status, body);
                return Err(CatalogError::InvalidResponse(status.as_u16()));
            }

            let page: ListResponse = response.json().await?;
            records.extend(page.records);

            match page.offset {
                Some(next) => offset = Some(next),
                None => break,
            }
        }

        Ok(records)
    }
}

#[async_trait::async_trait]
impl CatalogSource for AirtableSource {
    async fn fetch_all_vehicles(&self) -> Result<Vec<RawRecord>, CatalogError> {
        info!("📋 Fetching all cars from '{}' table...", self.config.table);
        let records = self.list(None).await?;
        info!("✅ Fetched {} records", records.len());
        Ok(records)
    }

    async fn search_by_make_model(&self, make: &str, model: &str) -> Result<Vec<RawRecord>, CatalogError> {
        info!("🔍 Searching for {} {}", make, model);
        self.list(Some(&search_formula(make, model))).await
    }

    async fn records_for_make(&self, make: &str) -> Result<Vec<RawRecord>, CatalogError> {
        self.list(Some(&make_formula(make))).await
    }
}

/// Escapes a value for use inside a single-quoted formula string.
fn formula_literal(value: &str) -> String {
    value.replace('\\', "\\\\").replace('\'', "\\'")
}

fn search_formula(make: &str, model: &str) -> String {
    format!(
        "AND(SEARCH(UPPER('{}'), UPPER({{Brand}})), SEARCH(UPPER('{}'), UPPER({{Model}})))",
        formula_literal(make),
        formula_literal(model)
    )
}

fn make_formula(make: &str) -> String {
    format!("{{Brand}} = '{}'", formula_literal(make))
}
