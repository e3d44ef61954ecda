use crate::model::{CatalogError, RawRecord};

#[async_trait::async_trait]
pub trait CatalogSource: Send + Sync {
    async fn fetch_all_vehicles(&self) -> Result<Vec<RawRecord>, CatalogError>;
    async fn search_by_make_model(&self, make: &str, model: &str) -> Result<Vec<RawRecord>, CatalogError>;
    async fn records_for_make(&self, make: &str) -> Result<Vec<RawRecord>, CatalogError>;
}
