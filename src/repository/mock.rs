use async_trait::async_trait;
use mockall::mock;

use super::errors::RepositoryResult;
use super::{CategoryReader, PriceReader};
use crate::domain::{category::StockGroup, price::PriceData};

mock! {
    pub PriceReader {}

    #[async_trait]
    impl PriceReader for PriceReader {
        async fn fetch_price_data(&self, stock_id: &str, customer_id: &str, company_id: &str) -> RepositoryResult<PriceData>;
    }
}

mock! {
    pub CategoryReader {}

    #[async_trait]
    impl CategoryReader for CategoryReader {
        async fn list_listed_categories(&self, company_id: &str) -> RepositoryResult<Vec<StockGroup>>;
    }
}
