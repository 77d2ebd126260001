//! Helpers for integration tests.

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use async_trait::async_trait;
use reqwest::StatusCode;

use alfe_storefront::domain::category::StockGroup;
use alfe_storefront::domain::price::PriceData;
use alfe_storefront::repository::errors::{RepositoryError, RepositoryResult};
use alfe_storefront::repository::{CategoryReader, PriceReader};

/// In-memory data source that records how often it was queried.
#[derive(Default)]
pub struct StubRepository {
    prices: Mutex<HashMap<String, PriceData>>,
    failing_stock_ids: Mutex<Vec<String>>,
    categories: Mutex<Vec<StockGroup>>,
    price_fetches: AtomicUsize,
    category_fetches: AtomicUsize,
}

#[allow(dead_code)]
impl StubRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_price(self, stock_id: &str, data: PriceData) -> Self {
        if let Ok(mut prices) = self.prices.lock() {
            prices.insert(stock_id.to_string(), data);
        }
        self
    }

    pub fn with_failing_stock(self, stock_id: &str) -> Self {
        if let Ok(mut failing) = self.failing_stock_ids.lock() {
            failing.push(stock_id.to_string());
        }
        self
    }

    pub fn with_categories(self, ids: &[&str]) -> Self {
        if let Ok(mut categories) = self.categories.lock() {
            categories.extend(ids.iter().map(|id| StockGroup {
                stock_groups: id.to_string(),
                our_company: "alfe".to_string(),
                image_url: None,
                alt_text: None,
            }));
        }
        self
    }

    pub fn price_fetches(&self) -> usize {
        self.price_fetches.load(Ordering::SeqCst)
    }

    pub fn category_fetches(&self) -> usize {
        self.category_fetches.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl PriceReader for StubRepository {
    async fn fetch_price_data(
        &self,
        stock_id: &str,
        _customer_id: &str,
        _company_id: &str,
    ) -> RepositoryResult<PriceData> {
        self.price_fetches.fetch_add(1, Ordering::SeqCst);

        let failing = self.failing_stock_ids.lock().expect("failing ids lock");
        if failing.iter().any(|id| id == stock_id) {
            return Err(RepositoryError::Status(StatusCode::SERVICE_UNAVAILABLE));
        }
        drop(failing);

        let prices = self.prices.lock().expect("prices lock");
        Ok(prices.get(stock_id).cloned().unwrap_or_default())
    }
}

#[async_trait]
impl CategoryReader for StubRepository {
    async fn list_listed_categories(&self, _company_id: &str) -> RepositoryResult<Vec<StockGroup>> {
        self.category_fetches.fetch_add(1, Ordering::SeqCst);
        Ok(self.categories.lock().expect("categories lock").clone())
    }
}
