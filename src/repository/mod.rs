use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::Serialize;
use serde::de::DeserializeOwned;

use crate::domain::category::StockGroup;
use crate::domain::price::PriceData;
use crate::repository::errors::{RepositoryError, RepositoryResult};

pub mod category;
pub mod errors;
pub mod price;

#[cfg(test)]
pub mod mock;

/// Header carrying the admin secret expected by the GraphQL endpoint.
const ADMIN_SECRET_HEADER: &str = "x-hasura-admin-secret";

#[derive(Clone, Debug)]
/// GraphQL-backed repository that wraps a shared HTTP client.
pub struct GraphqlRepository {
    http: Client, // reqwest::Client is cheap to clone
    endpoint: String,
    admin_secret: Option<String>,
    timeout: Duration,
}

impl GraphqlRepository {
    /// Create a repository that posts queries to `endpoint`.
    pub fn new(endpoint: impl Into<String>, timeout: Duration) -> Self {
        Self {
            http: Client::new(),
            endpoint: endpoint.into(),
            admin_secret: None,
            timeout,
        }
    }

    /// Authenticate every request with the endpoint's admin secret.
    pub fn with_admin_secret(mut self, secret: impl Into<String>) -> Self {
        self.admin_secret = Some(secret.into());
        self
    }

    /// Run `query` with `variables` and decode the `data` member into `T`.
    async fn query<V, T>(&self, query: &str, variables: &V) -> RepositoryResult<T>
    where
        V: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let body = GraphqlRequest { query, variables };

        let mut request = self
            .http
            .post(&self.endpoint)
            .timeout(self.timeout)
            .json(&body);
        if let Some(secret) = &self.admin_secret {
            request = request.header(ADMIN_SECRET_HEADER, secret);
        }

        let response = request.send().await?;
        if !response.status().is_success() {
            return Err(RepositoryError::Status(response.status()));
        }

        let bytes = response.bytes().await?;
        decode_response(&bytes)
    }
}

#[derive(Serialize)]
struct GraphqlRequest<'a, V: ?Sized> {
    query: &'a str,
    variables: &'a V,
}

#[derive(serde::Deserialize)]
struct GraphqlResponse<T> {
    data: Option<T>,
    #[serde(default)]
    errors: Vec<GraphqlError>,
}

#[derive(serde::Deserialize)]
struct GraphqlError {
    message: String,
}

/// Decode a GraphQL response envelope, surfacing `errors` before `data`.
fn decode_response<T: DeserializeOwned>(bytes: &[u8]) -> RepositoryResult<T> {
    let envelope: GraphqlResponse<T> = serde_json::from_slice(bytes)?;

    if !envelope.errors.is_empty() {
        let messages: Vec<String> = envelope.errors.into_iter().map(|e| e.message).collect();
        return Err(RepositoryError::Query(messages.join("; ")));
    }

    envelope
        .data
        .ok_or_else(|| RepositoryError::InvalidResponse("missing `data` member".to_string()))
}

/// Read access to the pricing fields of stock items.
#[async_trait]
pub trait PriceReader: Send + Sync {
    /// Fetch stock pricing, the negotiated customer price and the customer
    /// record for one `(stock, customer, company)` triple in one round-trip.
    async fn fetch_price_data(
        &self,
        stock_id: &str,
        customer_id: &str,
        company_id: &str,
    ) -> RepositoryResult<PriceData>;
}

/// Read access to the listed stock groups of a company.
#[async_trait]
pub trait CategoryReader: Send + Sync {
    /// Stock groups flagged as listed, ordered by group key ascending.
    async fn list_listed_categories(&self, company_id: &str) -> RepositoryResult<Vec<StockGroup>>;
}
