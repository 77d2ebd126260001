use serde::Deserialize;
use thiserror::Error;
use validator::{Validate, ValidationErrors};

/// Maximum length allowed for stock, customer and company identifiers.
const ID_MAX_LEN: usize = 64;
const ID_MAX_LEN_VALIDATOR: u64 = ID_MAX_LEN as u64;

/// Maximum number of stock items priced in one bulk request.
const BULK_MAX_ITEMS: usize = 200;
const BULK_MAX_ITEMS_VALIDATOR: u64 = BULK_MAX_ITEMS as u64;

/// Result type returned by the price form helpers.
pub type PriceFormResult<T> = Result<T, PriceFormError>;

/// Errors that can occur while processing price requests.
#[derive(Debug, Error)]
pub enum PriceFormError {
    /// Validation failures from the `validator` crate.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    /// An identifier was empty after trimming.
    #[error("{0} cannot be empty")]
    EmptyIdentifier(&'static str),
}

/// Sanitized input for a single price lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PriceLookup {
    pub stock_id: String,
    pub customer_id: String,
    pub company_id: Option<String>,
}

/// Sanitized input for a bulk price lookup.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BulkPriceLookup {
    pub stock_ids: Vec<String>,
    pub customer_id: String,
    pub company_id: Option<String>,
}

/// Query string accepted by the single price endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct PriceQuery {
    #[validate(length(min = 1, max = ID_MAX_LEN_VALIDATOR))]
    pub customer_id: String,
    #[validate(length(max = ID_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub company_id: Option<String>,
}

impl PriceQuery {
    /// Validates the query and pairs it with the stock item from the path.
    pub fn into_lookup(self, stock_id: &str) -> PriceFormResult<PriceLookup> {
        self.validate()?;

        Ok(PriceLookup {
            stock_id: sanitize_identifier("stock_id", stock_id)?,
            customer_id: sanitize_identifier("customer_id", &self.customer_id)?,
            company_id: sanitize_optional(self.company_id),
        })
    }
}

/// JSON body accepted by the bulk price endpoint.
#[derive(Debug, Deserialize, Validate)]
pub struct BulkPriceForm {
    #[validate(length(max = BULK_MAX_ITEMS_VALIDATOR))]
    #[serde(default)]
    pub stock_ids: Vec<String>,
    #[validate(length(min = 1, max = ID_MAX_LEN_VALIDATOR))]
    pub customer_id: String,
    #[validate(length(max = ID_MAX_LEN_VALIDATOR))]
    #[serde(default)]
    pub company_id: Option<String>,
}

impl BulkPriceForm {
    /// Validates the body; blank stock identifiers are rejected.
    pub fn into_lookup(self) -> PriceFormResult<BulkPriceLookup> {
        self.validate()?;

        let stock_ids = self
            .stock_ids
            .iter()
            .map(|stock_id| sanitize_identifier("stock_id", stock_id))
            .collect::<PriceFormResult<Vec<_>>>()?;

        Ok(BulkPriceLookup {
            stock_ids,
            customer_id: sanitize_identifier("customer_id", &self.customer_id)?,
            company_id: sanitize_optional(self.company_id),
        })
    }
}

/// Query string accepted by the discount endpoint. Prices are in öre.
#[derive(Debug, Deserialize, Validate)]
pub struct DiscountQuery {
    #[validate(range(min = 0))]
    pub original: i64,
    #[validate(range(min = 0))]
    pub discounted: i64,
}

impl DiscountQuery {
    /// Validates the query into `(original, discounted)` prices.
    pub fn into_prices(self) -> PriceFormResult<(i64, i64)> {
        self.validate()?;
        Ok((self.original, self.discounted))
    }
}

fn sanitize_identifier(field: &'static str, value: &str) -> PriceFormResult<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(PriceFormError::EmptyIdentifier(field));
    }
    Ok(trimmed.to_string())
}

fn sanitize_optional(value: Option<String>) -> Option<String> {
    value
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}
