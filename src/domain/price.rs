use std::collections::HashMap;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Customer tier tag selecting one of the pre-negotiated list prices of a stock item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceClass {
    A,
    B,
    C,
    D,
    S,
    Hra,
    Hrb,
    Hrc,
    Hrd,
    Z,
}

impl PriceClass {
    /// Every tag known to the price source.
    pub const ALL: [PriceClass; 10] = [
        PriceClass::A,
        PriceClass::B,
        PriceClass::C,
        PriceClass::D,
        PriceClass::S,
        PriceClass::Hra,
        PriceClass::Hrb,
        PriceClass::Hrc,
        PriceClass::Hrd,
        PriceClass::Z,
    ];

    /// Lower-case tag as it appears in the price source column names.
    pub fn as_str(&self) -> &'static str {
        match self {
            PriceClass::A => "a",
            PriceClass::B => "b",
            PriceClass::C => "c",
            PriceClass::D => "d",
            PriceClass::S => "s",
            PriceClass::Hra => "hra",
            PriceClass::Hrb => "hrb",
            PriceClass::Hrc => "hrc",
            PriceClass::Hrd => "hrd",
            PriceClass::Z => "z",
        }
    }
}

/// Returned when a customer carries a tag outside the known price classes.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown price class `{0}`")]
pub struct UnknownPriceClass(pub String);

impl FromStr for PriceClass {
    type Err = UnknownPriceClass;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let normalized = value.trim().to_lowercase();
        PriceClass::ALL
            .into_iter()
            .find(|class| class.as_str() == normalized)
            .ok_or_else(|| UnknownPriceClass(value.to_string()))
    }
}

/// Pricing snapshot of a single stock item for one company, in öre.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct StockPricing {
    /// List price used when no other tier applies.
    pub base_price: i64,
    /// Tiered list prices. Tiers the source left empty are not present.
    pub class_prices: HashMap<PriceClass, i64>,
    /// Promotional price, only meaningful while the campaign is active.
    pub campaign_price: Option<i64>,
    /// Whether the campaign is currently running.
    pub is_campaign_active: bool,
}

impl StockPricing {
    /// Build a snapshot with only a base price.
    pub fn new(base_price: i64) -> Self {
        Self {
            base_price,
            ..Self::default()
        }
    }

    /// Attach a tiered list price.
    pub fn with_class_price(mut self, class: PriceClass, price: i64) -> Self {
        self.class_prices.insert(class, price);
        self
    }

    /// Attach a campaign price and its activity flag.
    pub fn with_campaign(mut self, price: Option<i64>, is_active: bool) -> Self {
        self.campaign_price = price;
        self.is_campaign_active = is_active;
        self
    }

    /// Price listed for `class`, if the source provided one.
    pub fn class_price(&self, class: PriceClass) -> Option<i64> {
        self.class_prices.get(&class).copied()
    }
}

/// Negotiated price for one customer and stock item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CustomerPriceEntry {
    pub customers_price: Option<i64>,
}

/// The slice of a customer record that pricing needs.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CustomerRecord {
    /// Raw price class tag as stored on the customer, any casing.
    pub price_class: Option<String>,
}

impl CustomerRecord {
    /// Parsed price class, `None` for missing or unrecognized tags.
    pub fn parsed_price_class(&self) -> Option<PriceClass> {
        self.price_class
            .as_deref()
            .and_then(|tag| tag.parse::<PriceClass>().ok())
    }
}

/// Everything one price lookup returns for a `(stock, customer, company)` triple.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PriceData {
    pub stock: Option<StockPricing>,
    pub customer_price: Option<CustomerPriceEntry>,
    pub customer: Option<CustomerRecord>,
}

/// Resolved price of a stock item for a specific customer.
///
/// Recomputed for every request and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductPriceResult {
    pub base_price: Option<i64>,
    pub customer_price: Option<i64>,
    pub campaign_price: Option<i64>,
    /// Effective price the customer pays.
    pub final_price: Option<i64>,
    pub is_campaign_active: bool,
    /// Lower-cased customer tag. Descriptive only: it does not imply the
    /// class price was the one selected.
    pub price_class: Option<String>,
}

impl ProductPriceResult {
    /// Result for a stock item without any pricing data.
    pub fn empty() -> Self {
        Self::default()
    }
}
