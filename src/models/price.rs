use serde::Deserialize;

use crate::domain::price::{
    CustomerPriceEntry as DomainCustomerPriceEntry, CustomerRecord as DomainCustomerRecord,
    PriceClass, PriceData as DomainPriceData, StockPricing as DomainStockPricing,
};

/// `data` payload of the price lookup query. Each list holds zero or one row.
#[derive(Debug, Deserialize)]
pub struct PriceData {
    pub stock: Vec<Stock>,
    #[serde(default)]
    pub customer_price_list: Vec<CustomerPrice>,
    #[serde(default)]
    pub customers: Vec<Customer>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct Stock {
    pub stock_price: Option<i64>,
    pub stock_price_a: Option<i64>,
    pub stock_price_b: Option<i64>,
    pub stock_price_c: Option<i64>,
    pub stock_price_d: Option<i64>,
    pub stock_price_s: Option<i64>,
    pub stock_price_hra: Option<i64>,
    pub stock_price_hrb: Option<i64>,
    pub stock_price_hrc: Option<i64>,
    pub stock_price_hrd: Option<i64>,
    pub stock_price_z: Option<i64>,
    pub campaign_price: Option<i64>,
    pub is_campaign_active: Option<bool>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct CustomerPrice {
    #[serde(default)]
    pub customers_price: Option<i64>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct Customer {
    #[serde(default)]
    pub customer_price_class: Option<String>,
}

impl Stock {
    fn class_price(&self, class: PriceClass) -> Option<i64> {
        match class {
            PriceClass::A => self.stock_price_a,
            PriceClass::B => self.stock_price_b,
            PriceClass::C => self.stock_price_c,
            PriceClass::D => self.stock_price_d,
            PriceClass::S => self.stock_price_s,
            PriceClass::Hra => self.stock_price_hra,
            PriceClass::Hrb => self.stock_price_hrb,
            PriceClass::Hrc => self.stock_price_hrc,
            PriceClass::Hrd => self.stock_price_hrd,
            PriceClass::Z => self.stock_price_z,
        }
    }
}

impl From<Stock> for DomainStockPricing {
    fn from(value: Stock) -> Self {
        let class_prices = PriceClass::ALL
            .into_iter()
            .filter_map(|class| value.class_price(class).map(|price| (class, price)))
            .collect();

        Self {
            base_price: value.stock_price.unwrap_or_default(),
            class_prices,
            campaign_price: value.campaign_price,
            is_campaign_active: value.is_campaign_active.unwrap_or(false),
        }
    }
}

impl From<PriceData> for DomainPriceData {
    fn from(value: PriceData) -> Self {
        Self {
            stock: value.stock.into_iter().next().map(DomainStockPricing::from),
            customer_price: value
                .customer_price_list
                .into_iter()
                .next()
                .map(|row| DomainCustomerPriceEntry {
                    customers_price: row.customers_price,
                }),
            customer: value
                .customers
                .into_iter()
                .next()
                .map(|row| DomainCustomerRecord {
                    price_class: row.customer_price_class,
                }),
        }
    }
}
