use serde::Deserialize;

use crate::domain::category::StockGroup as DomainStockGroup;

/// `data` payload of the listed stock groups query.
#[derive(Debug, Deserialize)]
pub struct CategoriesData {
    #[serde(rename = "_type_stock_groups")]
    pub type_stock_groups: Vec<StockGroup>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct StockGroup {
    pub stock_groups: String,
    pub our_company: String,
    #[serde(default)]
    pub image_url: Option<String>,
    #[serde(default)]
    pub alt_text: Option<String>,
}

impl From<StockGroup> for DomainStockGroup {
    fn from(value: StockGroup) -> Self {
        Self {
            stock_groups: value.stock_groups,
            our_company: value.our_company,
            image_url: value.image_url,
            alt_text: value.alt_text,
        }
    }
}
