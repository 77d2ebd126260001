use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

/// Image shown for categories that have no picture of their own.
pub const PLACEHOLDER_IMAGE_URL: &str = "/images/category-placeholder.png";

/// Raw stock group row as listed by the category source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StockGroup {
    /// Group key, case-sensitive.
    pub stock_groups: String,
    /// Owning company identifier.
    pub our_company: String,
    pub image_url: Option<String>,
    pub alt_text: Option<String>,
}

/// Product category presented on the storefront.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Category {
    /// Source group key used as stable identity.
    pub id: String,
    /// Human-readable name derived from the identifier.
    pub name: String,
    /// Owning company identifier.
    pub company_id: String,
    /// Category picture, or [`PLACEHOLDER_IMAGE_URL`].
    pub image_url: String,
    /// Alternative text for the picture.
    pub alt_text: String,
}

impl From<StockGroup> for Category {
    fn from(group: StockGroup) -> Self {
        let StockGroup {
            stock_groups,
            our_company,
            image_url,
            alt_text,
        } = group;

        let name = derive_category_name(&stock_groups);
        let image_url = image_url
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| PLACEHOLDER_IMAGE_URL.to_string());
        let alt_text = alt_text
            .filter(|text| !text.trim().is_empty())
            .unwrap_or_else(|| format!("{stock_groups} category"));

        Self {
            id: stock_groups,
            name,
            company_id: our_company,
            image_url,
            alt_text,
        }
    }
}

/// Categories bucketed by the first character of their display name.
pub type CategoryGroups = BTreeMap<String, Vec<Category>>;

/// Turn a stock group key into a display name.
///
/// Underscores become spaces, hyphens are kept, and each word is capitalized
/// with the remaining letters lower-cased: `"HOME-APPLIANCES"` becomes
/// `"Home-Appliances"`.
pub fn derive_category_name(id: &str) -> String {
    let mut name = String::with_capacity(id.len());
    let mut at_word_start = true;

    for ch in id.chars() {
        match ch {
            '_' => {
                name.push(' ');
                at_word_start = true;
            }
            '-' => {
                name.push('-');
                at_word_start = true;
            }
            ch if ch.is_whitespace() => {
                name.push(ch);
                at_word_start = true;
            }
            ch if at_word_start => {
                name.extend(ch.to_uppercase());
                at_word_start = false;
            }
            ch => name.extend(ch.to_lowercase()),
        }
    }

    name
}

#[cfg(test)]
mod tests {
    use super::*;

    fn group(id: &str) -> StockGroup {
        StockGroup {
            stock_groups: id.to_string(),
            our_company: "alfe".to_string(),
            image_url: None,
            alt_text: None,
        }
    }

    #[test]
    fn derive_name_splits_on_underscores_and_keeps_hyphens() {
        assert_eq!(
            derive_category_name("ELECTRONICS_AND_GADGETS"),
            "Electronics And Gadgets"
        );
        assert_eq!(derive_category_name("HOME-APPLIANCES"), "Home-Appliances");
        assert_eq!(derive_category_name("furniture_items"), "Furniture Items");
        assert_eq!(derive_category_name("öl_och_VIN"), "Öl Och Vin");
    }

    #[test]
    fn derive_name_handles_empty_and_repeated_separators() {
        assert_eq!(derive_category_name(""), "");
        assert_eq!(derive_category_name("a__b"), "A  B");
    }

    #[test]
    fn category_falls_back_to_placeholders() {
        let category = Category::from(group("TOOLS"));

        assert_eq!(category.id, "TOOLS");
        assert_eq!(category.name, "Tools");
        assert_eq!(category.company_id, "alfe");
        assert_eq!(category.image_url, PLACEHOLDER_IMAGE_URL);
        assert_eq!(category.alt_text, "TOOLS category");
    }

    #[test]
    fn category_keeps_provided_image_and_alt_text() {
        let mut row = group("TOOLS");
        row.image_url = Some("https://cdn.example.com/tools.jpg".to_string());
        row.alt_text = Some("Hammers and saws".to_string());

        let category = Category::from(row);

        assert_eq!(category.image_url, "https://cdn.example.com/tools.jpg");
        assert_eq!(category.alt_text, "Hammers and saws");
    }
}
