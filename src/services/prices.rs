use std::collections::HashMap;

use futures::future::join_all;

use crate::config::resolve_company_id;
use crate::domain::price::{PriceData, ProductPriceResult};
use crate::repository::PriceReader;
use crate::services::{ServiceError, ServiceResult};

/// Resolves the price a customer pays for one stock item.
///
/// `company_id` falls back to `COMPANY_ID` and then to the built-in default.
/// A stock item without pricing data yields [`ProductPriceResult::empty`].
pub async fn calculate_customer_price<R>(
    repo: &R,
    stock_id: &str,
    customer_id: &str,
    company_id: Option<&str>,
) -> ServiceResult<ProductPriceResult>
where
    R: PriceReader + ?Sized,
{
    ensure_identifier("stock_id", stock_id)?;
    ensure_identifier("customer_id", customer_id)?;
    let company_id = resolve_company_id(company_id);

    let data = repo
        .fetch_price_data(stock_id, customer_id, &company_id)
        .await
        .map_err(|err| {
            log::error!("Failed to fetch price data for stock {stock_id}: {err}");
            ServiceError::from_repository("product price", err)
        })?;

    Ok(resolve_price(&data))
}

/// Applies the price precedence to fetched data.
///
/// An active campaign price wins, then the negotiated customer price, then
/// the customer's price class, then the base price. Every tier must be
/// strictly positive to be selected, so a zero falls through to the next.
pub fn resolve_price(data: &PriceData) -> ProductPriceResult {
    let Some(stock) = &data.stock else {
        return ProductPriceResult::empty();
    };

    let customer_price = data
        .customer_price
        .as_ref()
        .and_then(|entry| entry.customers_price);
    let class_price = data
        .customer
        .as_ref()
        .and_then(|customer| customer.parsed_price_class())
        .and_then(|class| stock.class_price(class));
    let campaign_price = stock
        .campaign_price
        .filter(|_| stock.is_campaign_active);

    let final_price = [campaign_price, customer_price, class_price]
        .into_iter()
        .flatten()
        .find(|price| *price > 0)
        .unwrap_or(stock.base_price);

    ProductPriceResult {
        base_price: Some(stock.base_price),
        customer_price,
        campaign_price: stock.campaign_price,
        final_price: Some(final_price),
        is_campaign_active: stock.is_campaign_active,
        price_class: data
            .customer
            .as_ref()
            .and_then(|customer| customer.price_class.as_deref())
            .map(str::to_lowercase),
    }
}

/// Whole-number discount of `discounted_price` against `original_price`.
///
/// Non-positive originals, negative discounted prices and prices at or
/// above the original give `0`; a free item gives `100`.
pub fn calculate_discount_percentage(original_price: i64, discounted_price: i64) -> i64 {
    if original_price <= 0 || discounted_price < 0 || discounted_price >= original_price {
        return 0;
    }
    if discounted_price == 0 {
        return 100;
    }

    let saved = (original_price - discounted_price) as f64;
    (saved / original_price as f64 * 100.0).round() as i64
}

/// Prices many stock items for one customer concurrently.
///
/// Items whose lookup fails are logged and left out of the map; the call
/// itself only fails on invalid input.
pub async fn get_bulk_product_prices<R>(
    repo: &R,
    stock_ids: &[String],
    customer_id: &str,
    company_id: Option<&str>,
) -> ServiceResult<HashMap<String, ProductPriceResult>>
where
    R: PriceReader + ?Sized,
{
    if stock_ids.is_empty() {
        return Ok(HashMap::new());
    }
    ensure_identifier("customer_id", customer_id)?;

    let lookups = stock_ids.iter().map(|stock_id| async move {
        let result = calculate_customer_price(repo, stock_id, customer_id, company_id).await;
        (stock_id, result)
    });

    let prices = join_all(lookups)
        .await
        .into_iter()
        .filter_map(|(stock_id, result)| match result {
            Ok(price) => Some((stock_id.clone(), price)),
            Err(err) => {
                log::warn!("Omitting stock {stock_id} from bulk prices: {err}");
                None
            }
        })
        .collect();

    Ok(prices)
}

fn ensure_identifier(field: &str, value: &str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::Form(format!("{field} cannot be empty")));
    }
    Ok(())
}
