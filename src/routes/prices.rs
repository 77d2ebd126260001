use actix_web::{HttpResponse, Responder, get, post, web};
use serde::Serialize;

use crate::forms::prices::{BulkPriceForm, DiscountQuery, PriceQuery};
use crate::repository::PriceReader;
use crate::routes::{ErrorBody, service_error_response};
use crate::services::prices::{
    calculate_customer_price, calculate_discount_percentage, get_bulk_product_prices,
};

#[derive(Debug, Serialize)]
struct DiscountResponse {
    percentage: i64,
}

#[get("/prices/{stock_id}")]
/// Return the resolved price of one stock item for a customer.
pub async fn show_price(
    path: web::Path<String>,
    params: web::Query<PriceQuery>,
    repo: web::Data<dyn PriceReader>,
) -> impl Responder {
    let lookup = match params.into_inner().into_lookup(&path.into_inner()) {
        Ok(lookup) => lookup,
        Err(err) => return HttpResponse::BadRequest().json(ErrorBody::new(err.to_string())),
    };

    match calculate_customer_price(
        repo.get_ref(),
        &lookup.stock_id,
        &lookup.customer_id,
        lookup.company_id.as_deref(),
    )
    .await
    {
        Ok(price) => HttpResponse::Ok().json(price),
        Err(err) => service_error_response("calculate customer price", err),
    }
}

#[post("/prices/bulk")]
/// Return resolved prices keyed by stock id. Items that failed are absent.
pub async fn bulk_prices(
    form: web::Json<BulkPriceForm>,
    repo: web::Data<dyn PriceReader>,
) -> impl Responder {
    let lookup = match form.into_inner().into_lookup() {
        Ok(lookup) => lookup,
        Err(err) => return HttpResponse::BadRequest().json(ErrorBody::new(err.to_string())),
    };

    match get_bulk_product_prices(
        repo.get_ref(),
        &lookup.stock_ids,
        &lookup.customer_id,
        lookup.company_id.as_deref(),
    )
    .await
    {
        Ok(prices) => HttpResponse::Ok().json(prices),
        Err(err) => service_error_response("calculate bulk prices", err),
    }
}

#[get("/discount")]
pub async fn show_discount(params: web::Query<DiscountQuery>) -> impl Responder {
    let (original, discounted) = match params.into_inner().into_prices() {
        Ok(prices) => prices,
        Err(err) => return HttpResponse::BadRequest().json(ErrorBody::new(err.to_string())),
    };

    let percentage = calculate_discount_percentage(original, discounted);
    HttpResponse::Ok().json(DiscountResponse { percentage })
}
