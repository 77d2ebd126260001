use actix_web::{HttpResponse, Responder, get, post, web};

use crate::repository::CategoryReader;
use crate::routes::{ErrorBody, service_error_response};
use crate::services::categories::{
    CategoryCache, clear_categories_cache, get_categories_grouped, get_categories_with_cache,
    get_category_by_id,
};

#[get("/categories")]
/// Return the listed categories of the default company, served from cache.
pub async fn show_categories(
    repo: web::Data<dyn CategoryReader>,
    cache: web::Data<CategoryCache>,
) -> impl Responder {
    match get_categories_with_cache(repo.get_ref(), cache.get_ref()).await {
        Ok(categories) => HttpResponse::Ok().json(categories),
        Err(err) => service_error_response("list categories", err),
    }
}

#[get("/categories/grouped")]
pub async fn show_grouped_categories(repo: web::Data<dyn CategoryReader>) -> impl Responder {
    match get_categories_grouped(repo.get_ref(), None).await {
        Ok(groups) => HttpResponse::Ok().json(groups),
        Err(err) => service_error_response("group categories", err),
    }
}

#[get("/categories/{id}")]
pub async fn show_category(
    path: web::Path<String>,
    repo: web::Data<dyn CategoryReader>,
) -> impl Responder {
    let id = path.into_inner();
    match get_category_by_id(repo.get_ref(), &id, None).await {
        Ok(Some(category)) => HttpResponse::Ok().json(category),
        Ok(None) => HttpResponse::NotFound().json(ErrorBody::new(format!("category {id} not found"))),
        Err(err) => service_error_response("load category", err),
    }
}

#[post("/categories/cache/clear")]
pub async fn clear_cache(cache: web::Data<CategoryCache>) -> impl Responder {
    clear_categories_cache(cache.get_ref());
    log::info!("Category cache cleared");
    HttpResponse::NoContent().finish()
}
