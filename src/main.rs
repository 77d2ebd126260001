use std::sync::Arc;

use actix_web::{App, HttpServer, middleware, web};
use dotenvy::dotenv;

use alfe_storefront::config::ServerConfig;
use alfe_storefront::repository::{CategoryReader, GraphqlRepository, PriceReader};
use alfe_storefront::routes::categories::{
    clear_cache, show_categories, show_category, show_grouped_categories,
};
use alfe_storefront::routes::prices::{bulk_prices, show_discount, show_price};
use alfe_storefront::services::categories::new_category_cache;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));
    dotenv().ok(); // Load .env file

    let config = match ServerConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            log::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };

    let mut repo = GraphqlRepository::new(&config.graphql_url, config.request_timeout);
    if let Some(secret) = &config.graphql_admin_secret {
        repo = repo.with_admin_secret(secret);
    }
    let repo = Arc::new(repo);
    let price_reader: web::Data<dyn PriceReader> =
        web::Data::from(repo.clone() as Arc<dyn PriceReader>);
    let category_reader: web::Data<dyn CategoryReader> =
        web::Data::from(repo as Arc<dyn CategoryReader>);
    let category_cache = web::Data::new(new_category_cache());

    log::info!(
        "Serving storefront pricing for company {} on {}:{}",
        config.company_id,
        config.address,
        config.port
    );

    let address = config.address.clone();
    let port = config.port;

    HttpServer::new(move || {
        App::new()
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .service(
                web::scope("/api/v1")
                    .service(show_price)
                    .service(bulk_prices)
                    .service(show_discount)
                    .service(show_categories)
                    .service(show_grouped_categories)
                    .service(clear_cache)
                    .service(show_category),
            )
            .app_data(price_reader.clone())
            .app_data(category_reader.clone())
            .app_data(category_cache.clone())
    })
    .bind((address, port))?
    .run()
    .await
}
