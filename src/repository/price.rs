use async_trait::async_trait;
use serde::Serialize;

use crate::domain::price::PriceData as DomainPriceData;
use crate::models::price::PriceData;
use crate::repository::errors::RepositoryResult;
use crate::repository::{GraphqlRepository, PriceReader};

const PRICE_DATA_QUERY: &str = r#"
query PriceData($company_id: String!, $customer_id: String!, $stock_id: String!) {
  stock(
    where: { our_company: { _eq: $company_id }, stock_id: { _eq: $stock_id } }
    limit: 1
  ) {
    stock_price
    stock_price_a
    stock_price_b
    stock_price_c
    stock_price_d
    stock_price_s
    stock_price_hra
    stock_price_hrb
    stock_price_hrc
    stock_price_hrd
    stock_price_z
    campaign_price
    is_campaign_active
  }
  customer_price_list(
    where: {
      our_company: { _eq: $company_id }
      customer_id: { _eq: $customer_id }
      stock_id: { _eq: $stock_id }
    }
    limit: 1
  ) {
    customers_price
  }
  customers(
    where: { our_company: { _eq: $company_id }, customer_id: { _eq: $customer_id } }
    limit: 1
  ) {
    customer_price_class
  }
}
"#;

#[derive(Serialize)]
struct PriceDataVariables<'a> {
    company_id: &'a str,
    customer_id: &'a str,
    stock_id: &'a str,
}

#[async_trait]
impl PriceReader for GraphqlRepository {
    async fn fetch_price_data(
        &self,
        stock_id: &str,
        customer_id: &str,
        company_id: &str,
    ) -> RepositoryResult<DomainPriceData> {
        let variables = PriceDataVariables {
            company_id,
            customer_id,
            stock_id,
        };

        let data: PriceData = self.query(PRICE_DATA_QUERY, &variables).await?;

        Ok(DomainPriceData::from(data))
    }
}
