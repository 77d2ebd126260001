use async_trait::async_trait;
use serde::Serialize;

use crate::domain::category::StockGroup as DomainStockGroup;
use crate::models::category::CategoriesData;
use crate::repository::errors::RepositoryResult;
use crate::repository::{CategoryReader, GraphqlRepository};

const LISTED_CATEGORIES_QUERY: &str = r#"
query ListedCategories($company_id: String!) {
  _type_stock_groups(
    where: { our_company: { _eq: $company_id }, is_listed: { _eq: true } }
    order_by: { stock_groups: asc }
  ) {
    stock_groups
    our_company
    image_url
    alt_text
  }
}
"#;

#[derive(Serialize)]
struct CategoriesVariables<'a> {
    company_id: &'a str,
}

#[async_trait]
impl CategoryReader for GraphqlRepository {
    async fn list_listed_categories(
        &self,
        company_id: &str,
    ) -> RepositoryResult<Vec<DomainStockGroup>> {
        let data: CategoriesData = self
            .query(LISTED_CATEGORIES_QUERY, &CategoriesVariables { company_id })
            .await?;

        Ok(data
            .type_stock_groups
            .into_iter()
            .map(DomainStockGroup::from)
            .collect())
    }
}
