use crate::cache::{CATEGORY_CACHE_TTL, Clock, SystemClock, TtlCache};
use crate::config::resolve_company_id;
use crate::domain::category::{Category, CategoryGroups};
use crate::repository::CategoryReader;
use crate::services::{ServiceError, ServiceResult};

/// Process-wide cache in front of [`get_categories`] for the default company.
pub type CategoryCache<C = SystemClock> = TtlCache<Vec<Category>, C>;

/// Cache with the standard five minute TTL.
pub fn new_category_cache() -> CategoryCache {
    TtlCache::new(CATEGORY_CACHE_TTL)
}

/// Fetches the listed categories of a company, bypassing any cache.
pub async fn get_categories<R>(repo: &R, company_id: Option<&str>) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
{
    let company_id = resolve_company_id(company_id);

    let groups = repo
        .list_listed_categories(&company_id)
        .await
        .map_err(|err| {
            log::error!("Failed to fetch categories for company {company_id}: {err}");
            ServiceError::from_repository("categories", err)
        })?;

    Ok(groups.into_iter().map(Category::from).collect())
}

/// Serves the default company's categories from `cache` while fresh.
///
/// Failed fetches are not cached and leave any stored value untouched.
pub async fn get_categories_with_cache<R, C>(
    repo: &R,
    cache: &CategoryCache<C>,
) -> ServiceResult<Vec<Category>>
where
    R: CategoryReader + ?Sized,
    C: Clock,
{
    if let Some(categories) = cache.get() {
        log::debug!("Serving {} categories from cache", categories.len());
        return Ok(categories);
    }

    log::debug!("Category cache miss, fetching from source");
    let categories = get_categories(repo, None).await?;
    cache.set(categories.clone());

    Ok(categories)
}

/// Forgets cached categories so the next read fetches again.
pub fn clear_categories_cache<C: Clock>(cache: &CategoryCache<C>) {
    cache.clear();
}

/// Finds a category by its exact, case-sensitive identifier.
pub async fn get_category_by_id<R>(
    repo: &R,
    id: &str,
    company_id: Option<&str>,
) -> ServiceResult<Option<Category>>
where
    R: CategoryReader + ?Sized,
{
    let categories = get_categories(repo, company_id).await?;

    Ok(categories.into_iter().find(|category| category.id == id))
}

/// Fetches categories and buckets them by the first letter of their name.
pub async fn get_categories_grouped<R>(
    repo: &R,
    company_id: Option<&str>,
) -> ServiceResult<CategoryGroups>
where
    R: CategoryReader + ?Sized,
{
    let categories = get_categories(repo, company_id).await?;

    Ok(group_categories(categories))
}

/// Buckets categories by the first character of their derived name,
/// keeping the incoming order inside each bucket.
pub fn group_categories(categories: Vec<Category>) -> CategoryGroups {
    let mut groups = CategoryGroups::new();

    for category in categories {
        let Some(first) = category.name.chars().next() else {
            log::warn!("Skipping category with empty name: {:?}", category.id);
            continue;
        };
        groups.entry(first.to_string()).or_default().push(category);
    }

    groups
}
