use super::{Api, ApiError};
use common::model::product::Product;
use common::pagination::{PageQuery, Paginated};

const CATALOG_LIMIT: u32 = 200;

pub async fn list(api: &Api, query: &PageQuery) -> Result<Paginated<Product>, ApiError> {
    api.get(&format!("api/products?{}", query.to_query_string()))
        .await
}

/// Orderable products for the order creation dialog, walking every page.
pub async fn catalog(api: &Api) -> Result<Vec<Product>, ApiError> {
    let mut query = PageQuery {
        limit: CATALOG_LIMIT,
        ..PageQuery::default()
    };
    let mut products = Vec::new();
    loop {
        let page = list(api, &query).await?;
        let next = query.following(&page);
        products.extend(page.results.into_iter().filter(Product::is_orderable));
        match next {
            Some(following) => query = following,
            None => return Ok(products),
        }
    }
}

pub async fn create(api: &Api, product: &Product) -> Result<Product, ApiError> {
    api.post("api/products", product).await
}

pub async fn update(api: &Api, product: &Product) -> Result<Product, ApiError> {
    api.put(&format!("api/products/{}", product.id), product)
        .await
}

pub async fn delete(api: &Api, id: &str) -> Result<(), ApiError> {
    api.delete(&format!("api/products/{}", id)).await
}
