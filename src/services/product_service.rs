use crate::{
    dto::products::{CategoryList, ProductList, ProductView},
    error::AppResult,
    models::ProductId,
    response::ApiResponse,
    routes::params::ProductQuery,
    state::AppState,
    store::CatalogFilter,
};

pub async fn list_products(
    state: &AppState,
    query: ProductQuery,
) -> AppResult<ApiResponse<ProductList>> {
    let filter = CatalogFilter {
        category: query.category,
        status: query.status,
        search: query.q.clone(),
        sort: query.sort_by.unwrap_or_default(),
    };
    let products = state.read().await.list_products(&filter);
    let (items, meta) = query.pagination().apply(products);

    Ok(ApiResponse::with_meta("Products", ProductList::from(items), meta))
}

pub async fn get_product(state: &AppState, id: ProductId) -> AppResult<ApiResponse<ProductView>> {
    let product = state.read().await.get_product(id)?;
    Ok(ApiResponse::ok("Product", ProductView::from(product)))
}

pub async fn list_categories(state: &AppState) -> AppResult<ApiResponse<CategoryList>> {
    let items = state.read().await.categories();
    Ok(ApiResponse::ok("Categories", CategoryList { items }))
}
