use std::sync::Arc;

use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
    routing, Json, Router,
};
use folio_core_pages_contracts::PageFeatureService;
use serde::Deserialize;

pub fn router(service: Arc<impl PageFeatureService>) -> Router<()> {
    Router::new()
        .route("/pages", routing::get(nav))
        .route("/page", routing::get(page))
        .with_state(service)
}

async fn nav(service: State<Arc<impl PageFeatureService>>) -> Response {
    Json(service.nav()).into_response()
}

#[derive(Deserialize)]
struct PageQuery {
    page: Option<String>,
}

async fn page(
    service: State<Arc<impl PageFeatureService>>,
    Query(query): Query<PageQuery>,
) -> Response {
    let key = service.resolve(query.page.as_deref());
    Json(service.page(key)).into_response()
}
