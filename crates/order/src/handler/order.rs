use crate::{
    abstract_trait::order::service::{DynOrderCommandService, DynOrderQueryService},
    domain::order::Order,
    middleware::OrderJson,
    state::AppState,
};
use axum::{
    Json,
    extract::{Extension, Path},
    http::StatusCode,
    response::IntoResponse,
    routing::{delete, get, post, put},
};
use shared::errors::HttpError;
use std::sync::Arc;
use utoipa_axum::router::OpenApiRouter;

#[utoipa::path(
    get,
    path = "/api/orders",
    tag = "Order",
    responses(
        (status = 200, description = "List of orders", body = Vec<Order>),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn get_orders(
    Extension(service): Extension<DynOrderQueryService>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_all().await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    get,
    path = "/api/orders/{id}",
    tag = "Order",
    params(("id" = String, Path, description = "Order UID")),
    responses(
        (status = 200, description = "Order details, zero-valued when the id is unknown", body = Order),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn get_order(
    Extension(service): Extension<DynOrderQueryService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    let response = service.find_by_id(&id).await?;
    Ok((StatusCode::OK, Json(response)))
}

#[utoipa::path(
    post,
    path = "/api/orders",
    tag = "Order",
    request_body = Order,
    responses(
        (status = 201, description = "Order created"),
        (status = 500, description = "Malformed body or insert failure"),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn create_order(
    Extension(service): Extension<DynOrderCommandService>,
    OrderJson(body): OrderJson<Order>,
) -> Result<impl IntoResponse, HttpError> {
    service.create_order(&body).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    put,
    path = "/api/orders/{id}",
    tag = "Order",
    params(("id" = String, Path, description = "Order UID; the body's own keys select the rows")),
    request_body = Order,
    responses(
        (status = 201, description = "Order replaced"),
        (status = 500, description = "Malformed body or update failure"),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn update_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<String>,
    OrderJson(body): OrderJson<Order>,
) -> Result<impl IntoResponse, HttpError> {
    service.update_order(&id, &body).await?;
    Ok(StatusCode::CREATED)
}

#[utoipa::path(
    delete,
    path = "/api/orders/{id}",
    tag = "Order",
    params(("id" = String, Path, description = "Order UID")),
    responses(
        (status = 200, description = "Order deleted, or did not exist"),
        (status = 500, description = "Internal server error"),
        (status = 503, description = "Database unavailable")
    )
)]
pub async fn delete_order(
    Extension(service): Extension<DynOrderCommandService>,
    Path(id): Path<String>,
) -> Result<impl IntoResponse, HttpError> {
    service.delete_order(&id).await?;
    Ok(StatusCode::OK)
}

pub fn order_routes(app_state: Arc<AppState>) -> OpenApiRouter {
    OpenApiRouter::new()
        .route("/api/orders", get(get_orders))
        .route("/api/orders/{id}", get(get_order))
        .route("/api/orders", post(create_order))
        .route("/api/orders/{id}", put(update_order))
        .route("/api/orders/{id}", delete(delete_order))
        .layer(Extension(app_state.di_container.order_query.clone()))
        .layer(Extension(app_state.di_container.order_command.clone()))
}
