mod config;
mod session;
mod store;

use axum::{
    Json, Router,
    Form,
    extract::{
        Path, State,
        rejection::{FormRejection, PathRejection},
    },
    http::{HeaderMap, StatusCode, header},
    response::{IntoResponse, Redirect, Response},
    routing::{get, post},
};
use shop_api_types::{
    CartCountResponse, CartLineView, CartView, ErrorResponse, UpdateCartRequest, UpdateCartResponse,
};
use shop_cart::{Cart, CartError};
use shop_catalog::{Catalog, ProductId};
use serde::Serialize;
use std::sync::Arc;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;
use tracing::{info, warn};

use crate::config::Config;
use crate::store::{CartStore, InMemoryCartStore};

#[derive(Debug, Serialize)]
struct HealthResponse {
    service: &'static str,
    status: &'static str,
}

#[derive(Debug, Serialize)]
struct VersionResponse {
    service: &'static str,
    version: &'static str,
}

type ApiError = (StatusCode, Json<ErrorResponse>);
type ApiResult<T> = Result<Json<T>, ApiError>;

#[derive(Clone)]
pub(crate) struct AppState {
    catalog: Arc<Catalog>,
    carts: Arc<dyn CartStore>,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let config = Config::from_env()?;

    let state = AppState {
        catalog: Arc::new(Catalog::builtin()),
        carts: Arc::new(InMemoryCartStore::default()),
    };

    let app = router(state).fallback_service(ServeDir::new(&config.static_dir));

    info!(
        "storefront-service listening on {} (static files from {})",
        config.bind_addr,
        config.static_dir.display()
    );

    let listener = tokio::net::TcpListener::bind(config.bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/version", get(version))
        .route("/api/cart-count", get(cart_count))
        .route("/api/cart", get(cart_view))
        .route("/add-to-cart/{product_id}", get(add_to_cart))
        .route("/remove-from-cart/{product_id}", get(remove_from_cart))
        .route("/update-cart/{product_id}", post(update_cart))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        service: "storefront-service",
        status: "ok",
    })
}

async fn version() -> Json<VersionResponse> {
    Json(VersionResponse {
        service: "storefront-service",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// Cart of the calling session; callers without a session have an empty cart.
async fn session_cart(state: &AppState, headers: &HeaderMap) -> Cart {
    match session::existing(headers) {
        Some(id) => state.carts.snapshot(&id).await,
        None => Cart::new(),
    }
}

async fn cart_count(State(state): State<AppState>, headers: HeaderMap) -> Json<CartCountResponse> {
    let cart = session_cart(&state, &headers).await;
    Json(CartCountResponse {
        count: cart.line_count(),
    })
}

async fn cart_view(State(state): State<AppState>, headers: HeaderMap) -> ApiResult<CartView> {
    let cart = session_cart(&state, &headers).await;
    Ok(Json(to_view(&cart)))
}

async fn add_to_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<u32>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = product_id(path)?;
    let session = session::resolve(&headers);
    let line = state
        .carts
        .add(&session.id, &state.catalog, id, 1)
        .await
        .map_err(cart_error)?;

    info!(product_id = id.0, qty = line.qty, "added to cart");
    Ok(back_to_referrer(&headers, &session))
}

async fn remove_from_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<u32>, PathRejection>,
) -> Result<Response, ApiError> {
    let id = product_id(path)?;
    let session = session::resolve(&headers);
    if state.carts.remove(&session.id, id).await.is_none() {
        warn!(product_id = id.0, "remove requested for a product not in the cart");
    }
    Ok(back_to_referrer(&headers, &session))
}

/// Set a line's quantity; zero or less removes the line.
async fn update_cart(
    State(state): State<AppState>,
    headers: HeaderMap,
    path: Result<Path<u32>, PathRejection>,
    form: Result<Form<UpdateCartRequest>, FormRejection>,
) -> ApiResult<UpdateCartResponse> {
    let id = product_id(path)?;
    let Form(request) = form.map_err(|rejection| bad_request(&rejection.body_text()))?;
    let qty = u32::try_from(request.quantity.max(0)).map_err(|_| bad_request("quantity is too large"))?;

    let session_id = session::existing(&headers).ok_or_else(|| cart_error(CartError::LineNotFound(id)))?;
    let cart = state
        .carts
        .update(&session_id, id, qty)
        .await
        .map_err(cart_error)?;

    let message = if qty == 0 {
        "Item removed from cart."
    } else {
        "Cart updated successfully."
    };
    info!(product_id = id.0, qty, "cart updated");

    Ok(Json(UpdateCartResponse {
        success: true,
        message: message.to_owned(),
        item_total: cart.line(id).map(|line| line.subtotal()).unwrap_or(0),
        cart_total: cart.total(),
        cart_count: cart.line_count(),
    }))
}

/// Product id from the path; malformed ids get the JSON error body.
fn product_id(path: Result<Path<u32>, PathRejection>) -> Result<ProductId, ApiError> {
    match path {
        Ok(Path(id)) => Ok(ProductId(id)),
        Err(rejection) => Err(bad_request(&rejection.body_text())),
    }
}

/// `303 See Other` to the page the request came from, or `/`.
fn back_to_referrer(headers: &HeaderMap, session: &session::Session) -> Response {
    let target = headers
        .get(header::REFERER)
        .and_then(|v| v.to_str().ok())
        .filter(|v| !v.trim().is_empty())
        .unwrap_or("/");

    let mut response = Redirect::to(target).into_response();
    if let Some(cookie) = session::set_cookie(session) {
        response.headers_mut().insert(header::SET_COOKIE, cookie);
    }
    response
}

fn to_view(cart: &Cart) -> CartView {
    CartView {
        lines: cart
            .lines()
            .iter()
            .map(|line| CartLineView {
                product_id: line.product_id.0,
                name: line.name.clone(),
                price: line.price,
                qty: line.qty,
                subtotal: line.subtotal(),
            })
            .collect(),
        total: cart.total(),
        count: cart.line_count(),
    }
}

fn cart_error(err: CartError) -> ApiError {
    match err {
        CartError::UnknownProduct(_) | CartError::LineNotFound(_) => not_found(&err.to_string()),
        CartError::InvalidQuantity(_) | CartError::QuantityOverflow(_) => bad_request(&err.to_string()),
    }
}

fn bad_request(message: &str) -> ApiError {
    (
        StatusCode::BAD_REQUEST,
        Json(ErrorResponse {
            error: message.to_owned(),
        }),
    )
}

fn not_found(message: &str) -> ApiError {
    (
        StatusCode::NOT_FOUND,
        Json(ErrorResponse {
            error: message.to_owned(),
        }),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::{Body, to_bytes};
    use axum::http::{HeaderValue, Request};
    use tower::ServiceExt;

    fn test_app() -> Router {
        router(AppState {
            catalog: Arc::new(Catalog::builtin()),
            carts: Arc::new(InMemoryCartStore::default()),
        })
    }

    fn get_request(uri: &str, cookie: Option<&HeaderValue>) -> Request<Body> {
        let mut builder = Request::builder().uri(uri);
        if let Some(cookie) = cookie {
            builder = builder.header(header::COOKIE, cookie);
        }
        builder.body(Body::empty()).unwrap()
    }

    async fn json_body<T: serde::de::DeserializeOwned>(response: Response) -> T {
        let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&bytes).unwrap()
    }

    /// `name=value` part of a `Set-Cookie` header, usable as a `Cookie` header.
    fn cookie_from(response: &Response) -> HeaderValue {
        let raw = response.headers()[header::SET_COOKIE].to_str().unwrap();
        let pair = raw.split(';').next().unwrap();
        HeaderValue::from_str(pair).unwrap()
    }

    #[tokio::test]
    async fn health_reports_ok() {
        let response = test_app().oneshot(get_request("/health", None)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: serde_json::Value = json_body(response).await;
        assert_eq!(body["status"], "ok");
    }

    #[tokio::test]
    async fn cart_count_without_session_is_zero() {
        let response = test_app()
            .oneshot(get_request("/api/cart-count", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        assert!(response.headers().get(header::SET_COOKIE).is_none());
        let body: CartCountResponse = json_body(response).await;
        assert_eq!(body.count, 0);
    }

    #[tokio::test]
    async fn add_to_cart_redirects_and_counts_lines() {
        let app = test_app();

        let first = app
            .clone()
            .oneshot(
                Request::builder()
                    .uri("/add-to-cart/3")
                    .header(header::REFERER, "/shop?cat=powders")
                    .body(Body::empty())
                    .unwrap(),
            )
            .await
            .unwrap();
        assert_eq!(first.status(), StatusCode::SEE_OTHER);
        assert_eq!(first.headers()[header::LOCATION], "/shop?cat=powders");
        let cookie = cookie_from(&first);

        for uri in ["/add-to-cart/3", "/add-to-cart/4"] {
            let response = app.clone().oneshot(get_request(uri, Some(&cookie))).await.unwrap();
            assert_eq!(response.status(), StatusCode::SEE_OTHER);
            assert_eq!(response.headers()[header::LOCATION], "/");
            assert!(response.headers().get(header::SET_COOKIE).is_none());
        }

        let count = app
            .clone()
            .oneshot(get_request("/api/cart-count", Some(&cookie)))
            .await
            .unwrap();
        let count: CartCountResponse = json_body(count).await;
        assert_eq!(count.count, 2);

        let view = app
            .oneshot(get_request("/api/cart", Some(&cookie)))
            .await
            .unwrap();
        let view: CartView = json_body(view).await;
        assert_eq!(view.total, 120 * 2 + 180);
        assert_eq!(view.lines[0].qty, 2);
        assert_eq!(view.lines[0].subtotal, 240);
    }

    #[tokio::test]
    async fn add_unknown_product_is_not_found() {
        let response = test_app()
            .oneshot(get_request("/add-to-cart/999", None))
            .await
            .unwrap();
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
        let body: serde_json::Value = json_body(response).await;
        assert_eq!(body["error"], "unknown product: 999");
    }

    #[tokio::test]
    async fn malformed_product_id_is_json_bad_request() {
        let app = test_app();
        for uri in ["/add-to-cart/abc", "/remove-from-cart/-1"] {
            let response = app.clone().oneshot(get_request(uri, None)).await.unwrap();
            assert_eq!(response.status(), StatusCode::BAD_REQUEST);
            let body: ErrorResponse = json_body(response).await;
            assert!(!body.error.is_empty());
        }
    }

    fn update_request(product_id: u32, quantity: &str, cookie: &HeaderValue) -> Request<Body> {
        Request::builder()
            .method("POST")
            .uri(format!("/update-cart/{product_id}"))
            .header(header::COOKIE, cookie)
            .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
            .body(Body::from(format!("quantity={quantity}")))
            .unwrap()
    }

    #[tokio::test]
    async fn update_cart_reports_totals() {
        let app = test_app();
        let added = app.clone().oneshot(get_request("/add-to-cart/3", None)).await.unwrap();
        let cookie = cookie_from(&added);
        app.clone()
            .oneshot(get_request("/add-to-cart/4", Some(&cookie)))
            .await
            .unwrap();

        let response = app.oneshot(update_request(3, "5", &cookie)).await.unwrap();
        assert_eq!(response.status(), StatusCode::OK);
        let body: UpdateCartResponse = json_body(response).await;
        assert!(body.success);
        assert_eq!(body.item_total, 600);
        assert_eq!(body.cart_total, 600 + 180);
        assert_eq!(body.cart_count, 2);
    }

    #[tokio::test]
    async fn update_cart_to_zero_or_less_removes_line() {
        let app = test_app();
        let added = app.clone().oneshot(get_request("/add-to-cart/3", None)).await.unwrap();
        let cookie = cookie_from(&added);
        app.clone()
            .oneshot(get_request("/add-to-cart/4", Some(&cookie)))
            .await
            .unwrap();

        let response = app.clone().oneshot(update_request(4, "0", &cookie)).await.unwrap();
        let body: UpdateCartResponse = json_body(response).await;
        assert_eq!(body.message, "Item removed from cart.");
        assert_eq!(body.item_total, 0);
        assert_eq!(body.cart_total, 120);
        assert_eq!(body.cart_count, 1);

        let response = app.clone().oneshot(update_request(3, "-2", &cookie)).await.unwrap();
        let body: UpdateCartResponse = json_body(response).await;
        assert_eq!(body.cart_count, 0);
        assert_eq!(body.cart_total, 0);

        let missing = app.oneshot(update_request(3, "1", &cookie)).await.unwrap();
        assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn remove_from_cart_drops_line() {
        let app = test_app();
        let added = app.clone().oneshot(get_request("/add-to-cart/8", None)).await.unwrap();
        let cookie = cookie_from(&added);

        let removed = app
            .clone()
            .oneshot(get_request("/remove-from-cart/8", Some(&cookie)))
            .await
            .unwrap();
        assert_eq!(removed.status(), StatusCode::SEE_OTHER);

        let count = app
            .oneshot(get_request("/api/cart-count", Some(&cookie)))
            .await
            .unwrap();
        let count: CartCountResponse = json_body(count).await;
        assert_eq!(count.count, 0);
    }
}
