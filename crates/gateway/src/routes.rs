//! Router construction

use axum::{
    middleware::from_fn,
    routing::{get, post},
    Router,
};
use metrics_exporter_prometheus::PrometheusHandle;
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use crate::{handlers, middleware, AppState};

/// Create the main application router
pub fn create_router(state: AppState, metrics: Option<PrometheusHandle>) -> Router {
    // CORS configuration
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    // Request ID propagation
    let request_id = SetRequestIdLayer::x_request_id(MakeRequestUuid);
    let propagate_id = PropagateRequestIdLayer::x_request_id();

    // Procedure routes, named `<router>.<procedure>`
    let api_routes = Router::new()
        .route("/health", get(handlers::health::database_health))
        .route("/article.create", post(handlers::articles::create_article))
        .route("/article.getAll", get(handlers::articles::list_articles))
        .route("/article.toggleRead", post(handlers::articles::toggle_read))
        .route("/article.flipRead", post(handlers::articles::flip_read))
        .route("/article.delete", post(handlers::articles::delete_article));

    let mut router = Router::new()
        .route("/health", get(handlers::health::health))
        .nest("/api", api_routes);

    if let Some(handle) = metrics {
        router = router.route("/metrics", get(move || std::future::ready(handle.render())));
    }

    // Compose the app
    router
        .layer(from_fn(middleware::metrics::track_requests))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Outermost so ids generated by SetRequestIdLayer reach the response
        .layer(propagate_id)
        .layer(request_id)
        .with_state(state)
}
