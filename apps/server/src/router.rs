use axum::Router;
use sdui::kernel::server::ApiState;
use tower_http::trace::TraceLayer;
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_scalar::{Scalar, Servable};

#[derive(OpenApi)]
#[openapi(info(title = "SDUI Content Server", description = "Localized server-driven UI plugin trees"))]
struct ApiDoc;

/// Full application router: content routes, system routes and the Scalar UI at `/api`.
pub(crate) fn init(state: ApiState) -> Router {
    let (routes, api_doc) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .merge(sdui::server::router::system_router())
        .merge(sdui::server::router::content_router())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
        .split_for_parts();

    Router::new().merge(routes).merge(Scalar::with_url("/api", api_doc))
}
