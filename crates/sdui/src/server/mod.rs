//! HTTP surface of the content slices.

mod handlers;
mod response;

use sdui_kernel::server::ApiState;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;

pub mod router {
    pub use super::content_router;
    pub use sdui_kernel::server::system_router;
}

/// Card benefit and SDUI plugin routes.
pub fn content_router() -> OpenApiRouter<ApiState> {
    OpenApiRouter::new()
        .routes(routes!(handlers::card_benefits))
        .routes(routes!(handlers::plugins))
        .routes(routes!(handlers::plugins_for_language))
        .routes(routes!(handlers::all_plugins))
        .routes(routes!(handlers::all_plugins_for_language))
}
