// Route table
use crate::presentation::app_state::AppState;
use crate::presentation::handlers::{
    add_category, add_custom_widget, add_library_widgets, add_widget, bulk_add_widgets,
    category_manager, clear_error, clear_search, get_dashboard, get_library, health_check,
    remove_category, remove_widget, reset_dashboard, set_error, set_loading, set_search,
    toggle_available_widget, toggle_widget, update_category, update_widget,
};
use axum::{
    routing::{get, patch, post, put},
    Router,
};
use std::sync::Arc;
use tower_http::compression::CompressionLayer;
use tower_http::trace::TraceLayer;

pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/healthz", get(health_check))
        .route("/dashboard", get(get_dashboard))
        .route("/search", put(set_search).delete(clear_search))
        .route("/reset", post(reset_dashboard))
        .route("/status/loading", put(set_loading))
        .route("/status/error", put(set_error).delete(clear_error))
        .route("/categories", post(add_category))
        .route(
            "/categories/:category_id",
            patch(update_category).delete(remove_category),
        )
        .route("/categories/:category_id/widgets", post(add_widget))
        .route("/categories/:category_id/bulk-widgets", post(bulk_add_widgets))
        .route("/categories/:category_id/custom-widgets", post(add_custom_widget))
        .route(
            "/categories/:category_id/widgets/:widget_id",
            patch(update_widget).delete(remove_widget),
        )
        .route(
            "/categories/:category_id/widgets/:widget_id/toggle",
            post(toggle_widget),
        )
        .route(
            "/categories/:category_id/library",
            get(get_library).post(add_library_widgets),
        )
        .route("/manage", get(category_manager))
        .route("/manage/:category_id/:widget_id", post(toggle_available_widget))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
