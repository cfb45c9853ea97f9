// HTTP request handlers
use crate::application::dashboard_view::{DashboardView, LibraryView, ManagedCategory};
use crate::application::error::DashboardError;
use crate::domain::catalog::LibraryTab;
use crate::domain::category::{Category, CategoryPatch};
use crate::domain::widget::{Widget, WidgetPatch};
use crate::presentation::app_state::AppState;
use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;
use std::sync::Arc;

type AppStateRef = State<Arc<AppState>>;

#[derive(Deserialize)]
pub struct SearchBody {
    pub query: String,
}

#[derive(Deserialize)]
pub struct LoadingBody {
    pub is_loading: bool,
}

#[derive(Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

#[derive(Deserialize)]
pub struct CustomWidgetBody {
    pub name: String,
    pub text: String,
}

#[derive(Deserialize)]
pub struct LibraryQuery {
    pub tab: Option<String>,
}

#[derive(Deserialize)]
pub struct LibrarySelection {
    pub widget_ids: Vec<String>,
}

/// Health check endpoint
pub async fn health_check() -> &'static str {
    "ok"
}

/// Current dashboard, filtered by the search query
pub async fn get_dashboard(State(state): AppStateRef) -> Json<DashboardView> {
    Json(state.dashboard_service.view())
}

pub async fn set_search(State(state): AppStateRef, Json(body): Json<SearchBody>) -> Json<DashboardView> {
    Json(state.dashboard_service.mutate(|store| store.set_search_query(body.query)))
}

pub async fn clear_search(State(state): AppStateRef) -> Json<DashboardView> {
    Json(state.dashboard_service.mutate(|store| store.clear_search_query()))
}

pub async fn reset_dashboard(State(state): AppStateRef) -> Json<DashboardView> {
    tracing::info!("Resetting dashboard");
    Json(state.dashboard_service.mutate(|store| store.reset_dashboard()))
}

pub async fn set_loading(State(state): AppStateRef, Json(body): Json<LoadingBody>) -> Json<DashboardView> {
    Json(state.dashboard_service.mutate(|store| store.set_loading(body.is_loading)))
}

pub async fn set_error(State(state): AppStateRef, Json(body): Json<ErrorBody>) -> Json<DashboardView> {
    Json(state.dashboard_service.mutate(|store| store.set_error(body.message)))
}

pub async fn clear_error(State(state): AppStateRef) -> Json<DashboardView> {
    Json(state.dashboard_service.mutate(|store| store.clear_error()))
}

pub async fn add_category(State(state): AppStateRef, Json(category): Json<Category>) -> Json<DashboardView> {
    Json(state.dashboard_service.mutate(|store| store.add_category(category)))
}

pub async fn update_category(
    Path(category_id): Path<String>,
    State(state): AppStateRef,
    Json(patch): Json<CategoryPatch>,
) -> Json<DashboardView> {
    Json(state.dashboard_service.mutate(|store| store.update_category(&category_id, patch)))
}

pub async fn remove_category(Path(category_id): Path<String>, State(state): AppStateRef) -> Json<DashboardView> {
    Json(state.dashboard_service.mutate(|store| store.remove_category(&category_id)))
}

pub async fn add_widget(
    Path(category_id): Path<String>,
    State(state): AppStateRef,
    Json(widget): Json<Widget>,
) -> Json<DashboardView> {
    Json(state.dashboard_service.mutate(|store| store.add_widget(&category_id, widget)))
}

pub async fn bulk_add_widgets(
    Path(category_id): Path<String>,
    State(state): AppStateRef,
    Json(widgets): Json<Vec<Widget>>,
) -> Json<DashboardView> {
    Json(state.dashboard_service.mutate(|store| store.bulk_add_widgets(&category_id, widgets)))
}

pub async fn add_custom_widget(
    Path(category_id): Path<String>,
    State(state): AppStateRef,
    Json(body): Json<CustomWidgetBody>,
) -> Result<Json<DashboardView>, DashboardError> {
    state
        .dashboard_service
        .add_custom_widget(&category_id, &body.name, &body.text)
        .map(Json)
}

pub async fn update_widget(
    Path((category_id, widget_id)): Path<(String, String)>,
    State(state): AppStateRef,
    Json(patch): Json<WidgetPatch>,
) -> Json<DashboardView> {
    Json(state.dashboard_service.mutate(|store| store.update_widget(&category_id, &widget_id, patch)))
}

pub async fn remove_widget(
    Path((category_id, widget_id)): Path<(String, String)>,
    State(state): AppStateRef,
) -> Json<DashboardView> {
    Json(state.dashboard_service.mutate(|store| store.remove_widget(&category_id, &widget_id)))
}

/// Toggle a widget by id; the path id wins over the body's
pub async fn toggle_widget(
    Path((category_id, widget_id)): Path<(String, String)>,
    State(state): AppStateRef,
    Json(mut widget): Json<Widget>,
) -> Json<DashboardView> {
    widget.id = widget_id;
    Json(state.dashboard_service.mutate(|store| store.toggle_widget_in_category(&category_id, widget)))
}

pub async fn get_library(
    Path(category_id): Path<String>,
    Query(query): Query<LibraryQuery>,
    State(state): AppStateRef,
) -> Result<Json<LibraryView>, DashboardError> {
    let tab = match query.tab {
        Some(tab) => tab
            .parse::<LibraryTab>()
            .map_err(|_| DashboardError::UnknownLibraryTab(tab))?,
        None => LibraryTab::default(),
    };
    Ok(Json(state.dashboard_service.library(&category_id, tab)))
}

pub async fn add_library_widgets(
    Path(category_id): Path<String>,
    State(state): AppStateRef,
    Json(selection): Json<LibrarySelection>,
) -> Json<DashboardView> {
    Json(
        state
            .dashboard_service
            .add_library_widgets(&category_id, &selection.widget_ids),
    )
}

pub async fn category_manager(State(state): AppStateRef) -> Json<Vec<ManagedCategory>> {
    Json(state.dashboard_service.category_manager())
}

pub async fn toggle_available_widget(
    Path((category_id, widget_id)): Path<(String, String)>,
    State(state): AppStateRef,
) -> Json<DashboardView> {
    Json(
        state
            .dashboard_service
            .toggle_available_widget(&category_id, &widget_id),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dashboard_service::DashboardService;
    use crate::application::dashboard_store::DashboardStore;
    use crate::infrastructure::id_generators::SequentialIdGenerator;

    fn state() -> AppStateRef {
        State(Arc::new(AppState {
            dashboard_service: DashboardService::new(
                DashboardStore::seeded(),
                Arc::new(SequentialIdGenerator::new("w")),
            ),
        }))
    }

    fn path2(category_id: &str, widget_id: &str) -> Path<(String, String)> {
        Path((category_id.to_string(), widget_id.to_string()))
    }

    #[tokio::test]
    async fn test_search_then_clear() {
        let state = state();

        let Json(view) = set_search(
            state.clone(),
            Json(SearchBody {
                query: "cloud".to_string(),
            }),
        )
        .await;
        assert_eq!(view.categories.len(), 3);
        assert_eq!(view.categories[0].widgets.len(), 2);
        assert!(view.categories[1].widgets.is_empty());

        let Json(view) = clear_search(state).await;
        assert_eq!(view.search_query, "");
        assert_eq!(view.categories[1].widgets.len(), 2);
    }

    #[tokio::test]
    async fn test_add_and_remove_widget() {
        let state = state();
        let widget: Widget =
            serde_json::from_str(r#"{"id":"x1","name":"Foo","text":"Bar","type":"text"}"#).unwrap();

        let Json(view) = add_widget(Path("cspm-executive".to_string()), state.clone(), Json(widget)).await;
        assert_eq!(view.categories[0].widgets.len(), 3);
        assert_eq!(view.categories[0].widgets[2].widget.id, "x1");

        let Json(view) = remove_widget(path2("cspm-executive", "x1"), state).await;
        let ids: Vec<_> = view.categories[0]
            .widgets
            .iter()
            .map(|c| c.widget.id.as_str())
            .collect();
        assert_eq!(ids, vec!["cloud-accounts", "cloud-account-risk"]);
    }

    #[tokio::test]
    async fn test_custom_widget_validation() {
        let state = state();

        let result = add_custom_widget(
            Path("registry-scan".to_string()),
            state.clone(),
            Json(CustomWidgetBody {
                name: " ".to_string(),
                text: "body".to_string(),
            }),
        )
        .await;
        assert!(matches!(result, Err(DashboardError::EmptyWidgetName)));

        let Json(view) = add_custom_widget(
            Path("registry-scan".to_string()),
            state,
            Json(CustomWidgetBody {
                name: "Notes".to_string(),
                text: "body".to_string(),
            }),
        )
        .await
        .unwrap();
        assert_eq!(view.categories[2].widgets[2].widget.id, "w-1");
    }

    #[tokio::test]
    async fn test_library_tab_parsing() {
        let state = state();

        let Json(view) = get_library(
            Path("registry-scan".to_string()),
            Query(LibraryQuery {
                tab: Some("image".to_string()),
            }),
            state.clone(),
        )
        .await
        .unwrap();
        assert_eq!(view.tab, LibraryTab::Image);
        assert!(view.entries[0].already_added);

        let result = get_library(
            Path("registry-scan".to_string()),
            Query(LibraryQuery {
                tab: Some("billing".to_string()),
            }),
            state,
        )
        .await;
        assert!(matches!(result, Err(DashboardError::UnknownLibraryTab(tab)) if tab == "billing"));
    }

    #[tokio::test]
    async fn test_toggle_widget_uses_path_id() {
        let state = state();
        let widget = Widget::text_widget("ignored".to_string(), "Notes".to_string(), "n".to_string());

        let Json(view) = toggle_widget(path2("cwpp-dashboard", "notes"), state.clone(), Json(widget.clone())).await;
        assert_eq!(view.categories[1].widgets[2].widget.id, "notes");

        let Json(view) = toggle_widget(path2("cwpp-dashboard", "notes"), state, Json(widget)).await;
        assert_eq!(view.categories[1].widgets.len(), 2);
    }

    #[tokio::test]
    async fn test_status_and_reset() {
        let state = state();

        set_loading(state.clone(), Json(LoadingBody { is_loading: true })).await;
        let Json(view) = set_error(
            state.clone(),
            Json(ErrorBody {
                message: Some("fetch failed".to_string()),
            }),
        )
        .await;
        assert!(view.is_loading);
        assert_eq!(view.error.as_deref(), Some("fetch failed"));

        remove_category(Path("cspm-executive".to_string()), state.clone()).await;
        let Json(view) = reset_dashboard(state).await;
        assert_eq!(view.categories.len(), 3);
        assert_eq!(view.error, None);
        assert!(view.is_loading);
    }
}
