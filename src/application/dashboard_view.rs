// Read-only views handed to the presentation layer
use crate::application::selectors::{all_available_widgets, filtered_categories, is_widget_present, total_widget_count};
use crate::domain::catalog::{library_entries, LibraryTab};
use crate::domain::category::Category;
use crate::domain::dashboard::DashboardState;
use crate::domain::visual::WidgetVisual;
use crate::domain::widget::Widget;
use serde::Serialize;

pub const EMPTY_CATEGORY_MESSAGE: &str =
    "No widgets found. Use the \"Add Widget\" button to create one.";

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardView {
    pub categories: Vec<CategorySection>,
    pub search_query: String,
    pub total_widgets: usize,
    pub is_loading: bool,
    pub error: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CategorySection {
    pub id: String,
    pub name: String,
    pub widgets: Vec<WidgetCard>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub empty_message: Option<&'static str>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct WidgetCard {
    #[serde(flatten)]
    pub widget: Widget,
    pub visual: WidgetVisual,
}

impl DashboardView {
    pub fn from_state(state: &DashboardState) -> Self {
        Self {
            categories: filtered_categories(state)
                .iter()
                .map(CategorySection::from_category)
                .collect(),
            search_query: state.search_query.clone(),
            total_widgets: total_widget_count(state),
            is_loading: state.is_loading,
            error: state.error.clone(),
        }
    }
}

impl CategorySection {
    fn from_category(category: &Category) -> Self {
        let widgets: Vec<WidgetCard> = category
            .real_widgets()
            .map(|widget| WidgetCard {
                widget: widget.clone(),
                visual: WidgetVisual::for_widget(widget),
            })
            .collect();
        let empty_message = widgets.is_empty().then_some(EMPTY_CATEGORY_MESSAGE);

        Self {
            id: category.id.clone(),
            name: category.name.clone(),
            widgets,
            empty_message,
        }
    }
}

/// One tab of the widget library as seen from a category
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryView {
    pub category_id: String,
    pub tab: LibraryTab,
    pub tabs: Vec<LibraryTab>,
    pub entries: Vec<LibraryItem>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LibraryItem {
    pub id: &'static str,
    pub name: &'static str,
    pub text: &'static str,
    pub already_added: bool,
}

impl LibraryView {
    pub fn from_state(state: &DashboardState, category_id: &str, tab: LibraryTab) -> Self {
        let entries = library_entries(tab)
            .iter()
            .map(|e| LibraryItem {
                id: e.id,
                name: e.name,
                text: e.text,
                already_added: is_widget_present(state, category_id, e.id),
            })
            .collect();

        Self {
            category_id: category_id.to_string(),
            tab,
            tabs: LibraryTab::ALL.to_vec(),
            entries,
        }
    }
}

/// Per-category checklist of every widget that can be toggled in
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagedCategory {
    pub id: String,
    pub name: String,
    pub widgets: Vec<ManagedWidget>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ManagedWidget {
    pub id: String,
    pub name: String,
    pub text: String,
    pub checked: bool,
}

pub fn category_manager_view(state: &DashboardState) -> Vec<ManagedCategory> {
    let available = all_available_widgets(&state.categories);

    state
        .categories
        .iter()
        .map(|category| ManagedCategory {
            id: category.id.clone(),
            name: category.name.clone(),
            widgets: available
                .iter()
                .map(|w| ManagedWidget {
                    id: w.id.clone(),
                    name: w.name.clone(),
                    text: w.text.clone(),
                    checked: category.contains_widget(&w.id),
                })
                .collect(),
        })
        .collect()
}
