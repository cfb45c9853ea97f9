// Dashboard store - Owns the dashboard state and its mutation operations
use crate::domain::category::{Category, CategoryPatch};
use crate::domain::dashboard::DashboardState;
use crate::domain::seed::initial_dashboard;
use crate::domain::widget::{Widget, WidgetPatch};

/// Single owner of the categories, the search query and the status flags.
///
/// Every operation applies fully or not at all. An operation whose target
/// category or widget does not exist leaves the state untouched.
#[derive(Debug, Clone)]
pub struct DashboardStore {
    state: DashboardState,
    seed: Vec<Category>,
}

impl DashboardStore {
    pub fn new(seed: Vec<Category>) -> Self {
        Self {
            state: DashboardState::new(seed.clone()),
            seed,
        }
    }

    pub fn seeded() -> Self {
        Self::new(initial_dashboard())
    }

    pub fn state(&self) -> &DashboardState {
        &self.state
    }

    fn category_mut(&mut self, category_id: &str) -> Option<&mut Category> {
        let category = self.state.category_mut(category_id);
        if category.is_none() {
            tracing::debug!("Category {} not found, ignoring", category_id);
        }
        category
    }

    pub fn add_widget(&mut self, category_id: &str, widget: Widget) {
        if let Some(category) = self.category_mut(category_id) {
            tracing::debug!("Adding widget {} to {}", widget.id, category_id);
            category.widgets.push(widget);
        }
    }

    /// Removes every widget carrying `widget_id`
    pub fn remove_widget(&mut self, category_id: &str, widget_id: &str) {
        if let Some(category) = self.category_mut(category_id) {
            let before = category.widgets.len();
            category.widgets.retain(|w| w.id != widget_id);
            tracing::debug!(
                "Removed {} widget(s) {} from {}",
                before - category.widgets.len(),
                widget_id,
                category_id
            );
        }
    }

    /// Presence toggle keyed by id: removes the widget if present, appends it otherwise
    pub fn toggle_widget_in_category(&mut self, category_id: &str, widget: Widget) {
        if let Some(category) = self.category_mut(category_id) {
            if category.contains_widget(&widget.id) {
                tracing::debug!("Toggling widget {} out of {}", widget.id, category_id);
                category.widgets.retain(|w| w.id != widget.id);
            } else {
                tracing::debug!("Toggling widget {} into {}", widget.id, category_id);
                category.widgets.push(widget);
            }
        }
    }

    pub fn update_widget(&mut self, category_id: &str, widget_id: &str, patch: WidgetPatch) {
        let Some(category) = self.category_mut(category_id) else {
            return;
        };

        match category.widgets.iter_mut().find(|w| w.id == widget_id) {
            Some(widget) => widget.apply(patch),
            None => tracing::debug!("Widget {} not found in {}, ignoring", widget_id, category_id),
        }
    }

    pub fn add_category(&mut self, category: Category) {
        tracing::debug!("Adding category {}", category.id);
        self.state.categories.push(category);
    }

    pub fn remove_category(&mut self, category_id: &str) {
        self.state.categories.retain(|c| c.id != category_id);
    }

    pub fn update_category(&mut self, category_id: &str, patch: CategoryPatch) {
        if let Some(category) = self.category_mut(category_id) {
            category.apply(patch);
        }
    }

    pub fn set_search_query(&mut self, query: String) {
        self.state.search_query = query;
    }

    pub fn clear_search_query(&mut self) {
        self.state.search_query.clear();
    }

    pub fn set_loading(&mut self, is_loading: bool) {
        self.state.is_loading = is_loading;
    }

    pub fn set_error(&mut self, error: Option<String>) {
        self.state.error = error;
    }

    pub fn clear_error(&mut self) {
        self.state.error = None;
    }

    /// Restores the seed categories and clears the query and error. The loading flag is kept.
    pub fn reset_dashboard(&mut self) {
        tracing::debug!("Resetting dashboard to seed");
        self.state.categories = self.seed.clone();
        self.state.search_query.clear();
        self.state.error = None;
    }

    pub fn bulk_add_widgets(&mut self, category_id: &str, widgets: Vec<Widget>) {
        if let Some(category) = self.category_mut(category_id) {
            tracing::debug!("Adding {} widgets to {}", widgets.len(), category_id);
            category.widgets.extend(widgets);
        }
    }
}

impl Default for DashboardStore {
    fn default() -> Self {
        Self::seeded()
    }
}
