// Dashboard service - Use cases behind the dashboard screens
use crate::application::dashboard_store::DashboardStore;
use crate::application::dashboard_view::{category_manager_view, DashboardView, LibraryView, ManagedCategory};
use crate::application::error::DashboardError;
use crate::application::id_generator::IdGenerator;
use crate::application::selectors::{all_available_widgets, is_widget_present};
use crate::domain::catalog::{find_library_entry, LibraryTab};
use crate::domain::widget::Widget;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

#[derive(Clone)]
pub struct DashboardService {
    store: Arc<Mutex<DashboardStore>>,
    ids: Arc<dyn IdGenerator>,
}

impl DashboardService {
    pub fn new(store: DashboardStore, ids: Arc<dyn IdGenerator>) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            ids,
        }
    }

    // Store operations never panic, so a poisoned lock still guards a whole state
    fn lock(&self) -> MutexGuard<'_, DashboardStore> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    pub fn view(&self) -> DashboardView {
        DashboardView::from_state(self.lock().state())
    }

    /// Runs one store operation and returns the resulting view
    pub fn mutate<F>(&self, op: F) -> DashboardView
    where
        F: FnOnce(&mut DashboardStore),
    {
        let mut store = self.lock();
        op(&mut *store);
        DashboardView::from_state(store.state())
    }

    pub fn add_custom_widget(
        &self,
        category_id: &str,
        name: &str,
        text: &str,
    ) -> Result<DashboardView, DashboardError> {
        let name = name.trim();
        let text = text.trim();
        if name.is_empty() {
            return Err(DashboardError::EmptyWidgetName);
        }
        if text.is_empty() {
            return Err(DashboardError::EmptyWidgetText);
        }

        let widget = Widget::text_widget(self.ids.next_id(), name.to_string(), text.to_string());
        tracing::info!("Creating custom widget {} in {}", widget.id, category_id);
        Ok(self.mutate(|store| store.add_widget(category_id, widget)))
    }

    pub fn library(&self, category_id: &str, tab: LibraryTab) -> LibraryView {
        LibraryView::from_state(self.lock().state(), category_id, tab)
    }

    /// Adds fresh text widgets for the selected library entries.
    ///
    /// Unknown entries and entries already present in the category are skipped.
    pub fn add_library_widgets(&self, category_id: &str, entry_ids: &[String]) -> DashboardView {
        let mut store = self.lock();

        let widgets: Vec<Widget> = entry_ids
            .iter()
            .filter_map(|id| {
                let entry = find_library_entry(id);
                if entry.is_none() {
                    tracing::debug!("Library entry {} not found, skipping", id);
                }
                entry
            })
            .filter(|entry| !is_widget_present(store.state(), category_id, entry.id))
            .map(|entry| {
                Widget::text_widget(self.ids.next_id(), entry.name.to_string(), entry.text.to_string())
            })
            .collect();

        if !widgets.is_empty() {
            store.bulk_add_widgets(category_id, widgets);
        }
        DashboardView::from_state(store.state())
    }

    pub fn category_manager(&self) -> Vec<ManagedCategory> {
        category_manager_view(self.lock().state())
    }

    /// Toggles a widget from the category manager's checklist into or out of a category
    pub fn toggle_available_widget(&self, category_id: &str, widget_id: &str) -> DashboardView {
        let mut store = self.lock();

        let widget = all_available_widgets(&store.state().categories)
            .into_iter()
            .find(|w| w.id == widget_id);
        match widget {
            Some(widget) => store.toggle_widget_in_category(category_id, widget),
            None => tracing::debug!("Widget {} is not available, ignoring", widget_id),
        }

        DashboardView::from_state(store.state())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::id_generators::SequentialIdGenerator;

    fn service() -> DashboardService {
        DashboardService::new(
            DashboardStore::seeded(),
            Arc::new(SequentialIdGenerator::new("widget")),
        )
    }

    fn ids(view: &DashboardView, index: usize) -> Vec<String> {
        view.categories[index]
            .widgets
            .iter()
            .map(|c| c.widget.id.clone())
            .collect()
    }

    #[test]
    fn test_custom_widget_is_trimmed_and_gets_fresh_id() {
        let service = service();
        let view = service
            .add_custom_widget("cwpp-dashboard", "  Notes ", " remember ")
            .unwrap();

        let card = view.categories[1].widgets.last().unwrap();
        assert_eq!(card.widget.id, "widget-1");
        assert_eq!(card.widget.name, "Notes");
        assert_eq!(card.widget.text, "remember");
        assert_eq!(view.total_widgets, 7);
    }

    #[test]
    fn test_custom_widget_rejects_blank_input() {
        let service = service();
        assert_eq!(
            service.add_custom_widget("cwpp-dashboard", "  ", "text"),
            Err(DashboardError::EmptyWidgetName)
        );
        assert_eq!(
            service.add_custom_widget("cwpp-dashboard", "Name", "\n"),
            Err(DashboardError::EmptyWidgetText)
        );
        assert_eq!(service.view().total_widgets, 6);
    }

    #[test]
    fn test_add_library_widgets_skips_present_and_unknown() {
        let service = service();
        let selected = vec![
            "cloud-accounts".to_string(),
            "compliance-status".to_string(),
            "nope".to_string(),
            "ticket-status".to_string(),
        ];

        let view = service.add_library_widgets("cspm-executive", &selected);
        assert_eq!(
            ids(&view, 0),
            vec!["cloud-accounts", "cloud-account-risk", "widget-1", "widget-2"]
        );
        let names: Vec<_> = view.categories[0].widgets[2..]
            .iter()
            .map(|c| c.widget.name.as_str())
            .collect();
        assert_eq!(names, vec!["Compliance Status", "Ticket Status"]);
    }

    #[test]
    fn test_add_library_widgets_to_missing_category_is_noop() {
        let service = service();
        let before = service.view();
        let view = service.add_library_widgets("missing", &["security-score".to_string()]);
        assert_eq!(view, before);
    }

    #[test]
    fn test_toggle_available_widget_round_trip() {
        let service = service();
        let before = service.view();

        let view = service.toggle_available_widget("registry-scan", "predefined-compliance");
        assert_eq!(
            ids(&view, 2),
            vec!["image-risk", "image-security", "predefined-compliance"]
        );
        assert!(
            service.category_manager()[2]
                .widgets
                .iter()
                .any(|w| w.id == "predefined-compliance" && w.checked)
        );

        let view = service.toggle_available_widget("registry-scan", "predefined-compliance");
        assert_eq!(view, before);
    }

    #[test]
    fn test_toggle_unknown_widget_is_noop() {
        let service = service();
        let before = service.view();
        assert_eq!(service.toggle_available_widget("registry-scan", "nope"), before);
    }

    #[test]
    fn test_mutate_returns_resulting_view() {
        let service = service();
        let view = service.mutate(|store| store.set_search_query("risk".to_string()));

        assert_eq!(view.search_query, "risk");
        assert_eq!(ids(&view, 0), vec!["cloud-account-risk"]);
        assert_eq!(ids(&view, 2), vec!["image-risk"]);

        let view = service.mutate(DashboardStore::reset_dashboard);
        assert_eq!(view.search_query, "");
    }
}
