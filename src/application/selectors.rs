// Selectors - Pure read views over the dashboard state
use crate::domain::category::Category;
use crate::domain::dashboard::DashboardState;
use crate::domain::seed::predefined_widgets;
use crate::domain::widget::Widget;
use std::borrow::Cow;
use std::collections::HashSet;

/// Categories with their widgets narrowed to the search query.
///
/// A blank query (after trimming) borrows the categories as they are.
/// Otherwise every category is kept and only widgets whose name contains
/// the untrimmed query, ignoring case, survive.
pub fn filtered_categories(state: &DashboardState) -> Cow<'_, [Category]> {
    if state.search_query.trim().is_empty() {
        return Cow::Borrowed(&state.categories);
    }

    let needle = state.search_query.to_lowercase();
    let filtered = state
        .categories
        .iter()
        .map(|category| Category {
            id: category.id.clone(),
            name: category.name.clone(),
            widgets: category
                .widgets
                .iter()
                .filter(|w| w.name.to_lowercase().contains(&needle))
                .cloned()
                .collect(),
        })
        .collect();

    Cow::Owned(filtered)
}

pub fn total_widget_count(state: &DashboardState) -> usize {
    state.categories.iter().map(|c| c.widgets.len()).sum()
}

pub fn is_widget_present(state: &DashboardState, category_id: &str, widget_id: &str) -> bool {
    state
        .category(category_id)
        .is_some_and(|c| c.contains_widget(widget_id))
}

/// Every distinct real widget on the dashboard, then the predefined ones not seen yet.
pub fn all_available_widgets(categories: &[Category]) -> Vec<Widget> {
    let mut seen = HashSet::new();
    let mut widgets = Vec::new();

    for widget in categories.iter().flat_map(|c| &c.widgets) {
        if !seen.contains(widget.id.as_str())
            && !widget.name.trim().is_empty()
            && !widget.text.trim().is_empty()
            && !widget.is_placeholder()
        {
            seen.insert(widget.id.as_str());
            widgets.push(widget.clone());
        }
    }

    let extra: Vec<Widget> = predefined_widgets()
        .into_iter()
        .filter(|w| !seen.contains(w.id.as_str()))
        .collect();
    widgets.extend(extra);

    widgets
}
