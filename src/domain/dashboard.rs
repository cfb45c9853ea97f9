// Dashboard domain model
use super::category::Category;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DashboardState {
    pub categories: Vec<Category>,
    pub search_query: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl DashboardState {
    pub fn new(categories: Vec<Category>) -> Self {
        Self {
            categories,
            search_query: String::new(),
            is_loading: false,
            error: None,
        }
    }

    pub fn category(&self, category_id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == category_id)
    }

    pub fn category_mut(&mut self, category_id: &str) -> Option<&mut Category> {
        self.categories.iter_mut().find(|c| c.id == category_id)
    }
}
