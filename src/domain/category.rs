// Category domain model
use super::widget::Widget;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub widgets: Vec<Widget>,
}

impl Category {
    pub fn new(id: &str, name: &str, widgets: Vec<Widget>) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            widgets,
        }
    }

    pub fn contains_widget(&self, widget_id: &str) -> bool {
        self.widgets.iter().any(|w| w.id == widget_id)
    }

    /// Widgets that are shown as cards, in display order
    pub fn real_widgets(&self) -> impl Iterator<Item = &Widget> {
        self.widgets.iter().filter(|w| !w.is_placeholder())
    }

    pub fn apply(&mut self, patch: CategoryPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(widgets) = patch.widgets {
            self.widgets = widgets;
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct CategoryPatch {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub widgets: Option<Vec<Widget>>,
}
