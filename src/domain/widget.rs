// Widget domain model
use serde::{Deserialize, Deserializer, Serialize};

/// One labelled value of a chart-bearing widget
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChartData {
    pub name: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl ChartData {
    pub fn new(name: &str, value: f64, color: &str) -> Self {
        Self {
            name: name.to_string(),
            value,
            color: Some(color.to_string()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WidgetKind {
    Donut,
    Bar,
    Progress,
    Text,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Widget {
    pub id: String,
    pub name: String,
    pub text: String,
    #[serde(rename = "type")]
    pub kind: WidgetKind,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub data: Option<Vec<ChartData>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub show_add_button: Option<bool>,
}

impl Widget {
    pub fn text_widget(id: String, name: String, text: String) -> Self {
        Self {
            id,
            name,
            text,
            kind: WidgetKind::Text,
            data: None,
            total: None,
            show_add_button: None,
        }
    }

    /// Placeholders only mark where the "add widget" tile goes; they are not real widgets.
    pub fn is_placeholder(&self) -> bool {
        self.show_add_button.unwrap_or(false)
    }

    /// Shallow overlay: present fields overwrite, absent fields are kept.
    pub fn apply(&mut self, patch: WidgetPatch) {
        if let Some(id) = patch.id {
            self.id = id;
        }
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(text) = patch.text {
            self.text = text;
        }
        if let Some(kind) = patch.kind {
            self.kind = kind;
        }
        if let Some(data) = patch.data {
            self.data = data;
        }
        if let Some(total) = patch.total {
            self.total = total;
        }
        if let Some(show_add_button) = patch.show_add_button {
            self.show_add_button = show_add_button;
        }
    }
}

/// Partial widget used by updates.
///
/// The optional widget fields are doubly wrapped: `None` leaves the field
/// untouched while `Some(None)` (an explicit JSON `null`) clears it.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct WidgetPatch {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub text: Option<String>,
    #[serde(default, rename = "type")]
    pub kind: Option<WidgetKind>,
    #[serde(default, deserialize_with = "present")]
    pub data: Option<Option<Vec<ChartData>>>,
    #[serde(default, deserialize_with = "present")]
    pub total: Option<Option<f64>>,
    #[serde(default, deserialize_with = "present")]
    pub show_add_button: Option<Option<bool>>,
}

/// Marks a field that appeared in the input, even as `null`.
pub(crate) fn present<'de, T, D>(deserializer: D) -> Result<Option<T>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    T::deserialize(deserializer).map(Some)
}
