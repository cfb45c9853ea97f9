// Render model for a widget card
use super::widget::{Widget, WidgetKind};
use serde::Serialize;

const NO_DATA: &str = "No data available";

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Segment {
    pub name: String,
    pub value: f64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
    pub percentage: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "visual", rename_all = "camelCase")]
pub enum WidgetVisual {
    Donut { total: f64, segments: Vec<Segment> },
    Progress { title: String, total: f64, segments: Vec<Segment> },
    Empty { message: String },
    Text { body: String },
}

impl WidgetVisual {
    pub fn for_widget(widget: &Widget) -> Self {
        match widget.kind {
            WidgetKind::Donut => match chart_input(widget) {
                Some((total, segments)) => WidgetVisual::Donut { total, segments },
                None => Self::empty(NO_DATA),
            },
            WidgetKind::Progress => match chart_input(widget) {
                Some((total, segments)) => WidgetVisual::Progress {
                    title: widget.text.clone(),
                    total,
                    segments,
                },
                None => Self::empty(NO_DATA),
            },
            WidgetKind::Bar => Self::empty(&widget.text),
            WidgetKind::Text => WidgetVisual::Text {
                body: widget.text.clone(),
            },
        }
    }

    fn empty(message: &str) -> Self {
        WidgetVisual::Empty {
            message: message.to_string(),
        }
    }
}

/// A chart needs data and a non-zero total; an empty data list still counts as data.
fn chart_input(widget: &Widget) -> Option<(f64, Vec<Segment>)> {
    let data = widget.data.as_ref()?;
    let total = widget.total.filter(|t| *t != 0.0)?;

    let segments = data
        .iter()
        .map(|d| Segment {
            name: d.name.clone(),
            value: d.value,
            color: d.color.clone(),
            percentage: d.value / total * 100.0,
        })
        .collect();

    Some((total, segments))
}
