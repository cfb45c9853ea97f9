// Seed dataset and predefined widgets
use super::category::Category;
use super::widget::{ChartData, Widget, WidgetKind};

const NO_GRAPH_DATA: &str = "No Graph data available!";

fn chart_widget(
    id: &str,
    name: &str,
    text: &str,
    kind: WidgetKind,
    total: Option<f64>,
    data: Vec<ChartData>,
) -> Widget {
    Widget {
        id: id.to_string(),
        name: name.to_string(),
        text: text.to_string(),
        kind,
        data: Some(data),
        total,
        show_add_button: None,
    }
}

/// The dashboard every session starts from, and the one `reset` restores.
pub fn initial_dashboard() -> Vec<Category> {
    vec![
        Category::new(
            "cspm-executive",
            "CSPM Executive Dashboard",
            vec![
                chart_widget(
                    "cloud-accounts",
                    "Cloud Accounts",
                    "Connected (2) | Not Connected (2)",
                    WidgetKind::Donut,
                    Some(2.0),
                    vec![
                        ChartData::new("Connected", 2.0, "#3B82F6"),
                        ChartData::new("Not Connected", 2.0, "#E5E7EB"),
                    ],
                ),
                chart_widget(
                    "cloud-account-risk",
                    "Cloud Account Risk Assessment",
                    "Failed (1689) | Warning (681) | Not available (36) | Passed (7253)",
                    WidgetKind::Donut,
                    Some(9659.0),
                    vec![
                        ChartData::new("Failed", 1689.0, "#EF4444"),
                        ChartData::new("Warning", 681.0, "#F59E0B"),
                        ChartData::new("Not available", 36.0, "#9CA3AF"),
                        ChartData::new("Passed", 7253.0, "#10B981"),
                    ],
                ),
            ],
        ),
        Category::new(
            "cwpp-dashboard",
            "CWPP Dashboard",
            vec![
                chart_widget(
                    "top-5-namespace",
                    "Top 5 Namespace Specific Alerts",
                    NO_GRAPH_DATA,
                    WidgetKind::Bar,
                    None,
                    Vec::new(),
                ),
                chart_widget(
                    "workload-alerts",
                    "Workload Alerts",
                    NO_GRAPH_DATA,
                    WidgetKind::Bar,
                    None,
                    Vec::new(),
                ),
            ],
        ),
        Category::new(
            "registry-scan",
            "Registry Scan",
            vec![
                chart_widget(
                    "image-risk",
                    "Image Risk Assessment",
                    "Total Vulnerabilities",
                    WidgetKind::Progress,
                    Some(1470.0),
                    vec![
                        ChartData::new("Critical", 9.0, "#DC2626"),
                        ChartData::new("High", 150.0, "#EA580C"),
                    ],
                ),
                chart_widget(
                    "image-security",
                    "Image Security Issues",
                    "Total Images",
                    WidgetKind::Progress,
                    Some(2.0),
                    vec![
                        ChartData::new("Critical", 2.0, "#DC2626"),
                        ChartData::new("High", 2.0, "#EA580C"),
                    ],
                ),
            ],
        ),
    ]
}

/// Text widgets offered by the category manager on top of the ones already on the dashboard
pub fn predefined_widgets() -> Vec<Widget> {
    [
        (
            "predefined-security-score",
            "Security Score",
            "Overall security score: 85/100",
        ),
        (
            "predefined-compliance",
            "Compliance Status",
            "Compliance rate: 92% | Non-compliant: 8%",
        ),
        (
            "predefined-threats",
            "Active Threats",
            "Active threats detected: 3 | Resolved: 15",
        ),
        (
            "predefined-performance",
            "Performance Metrics",
            "CPU: 65% | Memory: 78% | Network: 45%",
        ),
    ]
    .into_iter()
    .map(|(id, name, text)| Widget::text_widget(id.to_string(), name.to_string(), text.to_string()))
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seed_shape() {
        let seed = initial_dashboard();
        let ids: Vec<_> = seed.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["cspm-executive", "cwpp-dashboard", "registry-scan"]);
        assert_eq!(seed.iter().map(|c| c.widgets.len()).sum::<usize>(), 6);

        let kinds: Vec<_> = seed
            .iter()
            .map(|c| c.widgets.iter().map(|w| w.kind).collect::<Vec<_>>())
            .collect();
        assert_eq!(
            kinds,
            vec![
                vec![WidgetKind::Donut, WidgetKind::Donut],
                vec![WidgetKind::Bar, WidgetKind::Bar],
                vec![WidgetKind::Progress, WidgetKind::Progress],
            ]
        );
        assert!(seed[1].widgets.iter().all(|w| w.data.as_ref().is_some_and(Vec::is_empty)));
    }

    #[test]
    fn test_seed_is_reproducible() {
        assert_eq!(initial_dashboard(), initial_dashboard());
    }
}
