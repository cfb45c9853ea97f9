// Widget library offered when adding widgets to a category
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum LibraryTab {
    #[default]
    #[serde(rename = "CSPM")]
    Cspm,
    #[serde(rename = "CWPP")]
    Cwpp,
    Image,
    Ticket,
}

impl LibraryTab {
    pub const ALL: [LibraryTab; 4] = [
        LibraryTab::Cspm,
        LibraryTab::Cwpp,
        LibraryTab::Image,
        LibraryTab::Ticket,
    ];

    pub fn label(self) -> &'static str {
        match self {
            LibraryTab::Cspm => "CSPM",
            LibraryTab::Cwpp => "CWPP",
            LibraryTab::Image => "Image",
            LibraryTab::Ticket => "Ticket",
        }
    }
}

impl fmt::Display for LibraryTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for LibraryTab {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|tab| tab.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| format!("unknown library tab: {}", s))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LibraryEntry {
    pub id: &'static str,
    pub name: &'static str,
    pub text: &'static str,
}

const fn entry(id: &'static str, name: &'static str, text: &'static str) -> LibraryEntry {
    LibraryEntry { id, name, text }
}

static CSPM: [LibraryEntry; 4] = [
    entry("cloud-accounts", "Cloud Accounts", "Monitor your cloud account connections and status"),
    entry(
        "cloud-account-risk",
        "Cloud Account Risk Assessment",
        "Track security risks across your cloud infrastructure",
    ),
    entry("compliance-status", "Compliance Status", "Monitor compliance with security standards"),
    entry("security-score", "Security Score", "Overall security posture rating"),
];

static CWPP: [LibraryEntry; 4] = [
    entry(
        "top-5-namespace",
        "Top 5 Namespace Specific Alerts",
        "Critical alerts by Kubernetes namespace",
    ),
    entry("workload-alerts", "Workload Alerts", "Security alerts for running workloads"),
    entry("container-security", "Container Security", "Security status of container deployments"),
    entry("runtime-protection", "Runtime Protection", "Real-time threat detection and response"),
];

static IMAGE: [LibraryEntry; 4] = [
    entry("image-risk", "Image Risk Assessment", "Vulnerability assessment for container images"),
    entry("image-security", "Image Security Issues", "Security issues found in container images"),
    entry("registry-scan", "Registry Scan Results", "Latest scan results from image registry"),
    entry("malware-detection", "Malware Detection", "Malware threats detected in images"),
];

static TICKET: [LibraryEntry; 4] = [
    entry("ticket-status", "Ticket Status", "Current status of security tickets"),
    entry("ticket-priority", "Ticket Priority", "Priority distribution of open tickets"),
    entry("sla-compliance", "SLA Compliance", "Ticket resolution SLA performance"),
    entry("escalation-queue", "Escalation Queue", "Tickets requiring escalation"),
];

pub fn library_entries(tab: LibraryTab) -> &'static [LibraryEntry] {
    match tab {
        LibraryTab::Cspm => &CSPM,
        LibraryTab::Cwpp => &CWPP,
        LibraryTab::Image => &IMAGE,
        LibraryTab::Ticket => &TICKET,
    }
}

/// Look an entry up across every tab
pub fn find_library_entry(id: &str) -> Option<&'static LibraryEntry> {
    LibraryTab::ALL
        .into_iter()
        .flat_map(library_entries)
        .find(|e| e.id == id)
}
