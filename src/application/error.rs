// Errors raised at the input boundary, before the store is touched
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DashboardError {
    #[error("widget name must not be empty")]
    EmptyWidgetName,

    #[error("widget text must not be empty")]
    EmptyWidgetText,

    #[error("unknown library tab: {0}")]
    UnknownLibraryTab(String),
}
