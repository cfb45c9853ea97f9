// Application layer - Store, selectors and use cases
pub mod dashboard_service;
pub mod dashboard_store;
pub mod dashboard_view;
pub mod error;
pub mod id_generator;
pub mod selectors;
