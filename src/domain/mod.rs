// Domain layer - Dashboard records, seed data and render models
pub mod catalog;
pub mod category;
pub mod dashboard;
pub mod seed;
pub mod visual;
pub mod widget;
