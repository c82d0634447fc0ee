pub mod app;
pub mod components;
pub mod design_system;
pub mod views;

pub use app::DashboardApp;
