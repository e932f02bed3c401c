pub mod app;
pub mod components;
pub mod domain;
pub mod infrastructure;
pub mod panel;
pub mod terminal;
pub mod theme;
