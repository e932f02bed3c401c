pub mod action;
pub mod cli;
pub mod command;
pub mod decoder;
pub mod input;
pub mod logging;
pub mod r#loop;
pub mod reducer;
pub mod settings;
pub mod state;
pub mod ui;
