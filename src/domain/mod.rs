pub mod launcher;
pub mod matcher;
pub mod models;
