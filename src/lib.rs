pub mod api;
pub mod config;
pub mod forms;
pub mod search;
pub mod state;
pub mod views;
