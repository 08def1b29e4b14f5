pub mod app;
pub mod config;
pub mod gateway;
pub mod models;
pub mod probe;
pub mod report;
pub mod util;
