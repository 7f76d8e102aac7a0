pub mod api;
pub mod cli;
pub mod config;
pub mod db;
pub mod errors;
pub mod models;
pub mod notify;
pub mod stats;
pub mod utils;
pub mod validate;
