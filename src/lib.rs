pub mod ai;
pub mod analysis;
pub mod cli;
pub mod config;
pub mod infrastructure;
pub mod models;
pub mod storage;
