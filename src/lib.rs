pub mod cli;
pub mod config;
pub mod controllers;
pub mod error;
pub mod logging;
pub mod models;
