pub mod app;

pub use app::{AppAction, Command, PlannerApp};
