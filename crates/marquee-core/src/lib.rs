pub mod app;
pub mod catalog;
pub mod config;
pub mod controllers;
pub mod db;
pub mod error;
pub mod logging;
pub mod migrations;
pub mod models;
pub mod routing;
pub mod schema;
pub mod templates;
pub mod testing;
pub mod views;

pub use app::App;
pub use config::Config;
pub use error::{AppError, FAILURE_MESSAGE};
pub use templates::Templates;
pub use testing::{TestApp, TestClient, TestResponse};
