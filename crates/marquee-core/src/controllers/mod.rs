use std::sync::Arc;

use axum::response::Html;
use sea_orm::DatabaseConnection;
use serde::Serialize;

use crate::error::AppError;
use crate::templates::Templates;
use crate::views;

/// Shared application state available in all handlers.
#[derive(Clone)]
pub struct AppState {
    pub db: Arc<DatabaseConnection>,
    pub templates: Templates,
}

impl AppState {
    /// Render a page from its view model.
    pub fn render<T: Serialize>(&self, template: &str, page: &T) -> Result<Html<String>, AppError> {
        let context = views::context(page)?;
        Ok(Html(self.templates.render(template, &context)?))
    }
}

pub mod customers;
pub mod home;
pub mod movies;
pub mod screens;
pub mod showtimes;
pub mod tickets;
