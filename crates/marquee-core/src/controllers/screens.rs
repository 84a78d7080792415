use axum::{Router, extract::State, response::Html, routing::get};
use tera::Context;

use crate::catalog;
use crate::controllers::AppState;
use crate::error::AppError;
use crate::templates::names;
use crate::views::ScreensPage;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/Screens", get(list_screens))
        .route("/EditScreen", get(edit_screen))
}

/// All screens, largest first.
async fn list_screens(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let screen = catalog::screens(&*state.db).await?;
    state.render(names::SCREENS, &ScreensPage { screen })
}

/// Blank screen form; the form has no reference lists to load.
async fn edit_screen(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.render(names::EDIT_SCREEN, &Context::new())?))
}
