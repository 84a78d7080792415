use axum::{Router, extract::State, response::Html, routing::get};
use tera::Context;

use crate::controllers::AppState;
use crate::error::AppError;
use crate::templates::names;

pub fn routes() -> Router<AppState> {
    Router::new().route("/", get(home))
}

async fn home(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.render(names::HOME, &Context::new())?))
}
