use axum::{Router, extract::State, response::Html, routing::get};

use crate::catalog;
use crate::controllers::AppState;
use crate::error::AppError;
use crate::templates::names;
use crate::views::MoviesPage;

pub fn routes() -> Router<AppState> {
    Router::new().route("/Movies", get(list_movies))
}

/// All movies by title.
async fn list_movies(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let movie = catalog::movies(&*state.db).await?;
    state.render(names::MOVIES, &MoviesPage { movie })
}
