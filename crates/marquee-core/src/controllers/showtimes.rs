use axum::{Router, extract::State, response::Html, routing::get};

use crate::catalog;
use crate::controllers::AppState;
use crate::error::AppError;
use crate::templates::names;
use crate::views::{EditShowtimePage, ShowtimesPage};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/Showtimes", get(list_showtimes))
        .route("/EditShowtime", get(edit_showtime))
}

/// Showtime list with the movie and screen dropdowns for the inline form.
///
/// The three queries are independent and run concurrently.
async fn list_showtimes(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (showtime, (movie_list, screen_list)) = tokio::try_join!(
        catalog::showtimes(&*state.db),
        catalog::edit_showtime_support(&*state.db),
    )?;
    state.render(
        names::SHOWTIMES,
        &ShowtimesPage {
            showtime,
            movie_list,
            screen_list,
        },
    )
}

/// Showtime form with complete movie and screen lists.
async fn edit_showtime(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (movie_list, screen_list) = catalog::edit_showtime_support(&*state.db).await?;
    state.render(
        names::EDIT_SHOWTIME,
        &EditShowtimePage {
            movie_list,
            screen_list,
        },
    )
}
