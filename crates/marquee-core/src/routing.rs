use axum::Router;

use crate::controllers::{AppState, customers, home, movies, screens, showtimes, tickets};

/// Build every page route.
///
/// All pages are unparameterized GETs; anything else falls through to the
/// static asset service installed by `App::router()`.
pub fn build_routes() -> Router<AppState> {
    Router::new()
        .merge(home::routes())
        .merge(movies::routes())
        .merge(screens::routes())
        .merge(customers::routes())
        .merge(showtimes::routes())
        .merge(tickets::routes())
}
