//! View models handed to the templates, one per page.
//!
//! Field names serialize to the keys each template reads (`movie`,
//! `movieList`, `customerList`, ...). The ticket pages reuse the generic
//! keys: `showtime`/`customer` on the list page and `movieList` for the
//! showtime dropdown on the edit page.

use serde::Serialize;
use tera::Context;

use crate::models::{Customer, Movie, Screen, ShowtimeOption, ShowtimeRow, TicketRow};

#[derive(Debug, Serialize)]
pub struct MoviesPage {
    pub movie: Vec<Movie>,
}

#[derive(Debug, Serialize)]
pub struct ScreensPage {
    pub screen: Vec<Screen>,
}

#[derive(Debug, Serialize)]
pub struct CustomersPage {
    pub customer: Vec<Customer>,
}

/// Showtime list plus the dropdown lists for its inline edit form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowtimesPage {
    pub showtime: Vec<ShowtimeRow>,
    pub movie_list: Vec<Movie>,
    pub screen_list: Vec<Screen>,
}

/// Ticket list plus the dropdown lists for its inline edit form.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketsPage {
    pub ticket: Vec<TicketRow>,
    pub showtime: Vec<ShowtimeOption>,
    pub customer: Vec<Customer>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditShowtimePage {
    pub movie_list: Vec<Movie>,
    pub screen_list: Vec<Screen>,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EditTicketPage {
    /// Showtime choices, labelled with their movie title.
    pub movie_list: Vec<ShowtimeOption>,
    pub customer_list: Vec<Customer>,
}

/// Convert a view model into a template context.
pub fn context<T: Serialize>(page: &T) -> Result<Context, tera::Error> {
    Context::from_serialize(page)
}
