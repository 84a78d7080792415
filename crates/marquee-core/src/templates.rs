//! Page templates, embedded at compile time so the binary is self-contained.

use std::sync::Arc;

use tera::{Context, Tera};

const TPL_BASE: &str = include_str!("../templates/base.html");
const TPL_HOME: &str = include_str!("../templates/home.html");
const TPL_MOVIES: &str = include_str!("../templates/movies/movies.html");
const TPL_SCREENS: &str = include_str!("../templates/screens/screens.html");
const TPL_EDIT_SCREEN: &str = include_str!("../templates/screens/edit_screen.html");
const TPL_CUSTOMERS: &str = include_str!("../templates/customers/customers.html");
const TPL_EDIT_CUSTOMER: &str = include_str!("../templates/customers/edit_customer.html");
const TPL_SHOWTIMES: &str = include_str!("../templates/showtimes/showtimes.html");
const TPL_EDIT_SHOWTIME: &str = include_str!("../templates/showtimes/edit_showtime.html");
const TPL_EDIT_SHOWTIME_FORM: &str =
    include_str!("../templates/showtimes/edit_showtime_form.html");
const TPL_TICKETS: &str = include_str!("../templates/tickets/tickets.html");
const TPL_EDIT_TICKET: &str = include_str!("../templates/tickets/edit_ticket.html");
const TPL_EDIT_TICKET_FORM: &str = include_str!("../templates/tickets/edit_ticket_form.html");

/// Template names, one per page.
pub mod names {
    pub const HOME: &str = "home.html";
    pub const MOVIES: &str = "movies/movies.html";
    pub const SCREENS: &str = "screens/screens.html";
    pub const EDIT_SCREEN: &str = "screens/edit_screen.html";
    pub const CUSTOMERS: &str = "customers/customers.html";
    pub const EDIT_CUSTOMER: &str = "customers/edit_customer.html";
    pub const SHOWTIMES: &str = "showtimes/showtimes.html";
    pub const EDIT_SHOWTIME: &str = "showtimes/edit_showtime.html";
    pub const TICKETS: &str = "tickets/tickets.html";
    pub const EDIT_TICKET: &str = "tickets/edit_ticket.html";
}

/// Shared, immutable template set.
#[derive(Clone)]
pub struct Templates {
    tera: Arc<Tera>,
}

impl Templates {
    /// Load the embedded page templates.
    pub fn new() -> Result<Self, tera::Error> {
        Self::from_raw(&[
            ("base.html", TPL_BASE),
            // Partials shared by list pages and their edit pages
            ("showtimes/edit_showtime_form.html", TPL_EDIT_SHOWTIME_FORM),
            ("tickets/edit_ticket_form.html", TPL_EDIT_TICKET_FORM),
            (names::HOME, TPL_HOME),
            (names::MOVIES, TPL_MOVIES),
            (names::SCREENS, TPL_SCREENS),
            (names::EDIT_SCREEN, TPL_EDIT_SCREEN),
            (names::CUSTOMERS, TPL_CUSTOMERS),
            (names::EDIT_CUSTOMER, TPL_EDIT_CUSTOMER),
            (names::SHOWTIMES, TPL_SHOWTIMES),
            (names::EDIT_SHOWTIME, TPL_EDIT_SHOWTIME),
            (names::TICKETS, TPL_TICKETS),
            (names::EDIT_TICKET, TPL_EDIT_TICKET),
        ])
    }

    /// Build a template set from `(name, source)` pairs.
    pub fn from_raw(templates: &[(&str, &str)]) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        // Templates extend each other, so register them in one batch.
        tera.add_raw_templates(templates.iter().copied())?;
        Ok(Self {
            tera: Arc::new(tera),
        })
    }

    pub fn render(&self, name: &str, context: &Context) -> Result<String, tera::Error> {
        self.tera.render(name, context)
    }
}
