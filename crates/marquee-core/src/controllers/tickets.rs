use axum::{Router, extract::State, response::Html, routing::get};

use crate::catalog;
use crate::controllers::AppState;
use crate::error::AppError;
use crate::templates::names;
use crate::views::{EditTicketPage, TicketsPage};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/Tickets", get(list_tickets))
        .route("/EditTicket", get(edit_ticket))
}

/// Ticket list with the showtime and customer dropdowns for the inline form.
async fn list_tickets(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (ticket, (showtime, customer)) = tokio::try_join!(
        catalog::tickets(&*state.db),
        catalog::edit_ticket_support(&*state.db),
    )?;
    state.render(
        names::TICKETS,
        &TicketsPage {
            ticket,
            showtime,
            customer,
        },
    )
}

async fn edit_ticket(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let (movie_list, customer_list) = catalog::edit_ticket_support(&*state.db).await?;
    state.render(
        names::EDIT_TICKET,
        &EditTicketPage {
            movie_list,
            customer_list,
        },
    )
}
