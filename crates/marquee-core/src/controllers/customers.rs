use axum::{Router, extract::State, response::Html, routing::get};
use tera::Context;

use crate::catalog;
use crate::controllers::AppState;
use crate::error::AppError;
use crate::templates::names;
use crate::views::CustomersPage;

pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/Customers", get(list_customers))
        .route("/EditCustomer", get(edit_customer))
}

async fn list_customers(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let customer = catalog::customers(&*state.db).await?;
    state.render(names::CUSTOMERS, &CustomersPage { customer })
}

async fn edit_customer(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    Ok(Html(state.templates.render(names::EDIT_CUSTOMER, &Context::new())?))
}
