//! The fixed set of read queries behind every page.
//!
//! Each entry is a sea-query `SelectStatement` with a declared sort order.
//! Statements are rendered for the connection's backend and executed with
//! bound values, so literals such as the label separator never end up
//! spliced into SQL text.

use sea_orm::sea_query::{Alias, Expr, Func, Order, Query, SelectStatement, SimpleExpr};
use sea_orm::{ConnectionTrait, DbBackend, DbErr};

use crate::db;
use crate::models::{Customer, Movie, Screen, ShowtimeOption, ShowtimeRow, TicketRow};
use crate::schema::{Customers, Movies, Screens, Showtimes, Tickets};

/// Separator between a movie title and its date/time in showtime labels.
pub const LABEL_SEPARATOR: &str = " - ";

/// Movies, title ascending. Also the movie dropdown on the showtime form.
pub fn movies_query() -> SelectStatement {
    Query::select()
        .expr_as(Expr::col((Movies::Table, Movies::MovieId)), Alias::new("movie_id"))
        .expr_as(Expr::col((Movies::Table, Movies::Title)), Alias::new("title"))
        .expr_as(Expr::col((Movies::Table, Movies::Genre)), Alias::new("genre"))
        .expr_as(Expr::col((Movies::Table, Movies::Duration)), Alias::new("duration"))
        .from(Movies::Table)
        .order_by((Movies::Table, Movies::Title), Order::Asc)
        .to_owned()
}

/// Screens, seating capacity descending.
pub fn screens_query() -> SelectStatement {
    screen_columns()
        .order_by((Screens::Table, Screens::SeatingCapacity), Order::Desc)
        .to_owned()
}

/// Screen dropdown, screen id ascending.
pub fn screen_options_query() -> SelectStatement {
    screen_columns()
        .order_by((Screens::Table, Screens::ScreenId), Order::Asc)
        .to_owned()
}

/// Customers, name ascending. Also the customer dropdown on the ticket form.
pub fn customers_query() -> SelectStatement {
    Query::select()
        .expr_as(
            Expr::col((Customers::Table, Customers::CustomerId)),
            Alias::new("customer_id"),
        )
        .expr_as(Expr::col((Customers::Table, Customers::Name)), Alias::new("name"))
        .expr_as(Expr::col((Customers::Table, Customers::Email)), Alias::new("email"))
        .from(Customers::Table)
        .order_by((Customers::Table, Customers::Name), Order::Asc)
        .to_owned()
}

/// Showtimes joined with Movies and Screens, by date then start time.
pub fn showtimes_query(backend: DbBackend) -> SelectStatement {
    Query::select()
        .expr_as(
            Expr::col((Showtimes::Table, Showtimes::ShowtimeId)),
            Alias::new("showtime_id"),
        )
        .expr_as(
            as_text(backend, Expr::col((Showtimes::Table, Showtimes::ShowDate))),
            Alias::new("show_date"),
        )
        .expr_as(
            as_text(backend, Expr::col((Showtimes::Table, Showtimes::StartTime))),
            Alias::new("start_time"),
        )
        .expr_as(Expr::col((Movies::Table, Movies::Title)), Alias::new("movie_title"))
        .expr_as(
            Expr::col((Screens::Table, Screens::ScreenNumber)),
            Alias::new("screen_number"),
        )
        .from(Showtimes::Table)
        .inner_join(
            Movies::Table,
            Expr::col((Showtimes::Table, Showtimes::MovieId))
                .equals((Movies::Table, Movies::MovieId)),
        )
        .inner_join(
            Screens::Table,
            Expr::col((Showtimes::Table, Showtimes::ScreenId))
                .equals((Screens::Table, Screens::ScreenId)),
        )
        .order_by((Showtimes::Table, Showtimes::ShowDate), Order::Asc)
        .order_by((Showtimes::Table, Showtimes::StartTime), Order::Asc)
        .to_owned()
}

/// Tickets joined with Showtimes, Movies and Customers.
///
/// Ordered by customer name ascending, newest purchase first within a customer.
pub fn tickets_query(backend: DbBackend) -> SelectStatement {
    Query::select()
        .expr_as(
            Expr::col((Tickets::Table, Tickets::TicketId)),
            Alias::new("ticket_id"),
        )
        .expr_as(
            as_text(backend, Expr::col((Tickets::Table, Tickets::PurchaseDate))),
            Alias::new("purchase_date"),
        )
        .expr_as(
            price_text(backend, Expr::col((Tickets::Table, Tickets::TicketPrice))),
            Alias::new("ticket_price"),
        )
        .expr_as(showtime_label(), Alias::new("showtime_label"))
        .expr_as(
            Expr::col((Customers::Table, Customers::Name)),
            Alias::new("customer_name"),
        )
        .from(Tickets::Table)
        .inner_join(
            Showtimes::Table,
            Expr::col((Tickets::Table, Tickets::ShowtimeId))
                .equals((Showtimes::Table, Showtimes::ShowtimeId)),
        )
        .inner_join(
            Movies::Table,
            Expr::col((Showtimes::Table, Showtimes::MovieId))
                .equals((Movies::Table, Movies::MovieId)),
        )
        .inner_join(
            Customers::Table,
            Expr::col((Tickets::Table, Tickets::CustomerId))
                .equals((Customers::Table, Customers::CustomerId)),
        )
        .order_by((Customers::Table, Customers::Name), Order::Asc)
        .order_by((Tickets::Table, Tickets::PurchaseDate), Order::Desc)
        .to_owned()
}

/// Showtime dropdown for the ticket form: id plus label.
pub fn showtime_options_query() -> SelectStatement {
    Query::select()
        .expr_as(
            Expr::col((Showtimes::Table, Showtimes::ShowtimeId)),
            Alias::new("showtime_id"),
        )
        .expr_as(showtime_label(), Alias::new("showtime_label"))
        .from(Showtimes::Table)
        .inner_join(
            Movies::Table,
            Expr::col((Showtimes::Table, Showtimes::MovieId))
                .equals((Movies::Table, Movies::MovieId)),
        )
        .order_by((Showtimes::Table, Showtimes::ShowDate), Order::Asc)
        .order_by(Alias::new("showtime_label"), Order::Asc)
        .order_by((Showtimes::Table, Showtimes::StartTime), Order::Asc)
        .to_owned()
}

// ── Fetchers ──

pub async fn movies<C: ConnectionTrait>(db: &C) -> Result<Vec<Movie>, DbErr> {
    let backend = db.get_database_backend();
    db::query(db, backend.build(&movies_query())).await
}

pub async fn screens<C: ConnectionTrait>(db: &C) -> Result<Vec<Screen>, DbErr> {
    let backend = db.get_database_backend();
    db::query(db, backend.build(&screens_query())).await
}

pub async fn screen_options<C: ConnectionTrait>(db: &C) -> Result<Vec<Screen>, DbErr> {
    let backend = db.get_database_backend();
    db::query(db, backend.build(&screen_options_query())).await
}

pub async fn customers<C: ConnectionTrait>(db: &C) -> Result<Vec<Customer>, DbErr> {
    let backend = db.get_database_backend();
    db::query(db, backend.build(&customers_query())).await
}

pub async fn showtimes<C: ConnectionTrait>(db: &C) -> Result<Vec<ShowtimeRow>, DbErr> {
    let backend = db.get_database_backend();
    db::query(db, backend.build(&showtimes_query(backend))).await
}

pub async fn tickets<C: ConnectionTrait>(db: &C) -> Result<Vec<TicketRow>, DbErr> {
    let backend = db.get_database_backend();
    db::query(db, backend.build(&tickets_query(backend))).await
}

pub async fn showtime_options<C: ConnectionTrait>(db: &C) -> Result<Vec<ShowtimeOption>, DbErr> {
    let backend = db.get_database_backend();
    db::query(db, backend.build(&showtime_options_query())).await
}

/// Reference lists for the showtime form: every movie and every screen.
pub async fn edit_showtime_support<C: ConnectionTrait>(
    db: &C,
) -> Result<(Vec<Movie>, Vec<Screen>), DbErr> {
    tokio::try_join!(movies(db), screen_options(db))
}

/// Reference lists for the ticket form: every showtime label and every customer.
pub async fn edit_ticket_support<C: ConnectionTrait>(
    db: &C,
) -> Result<(Vec<ShowtimeOption>, Vec<Customer>), DbErr> {
    tokio::try_join!(showtime_options(db), customers(db))
}

// ── Expression helpers ──

fn screen_columns() -> SelectStatement {
    Query::select()
        .expr_as(
            Expr::col((Screens::Table, Screens::ScreenId)),
            Alias::new("screen_id"),
        )
        .expr_as(
            Expr::col((Screens::Table, Screens::ScreenNumber)),
            Alias::new("screen_number"),
        )
        .expr_as(
            Expr::col((Screens::Table, Screens::SeatingCapacity)),
            Alias::new("seating_capacity"),
        )
        .from(Screens::Table)
        .to_owned()
}

/// `CONCAT(title, ' - ', showDate, ' ', startTime)` with both literals bound.
fn showtime_label() -> SimpleExpr {
    Func::cust(Alias::new("CONCAT"))
        .args([
            SimpleExpr::from(Expr::col((Movies::Table, Movies::Title))),
            Expr::val(LABEL_SEPARATOR).into(),
            Expr::col((Showtimes::Table, Showtimes::ShowDate)).into(),
            Expr::val(" ").into(),
            Expr::col((Showtimes::Table, Showtimes::StartTime)).into(),
        ])
        .into()
}

/// Render a date, time or decimal column as display text.
///
/// MySQL only accepts `CHAR` as a string cast target; the others take `TEXT`.
fn as_text(backend: DbBackend, expr: Expr) -> SimpleExpr {
    let target = match backend {
        DbBackend::MySql => "CHAR",
        DbBackend::Postgres | DbBackend::Sqlite => "TEXT",
    };
    Func::cast_as(expr, Alias::new(target)).into()
}

/// Render a price with exactly two decimals.
///
/// SQLite keeps `DECIMAL(6,2)` values as REAL, so it formats explicitly;
/// the other backends already cast a fixed-scale decimal to `12.50`.
fn price_text(backend: DbBackend, expr: Expr) -> SimpleExpr {
    match backend {
        DbBackend::Sqlite => Func::cust(Alias::new("printf"))
            .args([Expr::val("%.2f").into(), SimpleExpr::from(expr)])
            .into(),
        DbBackend::MySql | DbBackend::Postgres => as_text(backend, expr),
    }
}
