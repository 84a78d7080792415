//! Row shapes returned by the query catalog.
//!
//! Each struct is decoded straight from a catalog statement. Field names
//! match the column aliases the catalog projects; serialized names are the
//! camelCase keys the templates read.

use sea_orm::FromQueryResult;
use serde::Serialize;

/// A film on the schedule.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Movie {
    pub movie_id: i32,
    pub title: String,
    pub genre: String,
    /// Running time in minutes.
    pub duration: i32,
}

/// An auditorium.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Screen {
    pub screen_id: i32,
    pub screen_number: i32,
    pub seating_capacity: i32,
}

#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Customer {
    pub customer_id: i32,
    pub name: String,
    pub email: String,
}

/// A showtime joined with its movie title and screen number.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowtimeRow {
    pub showtime_id: i32,
    pub show_date: String,
    pub start_time: String,
    pub movie_title: String,
    pub screen_number: i32,
}

/// A ticket with its showtime label and the buyer's name.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TicketRow {
    pub ticket_id: i32,
    pub purchase_date: String,
    pub ticket_price: String,
    /// `"<title> - <showDate> <startTime>"`
    pub showtime_label: String,
    pub customer_name: String,
}

/// Dropdown entry for picking a showtime on the ticket form.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ShowtimeOption {
    pub showtime_id: i32,
    pub showtime_label: String,
}
