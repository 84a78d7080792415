//! Identifiers for the ticketing tables.
//!
//! Table and column names follow the store's camelCase convention
//! (`Movies.movieID`, `Showtimes.showDate`, ...). They are shared by the
//! migration that creates the tables and the catalog that reads them.

use sea_orm::DeriveIden;

#[derive(DeriveIden, Clone, Copy)]
pub enum Movies {
    #[sea_orm(iden = "Movies")]
    Table,
    #[sea_orm(iden = "movieID")]
    MovieId,
    #[sea_orm(iden = "title")]
    Title,
    #[sea_orm(iden = "genre")]
    Genre,
    #[sea_orm(iden = "duration")]
    Duration,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Screens {
    #[sea_orm(iden = "Screens")]
    Table,
    #[sea_orm(iden = "screenID")]
    ScreenId,
    #[sea_orm(iden = "screenNumber")]
    ScreenNumber,
    #[sea_orm(iden = "seatingCapacity")]
    SeatingCapacity,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Customers {
    #[sea_orm(iden = "Customers")]
    Table,
    #[sea_orm(iden = "customerID")]
    CustomerId,
    #[sea_orm(iden = "name")]
    Name,
    #[sea_orm(iden = "email")]
    Email,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Showtimes {
    #[sea_orm(iden = "Showtimes")]
    Table,
    #[sea_orm(iden = "showtimeID")]
    ShowtimeId,
    #[sea_orm(iden = "showDate")]
    ShowDate,
    #[sea_orm(iden = "startTime")]
    StartTime,
    #[sea_orm(iden = "movieID")]
    MovieId,
    #[sea_orm(iden = "screenID")]
    ScreenId,
}

#[derive(DeriveIden, Clone, Copy)]
pub enum Tickets {
    #[sea_orm(iden = "Tickets")]
    Table,
    #[sea_orm(iden = "ticketID")]
    TicketId,
    #[sea_orm(iden = "purchaseDate")]
    PurchaseDate,
    #[sea_orm(iden = "ticketPrice")]
    TicketPrice,
    #[sea_orm(iden = "showtimeID")]
    ShowtimeId,
    #[sea_orm(iden = "customerID")]
    CustomerId,
}
