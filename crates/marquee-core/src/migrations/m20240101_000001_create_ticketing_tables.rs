use sea_orm_migration::prelude::*;

use crate::schema::{Customers, Movies, Screens, Showtimes, Tickets};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // ── Movies ──
        manager
            .create_table(
                Table::create()
                    .table(Movies::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Movies::MovieId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Movies::Title).string_len(145).not_null())
                    .col(ColumnDef::new(Movies::Genre).string_len(45).not_null())
                    .col(ColumnDef::new(Movies::Duration).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // ── Screens ──
        manager
            .create_table(
                Table::create()
                    .table(Screens::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Screens::ScreenId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Screens::ScreenNumber)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Screens::SeatingCapacity).integer().not_null())
                    .to_owned(),
            )
            .await?;

        // ── Customers ──
        manager
            .create_table(
                Table::create()
                    .table(Customers::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Customers::CustomerId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Customers::Name).string_len(145).not_null())
                    .col(
                        ColumnDef::new(Customers::Email)
                            .string_len(145)
                            .not_null()
                            .unique_key(),
                    )
                    .to_owned(),
            )
            .await?;

        // ── Showtimes (Movie × Screen) ──
        manager
            .create_table(
                Table::create()
                    .table(Showtimes::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Showtimes::ShowtimeId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Showtimes::ShowDate).date().not_null())
                    .col(ColumnDef::new(Showtimes::StartTime).time().not_null())
                    .col(ColumnDef::new(Showtimes::MovieId).integer().not_null())
                    .col(ColumnDef::new(Showtimes::ScreenId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_showtimes_movie")
                            .from(Showtimes::Table, Showtimes::MovieId)
                            .to(Movies::Table, Movies::MovieId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_showtimes_screen")
                            .from(Showtimes::Table, Showtimes::ScreenId)
                            .to(Screens::Table, Screens::ScreenId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // ── Tickets (Showtime × Customer) ──
        manager
            .create_table(
                Table::create()
                    .table(Tickets::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Tickets::TicketId)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Tickets::PurchaseDate).date().not_null())
                    .col(
                        ColumnDef::new(Tickets::TicketPrice)
                            .decimal_len(6, 2)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Tickets::ShowtimeId).integer().not_null())
                    .col(ColumnDef::new(Tickets::CustomerId).integer().not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_showtime")
                            .from(Tickets::Table, Tickets::ShowtimeId)
                            .to(Showtimes::Table, Showtimes::ShowtimeId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_tickets_customer")
                            .from(Tickets::Table, Tickets::CustomerId)
                            .to(Customers::Table, Customers::CustomerId)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Tickets::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Showtimes::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Customers::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Screens::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Movies::Table).to_owned())
            .await?;
        Ok(())
    }
}
