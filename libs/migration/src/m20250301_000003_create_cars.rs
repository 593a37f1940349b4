use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Cars::Table)
                    .if_not_exists()
                    .col(pk_uuid(Cars::Id))
                    .col(string_len(Cars::Model, 100))
                    .col(string_len(Cars::Color, 50))
                    .col(integer(Cars::Year))
                    .col(double(Cars::ValuePerDay))
                    .col(integer(Cars::NumberOfPassengers))
                    .col(json_binary(Cars::Accessories).default(Expr::cust("'[]'::jsonb")))
                    .col(
                        timestamp_with_time_zone(Cars::CreatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        timestamp_with_time_zone(Cars::UpdatedAt)
                            .default(Expr::current_timestamp()),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_cars_created_at")
                    .table(Cars::Table)
                    .col(Cars::CreatedAt)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Cars::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Cars {
    Table,
    Id,
    Model,
    Color,
    Year,
    ValuePerDay,
    NumberOfPassengers,
    Accessories,
    CreatedAt,
    UpdatedAt,
}
