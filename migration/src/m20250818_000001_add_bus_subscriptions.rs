use sea_orm_migration::prelude::*;

#[derive(DeriveIden)]
enum BusSubscriptions {
    Table,
    Id,
    PaymentId,
    StudentId,
    Periodicity,
    StartDate,
    ExpirationDate,
    Zone,
    StopPoint,
    Notes,
    Status,
    Amount,
    CreatedAt,
}

#[derive(DeriveIden)]
enum Payments {
    Table,
    Id,
}

#[derive(DeriveIden)]
enum Students {
    Table,
    Id,
}

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(BusSubscriptions::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(BusSubscriptions::Id)
                            .big_integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        // One subscription per originating payment
                        ColumnDef::new(BusSubscriptions::PaymentId)
                            .big_integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(
                        ColumnDef::new(BusSubscriptions::StudentId)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BusSubscriptions::Periodicity)
                            .string()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BusSubscriptions::StartDate).date().not_null())
                    .col(
                        ColumnDef::new(BusSubscriptions::ExpirationDate)
                            .date()
                            .not_null(),
                    )
                    .col(ColumnDef::new(BusSubscriptions::Zone).string().not_null())
                    .col(ColumnDef::new(BusSubscriptions::StopPoint).string().not_null())
                    .col(ColumnDef::new(BusSubscriptions::Notes).string().null())
                    .col(
                        ColumnDef::new(BusSubscriptions::Status)
                            .string()
                            .not_null()
                            .default("ACTIF"),
                    )
                    .col(
                        ColumnDef::new(BusSubscriptions::Amount)
                            .big_integer()
                            .not_null(),
                    )
                    .col(
                        ColumnDef::new(BusSubscriptions::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bus_subscriptions_payment")
                            .from(BusSubscriptions::Table, BusSubscriptions::PaymentId)
                            .to(Payments::Table, Payments::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_bus_subscriptions_student")
                            .from(BusSubscriptions::Table, BusSubscriptions::StudentId)
                            .to(Students::Table, Students::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_bus_subscriptions_student_id")
                    .table(BusSubscriptions::Table)
                    .col(BusSubscriptions::StudentId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(BusSubscriptions::Table).to_owned())
            .await?;
        Ok(())
    }
}
