// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(AdminNotifications::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(AdminNotifications::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(AdminNotifications::Title)
                            .string_len(200)
                            .not_null(),
                    )
                    .col(ColumnDef::new(AdminNotifications::Message).text().not_null())
                    .col(
                        ColumnDef::new(AdminNotifications::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .col(
                        ColumnDef::new(AdminNotifications::IsRead)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_admin_notifications_is_read")
                    .table(AdminNotifications::Table)
                    .col(AdminNotifications::IsRead)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(AdminNotifications::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum AdminNotifications {
    Table,
    Id,
    Title,
    Message,
    CreatedAt,
    IsRead,
}
