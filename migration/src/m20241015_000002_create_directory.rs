// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use crate::m20241015_000001_create_users::Users;
use sea_orm_migration::prelude::*;

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Profiles::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Profiles::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(
                        ColumnDef::new(Profiles::UserId)
                            .integer()
                            .not_null()
                            .unique_key(),
                    )
                    .col(ColumnDef::new(Profiles::Country).string_len(100).null())
                    .col(ColumnDef::new(Profiles::State).string_len(100).null())
                    .col(ColumnDef::new(Profiles::City).string_len(100).null())
                    .col(ColumnDef::new(Profiles::Address).text().null())
                    .col(ColumnDef::new(Profiles::CompanyEmail).string_len(254).null())
                    .col(ColumnDef::new(Profiles::CompanyPhone).string_len(20).null())
                    .col(ColumnDef::new(Profiles::CompanyWebsite).string_len(200).null())
                    .col(ColumnDef::new(Profiles::Description).text().null())
                    .col(ColumnDef::new(Profiles::Rating).double().null())
                    .col(
                        ColumnDef::new(Profiles::IsApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_profiles_user")
                            .from(Profiles::Table, Profiles::UserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Programs::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Programs::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Programs::ProfileId).integer().not_null())
                    .col(ColumnDef::new(Programs::Title).string_len(255).not_null())
                    .col(ColumnDef::new(Programs::Description).text().not_null())
                    .col(
                        ColumnDef::new(Programs::TargetAudience)
                            .string_len(255)
                            .not_null(),
                    )
                    .col(ColumnDef::new(Programs::StartDate).date().not_null())
                    .col(ColumnDef::new(Programs::EndDate).date().not_null())
                    .col(
                        ColumnDef::new(Programs::Funding)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .col(
                        ColumnDef::new(Programs::IsApproved)
                            .boolean()
                            .not_null()
                            .default(false),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_programs_profile")
                            .from(Programs::Table, Programs::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(SocialLinks::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(SocialLinks::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(SocialLinks::ProfileId).integer().not_null())
                    .col(ColumnDef::new(SocialLinks::Platform).string_len(50).not_null())
                    .col(ColumnDef::new(SocialLinks::Url).string_len(200).not_null())
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_social_links_profile")
                            .from(SocialLinks::Table, SocialLinks::ProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_table(
                Table::create()
                    .table(Ratings::Table)
                    .if_not_exists()
                    .col(
                        ColumnDef::new(Ratings::Id)
                            .integer()
                            .not_null()
                            .auto_increment()
                            .primary_key(),
                    )
                    .col(ColumnDef::new(Ratings::RatedUserId).integer().not_null())
                    .col(ColumnDef::new(Ratings::RatedProfileId).integer().not_null())
                    .col(ColumnDef::new(Ratings::RatedById).integer().not_null())
                    .col(ColumnDef::new(Ratings::Rating).integer().not_null())
                    .col(ColumnDef::new(Ratings::Comment).text().null())
                    .col(
                        ColumnDef::new(Ratings::CreatedAt)
                            .timestamp_with_time_zone()
                            .not_null()
                            .default(Expr::current_timestamp()),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ratings_rated_user")
                            .from(Ratings::Table, Ratings::RatedUserId)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ratings_rated_profile")
                            .from(Ratings::Table, Ratings::RatedProfileId)
                            .to(Profiles::Table, Profiles::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name("fk_ratings_rated_by")
                            .from(Ratings::Table, Ratings::RatedById)
                            .to(Users::Table, Users::Id)
                            .on_delete(ForeignKeyAction::Cascade),
                    )
                    .to_owned(),
            )
            .await?;

        // One rating per (rated_user, rated_by) pair
        manager
            .create_index(
                Index::create()
                    .name("idx_ratings_rated_user_rated_by")
                    .table(Ratings::Table)
                    .col(Ratings::RatedUserId)
                    .col(Ratings::RatedById)
                    .unique()
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_programs_profile")
                    .table(Programs::Table)
                    .col(Programs::ProfileId)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_profiles_is_approved")
                    .table(Profiles::Table)
                    .col(Profiles::IsApproved)
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Ratings::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(SocialLinks::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Programs::Table).to_owned())
            .await?;
        manager
            .drop_table(Table::drop().table(Profiles::Table).to_owned())
            .await
    }
}

#[derive(DeriveIden)]
enum Profiles {
    Table,
    Id,
    UserId,
    Country,
    State,
    City,
    Address,
    CompanyEmail,
    CompanyPhone,
    CompanyWebsite,
    Description,
    Rating,
    IsApproved,
}

#[derive(DeriveIden)]
enum Programs {
    Table,
    Id,
    ProfileId,
    Title,
    Description,
    TargetAudience,
    StartDate,
    EndDate,
    Funding,
    IsApproved,
}

#[derive(DeriveIden)]
enum SocialLinks {
    Table,
    Id,
    ProfileId,
    Platform,
    Url,
}

#[derive(DeriveIden)]
enum Ratings {
    Table,
    Id,
    RatedUserId,
    RatedProfileId,
    RatedById,
    Rating,
    Comment,
    CreatedAt,
}
