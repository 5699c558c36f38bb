use sea_orm_migration::{prelude::*, schema::*};

use crate::{
    m20240301_000001_create_user_table::User,
    m20240301_000002_create_character_table::Character,
    m20240301_000003_create_planet_table::Planet,
    m20240301_000004_create_vehicle_table::Vehicle,
};

static IDX_FAVOURITE_USER_ID: &str = "idx_favourite_user_id";
static FK_FAVOURITE_USER_ID: &str = "fk_favourite_user_id";
static FK_FAVOURITE_CHARACTER_ID: &str = "fk_favourite_character_id";
static FK_FAVOURITE_PLANET_ID: &str = "fk_favourite_planet_id";
static FK_FAVOURITE_VEHICLE_ID: &str = "fk_favourite_vehicle_id";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        // Foreign keys are declared with the table so the migration also runs on SQLite
        manager
            .create_table(
                Table::create()
                    .table(Favourite::Table)
                    .if_not_exists()
                    .col(pk_auto(Favourite::Id))
                    .col(integer(Favourite::UserId))
                    .col(string_null(Favourite::Url))
                    .col(integer_null(Favourite::CharacterId))
                    .col(integer_null(Favourite::PlanetId))
                    .col(integer_null(Favourite::VehicleId))
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVOURITE_USER_ID)
                            .from(Favourite::Table, Favourite::UserId)
                            .to(User::Table, User::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVOURITE_CHARACTER_ID)
                            .from(Favourite::Table, Favourite::CharacterId)
                            .to(Character::Table, Character::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVOURITE_PLANET_ID)
                            .from(Favourite::Table, Favourite::PlanetId)
                            .to(Planet::Table, Planet::Id),
                    )
                    .foreign_key(
                        ForeignKey::create()
                            .name(FK_FAVOURITE_VEHICLE_ID)
                            .from(Favourite::Table, Favourite::VehicleId)
                            .to(Vehicle::Table, Vehicle::Id),
                    )
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name(IDX_FAVOURITE_USER_ID)
                    .table(Favourite::Table)
                    .col(Favourite::UserId)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_FAVOURITE_USER_ID)
                    .table(Favourite::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Favourite::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
enum Favourite {
    Table,
    Id,
    UserId,
    Url,
    CharacterId,
    PlanetId,
    VehicleId,
}
