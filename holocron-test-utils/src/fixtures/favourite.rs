use sea_orm::{ActiveValue, EntityTrait};

use crate::{error::TestError, model::FavouriteModel, TestContext};

impl TestContext {
    pub fn favourite<'a>(&'a self) -> FavouriteFixtures<'a> {
        FavouriteFixtures { setup: self }
    }
}

pub struct FavouriteFixtures<'a> {
    setup: &'a TestContext,
}

impl<'a> FavouriteFixtures<'a> {
    pub async fn insert_favourite_character(
        &self,
        user_id: i32,
        character_id: i32,
    ) -> Result<FavouriteModel, TestError> {
        self.insert(entity::favourite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            url: ActiveValue::Set(Some(format!("/characters/{}", character_id))),
            character_id: ActiveValue::Set(Some(character_id)),
            ..Default::default()
        })
        .await
    }

    pub async fn insert_favourite_planet(
        &self,
        user_id: i32,
        planet_id: i32,
    ) -> Result<FavouriteModel, TestError> {
        self.insert(entity::favourite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            url: ActiveValue::Set(Some(format!("/planets/{}", planet_id))),
            planet_id: ActiveValue::Set(Some(planet_id)),
            ..Default::default()
        })
        .await
    }

    pub async fn insert_favourite_vehicle(
        &self,
        user_id: i32,
        vehicle_id: i32,
    ) -> Result<FavouriteModel, TestError> {
        self.insert(entity::favourite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            url: ActiveValue::Set(Some(format!("/vehicles/{}", vehicle_id))),
            vehicle_id: ActiveValue::Set(Some(vehicle_id)),
            ..Default::default()
        })
        .await
    }

    async fn insert(
        &self,
        favourite: entity::favourite::ActiveModel,
    ) -> Result<FavouriteModel, TestError> {
        Ok(entity::prelude::Favourite::insert(favourite)
            .exec_with_returning(&self.setup.db)
            .await?)
    }
}
