use sea_orm::{
    ActiveModelTrait, ActiveValue, ColumnTrait, ConnectionTrait, DbErr, DeleteResult, EntityTrait,
    QueryFilter, QueryOrder,
};

use crate::model::catalog::CatalogKind;

pub struct FavouriteRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> FavouriteRepository<'a, C> {
    /// Creates a new instance of [`FavouriteRepository`]
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Creates a favourite of the `kind` entry with ID `target_id` for a user
    ///
    /// Only the foreign key matching `kind` is set; duplicates are allowed.
    pub async fn create(
        &self,
        user_id: i32,
        kind: CatalogKind,
        target_id: i32,
        url: Option<String>,
    ) -> Result<entity::favourite::Model, DbErr> {
        let mut favourite = entity::favourite::ActiveModel {
            user_id: ActiveValue::Set(user_id),
            url: ActiveValue::Set(url),
            character_id: ActiveValue::Set(None),
            planet_id: ActiveValue::Set(None),
            vehicle_id: ActiveValue::Set(None),
            ..Default::default()
        };

        match kind {
            CatalogKind::Character => favourite.character_id = ActiveValue::Set(Some(target_id)),
            CatalogKind::Planet => favourite.planet_id = ActiveValue::Set(Some(target_id)),
            CatalogKind::Vehicle => favourite.vehicle_id = ActiveValue::Set(Some(target_id)),
        }

        favourite.insert(self.db).await
    }

    /// Gets every favourite owned by a user ordered by ID
    pub async fn get_by_user_id(
        &self,
        user_id: i32,
    ) -> Result<Vec<entity::favourite::Model>, DbErr> {
        entity::prelude::Favourite::find()
            .filter(entity::favourite::Column::UserId.eq(user_id))
            .order_by_asc(entity::favourite::Column::Id)
            .all(self.db)
            .await
    }

    /// Finds the oldest favourite a user holds for the `kind` entry with ID `target_id`
    pub async fn find_first(
        &self,
        user_id: i32,
        kind: CatalogKind,
        target_id: i32,
    ) -> Result<Option<entity::favourite::Model>, DbErr> {
        entity::prelude::Favourite::find()
            .filter(entity::favourite::Column::UserId.eq(user_id))
            .filter(target_column(kind).eq(target_id))
            .order_by_asc(entity::favourite::Column::Id)
            .one(self.db)
            .await
    }

    /// Deletes a favourite
    ///
    /// Returns OK regardless of the favourite existing, to confirm the deletion result
    /// check the [`DeleteResult::rows_affected`] field.
    pub async fn delete(&self, favourite_id: i32) -> Result<DeleteResult, DbErr> {
        entity::prelude::Favourite::delete_by_id(favourite_id)
            .exec(self.db)
            .await
    }
}

fn target_column(kind: CatalogKind) -> entity::favourite::Column {
    match kind {
        CatalogKind::Character => entity::favourite::Column::CharacterId,
        CatalogKind::Planet => entity::favourite::Column::PlanetId,
        CatalogKind::Vehicle => entity::favourite::Column::VehicleId,
    }
}
