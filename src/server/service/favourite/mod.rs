//! Favourite service layer.
//!
//! A favourite links a user to exactly one character, planet or vehicle. The target has
//! to exist when it is added; removing drops a single matching favourite, the oldest one
//! when duplicates exist.


use sea_orm::DatabaseConnection;

use crate::{
    model::{catalog::CatalogKind, favourite::FavouriteDto},
    server::{
        data::favourite::FavouriteRepository,
        error::{catalog::CatalogError, favourite::FavouriteError, Error},
        model::db::FavouriteModel,
        service::catalog::CatalogService,
    },
};

pub struct FavouriteService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> FavouriteService<'a> {
    /// Creates a new instance of [`FavouriteService`]
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Gets the favourites owned by a user ordered by ID
    pub async fn get_favourites(&self, user_id: i32) -> Result<Vec<FavouriteDto>, Error> {
        let favourites = FavouriteRepository::new(self.db)
            .get_by_user_id(user_id)
            .await?;

        Ok(favourites.into_iter().map(FavouriteDto::from).collect())
    }

    /// Adds a favourite of the `kind` entry with ID `target_id` for a user
    ///
    /// # Returns
    /// - `Ok(FavouriteDto)` - The created favourite
    /// - `Err(Error::CatalogError(CatalogError::NotFound))` - Target entry does not exist
    /// - `Err(Error::DbErr)` - Database operation failed
    pub async fn add_favourite(
        &self,
        user_id: i32,
        kind: CatalogKind,
        target_id: i32,
        url: Option<String>,
    ) -> Result<FavouriteDto, Error> {
        if !CatalogService::new(self.db).exists(kind, target_id).await? {
            return Err(CatalogError::NotFound {
                kind,
                id: target_id,
            }
            .into());
        }

        let favourite = FavouriteRepository::new(self.db)
            .create(user_id, kind, target_id, url)
            .await?;

        tracing::debug!(
            "User ID {} added favourite {} ID {}",
            user_id,
            kind,
            target_id
        );

        Ok(favourite.into())
    }

    /// Removes the oldest favourite a user holds for the `kind` entry with ID `target_id`
    ///
    /// # Returns
    /// - `Ok(())` - One favourite was removed
    /// - `Err(Error::FavouriteError(FavouriteError::NotFound))` - User has no such favourite
    pub async fn remove_favourite(
        &self,
        user_id: i32,
        kind: CatalogKind,
        target_id: i32,
    ) -> Result<(), Error> {
        let favourite_repo = FavouriteRepository::new(self.db);

        let Some(favourite) = favourite_repo.find_first(user_id, kind, target_id).await? else {
            return Err(FavouriteError::NotFound {
                user_id,
                kind,
                target_id,
            }
            .into());
        };

        // Another request may have deleted the same row since it was found
        if favourite_repo.delete(favourite.id).await?.rows_affected == 0 {
            return Err(FavouriteError::NotFound {
                user_id,
                kind,
                target_id,
            }
            .into());
        }

        tracing::debug!(
            "User ID {} removed favourite {} ID {}",
            user_id,
            kind,
            target_id
        );

        Ok(())
    }
}

impl From<FavouriteModel> for FavouriteDto {
    fn from(favourite: FavouriteModel) -> Self {
        Self {
            id: favourite.id,
            user_id: favourite.user_id,
            url: favourite.url,
            character_id: favourite.character_id,
            planet_id: favourite.planet_id,
            vehicle_id: favourite.vehicle_id,
        }
    }
}
