use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct FavouriteDto {
    pub id: i32,
    pub user_id: i32,
    pub url: Option<String>,
    pub character_id: Option<i32>,
    pub planet_id: Option<i32>,
    pub vehicle_id: Option<i32>,
}

#[derive(Serialize, Deserialize, ToSchema)]
pub struct FavouritesDto {
    pub msg: String,
    pub favourite: Vec<FavouriteDto>,
}

#[derive(Clone, Debug, Default, Serialize, Deserialize, ToSchema)]
pub struct NewFavouriteDto {
    #[serde(default)]
    pub url: Option<String>,
}
