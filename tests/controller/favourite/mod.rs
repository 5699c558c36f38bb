mod add_favourite;
mod get_favourites;
mod remove_favourite;
