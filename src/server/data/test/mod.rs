mod price_conflict_group;
mod user;
mod website;
mod wishlist;
