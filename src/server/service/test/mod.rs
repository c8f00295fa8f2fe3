mod ad_request;
mod price_conflict;
mod user;
mod website;
mod wishlist;
