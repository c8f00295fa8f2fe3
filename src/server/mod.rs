//! Marketplace API backend.
//!
//! Publishers list websites, admins review them, and advertisers buy placements or send ad
//! requests. Listings that share a normalized URL across publishers are held in price
//! conflict groups until an admin picks a winner.
//!
//! Requests enter through `router`, which checks nothing itself: each handler in
//! `controller/` resolves the session user with `middleware::auth::AuthGuard`, turns DTOs
//! into domain params from `model/` and calls a service. Services in `service/` own the
//! business rules and transactions; repositories in `data/` only run queries and return
//! SeaORM models, which services convert before handing them back up.
//!
//! `scheduler/` runs the periodic conflict reconciliation sweep, `startup` builds the
//! database, session layer and OAuth client, and `config` reads the environment.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod middleware;
pub mod model;
pub mod router;
pub mod scheduler;
pub mod service;
pub mod startup;
pub mod state;
pub mod util;
