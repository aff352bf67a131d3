//! Checkout advice for X01 darts: whether a remaining score can be taken
//! out in one visit, and which dart combinations do it.
//!
//! Everything here is a pure lookup over static tables. The scoring engine
//! never consults this crate; it exists for presentation layers that want
//! to show finishing suggestions next to a player's remaining score.

pub mod advisor;
pub mod tables;

pub use advisor::{checkout_routes, is_checkout_possible};
pub use tables::{CHECKOUT_ROUTES, IMPOSSIBLE_CHECKOUTS, MAX_CHECKOUT, routes_for};
