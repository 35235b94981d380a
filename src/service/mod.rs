//! Business logic services.
//!
//! Services coordinate repositories and enforce the rules that span them:
//! credential checks and uniqueness at registration, create-or-update on
//! game-data submission, and the filtered/sorted leaderboard reads.

pub mod auth;
pub mod profile;
pub mod ranking;
