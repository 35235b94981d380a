//! Self-hosted leaderboard for a mobile strategy game.
//!
//! Users register an account, link their in-game character through the game's
//! third-party gateway, and browse player and alliance power rankings. All
//! state lives in memory; nothing survives a process restart.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod gateway;
pub mod model;
pub mod router;
pub mod service;
pub mod startup;
