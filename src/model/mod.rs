//! Data models and type definitions.
//!
//! Wire DTOs, the shared application state, session data wrappers and the
//! bearer token registry live here. Stored records and their JSON shapes are
//! the same types; the API serializes everything camelCase.

pub mod alliance;
pub mod api;
pub mod app;
pub mod profile;
pub mod ranking;
pub mod session;
pub mod token;
pub mod user;
