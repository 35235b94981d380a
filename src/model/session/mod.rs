//! Session data models.
//!
//! Type-safe wrappers over the values gamestats keeps in the cookie
//! session. Only the acting user's id is stored; everything else is looked
//! up per request.

pub mod user;
