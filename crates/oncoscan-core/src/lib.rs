//! oncoscan-core
//!
//! Pure domain types for case intake: the editable case draft, the
//! validated submission, the prediction service's response contract, and
//! the route and message conventions shared by every front end.
//! No network dependency — this is the shared vocabulary of the system.

pub mod error;
pub mod messages;
pub mod models;
pub mod routes;
