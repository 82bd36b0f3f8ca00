//! Filmdex domain core.
//!
//! Owns the film data model, request-body validation, the error taxonomy,
//! and the in-memory [`store::FilmStore`] collection. No HTTP concerns
//! live here; the `filmdex-api` crate maps [`error::CoreError`] values to
//! HTTP responses.

pub mod error;
pub mod film;
pub mod store;
pub mod types;
