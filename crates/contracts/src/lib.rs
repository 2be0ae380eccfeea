//! Shared domain types for the routing demo.
//!
//! The only entity in this application is the photo route identifier;
//! it lives here so the frontend resolves route params through one
//! validated type instead of raw strings.

pub mod photo;

pub use photo::PhotoId;
