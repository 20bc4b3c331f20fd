//! Data model shared by the places frontend and host.

pub mod model;

pub use model::error::ModelError;
