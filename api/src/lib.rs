//! Client for the shop's categories service.
//!
//! Every response of the service is wrapped in an [`Envelope`]; the client
//! unwraps it and hands back typed values or an [`ApiError`].

pub mod client;
pub mod config;
pub mod error;
pub mod models;

pub use client::CategoriesClient;
pub use config::ApiConfig;
pub use error::ApiError;
pub use models::{Category, CategoryChanges, CategoryId, Envelope, Listing, NewCategory};
