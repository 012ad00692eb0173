//! Data gateway: FTC Events API client and its typed response models.

pub mod client;
pub mod models;

pub use client::{ApiError, EventsClient};
