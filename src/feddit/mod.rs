//! Client for the upstream Feddit discussion-forum API.

pub mod cache;
pub mod client;
pub mod errors;
pub mod json;
pub mod locks;
pub mod models;

pub use client::FedditApi;
