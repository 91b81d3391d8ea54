// Shared infrastructure: configuration and data-source fetching.

pub mod config;
pub mod fetch;
