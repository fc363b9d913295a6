// HTTP backend layer - request/response mapping for the extraction service

pub mod client;
pub mod config;
mod wire;

pub use client::HttpBackendClient;
pub use config::BackendConfig;
