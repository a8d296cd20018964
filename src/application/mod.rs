/// Bearer token handling
pub mod auth;
/// Client implementing the account and market services
pub mod client;
/// Application configuration module
pub mod config;
/// Service interfaces
pub mod interfaces;
