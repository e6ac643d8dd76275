//! # Spodemy Academy API Library
//!
//! Core functionality for the academy management service: domain models,
//! repositories, services, HTTP handlers and server wiring.

pub mod auth;
pub mod config;
pub mod db;
pub mod error;
pub mod handlers;
pub mod models;
pub mod repositories;
pub mod seeds;
pub mod server;
pub mod services;
pub mod telemetry;
pub use migration;
