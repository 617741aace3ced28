// ABOUTME: Main library entry point for the GymPoint registration API
// ABOUTME: Provides the membership registration lifecycle engine and its HTTP surface
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

#![deny(unsafe_code)]

//! # GymPoint Registration Server
//!
//! A membership registration service for gyms. Members subscribe to
//! time-bounded plans; the server validates each request, derives the
//! subscription's end date and total price from the plan's duration and
//! monthly price, persists the registration, and sends a welcome
//! notification on creation.
//!
//! ## Architecture
//!
//! The server follows a modular architecture:
//! - **Models**: Plain value-style entities (members, plans, registrations)
//! - **Services**: The registration lifecycle engine (validation, term
//!   computation, orchestration)
//! - **Database plugins**: Record-store abstraction with a SQLite backend
//! - **Notifications**: Welcome-message dispatch on registration creation
//! - **Routes**: Thin axum handlers over the service layer
//!
//! ## Example Usage
//!
//! ```rust,no_run
//! use gympoint_server::config::environment::ServerConfig;
//!
//! fn main() -> anyhow::Result<()> {
//!     // Load configuration from the environment
//!     let config = ServerConfig::from_env()?;
//!
//!     println!("GymPoint server configured with port: HTTP={}", config.http_port);
//!
//!     Ok(())
//! }
//! ```

/// Configuration management and environment parsing
pub mod config;

/// SQLite-backed record store implementation
pub mod database;

/// Record-store abstraction layer with plugin support
pub mod database_plugins;

/// Unified error handling with standard error codes and HTTP responses
pub mod errors;

/// Production logging and structured output
pub mod logging;

/// Data models for members, plans, and registrations
pub mod models;

/// Welcome-notification dispatch on registration creation
pub mod notifications;

/// Shared server state injected into route handlers
pub mod resources;

/// HTTP routes for the registration API
pub mod routes;

/// Registration lifecycle engine: validation, term computation, orchestration
pub mod services;
