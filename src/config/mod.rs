// ABOUTME: Configuration management for the GymPoint registration server
// ABOUTME: Environment-driven server settings, no config files
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

//! Configuration module
//!
//! Centralized, environment-only configuration for the registration server.

/// Environment and server configuration
pub mod environment;

pub use environment::ServerConfig;
