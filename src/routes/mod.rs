// ABOUTME: Route module organization for the GymPoint HTTP endpoints
// ABOUTME: Thin handlers per domain delegating to the service layer
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

//! Route module for the GymPoint registration server
//!
//! Each domain module contains only route definitions and thin handler
//! functions that delegate to the service layer.

/// Health check and system status routes
pub mod health;

/// Registration lifecycle routes
pub mod registrations;

pub use health::HealthRoutes;
pub use registrations::{CreateRegistrationRequest, RegistrationRoutes, UpdateRegistrationRequest};
