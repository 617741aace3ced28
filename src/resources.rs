// ABOUTME: Shared server state constructed at startup and injected into routes
// ABOUTME: Bundles the record store, notifier, clock, and configuration
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

//! Shared server resources
//!
//! All collaborators are constructed once in `main` and passed down
//! explicitly; nothing in the core reaches for process-global state.

use std::sync::Arc;

use crate::config::ServerConfig;
use crate::database_plugins::factory::Database;
use crate::notifications::Notifier;
use crate::services::{Clock, RegistrationService};

/// Dependency bundle injected into route handlers as axum state
pub struct ServerResources {
    /// Server configuration
    pub config: ServerConfig,
    /// Record store handle
    pub database: Arc<Database>,
    /// Registration lifecycle engine wired to the store, notifier, and clock
    pub registrations: RegistrationService,
}

impl ServerResources {
    /// Assemble server resources from explicitly constructed collaborators
    #[must_use]
    pub fn new(
        config: ServerConfig,
        database: Arc<Database>,
        notifier: Arc<dyn Notifier>,
        clock: Arc<dyn Clock>,
    ) -> Self {
        let registrations = RegistrationService::new(Arc::clone(&database), notifier, clock);

        Self {
            config,
            database,
            registrations,
        }
    }
}
