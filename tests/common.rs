// ABOUTME: Shared test utilities and setup functions for integration tests
// ABOUTME: Provides in-memory database setup, seed helpers, and collaborator doubles
#![allow(dead_code, clippy::missing_errors_doc, clippy::missing_panics_doc)]
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

//! Shared test utilities for `gympoint_server`
//!
//! Common setup functions to reduce duplication across integration tests.

use std::str::FromStr;
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use chrono::NaiveDate;
use rust_decimal::Decimal;

use gympoint_server::{
    database_plugins::{factory::Database, DatabaseProvider},
    models::{Member, Plan},
    notifications::{Notifier, WelcomeMessage},
    services::{Clock, RegistrationService},
};

static INIT_LOGGER: Once = Once::new();

/// Initialize quiet logging for tests (call once per test process)
pub fn init_test_logging() {
    INIT_LOGGER.call_once(|| {
        let log_level = match std::env::var("TEST_LOG").as_deref() {
            Ok("TRACE") => tracing::Level::TRACE,
            Ok("DEBUG") => tracing::Level::DEBUG,
            Ok("INFO") => tracing::Level::INFO,
            _ => tracing::Level::WARN,
        };

        tracing_subscriber::fmt()
            .with_max_level(log_level)
            .with_test_writer()
            .init();
    });
}

/// Standard test database setup
pub async fn create_test_database() -> Result<Arc<Database>> {
    init_test_logging();
    let database = Arc::new(Database::new("sqlite::memory:").await?);
    Ok(database)
}

/// Insert a test member
pub async fn seed_member(database: &Database, name: &str, email: &str) -> Result<Member> {
    database.create_member(name, email).await
}

/// Insert a test plan
pub async fn seed_plan(
    database: &Database,
    title: &str,
    duration_months: u32,
    monthly_price: &str,
) -> Result<Plan> {
    database
        .create_plan(title, duration_months, Decimal::from_str(monthly_price)?)
        .await
}

/// Clock pinned to a fixed date for deterministic past-date validation
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The date every test clock is pinned to
pub fn test_today() -> NaiveDate {
    "2025-06-15".parse().unwrap()
}

/// Notifier double that records every message it is asked to deliver
#[derive(Default)]
pub struct CapturingNotifier {
    messages: Mutex<Vec<WelcomeMessage>>,
}

impl CapturingNotifier {
    pub fn sent(&self) -> Vec<WelcomeMessage> {
        self.messages.lock().unwrap().clone()
    }

    /// Wait until at least `count` messages arrive (dispatch is detached)
    pub async fn wait_for_messages(&self, count: usize) -> Vec<WelcomeMessage> {
        for _ in 0..100 {
            let sent = self.sent();
            if sent.len() >= count {
                return sent;
            }
            tokio::time::sleep(Duration::from_millis(10)).await;
        }
        panic!(
            "expected {count} notification(s), got {}",
            self.sent().len()
        );
    }
}

#[async_trait]
impl Notifier for CapturingNotifier {
    async fn send(&self, message: &WelcomeMessage) -> Result<()> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }
}

/// Notifier double whose delivery always fails
pub struct FailingNotifier;

#[async_trait]
impl Notifier for FailingNotifier {
    async fn send(&self, _message: &WelcomeMessage) -> Result<()> {
        anyhow::bail!("notification transport unavailable")
    }
}

/// Build a registration service over the given database with a pinned clock
/// and a capturing notifier
pub fn create_test_service(database: Arc<Database>) -> (RegistrationService, Arc<CapturingNotifier>) {
    let notifier = Arc::new(CapturingNotifier::default());
    let service = RegistrationService::new(
        database,
        Arc::clone(&notifier) as Arc<dyn Notifier>,
        Arc::new(FixedClock(test_today())),
    );
    (service, notifier)
}
