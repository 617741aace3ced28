// ABOUTME: Notification dispatch for registration lifecycle events
// ABOUTME: Notifier trait with a tracing-backed implementation; delivery is fire-and-forget
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

//! Notification dispatch
//!
//! Registrations trigger a welcome message on creation. Dispatch is
//! fire-and-forget: the lifecycle engine never inspects the outcome, and a
//! delivery failure never affects the persisted registration.

use anyhow::Result;
use async_trait::async_trait;
use tracing::info;

/// Welcome-message content and rendering
pub mod welcome;

pub use welcome::WelcomeMessage;

/// Outbound notification collaborator
///
/// Implementations deliver the message through whatever transport backs the
/// deployment. Callers dispatch on a detached task and discard the result.
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Deliver a welcome message to its recipient
    async fn send(&self, message: &WelcomeMessage) -> Result<()>;
}

/// Notifier that writes the rendered message to the structured log
///
/// Stands in for a mail transport in development and single-node deployments.
#[derive(Debug, Clone, Copy, Default)]
pub struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &WelcomeMessage) -> Result<()> {
        info!(
            to = %format!("{} <{}>", message.to_name, message.to_email),
            subject = %message.subject,
            template = %message.template,
            plan = %message.plan_title,
            end_date = %message.end_date,
            monthly_price = %message.monthly_price,
            "dispatching welcome notification"
        );
        Ok(())
    }
}
