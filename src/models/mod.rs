// ABOUTME: Data models for the GymPoint registration domain
// ABOUTME: Member, Plan, and Registration definitions with write payloads
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

//! Data models for the registration domain
//!
//! Entities are plain value-style structs; persistence behavior lives in the
//! record store, not on the entities themselves.

/// Member entity (read-only in this service)
pub mod member;

/// Plan entity (read-only in this service)
pub mod plan;

/// Registration entity and its write payloads
pub mod registration;

pub use member::Member;
pub use plan::Plan;
pub use registration::{NewRegistration, Registration, RegistrationChanges};
