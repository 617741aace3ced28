// ABOUTME: Clock abstraction providing the current date for start-date validation
// ABOUTME: SystemClock reads UTC wall-clock; tests substitute a pinned date
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

use chrono::{NaiveDate, Utc};

/// Source of "today" for date validation
///
/// The past-date rule compares candidate start dates against the current day.
/// Injecting the clock keeps that rule deterministic under test.
pub trait Clock: Send + Sync {
    /// The current date, normalized to day granularity
    fn today(&self) -> NaiveDate;
}

/// Production clock backed by UTC wall time
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
