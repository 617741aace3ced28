// ABOUTME: Welcome-message content for newly created registrations
// ABOUTME: Carries recipient, plan title, human-formatted end date, and monthly price
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;

use crate::models::{Member, Plan};

/// Template identifier for the registration welcome message
const WELCOME_TEMPLATE: &str = "registration";

/// Content of the welcome notification sent when a registration is created
#[derive(Debug, Clone, Serialize)]
pub struct WelcomeMessage {
    /// Recipient display name
    pub to_name: String,
    /// Recipient email address
    pub to_email: String,
    /// Message subject line
    pub subject: String,
    /// Template identifier understood by the delivery transport
    pub template: &'static str,
    /// Member name available to the template context
    pub member_name: String,
    /// Title of the subscribed plan
    pub plan_title: String,
    /// Human-formatted subscription end date, e.g. "April 10, 2030"
    pub end_date: String,
    /// The plan's price per month
    pub monthly_price: Decimal,
}

impl WelcomeMessage {
    /// Build the welcome message for a freshly created registration
    #[must_use]
    pub fn registration(member: &Member, plan: &Plan, end_date: NaiveDate) -> Self {
        Self {
            to_name: member.name.clone(),
            to_email: member.email.clone(),
            subject: format!("Welcome to GymPoint, {}!", member.name),
            template: WELCOME_TEMPLATE,
            member_name: member.name.clone(),
            plan_title: plan.title.clone(),
            end_date: format_end_date(end_date),
            monthly_price: plan.monthly_price,
        }
    }
}

/// Render a date for human-readable notification content, e.g. "April 10, 2030"
#[must_use]
pub fn format_end_date(date: NaiveDate) -> String {
    date.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;
    use std::str::FromStr;

    #[test]
    fn test_format_end_date() {
        let date: NaiveDate = "2030-04-10".parse().unwrap();
        assert_eq!(format_end_date(date), "April 10, 2030");

        let date: NaiveDate = "2021-02-28".parse().unwrap();
        assert_eq!(format_end_date(date), "February 28, 2021");
    }

    #[test]
    fn test_registration_message_content() {
        let member = Member::new("Ana Souza", "ana@example.com");
        let plan = Plan::new("Gold", 3, Decimal::from_str("100.00").unwrap());
        let end_date: NaiveDate = "2030-04-10".parse().unwrap();

        let message = WelcomeMessage::registration(&member, &plan, end_date);

        assert_eq!(message.to_name, "Ana Souza");
        assert_eq!(message.to_email, "ana@example.com");
        assert_eq!(message.subject, "Welcome to GymPoint, Ana Souza!");
        assert_eq!(message.template, "registration");
        assert_eq!(message.plan_title, "Gold");
        assert_eq!(message.end_date, "April 10, 2030");
        assert_eq!(message.monthly_price, Decimal::from_str("100.00").unwrap());
    }
}
