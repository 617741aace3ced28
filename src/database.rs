// ABOUTME: SQLite persistence for members, plans, and registrations
// ABOUTME: Schema migration plus the CRUD operations behind the record-store trait
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

//! # Database Management
//!
//! SQLite-backed storage for the registration domain. Dates are stored as ISO
//! `TEXT` columns and monetary amounts as `TEXT` so decimal prices round-trip
//! without floating-point loss.

use anyhow::{anyhow, Context, Result};
use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use sqlx::sqlite::{SqlitePoolOptions, SqliteRow};
use sqlx::{Pool, Row, Sqlite};

use crate::models::{Member, NewRegistration, Plan, Registration, RegistrationChanges};

/// Database manager for registration storage
#[derive(Clone)]
pub struct Database {
    pool: Pool<Sqlite>,
}

impl Database {
    /// Create a new database connection and run migrations
    pub async fn new(database_url: &str) -> Result<Self> {
        // Ensure SQLite creates the database file if it doesn't exist
        let connection_options = if database_url.starts_with("sqlite:")
            && !database_url.contains("memory")
            && !database_url.contains('?')
        {
            format!("{database_url}?mode=rwc")
        } else {
            database_url.to_string()
        };

        // An in-memory SQLite database exists per connection; cap the pool at
        // one connection so every query sees the same schema and rows.
        let max_connections = if database_url.contains("memory") { 1 } else { 5 };

        let pool = SqlitePoolOptions::new()
            .max_connections(max_connections)
            .connect(&connection_options)
            .await
            .with_context(|| format!("failed to open database at {database_url}"))?;

        let db = Self { pool };
        db.migrate().await?;

        Ok(db)
    }

    /// Run database migrations
    pub async fn migrate(&self) -> Result<()> {
        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS members (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                name TEXT NOT NULL,
                email TEXT UNIQUE NOT NULL,
                created_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS plans (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                title TEXT NOT NULL,
                duration_months INTEGER NOT NULL,
                monthly_price TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        sqlx::query(
            r"
            CREATE TABLE IF NOT EXISTS registrations (
                id INTEGER PRIMARY KEY AUTOINCREMENT,
                member_id INTEGER NOT NULL REFERENCES members(id),
                plan_id INTEGER NOT NULL REFERENCES plans(id),
                start_date TEXT NOT NULL,
                end_date TEXT NOT NULL,
                price TEXT NOT NULL,
                created_at TEXT NOT NULL,
                updated_at TEXT NOT NULL
            )
            ",
        )
        .execute(&self.pool)
        .await?;

        // Index on member_id for the per-member listing query
        sqlx::query(
            "CREATE INDEX IF NOT EXISTS idx_registrations_member_id ON registrations(member_id)",
        )
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    // ================================
    // Members
    // ================================

    /// Insert a member and return it with its assigned id
    pub async fn create_member(&self, name: &str, email: &str) -> Result<Member> {
        let created_at = Utc::now();

        let result = sqlx::query("INSERT INTO members (name, email, created_at) VALUES (?, ?, ?)")
            .bind(name)
            .bind(email)
            .bind(created_at.to_rfc3339())
            .execute(&self.pool)
            .await?;

        Ok(Member {
            id: result.last_insert_rowid(),
            name: name.to_string(),
            email: email.to_string(),
            created_at,
        })
    }

    /// Get a member by id
    pub async fn get_member(&self, member_id: i64) -> Result<Option<Member>> {
        let row = sqlx::query("SELECT id, name, email, created_at FROM members WHERE id = ?")
            .bind(member_id)
            .fetch_optional(&self.pool)
            .await?;

        row.map(|r| member_from_row(&r)).transpose()
    }

    // ================================
    // Plans
    // ================================

    /// Insert a plan and return it with its assigned id
    pub async fn create_plan(
        &self,
        title: &str,
        duration_months: u32,
        monthly_price: Decimal,
    ) -> Result<Plan> {
        let result = sqlx::query(
            "INSERT INTO plans (title, duration_months, monthly_price) VALUES (?, ?, ?)",
        )
        .bind(title)
        .bind(i64::from(duration_months))
        .bind(monthly_price.to_string())
        .execute(&self.pool)
        .await?;

        Ok(Plan {
            id: result.last_insert_rowid(),
            title: title.to_string(),
            duration_months,
            monthly_price,
        })
    }

    /// Get a plan by id
    pub async fn get_plan(&self, plan_id: i64) -> Result<Option<Plan>> {
        let row =
            sqlx::query("SELECT id, title, duration_months, monthly_price FROM plans WHERE id = ?")
                .bind(plan_id)
                .fetch_optional(&self.pool)
                .await?;

        row.map(|r| plan_from_row(&r)).transpose()
    }

    // ================================
    // Registrations
    // ================================

    /// Insert a registration and return the stored row
    pub async fn create_registration(&self, new: &NewRegistration) -> Result<Registration> {
        let now = Utc::now().to_rfc3339();

        let result = sqlx::query(
            r"
            INSERT INTO registrations
                (member_id, plan_id, start_date, end_date, price, created_at, updated_at)
            VALUES (?, ?, ?, ?, ?, ?, ?)
            ",
        )
        .bind(new.member_id)
        .bind(new.plan_id)
        .bind(new.start_date.to_string())
        .bind(new.end_date.to_string())
        .bind(new.price.to_string())
        .bind(&now)
        .bind(&now)
        .execute(&self.pool)
        .await?;

        let id = result.last_insert_rowid();
        self.get_registration(id)
            .await?
            .ok_or_else(|| anyhow!("registration {id} missing immediately after insert"))
    }

    /// Get a registration by id
    pub async fn get_registration(&self, registration_id: i64) -> Result<Option<Registration>> {
        let row = sqlx::query(
            r"
            SELECT id, member_id, plan_id, start_date, end_date, price, created_at, updated_at
            FROM registrations WHERE id = ?
            ",
        )
        .bind(registration_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| registration_from_row(&r)).transpose()
    }

    /// Get a registration by id, restricted to the given owning member
    pub async fn get_registration_for_member(
        &self,
        registration_id: i64,
        member_id: i64,
    ) -> Result<Option<Registration>> {
        let row = sqlx::query(
            r"
            SELECT id, member_id, plan_id, start_date, end_date, price, created_at, updated_at
            FROM registrations WHERE id = ? AND member_id = ?
            ",
        )
        .bind(registration_id)
        .bind(member_id)
        .fetch_optional(&self.pool)
        .await?;

        row.map(|r| registration_from_row(&r)).transpose()
    }

    /// Get all registrations for a member in insertion order
    pub async fn get_registrations_for_member(&self, member_id: i64) -> Result<Vec<Registration>> {
        let rows = sqlx::query(
            r"
            SELECT id, member_id, plan_id, start_date, end_date, price, created_at, updated_at
            FROM registrations WHERE member_id = ? ORDER BY id
            ",
        )
        .bind(member_id)
        .fetch_all(&self.pool)
        .await?;

        rows.iter().map(registration_from_row).collect()
    }

    /// Apply new terms to a registration as one atomic row update
    pub async fn update_registration(
        &self,
        registration_id: i64,
        changes: &RegistrationChanges,
    ) -> Result<Registration> {
        sqlx::query(
            r"
            UPDATE registrations
            SET plan_id = ?, start_date = ?, end_date = ?, price = ?, updated_at = ?
            WHERE id = ?
            ",
        )
        .bind(changes.plan_id)
        .bind(changes.start_date.to_string())
        .bind(changes.end_date.to_string())
        .bind(changes.price.to_string())
        .bind(Utc::now().to_rfc3339())
        .bind(registration_id)
        .execute(&self.pool)
        .await?;

        self.get_registration(registration_id)
            .await?
            .ok_or_else(|| anyhow!("registration {registration_id} missing after update"))
    }

    /// Delete a registration by id
    pub async fn delete_registration(&self, registration_id: i64) -> Result<()> {
        sqlx::query("DELETE FROM registrations WHERE id = ?")
            .bind(registration_id)
            .execute(&self.pool)
            .await?;

        Ok(())
    }
}

fn member_from_row(row: &SqliteRow) -> Result<Member> {
    Ok(Member {
        id: row.try_get("id")?,
        name: row.try_get("name")?,
        email: row.try_get("email")?,
        created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?)?,
    })
}

fn plan_from_row(row: &SqliteRow) -> Result<Plan> {
    let duration: i64 = row.try_get("duration_months")?;

    Ok(Plan {
        id: row.try_get("id")?,
        title: row.try_get("title")?,
        duration_months: u32::try_from(duration)
            .with_context(|| format!("invalid plan duration in store: {duration}"))?,
        monthly_price: parse_decimal(&row.try_get::<String, _>("monthly_price")?)?,
    })
}

fn registration_from_row(row: &SqliteRow) -> Result<Registration> {
    Ok(Registration {
        id: row.try_get("id")?,
        member_id: row.try_get("member_id")?,
        plan_id: row.try_get("plan_id")?,
        start_date: parse_date(&row.try_get::<String, _>("start_date")?)?,
        end_date: parse_date(&row.try_get::<String, _>("end_date")?)?,
        price: parse_decimal(&row.try_get::<String, _>("price")?)?,
        created_at: parse_timestamp(&row.try_get::<String, _>("created_at")?)?,
        updated_at: parse_timestamp(&row.try_get::<String, _>("updated_at")?)?,
    })
}

fn parse_date(value: &str) -> Result<NaiveDate> {
    value
        .parse()
        .with_context(|| format!("invalid date in store: {value}"))
}

fn parse_decimal(value: &str) -> Result<Decimal> {
    value
        .parse()
        .with_context(|| format!("invalid decimal in store: {value}"))
}

fn parse_timestamp(value: &str) -> Result<DateTime<Utc>> {
    Ok(DateTime::parse_from_rfc3339(value)
        .with_context(|| format!("invalid timestamp in store: {value}"))?
        .with_timezone(&Utc))
}
