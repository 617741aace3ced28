// ABOUTME: Demo data seeder for the GymPoint registration API
// ABOUTME: Populates the database with sample members and plans for local testing
//
// SPDX-License-Identifier: MIT OR Apache-2.0
// Copyright (c) 2026 GymPoint

//! Demo data seeder for the GymPoint registration server.
//!
//! Members and plans are reference data managed outside the registration
//! lifecycle; this binary provisions a sample set so the API is exercisable
//! out of the box.
//!
//! Usage:
//! ```bash
//! cargo run --bin seed-demo-data
//! cargo run --bin seed-demo-data -- --database-url sqlite:data/gympoint.db
//! ```

use anyhow::Result;
use clap::Parser;
use rust_decimal::Decimal;
use std::str::FromStr;
use tracing::info;

use gympoint_server::config::environment::ServerConfig;
use gympoint_server::database_plugins::factory::Database;
use gympoint_server::database_plugins::DatabaseProvider;
use gympoint_server::logging;

/// Sample member roster
const DEMO_MEMBERS: &[(&str, &str)] = &[
    ("Ana Souza", "ana.souza@example.com"),
    ("Bruno Lima", "bruno.lima@example.com"),
    ("Carla Mendes", "carla.mendes@example.com"),
];

/// Sample plan catalog: title, duration in months, monthly price
const DEMO_PLANS: &[(&str, u32, &str)] = &[
    ("Start", 1, "129.00"),
    ("Gold", 3, "109.00"),
    ("Diamond", 6, "89.00"),
];

#[derive(Parser)]
#[command(
    name = "seed-demo-data",
    about = "GymPoint demo data seeder",
    long_about = "Populate the database with sample members and plans for local testing"
)]
struct SeedArgs {
    /// Database URL override
    #[arg(long)]
    database_url: Option<String>,
}

#[tokio::main]
async fn main() -> Result<()> {
    let args = SeedArgs::parse();

    logging::init_from_env()?;

    let config = ServerConfig::from_env()?;
    let database_url = args.database_url.unwrap_or(config.database.url);

    info!("Seeding demo data into {database_url}");
    let database = Database::new(&database_url).await?;

    for (name, email) in DEMO_MEMBERS {
        let member = database.create_member(name, email).await?;
        info!(member_id = member.id, name = %member.name, "seeded member");
    }

    for (title, duration_months, monthly_price) in DEMO_PLANS {
        let plan = database
            .create_plan(title, *duration_months, Decimal::from_str(monthly_price)?)
            .await?;
        info!(
            plan_id = plan.id,
            title = %plan.title,
            duration_months = plan.duration_months,
            "seeded plan"
        );
    }

    info!("Demo data seeded successfully");
    Ok(())
}
