use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

mod alerts;
mod data;
mod directory;
mod identity;
mod models;
mod report;
mod session;
mod stats;

use data::Dataset;
use models::{Tourist, Zone};
use session::{AuthService, SessionOrigin, SessionRepository};

/// Bound on the simulated auth round trip; an attempt past this is
/// abandoned.
const AUTH_TIMEOUT: Duration = Duration::from_secs(5);
const AUTH_LATENCY: Duration = Duration::from_secs(1);

#[derive(Parser)]
#[command(name = "yara-safety-console")]
#[command(about = "Tourism safety monitoring console for zones, tourists and alerts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Zone overview with risk status and marker density
    Zones {
        /// Show full detail for one zone instead of the overview
        #[arg(long)]
        zone: Option<String>,
    },
    /// Full safety profile for a single tourist
    Tourist { id: String },
    /// Derive the alert board, optionally acknowledging entries first
    Alerts {
        #[arg(long, default_value_t = alerts::DEFAULT_STALE_MINUTES)]
        threshold: u32,
        /// Tourist ids to acknowledge off the board
        #[arg(long)]
        ack: Vec<String>,
    },
    /// Search the roster by name, nationality, or id
    Search { query: String },
    /// Generate a markdown statistics report
    Report {
        #[arg(long, default_value_t = alerts::DEFAULT_STALE_MINUTES)]
        threshold: u32,
        #[arg(long, default_value = "report.md")]
        out: PathBuf,
    },
    /// Export the tourist roster as CSV
    Export {
        #[arg(long, default_value = "roster.csv")]
        out: PathBuf,
    },
    /// Sign in as an officer
    Login {
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Register a new officer account and sign it in
    Signup {
        #[arg(long)]
        name: String,
        #[arg(long)]
        dept_id: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// Clear the stored session
    Logout,
    /// Show the officer attached to the current session
    Whoami,
    /// Issue a blockchain identity credential for a tourist
    IssueId { id: String },
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .init();

    let cli = Cli::parse();
    let dataset = Dataset::seeded();
    let mut auth = AuthService::new(
        directory::InMemoryDirectory::seeded(),
        SessionRepository::from_env(),
        AUTH_LATENCY,
    );

    match cli.command {
        Commands::Zones { zone } => match zone {
            Some(zone_id) => {
                let zone = dataset
                    .find_zone(&zone_id)
                    .with_context(|| format!("unknown zone {zone_id}"))?;
                print_zone_detail(zone);
            }
            None => print_zone_overview(&dataset),
        },
        Commands::Tourist { id } => {
            let (zone, tourist) = dataset
                .find_tourist(&id)
                .with_context(|| format!("unknown tourist {id}"))?;
            print_tourist_profile(zone, tourist);
        }
        Commands::Alerts { threshold, ack } => {
            let tourists = dataset.flattened_tourists();
            let mut board = alerts::AlertBoard::derive(&tourists, threshold);
            for id in &ack {
                if board.acknowledge(id) {
                    println!("Alert acknowledged for {id}; response team notified.");
                } else {
                    println!("No alert on the board for {id}; nothing to acknowledge.");
                }
            }
            if board.is_empty() {
                println!("No tourists need attention.");
            } else {
                println!("{} active alert(s):", board.len());
                for tourist in board.entries() {
                    println!(
                        "- {} ({}): {}",
                        tourist.name,
                        tourist.id,
                        alerts::describe_alert(tourist)
                    );
                }
            }
        }
        Commands::Search { query } => {
            let matches = dataset.search(&query);
            if matches.is_empty() {
                println!("No tourists match \"{query}\".");
            } else {
                for tourist in matches {
                    println!(
                        "- {} ({}) {} risk, {}",
                        tourist.name,
                        tourist.id,
                        tourist.risk_level,
                        if tourist.id_issued { "ID issued" } else { "no ID" },
                    );
                }
            }
        }
        Commands::Report { threshold, out } => {
            let statistics = stats::aggregate(&dataset.zones);
            let board = alerts::AlertBoard::derive(&dataset.flattened_tourists(), threshold);
            let report = report::build_report(
                &statistics,
                &board,
                &data::activity_timeline(),
                threshold,
                chrono::Utc::now().date_naive(),
            );
            std::fs::write(&out, report)
                .with_context(|| format!("failed to write {}", out.display()))?;
            println!("Report written to {}.", out.display());
        }
        Commands::Export { out } => {
            let rows = report::export_roster(&dataset.zones, &out)?;
            println!("Exported {rows} tourists to {}.", out.display());
        }
        Commands::Login { email, password } => {
            match tokio::time::timeout(AUTH_TIMEOUT, auth.login(&email, &password)).await {
                Ok(Ok(officer)) => println!("Signed in as {} ({}).", officer.name, officer.role),
                Ok(Err(err)) => println!("Login failed: {err}."),
                Err(_) => println!("Login timed out."),
            }
        }
        Commands::Signup {
            name,
            dept_id,
            email,
            password,
        } => {
            match tokio::time::timeout(
                AUTH_TIMEOUT,
                auth.signup(&name, &dept_id, &email, &password),
            )
            .await
            {
                Ok(Ok(officer)) => println!(
                    "Registered {} ({}) as {}.",
                    officer.name, officer.id, officer.role
                ),
                Ok(Err(err)) => println!("Signup failed: {err}."),
                Err(_) => println!("Signup timed out."),
            }
        }
        Commands::Logout => {
            auth.logout()?;
            println!("Signed out.");
        }
        Commands::Whoami => {
            let origin = auth.restore_or_default()?;
            match (origin, auth.current_officer()) {
                (SessionOrigin::Persisted, Some(officer)) => {
                    println!(
                        "{} <{}> {} [{}]",
                        officer.name, officer.email, officer.role, officer.dept_id
                    );
                }
                (SessionOrigin::AutoSelected, Some(officer)) => {
                    println!(
                        "{} <{}> {} [{}] (auto-selected demo session)",
                        officer.name, officer.email, officer.role, officer.dept_id
                    );
                }
                _ => println!("No session and no officers registered."),
            }
        }
        Commands::IssueId { id } => {
            let (_, tourist) = dataset
                .find_tourist(&id)
                .with_context(|| format!("unknown tourist {id}"))?;
            let token = identity::issue_credential(&tourist.id);
            if let Some(existing) = &tourist.blockchain_id {
                println!(
                    "{} already holds {}; replacement credential {} generated and sent.",
                    tourist.name, existing, token
                );
            } else {
                println!(
                    "Credential {} generated and sent to {} ({}).",
                    token, tourist.name, tourist.id
                );
            }
        }
    }

    Ok(())
}

fn print_zone_overview(dataset: &Dataset) {
    let statistics = stats::aggregate(&dataset.zones);
    if statistics.active_sos > 0 {
        println!(
            "{} active SOS alert(s) require immediate attention!",
            statistics.active_sos
        );
        println!();
    }
    println!("Zones under monitoring:");
    for zone in &dataset.zones {
        println!(
            "- {} ({}): {}, {} tourists, density {}",
            zone.name,
            zone.zone_id,
            zone.status,
            zone.tourists.len(),
            stats::density(zone.tourists.len())
        );
    }
}

fn print_zone_detail(zone: &Zone) {
    println!("{} ({}): {}", zone.name, zone.zone_id, zone.status);
    if let (Some(center), Some(radius)) = (zone.coordinates, zone.radius_meters) {
        println!(
            "Centered at {:.4}, {:.4}, radius {} m",
            center.lat, center.lng, radius
        );
    }
    println!();
    println!("Tourists ({}):", zone.tourists.len());
    for tourist in &zone.tourists {
        println!(
            "- {} ({}) {} risk{}",
            tourist.name,
            tourist.id,
            tourist.risk_level,
            if tourist.sos_active { ", SOS ACTIVE" } else { "" },
        );
    }
    println!();
    println!("Nearby help centers:");
    for center in &zone.nearby_help_centers {
        println!("- {center}");
    }
}

fn print_tourist_profile(zone: &Zone, tourist: &Tourist) {
    println!("{} ({})", tourist.name, tourist.id);
    println!("Zone: {} ({})", zone.name, zone.status);
    println!("Risk level: {}", tourist.risk_level);
    if tourist.sos_active {
        println!("SOS ACTIVE");
    }
    println!(
        "Blockchain ID: {}",
        tourist.blockchain_id.as_deref().unwrap_or("not issued")
    );
    println!(
        "Nationality: {}",
        tourist.nationality.as_deref().unwrap_or("unknown")
    );
    println!(
        "Emergency contact: {}",
        tourist.emergency_contact.as_deref().unwrap_or("none on file")
    );
    println!(
        "Itinerary: {}",
        tourist.itinerary.as_deref().unwrap_or("none on file")
    );
    match tourist.safety_score {
        Some(score) => println!("Safety score: {score}/100"),
        None => println!("Safety score: not yet scored"),
    }
    println!(
        "Last active: {}",
        tourist.last_active.as_deref().unwrap_or("unknown")
    );
    println!(
        "Location: {:.4}, {:.4}",
        tourist.location.lat, tourist.location.lng
    );
}
