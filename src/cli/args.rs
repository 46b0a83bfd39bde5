//! CLI argument definitions.
//!
//! Uses clap derive macros for type-safe argument parsing.

use clap::{Parser, Subcommand};

/// Attendance API - daily attendance, late-arrival notices and presence dashboard
#[derive(Parser, Debug)]
#[command(name = "attendance-api")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Start the HTTP server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Create the first admin account if the database has no accounts
    Seed(SeedArgs),
}

/// Arguments for the serve command. Unset values fall back to the configuration.
#[derive(Parser, Debug)]
pub struct ServeArgs {
    /// Host to bind to
    #[arg(short = 'H', long)]
    pub host: Option<String>,

    /// Port to listen on
    #[arg(short, long)]
    pub port: Option<u16>,
}

/// Arguments for the migrate command
#[derive(Parser, Debug)]
pub struct MigrateArgs {
    #[command(subcommand)]
    pub action: MigrateAction,
}

/// Migration actions
#[derive(Subcommand, Debug)]
pub enum MigrateAction {
    /// Run pending migrations
    Up,
    /// Rollback last migration
    Down,
    /// Show migration status
    Status,
    /// Reset and re-run all migrations
    Fresh,
}

/// Arguments for the seed command
#[derive(Parser, Debug)]
pub struct SeedArgs {
    /// Admin login email
    #[arg(long, env = "SEED_ADMIN_EMAIL", default_value = "admin@example.com")]
    pub email: String,

    /// Admin password
    #[arg(long, env = "SEED_ADMIN_PASSWORD")]
    pub password: String,

    #[arg(long, env = "SEED_ADMIN_EMPLOYEE_NUMBER", default_value = "ADM001")]
    pub employee_number: String,

    #[arg(long, env = "SEED_ADMIN_FULL_NAME", default_value = "Administrator")]
    pub full_name: String,

    #[arg(long, env = "SEED_ADMIN_JOB_TITLE", default_value = "Administrator")]
    pub job_title: String,

    #[arg(long, env = "SEED_ADMIN_DIVISION", default_value = "Management")]
    pub division: String,
}
