//! API Gateway - HTTP REST API for HR onboarding.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::error;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use uuid::Uuid;

use domain::UserRole;

#[derive(Parser)]
#[command(name = "gateway")]
#[command(about = "HTTP API for HR onboarding")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve {
        /// Overrides GATEWAY_HOST
        #[arg(long)]
        host: Option<String>,
        /// Overrides GATEWAY_PORT
        #[arg(long)]
        port: Option<u16>,
    },
    /// Print a session token for local use
    Token {
        #[arg(long)]
        email: String,
        /// One of hr_admin, branch_manager, team_lead, employee, logistics_manager
        #[arg(long, value_parser = parse_role)]
        role: UserRole,
        #[arg(long)]
        user_id: Option<Uuid>,
    },
}

fn parse_role(value: &str) -> Result<UserRole, String> {
    value.parse().map_err(|e: domain::DomainError| e.to_string())
}

#[tokio::main]
async fn main() -> ExitCode {
    // Load environment variables
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| "info".into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Serve { host, port } => gateway_lib::run(host, port).await,
        Commands::Token {
            email,
            role,
            user_id,
        } => gateway_lib::issue_token(&email, role, user_id).map(|token| {
            println!("{}", token.access_token);
        }),
    };

    match result {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}
