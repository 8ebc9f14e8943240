//! # Warren CLI
//!
//! Command-line interface for the Warren score backend.
//!
//! ## Usage
//!
//! ```bash
//! warren serve    # Start the API server (runs migrations automatically)
//! warren migrate  # Run database migrations
//! warren --help   # Show help
//! ```

use clap::{Args, CommandFactory as _, Parser, Subcommand};
use error::Result;
use migration::MigratorTrait;

mod config;
mod server;

/// Warren - REST backend for the Warren browser game
#[derive(Parser, Debug)]
#[command(name = "warren")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Log level (debug, info, warn, error)
    #[arg(short = 'L', long, env = "RUST_LOG", default_value = "info")]
    log_level: String,

    /// Output format (json, pretty, compact)
    #[arg(short, long, env = "WARREN_LOG_FORMAT", default_value = "pretty")]
    log_format: String,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Start the API server
    Serve(ServeArgs),

    /// Run database migrations
    Migrate(MigrateArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),

    /// Verify configuration
    Validate,
}

#[derive(Args, Debug)]
struct ServeArgs {
    /// Server host to bind to
    #[arg(long, env = "WARREN_HOST", default_value = "0.0.0.0")]
    host: String,

    /// Server port to bind to
    #[arg(short, long, env = "WARREN_PORT", default_value = "3000")]
    port: u16,
}

#[derive(Args, Debug)]
struct MigrateArgs {
    /// Rollback the last migration
    #[arg(long)]
    rollback: bool,
}

#[derive(Args, Debug)]
struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    shell: clap_complete::Shell,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    logging::init(&cli.log_level, &cli.log_format)
        .map_err(|e| anyhow::anyhow!("Failed to initialize logging: {}", e))?;

    match cli.command {
        Commands::Serve(args) => serve(&args).await?,
        Commands::Migrate(args) => migrate(&args).await?,
        Commands::Completions(args) => completions(&args)?,
        Commands::Validate => validate()?,
    }

    Ok(())
}

async fn serve(args: &ServeArgs) -> Result<()> {
    // Configuration is loaded before anything binds: a missing JWT secret
    // must abort startup, not surface on the first login request.
    let jwt_config = config::jwt_config_from_env()?;
    let database_url =
        config::database_url().map_err(|e| error::AppError::config(e.to_string()))?;

    server::run(&args.host, args.port, &database_url, jwt_config).await
}

async fn migrate(args: &MigrateArgs) -> Result<()> {
    let database_url =
        config::database_url().map_err(|e| error::AppError::config(e.to_string()))?;

    logging::info!(target: "migrate", rollback = %args.rollback, "Connecting to database...");
    let db = sea_orm::Database::connect(&database_url).await?;

    if args.rollback {
        migration::Migrator::down(&db, None).await?;
        logging::info!(target: "migrate", "Rollback completed successfully");
        return Ok(());
    }

    migration::Migrator::up(&db, None).await?;
    logging::info!(target: "migrate", "Migrations completed successfully");
    Ok(())
}

fn completions(args: &CompletionsArgs) -> Result<()> {
    clap_complete::generate(
        args.shell,
        &mut Cli::command(),
        "warren",
        &mut std::io::stdout(),
    );
    Ok(())
}

fn validate() -> Result<()> {
    logging::info!(target: "validate", "Validating configuration...");

    config::jwt_config_from_env()?;
    let database_url =
        config::database_url().map_err(|e| error::AppError::config(e.to_string()))?;
    config::parse_socket_addr(
        &std::env::var("WARREN_HOST").unwrap_or_else(|_| "0.0.0.0".to_string()),
        std::env::var("WARREN_PORT")
            .unwrap_or_else(|_| "3000".to_string())
            .parse()
            .map_err(|_| error::AppError::config("Invalid WARREN_PORT"))?,
    )
    .map_err(|e| error::AppError::config(format!("Invalid bind address: {}", e)))?;

    // the URL itself is validated lazily by the driver; just confirm it built
    let _ = database_url;

    logging::info!(target: "validate", "Configuration is valid");
    Ok(())
}
