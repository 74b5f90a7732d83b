use autobroker::{
    config::Config,
    error::Error,
    service::maintenance::MaintenanceService,
    startup,
};
use clap::{Parser, Subcommand};

/// Operator commands for the autobroker database.
#[derive(Parser)]
#[command(name = "autobroker", version, about)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Apply pending database migrations
    Migrate,
    /// Attach an existing listing to a subscription of the same client
    LinkListing {
        /// Public id of the listing
        #[arg(long)]
        listing: i64,
        /// Public id of the target subscription
        #[arg(long)]
        subscription: i64,
    },
    /// Move the candidate holding a listing to another subscription of the same client
    MoveListing {
        /// Public id of the listing
        #[arg(long)]
        listing: i64,
        /// Public id of the target subscription
        #[arg(long)]
        subscription: i64,
    },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();

    let config = match Config::from_env() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("Configuration error: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = startup::init_tracing(&config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if let Err(e) = run(cli.command, &config).await {
        tracing::error!("{}", e);
        std::process::exit(1);
    }
}

async fn run(command: Command, config: &Config) -> Result<(), Error> {
    let db = startup::connect_to_database(config).await?;

    match command {
        Command::Migrate => {
            tracing::info!("Database migrations applied");
        }
        Command::LinkListing {
            listing,
            subscription,
        } => {
            let candidate = MaintenanceService::new(&db)
                .link_listing(listing, subscription)
                .await?;

            println!(
                "Listing {} linked to subscription {} (candidate {})",
                listing, subscription, candidate.id
            );
        }
        Command::MoveListing {
            listing,
            subscription,
        } => {
            let candidate = MaintenanceService::new(&db)
                .move_listing(listing, subscription)
                .await?;

            println!(
                "Listing {} moved to subscription {} (candidate {})",
                listing, subscription, candidate.id
            );
        }
    }

    Ok(())
}
