/// Roster Server - user management over HTTP
use clap::{Parser, Subcommand};
use roster_core::{seed, UserStore};
use roster_server::{api, config::ServerConfig, handler::UserRequestHandler, state::AppState};
use roster_storage::SqliteUserStorage;
use std::{net::SocketAddr, path::PathBuf, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "roster-server")]
#[command(about = "Roster user management server", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Apply database migrations
    Migrate,
    /// Insert the demo users
    Seed,
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "roster_server=info,roster_storage=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load(cli.config.as_deref())?;
    config.validate()?;

    match cli.command {
        Commands::Serve => serve(config).await?,
        Commands::Migrate => {
            open_store(&config).await?;
            tracing::info!("Migrations applied");
        }
        Commands::Seed => {
            let store = open_store(&config).await?;
            let inserted = seed::seed(&store).await?;
            tracing::info!("Seeded {} users", inserted);
        }
        Commands::ListUsers => list_users(&config).await?,
    }

    Ok(())
}

/// Connect, migrate, and wrap the pool in a `UserStore`
async fn open_store(config: &ServerConfig) -> anyhow::Result<UserStore> {
    let pool = roster_storage::create_pool(
        &config.storage.database_url,
        config.storage.max_connections,
    )
    .await?;
    roster_storage::run_migrations(&pool).await?;

    Ok(UserStore::new(Arc::new(SqliteUserStorage::new(pool))))
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    tracing::info!("Starting Roster Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    let store = open_store(&config).await?;
    tracing::info!("Database connected");

    if config.storage.seed_on_startup {
        let inserted = seed::seed(&store).await?;
        tracing::info!("Seeded {} users", inserted);
    }

    let app_state = AppState::new(Arc::new(UserRequestHandler::new(store)));
    let app = api::router(app_state);

    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
}

async fn list_users(config: &ServerConfig) -> anyhow::Result<()> {
    let store = open_store(config).await?;
    let list = store.find_all().await?;

    println!("Users ({}):", list.count);
    for user in list.users {
        let status = if user.is_active { "active" } else { "inactive" };
        println!(
            "  {} - {} <{}> age {} {} [{}]",
            user.id,
            user.name,
            user.email,
            user.age,
            user.city.as_deref().unwrap_or("-"),
            status
        );
    }

    Ok(())
}
