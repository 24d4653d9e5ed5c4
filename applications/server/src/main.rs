/// Chirpy Server - short posts with token authentication
use chirpy_server::{api, config::ServerConfig, services::AuthService, state::AppState};
use chirpy_storage::JsonStore;
use clap::{Parser, Subcommand};
use std::{net::SocketAddr, sync::Arc};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "chirpy-server")]
#[command(about = "Chirpy short-post server", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP server
    Serve,
    /// Create a new user
    AddUser {
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password
        #[arg(short, long, env = "CHIRPY_NEW_USER_PASSWORD")]
        password: String,
    },
    /// List all users
    ListUsers,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "chirpy_server=info,chirpy_storage=info,tower_http=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();
    let config = ServerConfig::load()?;

    match cli.command {
        Commands::Serve => {
            serve(config).await?;
        }
        Commands::AddUser { email, password } => {
            add_user(config, &email, &password).await?;
        }
        Commands::ListUsers => {
            list_users(config).await?;
        }
    }

    Ok(())
}

async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    config.validate()?;

    tracing::info!("Starting Chirpy Server");
    tracing::info!("Host: {}", config.server.host);
    tracing::info!("Port: {}", config.server.port);

    // Initialize the record store
    let store = Arc::new(JsonStore::new(config.storage.database_path.clone()));
    store.initialize().await?;
    tracing::info!("Database ready at {}", store.path().display());

    // Initialize auth service
    let auth_service = Arc::new(AuthService::new(
        config.auth.jwt_secret.clone(),
        config.auth.refresh_token_days,
    ));
    tracing::info!("Auth service initialized");

    // Build application state
    let app_state = AppState::new(
        store,
        auth_service,
        config.auth.bcrypt_cost,
        config.auth.polka_api_key.as_str(),
    );

    // Build router
    let app = api::router(app_state, &config.storage.static_dir);

    // Create server address
    let addr = SocketAddr::from((
        config.server.host.parse::<std::net::IpAddr>()?,
        config.server.port,
    ));

    tracing::info!("Server listening on {}", addr);

    // Start server
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

fn accounts(config: &ServerConfig) -> chirpy_server::AccountService {
    let store = Arc::new(JsonStore::new(config.storage.database_path.clone()));
    chirpy_server::AccountService::new(store, config.auth.bcrypt_cost)
}

async fn add_user(config: ServerConfig, email: &str, password: &str) -> anyhow::Result<()> {
    let user = accounts(&config).register(email, password).await?;
    println!("Created user {} ({})", user.id, user.email);
    Ok(())
}

async fn list_users(config: ServerConfig) -> anyhow::Result<()> {
    let users = accounts(&config).list().await?;

    println!("Users:");
    for user in users {
        let tier = if user.is_chirpy_red { " [red]" } else { "" };
        println!("  {} - {}{}", user.id, user.email, tier);
    }

    Ok(())
}
