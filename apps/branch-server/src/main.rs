use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{routing::get, Router};
use clap::{Parser, Subcommand};
use mimalloc::MiMalloc;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use tower_http::trace::TraceLayer;
use url::Url;

use runtime::{AppConfig, CliArgs};

use events::contract::observer::ChangePublisher;
use events::domain::ports::RegistrationFormsPort;
use events::domain::service::EventService;
use events::infra::forms::{DisabledForms, HttpFormsClient};
use events::infra::storage::SeaOrmEventsRepository;
use membership::auth::token::TokenIssuer;
use membership::contract::client::MembershipApi;
use membership::domain::service::MembershipService;
use membership::gateways::local::MembershipLocalClient;
use membership::infra::storage::SeaOrmMembersRepository;
use newsfeed::domain::{NewsFeedObserver, NewsFeedService};

#[global_allocator]
static GLOBAL: MiMalloc = MiMalloc;

/// Branch Server - IEEE student-branch website backend
#[derive(Parser)]
#[command(name = "branch-server")]
#[command(about = "Branch Server - IEEE student-branch website backend")]
#[command(version = "0.1.0")]
struct Cli {
    /// Path to configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Port for HTTP server (overrides config)
    #[arg(short, long)]
    port: Option<u16>,

    /// Print current configuration and exit
    #[arg(long)]
    print_config: bool,

    /// Log verbosity level (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the server
    Run,
    /// Check configuration
    Check,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    let args = CliArgs {
        config: cli.config.as_ref().map(|p| p.to_string_lossy().to_string()),
        port: cli.port,
        print_config: cli.print_config,
        verbose: cli.verbose,
    };

    let mut config = AppConfig::load_or_default(cli.config.as_deref())?;
    config.apply_cli_overrides(&args);

    let logging_config = config.logging.clone().unwrap_or_default();
    runtime::logging::init_logging(&logging_config);
    tracing::info!("Branch Server starting");

    if cli.print_config {
        println!("{}", config.to_yaml()?);
        return Ok(());
    }

    match cli.command.unwrap_or(Commands::Run) {
        Commands::Run => run_server(config).await,
        Commands::Check => check_config(config),
    }
}

async fn run_server(config: AppConfig) -> Result<()> {
    let db_config = config
        .database
        .clone()
        .context("database configuration is required to run the server")?;

    let mut opts = ConnectOptions::new(db_config.url.clone());
    if let Some(max) = db_config.max_conns {
        opts.max_connections(max);
    }
    tracing::info!("Connecting to database: {}", db_config.url);
    let db = Database::connect(opts)
        .await
        .context("database connection failed")?;

    membership::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .context("membership migrations failed")?;
    events::infra::storage::migrations::Migrator::up(&db, None)
        .await
        .context("events migrations failed")?;

    let app = build_router(&config, db)?;

    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {}", addr))?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("server error")?;

    tracing::info!("Branch Server stopped");
    Ok(())
}

/// Composition root: repositories, services, the change publisher with its
/// news-feed observer, and the public routers.
fn build_router(config: &AppConfig, db: DatabaseConnection) -> Result<Router> {
    let members_repo = Arc::new(SeaOrmMembersRepository::new(db.clone()));
    let tokens = TokenIssuer::new(&config.auth.token_secret, config.auth.token_ttl);
    let membership_service = Arc::new(MembershipService::new(members_repo, tokens));
    let members_api: Arc<dyn MembershipApi> =
        Arc::new(MembershipLocalClient::new(membership_service.clone()));

    let feed = Arc::new(NewsFeedService::new());
    let publisher = Arc::new(ChangePublisher::new());
    publisher.subscribe(Arc::new(NewsFeedObserver::new(feed.clone())));

    let forms: Arc<dyn RegistrationFormsPort> = match &config.forms {
        Some(forms_config) => {
            let base = Url::parse(&forms_config.base_url)
                .with_context(|| format!("invalid forms base URL: {}", forms_config.base_url))?;
            Arc::new(HttpFormsClient::new(reqwest::Client::new(), base))
        }
        None => Arc::new(DisabledForms),
    };

    let events_repo = Arc::new(SeaOrmEventsRepository::new(db));
    let event_service = Arc::new(EventService::new(
        events_repo,
        members_api,
        publisher,
        forms,
        config.server.public_base_url.clone(),
    ));

    Ok(Router::new()
        .route("/healthz", get(healthz))
        .nest(
            "/api/auth",
            membership::api::rest::routes::router(membership_service),
        )
        .nest("/api/events", events::api::rest::routes::router(event_service))
        .nest("/api/news", newsfeed::api::rest::routes::router(feed))
        .layer(TraceLayer::new_for_http()))
}

fn check_config(config: AppConfig) -> Result<()> {
    tracing::info!("Checking configuration...");

    Url::parse(&config.server.public_base_url).with_context(|| {
        format!(
            "invalid server.public_base_url: {}",
            config.server.public_base_url
        )
    })?;
    if let Some(forms) = &config.forms {
        Url::parse(&forms.base_url)
            .with_context(|| format!("invalid forms.base_url: {}", forms.base_url))?;
    }

    println!("Configuration check passed");
    println!("{}", config.to_yaml()?);
    Ok(())
}

async fn healthz() -> &'static str {
    "ok"
}

async fn shutdown_signal() {
    use tokio::signal;

    let ctrl_c = async {
        signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        signal::unix::signal(signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        _ = ctrl_c => tracing::info!("Received Ctrl+C, shutting down"),
        _ = terminate => tracing::info!("Received terminate signal, shutting down"),
    }
}
