use std::sync::Arc;

use axum::Router;
use sea_orm::{DatabaseConnection, DbErr};
use sea_orm_migration::MigratorTrait;
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

use crate::config::Config;
use crate::controllers::AppState;
use crate::migrations::Migrator;
use crate::routing;
use crate::templates::Templates;

/// The Marquee admin application.
pub struct App {
    pub config: Config,
    pub db: Arc<DatabaseConnection>,
    pub templates: Templates,
}

impl App {
    /// Create the application from environment configuration.
    pub async fn new() -> Result<Self, Box<dyn std::error::Error>> {
        let config = Config::from_env()?;
        Self::with_config(config).await
    }

    /// Create the application with a given config.
    ///
    /// The connection pool is created here and injected into every handler
    /// through [`AppState`]; nothing else opens connections.
    pub async fn with_config(config: Config) -> Result<Self, Box<dyn std::error::Error>> {
        let db = Arc::new(crate::db::connect(&config).await?);
        let templates = Templates::new()?;

        let app = App {
            config,
            db,
            templates,
        };

        if app.config.auto_migrate {
            app.run_migrations().await?;
        }

        Ok(app)
    }

    /// Apply pending schema migrations.
    pub async fn run_migrations(&self) -> Result<(), DbErr> {
        tracing::info!("Running pending database migrations...");
        Migrator::up(self.db.as_ref(), None).await?;
        tracing::info!("Migrations complete.");
        Ok(())
    }

    /// Build the Axum router: page routes, then static assets for anything else.
    pub fn router(&self) -> Router {
        let state = AppState {
            db: Arc::clone(&self.db),
            templates: self.templates.clone(),
        };

        let mut router = routing::build_routes()
            .fallback_service(ServeDir::new(&self.config.static_dir))
            .with_state(state);

        // Only add request tracing middleware in development mode.
        if self.config.is_dev() {
            use tower_http::LatencyUnit;
            use tower_http::trace::{DefaultMakeSpan, DefaultOnRequest, DefaultOnResponse};

            let x_request_id = axum::http::HeaderName::from_static("x-request-id");
            router = router
                .layer(SetRequestIdLayer::new(x_request_id.clone(), MakeRequestUuid))
                .layer(PropagateRequestIdLayer::new(x_request_id))
                .layer(
                    TraceLayer::new_for_http()
                        .make_span_with(DefaultMakeSpan::new().level(tracing::Level::INFO))
                        .on_request(DefaultOnRequest::new().level(tracing::Level::INFO))
                        .on_response(
                            DefaultOnResponse::new()
                                .level(tracing::Level::INFO)
                                .latency_unit(LatencyUnit::Millis),
                        ),
                );
        }

        router
    }

    /// Run the application server until Ctrl-C.
    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let addr = self.config.server_addr();
        let router = self.router();

        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!(
            "Marquee started on http://{}; press Ctrl-C to terminate.",
            addr
        );

        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to install Ctrl-C handler: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutting down Marquee server...");
}
