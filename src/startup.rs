//! Application Startup
//!
//! Application building and server initialization.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::Router;
use sqlx::PgPool;
use tokio::net::TcpListener;

use crate::application::services::{
    BookingService, BookingServiceImpl, GuideService, GuideServiceImpl, MeteredBookingService,
    MeteredGuideService,
};
use crate::config::{CorsSettings, Settings, StorageBackend};
use crate::domain::{BookingRepository, GuideRepository};
use crate::infrastructure::database;
use crate::infrastructure::metrics::{PrometheusBookingMetrics, PrometheusGuideMetrics};
use crate::infrastructure::repositories::{
    InMemoryStore, MemoryBookingRepository, MemoryGuideRepository, PgBookingRepository,
    PgGuideRepository,
};
use crate::presentation::http::handlers::health;
use crate::presentation::http::routes;
use crate::presentation::middleware::{cors, logging};

/// Storage backend handle, kept for readiness checks
#[derive(Clone)]
pub enum Storage {
    Postgres(PgPool),
    Memory(Arc<InMemoryStore>),
}

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub guides: Arc<dyn GuideService>,
    pub bookings: Arc<dyn BookingService>,
    pub storage: Storage,
}

impl AppState {
    /// Wire the services, with Prometheus metrics, over a pair of repositories
    pub fn from_repositories<G, B>(guide_repo: Arc<G>, booking_repo: Arc<B>, storage: Storage) -> Self
    where
        G: GuideRepository + 'static,
        B: BookingRepository + 'static,
    {
        let guides = MeteredGuideService::new(
            GuideServiceImpl::new(guide_repo.clone()),
            Arc::new(PrometheusGuideMetrics),
        );
        let bookings = MeteredBookingService::new(
            BookingServiceImpl::new(booking_repo, guide_repo),
            Arc::new(PrometheusBookingMetrics),
        );

        Self {
            guides: Arc::new(guides),
            bookings: Arc::new(bookings),
            storage,
        }
    }

    /// State over a fresh in-memory store
    pub fn in_memory(store: Arc<InMemoryStore>) -> Self {
        Self::from_repositories(
            Arc::new(MemoryGuideRepository::new(store.clone())),
            Arc::new(MemoryBookingRepository::new(store.clone())),
            Storage::Memory(store),
        )
    }

    /// Connect the configured backend, migrate and seed it
    pub async fn build(settings: &Settings) -> Result<Self> {
        match settings.storage.backend {
            StorageBackend::Postgres => {
                let pool = database::create_pool(&settings.database).await?;
                tracing::info!("Database connection pool created");

                if settings.database.run_migrations {
                    database::run_migrations(&pool).await?;
                    tracing::info!("Database migrations applied");
                }

                let guide_repo = Arc::new(PgGuideRepository::new(pool.clone()));
                if settings.storage.seed_demo_guides {
                    database::seed_demo_guides(guide_repo.as_ref()).await?;
                }

                Ok(Self::from_repositories(
                    guide_repo,
                    Arc::new(PgBookingRepository::new(pool.clone())),
                    Storage::Postgres(pool),
                ))
            }
            StorageBackend::Memory => {
                let store = InMemoryStore::new();
                if settings.storage.seed_demo_guides {
                    database::seed_demo_guides(&MemoryGuideRepository::new(store.clone())).await?;
                }
                tracing::warn!("Using in-memory storage; data is lost on shutdown");

                Ok(Self::in_memory(store))
            }
        }
    }
}

/// Router with the tracing and CORS layers applied
pub fn build_router(state: AppState, cors_settings: &CorsSettings) -> Router {
    routes::create_router(state)
        .layer(logging::create_trace_layer())
        .layer(cors::create_cors_layer(cors_settings))
}

/// Application instance
pub struct Application {
    listener: TcpListener,
    router: Router,
}

impl Application {
    /// Build the application from settings
    pub async fn build(settings: Settings) -> Result<Self> {
        health::init_server_start();

        let state = AppState::build(&settings).await?;
        let router = build_router(state, &settings.cors);

        let listener = TcpListener::bind(settings.server_addr()).await?;
        tracing::info!(
            addr = %listener.local_addr()?,
            backend = %settings.storage.backend,
            "Listening"
        );

        Ok(Self { listener, router })
    }

    /// Run the server until stopped
    pub async fn run_until_stopped(self) -> Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;
        Ok(())
    }

    /// Get the bound address
    pub fn local_addr(&self) -> std::io::Result<SocketAddr> {
        self.listener.local_addr()
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "Failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received, draining connections");
}
