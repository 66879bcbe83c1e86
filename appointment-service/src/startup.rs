use crate::config::AppointmentConfig;
use crate::handlers;
use crate::services::MongoDb;
use axum::{
    routing::{delete, get, post, put},
    Router,
};
use service_core::error::AppError;
use std::future::Future;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

#[derive(Clone)]
pub struct AppState {
    pub config: AppointmentConfig,
    pub db: MongoDb,
}

pub struct Application {
    port: u16,
    listener: TcpListener,
    router: Router,
    state: AppState,
}

impl Application {
    pub async fn build(config: AppointmentConfig) -> Result<Self, AppError> {
        let db = MongoDb::connect(&config.mongodb.uri, &config.mongodb.database)
            .await
            .map_err(|e| {
                tracing::error!("Failed to connect to MongoDB: {}", e);
                e
            })?;

        let state = AppState {
            config: config.clone(),
            db: db.clone(),
        };

        // API routes take precedence; everything else falls through to the
        // client bundle (ServeDir serves index.html for the root path).
        let router = Router::new()
            .route("/health", get(handlers::health_check))
            .route("/users/:userid", get(handlers::get_user))
            .route(
                "/appointments/user/:userid",
                get(handlers::list_user_appointments),
            )
            .route("/appointment/:id", get(handlers::get_appointment))
            .route("/register-user", post(handlers::register_user))
            .route("/add-appointment", post(handlers::add_appointment))
            .route("/edit-appointment/:id", put(handlers::edit_appointment))
            .route(
                "/delete-appointment/:id",
                delete(handlers::delete_appointment),
            )
            .fallback_service(ServeDir::new(&config.assets.dir))
            .layer(TraceLayer::new_for_http())
            .layer(
                CorsLayer::new()
                    .allow_origin(Any)
                    .allow_methods(Any)
                    .allow_headers(Any),
            )
            .with_state(state.clone());

        let addr = SocketAddr::from(([0, 0, 0, 0], config.common.port));
        let listener = TcpListener::bind(addr).await.map_err(|e| {
            tracing::error!("Failed to bind TCP listener to {}: {}", addr, e);
            AppError::from(e)
        })?;
        let port = listener.local_addr()?.port();

        tracing::info!("Listening on {}", port);

        Ok(Self {
            port,
            listener,
            router,
            state,
        })
    }

    pub fn db(&self) -> &MongoDb {
        &self.state.db
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub async fn run_until_stopped(self) -> std::io::Result<()> {
        axum::serve(self.listener, self.router).await
    }

    /// Serve until `shutdown` resolves; the listener stops accepting before
    /// the process (and its pooled connection) goes away.
    pub async fn run_until_shutdown(
        self,
        shutdown: impl Future<Output = ()> + Send + 'static,
    ) -> std::io::Result<()> {
        axum::serve(self.listener, self.router)
            .with_graceful_shutdown(shutdown)
            .await
    }
}
