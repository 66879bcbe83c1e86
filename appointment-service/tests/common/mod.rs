use appointment_service::config::AppointmentConfig;
use appointment_service::services::MongoDb;
use appointment_service::startup::Application;
use uuid::Uuid;

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub db: MongoDb,
    pub db_name: String,
}

impl TestApp {
    pub async fn spawn() -> Self {
        Self::spawn_with(|_| {}).await
    }

    /// Spawn against a unique test database, with a hook to tweak the
    /// configuration before the app is built.
    pub async fn spawn_with(customize: impl FnOnce(&mut AppointmentConfig)) -> Self {
        let db_name = format!("appointment_test_{}", Uuid::new_v4());

        let mut config = AppointmentConfig::load().expect("Failed to load configuration");
        config.common.port = 0; // Random port for testing
        config.mongodb.database = db_name.clone();
        customize(&mut config);

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let db = app.db().clone();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        TestApp {
            address,
            port,
            db,
            db_name,
        }
    }

    /// Drop the test database.
    pub async fn cleanup(&self) {
        let _ = self.db.client().database(&self.db_name).drop(None).await;
    }
}
