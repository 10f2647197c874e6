use chrono::{TimeZone, Utc};
use moyeora_api::Application;
use moyeora_infra::{Config, MoyeoraContext, StaticTimeSys};
use moyeora_sdk::{MoyeoraSDK, ID};
use std::sync::Arc;

pub struct TestApp {
    pub config: Config,
    pub address: String,
}

impl TestApp {
    pub fn user_sdk(&self, user_id: ID) -> MoyeoraSDK {
        MoyeoraSDK::for_user(self.address.clone(), user_id)
    }

    pub fn admin_sdk(&self) -> MoyeoraSDK {
        MoyeoraSDK::for_admin(self.address.clone(), self.config.admin_secret_code.clone())
    }
}

// Launch the application as a background task. Today is 2026-02-10 in Seoul.
pub async fn spawn_app() -> (TestApp, MoyeoraSDK) {
    let mut ctx = MoyeoraContext::create_inmemory();
    ctx.config.port = 0; // Random port
    ctx.config.admin_secret_code = "test-admin-secret".into();
    let now = Utc
        .with_ymd_and_hms(2026, 2, 10, 3, 0, 0)
        .unwrap()
        .timestamp_millis();
    ctx.sys = Arc::new(StaticTimeSys::at(now));

    let config = ctx.config.clone();
    let application = Application::new(ctx)
        .await
        .expect("Failed to build application.");

    let address = format!("http://localhost:{}/api/v1", application.port());
    let _ = actix_web::rt::spawn(async move {
        application
            .start()
            .await
            .expect("Expected application to start");
    });

    let app = TestApp {
        config,
        address: address.clone(),
    };
    let sdk = MoyeoraSDK::new(address);
    (app, sdk)
}
