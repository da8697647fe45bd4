#![allow(dead_code)]

use agency_site::config::{CorsConfig, SiteConfig, StoreConfig};
use agency_site::startup::Application;
use secrecy::Secret;
use serde_json::Value;
use service_core::config::Config as CoreConfig;

pub const TEST_API_KEY: &str = "test-service-key";

pub struct TestApp {
    pub address: String,
    pub port: u16,
    pub client: reqwest::Client,
}

impl TestApp {
    /// App with no store credentials: every submission takes the log path.
    pub async fn spawn() -> Self {
        Self::spawn_with_store(None, None).await
    }

    /// App forwarding to a store at `url` (typically a wiremock server).
    pub async fn spawn_with_store_at(url: String) -> Self {
        Self::spawn_with_store(Some(url), Some(TEST_API_KEY)).await
    }

    pub async fn spawn_with_store(url: Option<String>, api_key: Option<&str>) -> Self {
        // Use random port for testing (port 0)
        let config = SiteConfig {
            common: CoreConfig {
                host: "127.0.0.1".to_string(),
                port: 0,
                ..CoreConfig::default()
            },
            store: StoreConfig {
                url,
                api_key: api_key.map(|k| Secret::new(k.to_string())),
                contact_table: "contact_submissions".to_string(),
                consent_table: "cookie_consents".to_string(),
                timeout_secs: 2,
            },
            cors: CorsConfig::default(),
        };

        let app = Application::build(config)
            .await
            .expect("Failed to build test application");

        let port = app.port();
        let address = format!("http://127.0.0.1:{}", port);

        tokio::spawn(async move {
            app.run_until_stopped().await.ok();
        });

        // Wait for HTTP server to be ready by polling health endpoint
        let client = reqwest::Client::new();
        let health_url = format!("{}/api/health", address);
        for _ in 0..50 {
            if client.get(&health_url).send().await.is_ok() {
                break;
            }
            tokio::time::sleep(tokio::time::Duration::from_millis(50)).await;
        }

        TestApp {
            address,
            port,
            client,
        }
    }

    pub async fn post_json(&self, path: &str, body: &Value) -> reqwest::Response {
        self.client
            .post(format!("{}{}", self.address, path))
            .json(body)
            .send()
            .await
            .expect("Failed to execute request")
    }

    pub async fn get(&self, path: &str) -> reqwest::Response {
        self.client
            .get(format!("{}{}", self.address, path))
            .send()
            .await
            .expect("Failed to execute request")
    }
}

pub fn valid_contact() -> Value {
    serde_json::json!({
        "name": "  Grace Hopper ",
        "email": " Grace.Hopper@Example.COM ",
        "company": " Navy Labs ",
        "phone": "",
        "message": "  We would like help automating our intake process. ",
        "service": "ai-automation"
    })
}

pub fn valid_consent() -> Value {
    serde_json::json!({
        "user_id": "anon-7f3c",
        "decision_type": "custom",
        "cookie_settings": {"necessary": true, "analytics": true, "marketing": false},
        "page_url": "https://agency.example/#contact"
    })
}
