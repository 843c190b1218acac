use anyhow::Context;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct JwtConfig {
    pub secret: String,
    pub ttl_minutes: i64,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub jwt: JwtConfig,
    pub port: u16,
    pub cors_origin: String,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        // DATABASE_URL wins; otherwise the URL is assembled from the
        // credential triple the deployment provides.
        let database_url = match std::env::var("DATABASE_URL") {
            Ok(url) => url,
            Err(_) => {
                let user = std::env::var("DB_USER").context("DB_USER not set")?;
                let password = std::env::var("DB_PASSWORD").context("DB_PASSWORD not set")?;
                let name = std::env::var("DB_NAME").context("DB_NAME not set")?;
                let host = std::env::var("DB_HOST").unwrap_or_else(|_| "localhost:5432".into());
                format!("postgres://{user}:{password}@{host}/{name}")
            }
        };
        let jwt = JwtConfig {
            secret: std::env::var("TOKEN_SECRET").context("TOKEN_SECRET not set")?,
            ttl_minutes: std::env::var("TOKEN_TTL_MINUTES")
                .ok()
                .and_then(|v| v.parse::<i64>().ok())
                .unwrap_or(60),
        };
        let port = std::env::var("PORT")
            .ok()
            .and_then(|v| v.parse::<u16>().ok())
            .unwrap_or(8002);
        let cors_origin =
            std::env::var("CORS_ORIGIN").unwrap_or_else(|_| "http://localhost:3000".into());
        Ok(Self {
            database_url,
            jwt,
            port,
            cors_origin,
        })
    }
}
