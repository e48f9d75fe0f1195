use serde::Deserialize;

/// Settings for verifying tokens issued by the external auth provider.
#[derive(Debug, Clone, Deserialize)]
pub struct AuthConfig {
    pub secret: String,
    pub issuer: String,
    pub audience: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AppConfig {
    pub database_url: String,
    pub max_connections: u32,
    pub auth: AuthConfig,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = std::env::var("DATABASE_URL")?;
        let max_connections = std::env::var("DB_MAX_CONNECTIONS")
            .ok()
            .and_then(|v| v.parse::<u32>().ok())
            .unwrap_or(10);
        let auth = AuthConfig {
            secret: std::env::var("AUTH_SECRET")?,
            issuer: std::env::var("AUTH_ISSUER").unwrap_or_else(|_| "nutrisense".into()),
            audience: std::env::var("AUTH_AUDIENCE").unwrap_or_else(|_| "nutrisense-users".into()),
        };
        Ok(Self {
            database_url,
            max_connections,
            auth,
        })
    }
}
