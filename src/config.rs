use anyhow::Context;

#[derive(Debug, Clone)]
pub struct Config {
    pub db_host: String,
    pub db_username: String,
    pub db_password: String,
    pub db_name: String,
    pub host: String,
    pub port: u16,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            db_host: std::env::var("DB_HOST").unwrap_or_else(|_| "localhost".to_string()),
            db_username: std::env::var("DB_USERNAME").unwrap_or_else(|_| "postgres".to_string()),
            db_password: std::env::var("DB_PASSWORD")
                .context("DB_PASSWORD must be set")?,
            db_name: std::env::var("DB_NAME").unwrap_or_else(|_| "products".to_string()),
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .unwrap_or_else(|_| "3000".to_string())
                .parse()
                .context("PORT must be a valid number")?,
        })
    }

    /// Postgres connection string assembled from the individual parts.
    pub fn database_url(&self) -> String {
        format!(
            "postgres://{}:{}@{}/{}",
            self.db_username, self.db_password, self.db_host, self.db_name
        )
    }
}
