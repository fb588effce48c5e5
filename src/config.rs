use std::net::IpAddr;

#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: IpAddr,
    pub port: u16,
    pub log_level: String,
    pub admin: Option<AdminBootstrap>,
}

/// Superuser seeded at startup when both variables are present.
#[derive(Debug, Clone)]
pub struct AdminBootstrap {
    pub email: String,
    pub password: String,
}

impl Config {
    pub fn from_env() -> Result<Self, String> {
        let database_url = env_or("DATABASE_URL", "sqlite://accountd.db?mode=rwc");

        let host: IpAddr = env_or("ACCOUNTD_HOST", "0.0.0.0")
            .parse()
            .map_err(|e| format!("Invalid ACCOUNTD_HOST: {e}"))?;

        let port: u16 = env_or("ACCOUNTD_PORT", "3000")
            .parse()
            .map_err(|e| format!("Invalid ACCOUNTD_PORT: {e}"))?;

        let log_level = env_or("ACCOUNTD_LOG_LEVEL", "info");

        let admin = match (
            std::env::var("ACCOUNTD_ADMIN_EMAIL").ok(),
            std::env::var("ACCOUNTD_ADMIN_PASSWORD").ok(),
        ) {
            (Some(email), Some(password)) => Some(AdminBootstrap { email, password }),
            _ => None,
        };

        Ok(Config {
            database_url,
            host,
            port,
            log_level,
            admin,
        })
    }
}

fn env_or(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}
