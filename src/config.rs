use std::env;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub database_url: String,
    pub session_secret: String,
    pub admin_email: String,
    pub admin_password: String,
    pub bind_addr: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, String> {
        let database_url =
            env::var("DATABASE_URL").map_err(|_| "DATABASE_URL must be set".to_string())?;

        let session_secret =
            env::var("SESSION_SECRET").map_err(|_| "SESSION_SECRET must be set".to_string())?;

        // Session tokens are only as strong as the HMAC key behind them
        if session_secret.len() < 32 {
            return Err("SESSION_SECRET must be at least 32 characters".to_string());
        }

        let admin_email =
            env::var("ADMIN_EMAIL").map_err(|_| "ADMIN_EMAIL must be set".to_string())?;

        let admin_password =
            env::var("ADMIN_PASSWORD").map_err(|_| "ADMIN_PASSWORD must be set".to_string())?;

        let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());

        Ok(Self {
            database_url,
            session_secret,
            admin_email,
            admin_password,
            bind_addr,
        })
    }
}
