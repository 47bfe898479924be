use eyre::Report;
use secrecy::SecretString;
use std::env;

/// Credentials for verifying bearer tokens minted by the external identity
/// provider. Tokens are HS256-signed with a shared secret and carry a pinned
/// issuer and audience.
#[derive(Clone, Debug)]
pub struct AuthInfo {
    pub token_secret: SecretString,
    pub token_issuer: String,
    pub token_audience: String,
}

impl AuthInfo {
    pub fn new() -> Result<AuthInfo, Report> {
        let token_secret =
            env::var("IDP_TOKEN_SECRET").expect("IDP_TOKEN_SECRET must be set in environment variables");

        if token_secret.len() < 32 {
            panic!("IDP_TOKEN_SECRET must be at least 32 characters long");
        }

        Ok(Self {
            token_secret: SecretString::new(token_secret.into()),
            token_issuer: env::var("IDP_ISSUER")
                .map_err(|e| eyre::eyre!("Issuer environment variable not set: {}", e))?,
            token_audience: env::var("IDP_AUDIENCE")
                .map_err(|e| eyre::eyre!("Audience environment variable not set: {}", e))?,
        })
    }
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub auth: AuthInfo,

    pub app_url: String,

    /// Pending top-up claims older than this are expired by the daily
    /// maintenance task.
    pub topup_expiry_days: i64,

    /// Answered tickets idle longer than this are auto-closed.
    pub ticket_idle_close_days: i64,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, Report> {
        Ok(Self {
            auth: AuthInfo::new()?,

            app_url: env::var("APP_URL").unwrap_or_else(|_| "http://localhost:8080".into()),

            topup_expiry_days: env::var("TOPUP_EXPIRY_DAYS")
                .unwrap_or_else(|_| "90".into())
                .parse()?,

            ticket_idle_close_days: env::var("TICKET_IDLE_CLOSE_DAYS")
                .unwrap_or_else(|_| "30".into())
                .parse()?,
        })
    }
}
