//! Runtime configuration, read from the environment once at startup.

use std::env;

use anyhow::anyhow;

pub struct Config {
    pub bind_addr: String,
    pub static_dir: String,
    pub resend_api_key: String,
    pub to_email: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Ok(Self {
            bind_addr: env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string()),
            static_dir: env::var("STATIC_DIR").unwrap_or_else(|_| "dist".to_string()),
            resend_api_key: env::var("RESEND_API_KEY")
                .map_err(|_| anyhow!("RESEND_API_KEY must be configured"))?,
            to_email: env::var("TO_EMAIL").map_err(|_| anyhow!("TO_EMAIL must be configured"))?,
        })
    }
}
