use anyhow::Context;

const DEFAULT_BIND_ADDRESS: &str = "0.0.0.0:3000";

#[derive(Debug, Clone)]
pub struct Config {
    pub bind_address: String,
    pub remote_api_base_url: String,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let remote_api_base_url =
            std::env::var("REMOTE_API_BASE_URL").context("REMOTE_API_BASE_URL is not set")?;
        let bind_address =
            std::env::var("BIND_ADDRESS").unwrap_or_else(|_| DEFAULT_BIND_ADDRESS.to_string());
        Ok(Self {
            bind_address,
            remote_api_base_url,
        })
    }
}
