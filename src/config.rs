use anyhow::{bail, Context, Result};
use dioxus::logger::tracing::warn;
use reqwest::Url;

use crate::helpers::read_env_var;

pub const API_URL_VAR: &str = "MICROBENCH_API_URL";
pub const DEFAULT_API_URL: &str = "http://localhost:9090";

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    /// Base URL of the benchmark comparison backend, without trailing slash.
    pub api_url: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_API_URL.into(),
        }
    }
}

impl Config {
    /// Runtime environment first, then whatever was set when the crate was built.
    pub fn load() -> Self {
        let configured = read_env_var(API_URL_VAR)
            .or_else(|| option_env!("MICROBENCH_API_URL").map(str::to_owned));

        match Self::from_api_url(configured) {
            Ok(config) => config,
            Err(err) => {
                warn!("{err:#}, using {DEFAULT_API_URL}");
                Self::default()
            }
        }
    }

    pub fn from_api_url(api_url: Option<String>) -> Result<Self> {
        let Some(api_url) = api_url.filter(|url| !url.trim().is_empty()) else {
            return Ok(Self::default());
        };

        let api_url = api_url.trim().trim_end_matches('/').to_owned();
        let parsed =
            Url::parse(&api_url).with_context(|| format!("{API_URL_VAR}={api_url} is not a URL"))?;
        if !matches!(parsed.scheme(), "http" | "https") {
            bail!("{API_URL_VAR}={api_url} must use http or https");
        }

        Ok(Self { api_url })
    }
}
