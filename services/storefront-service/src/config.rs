use anyhow::{Context, Result};
use std::fmt::Display;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::str::FromStr;
use tracing::info;

pub(crate) const BIND_ADDR_VAR: &str = "SHOP_BIND_ADDR";
pub(crate) const STATIC_DIR_VAR: &str = "SHOP_STATIC_DIR";

#[derive(Debug, Clone)]
pub(crate) struct Config {
    pub(crate) bind_addr: SocketAddr,
    pub(crate) static_dir: PathBuf,
}

impl Config {
    pub(crate) fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub(crate) fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        Ok(Self {
            bind_addr: try_load(&lookup, BIND_ADDR_VAR, "0.0.0.0:8080")?,
            static_dir: try_load(&lookup, STATIC_DIR_VAR, "./static")?,
        })
    }
}

fn try_load<T>(lookup: &impl Fn(&str) -> Option<String>, key: &str, default: &str) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Display + Send + Sync + 'static,
{
    let raw = match lookup(key) {
        Some(value) if !value.trim().is_empty() => value,
        _ => {
            info!("{key} not set, using default: {default}");
            default.to_owned()
        }
    };

    raw.trim()
        .parse()
        .with_context(|| format!("invalid {key} value: {raw}"))
}
