//! Server configuration

use crate::error::ConfigError;
use crate::resolve::SiteRoot;
use clap::Parser;
use std::path::PathBuf;

/// Default listening port.
/// Env: PORT
pub const DEFAULT_PORT: u16 = 4173;

/// The server only ever binds to loopback.
pub const LOOPBACK: &str = "127.0.0.1";

#[derive(Debug, Parser)]
#[command(
    name = "invitation-server",
    version,
    about = "Serve the invitation site from a local directory"
)]
pub struct Cli {
    /// Port to listen on
    #[arg(short, long, env = "PORT", default_value_t = DEFAULT_PORT)]
    pub port: u16,

    /// Directory to serve; nothing outside it is ever read
    #[arg(short, long, default_value = ".")]
    pub root: PathBuf,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub port: u16,
    pub root: PathBuf,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            port: DEFAULT_PORT,
            root: PathBuf::from("."),
        }
    }
}

impl From<Cli> for ServerConfig {
    fn from(cli: Cli) -> Self {
        Self {
            port: cli.port,
            root: cli.root,
        }
    }
}

impl ServerConfig {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.port == 0 {
            return Err(ConfigError::InvalidPort);
        }
        Ok(())
    }

    /// Canonicalized root the handler is confined to.
    pub fn site_root(&self) -> Result<SiteRoot, ConfigError> {
        SiteRoot::new(&self.root)
    }

    pub fn bind_addr(&self) -> (&'static str, u16) {
        (LOOPBACK, self.port)
    }

    pub fn url(&self) -> String {
        format!("http://{}:{}", LOOPBACK, self.port)
    }
}
