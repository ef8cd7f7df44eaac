//! the `serve` subcommand - runs the http server.

use std::path::PathBuf;
use std::sync::Arc;

use clap::Args;
use color_eyre::eyre::{Context, Result};
use gatewarden_authz::AuthzEngine;
use gatewarden_session::{HttpValidator, SessionCache};
use gatewarden_types::Config;
use tokio::net::TcpListener;
use tracing::{Level, debug, info};
use tracing_subscriber::FmtSubscriber;

use crate::create_app;

/// default config file search paths (in order of priority).
const CONFIG_SEARCH_PATHS: &[&str] = &[
    "/etc/gatewarden/config.toml",
    "~/.config/gatewarden/config.toml",
    "./config.toml",
];

/// run the gatewarden http server
#[derive(Args, Debug)]
pub struct ServeCommand {
    /// path to config file (toml format)
    #[arg(short, long, env = "GATEWARDEN_CONFIG")]
    config: Option<PathBuf>,

    /// address to listen on
    #[arg(long, env = "GATEWARDEN_LISTEN_ADDR")]
    listen_addr: Option<String>,

    /// base url of the authentication service
    #[arg(long, env = "GATEWARDEN_AUTH_URL")]
    auth_url: Option<String>,

    /// session cache ttl in seconds
    #[arg(long, env = "GATEWARDEN_CACHE_TTL_SECS")]
    cache_ttl_secs: Option<u64>,

    /// log level
    #[arg(long, env = "GATEWARDEN_LOG_LEVEL")]
    log_level: Option<String>,
}

impl ServeCommand {
    /// find and load config file, returning none if no config file is found.
    fn load_config_file(config_path: Option<&PathBuf>) -> Result<Option<Config>> {
        // if explicit path provided, it must exist
        if let Some(path) = config_path {
            let content = std::fs::read_to_string(path)
                .with_context(|| format!("failed to read config file: {:?}", path))?;
            let config: Config = toml::from_str(&content)
                .with_context(|| format!("failed to parse config file: {:?}", path))?;
            return Ok(Some(config));
        }

        // search default paths
        for path_str in CONFIG_SEARCH_PATHS {
            let path = PathBuf::from(shellexpand::tilde(path_str).as_ref());
            if path.exists() {
                debug!("Found config file at {:?}", path);
                let content = std::fs::read_to_string(&path)
                    .with_context(|| format!("failed to read config file: {:?}", path))?;
                let config: Config = toml::from_str(&content)
                    .with_context(|| format!("failed to parse config file: {:?}", path))?;
                return Ok(Some(config));
            }
        }

        Ok(None)
    }

    /// convert cli arguments into a config struct, merging with config file if present.
    ///
    /// priority order: defaults -> config file -> cli flags
    fn into_config(self) -> Result<Config> {
        let mut config = match Self::load_config_file(self.config.as_ref())? {
            Some(file_config) => {
                info!("Loaded configuration from file");
                file_config
            }
            None => {
                debug!("No config file found, using defaults");
                Config::default()
            }
        };

        // cli overrides (only if explicitly set)
        if let Some(listen_addr) = self.listen_addr {
            config.listen_addr = listen_addr;
        }
        if let Some(auth_url) = self.auth_url {
            config.auth.base_url = auth_url;
        }
        if let Some(ttl) = self.cache_ttl_secs {
            config.auth.cache_ttl_secs = ttl;
        }

        Ok(config)
    }

    /// run the serve command
    pub async fn run(self) -> Result<()> {
        // initialize logging (use CLI override or default to info)
        let log_level_str = self.log_level.clone().unwrap_or_else(|| "info".to_string());
        let log_level = match log_level_str.to_lowercase().as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        let subscriber = FmtSubscriber::builder().with_max_level(log_level).finish();
        tracing::subscriber::set_global_default(subscriber)?;

        info!("Starting gatewarden...");

        let config = self.into_config()?;
        info!("Listen address: {}", config.listen_addr);
        info!("Auth service: {}", config.auth.base_url);
        info!("Session cache TTL: {}s", config.auth.cache_ttl_secs);

        let transport =
            HttpValidator::new(&config.auth).context("failed to build validation transport")?;
        let sessions = Arc::new(SessionCache::new(
            Arc::new(transport),
            config.auth.cache_ttl(),
        ));
        let authz = AuthzEngine::default();

        let app = create_app(sessions, authz, config.clone());

        let listener = TcpListener::bind(&config.listen_addr)
            .await
            .with_context(|| format!("failed to bind {}", config.listen_addr))?;

        info!("Listening on {}", config.listen_addr);
        axum::serve(listener, app)
            .await
            .context("server exited with error")?;

        Ok(())
    }
}
