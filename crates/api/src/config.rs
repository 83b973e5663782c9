//! Process configuration, read from the environment (and `.env` if present).

use std::fmt::Display;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use anyhow::{Context, bail};
use serde::Deserialize;

use launchpad_auth::{MatchMode, RoutePolicy};
use launchpad_auth::routes::{DEFAULT_API_PREFIX, DEFAULT_PUBLIC_ROUTES, DEFAULT_SIGN_IN_PATH};

const DEV_SESSION_SECRET: &str = "dev-session-secret";
const DEFAULT_SESSION_COOKIE: &str = "session-token";
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_SUBMIT_DELAY_MS: u64 = 1000;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Env {
    #[default]
    Local,
    Test,
    Prod,
}

impl Env {
    fn allows_dev_secret(self) -> bool {
        matches!(self, Self::Local | Self::Test)
    }
}

impl Display for Env {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Env::Local => write!(f, "local"),
            Env::Test => write!(f, "test"),
            Env::Prod => write!(f, "prod"),
        }
    }
}

// Intermediate struct for deserializing environment variables; everything is
// optional here and defaults are applied in `Config::from_raw`.
#[derive(Debug, Default, Deserialize)]
pub struct RawConfig {
    env: Option<Env>,
    bind_addr: Option<String>,
    port: Option<u16>,
    session_secret: Option<String>,
    session_cookie: Option<String>,
    // Comma separated.
    public_routes: Option<String>,
    api_prefix: Option<String>,
    sign_in_path: Option<String>,
    route_matching: Option<String>,
    submit_delay_ms: Option<u64>,
}

/// Validated configuration.
#[derive(Debug, Clone)]
pub struct Config {
    env: Env,
    bind_addr: String,
    port: u16,
    session_secret: String,
    session_cookie: String,
    public_routes: Vec<String>,
    api_prefix: String,
    sign_in_path: String,
    route_matching: MatchMode,
    submit_delay: Duration,
}

impl Config {
    /// Load `.env` (if any), then read and validate the environment.
    pub fn init() -> anyhow::Result<Self> {
        if let Err(e) = dotenvy::dotenv()
            && !e.not_found()
        {
            return Err(e).context("failed to load .env");
        }

        let raw: RawConfig =
            serde_env::from_env().context("failed to read configuration from environment")?;
        Self::from_raw(raw)
    }

    pub fn from_raw(raw: RawConfig) -> anyhow::Result<Self> {
        let env = raw.env.unwrap_or_default();

        let session_secret = match raw.session_secret.filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if env.allows_dev_secret() => {
                tracing::warn!("SESSION_SECRET not set; using insecure dev default");
                DEV_SESSION_SECRET.to_string()
            }
            None => bail!("SESSION_SECRET is required when ENV={env}"),
        };

        let public_routes: Vec<String> = match raw.public_routes {
            Some(list) => list
                .split(',')
                .map(str::trim)
                .filter(|r| !r.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_PUBLIC_ROUTES.iter().map(|r| (*r).to_string()).collect(),
        };
        for route in &public_routes {
            require_absolute("PUBLIC_ROUTES", route)?;
        }

        let api_prefix = raw.api_prefix.unwrap_or_else(|| DEFAULT_API_PREFIX.to_string());
        require_absolute("API_PREFIX", &api_prefix)?;

        let sign_in_path = raw
            .sign_in_path
            .unwrap_or_else(|| DEFAULT_SIGN_IN_PATH.to_string());
        require_absolute("SIGN_IN_PATH", &sign_in_path)?;

        let route_matching = match raw.route_matching {
            Some(mode) => mode.parse::<MatchMode>().context("invalid ROUTE_MATCHING")?,
            None => MatchMode::default(),
        };

        let bind_addr = raw.bind_addr.unwrap_or_else(|| "0.0.0.0".to_string());
        bind_addr
            .parse::<IpAddr>()
            .with_context(|| format!("BIND_ADDR is not an IP address: {bind_addr}"))?;

        Ok(Self {
            env,
            bind_addr,
            port: raw.port.unwrap_or(DEFAULT_PORT),
            session_secret,
            session_cookie: raw
                .session_cookie
                .unwrap_or_else(|| DEFAULT_SESSION_COOKIE.to_string()),
            public_routes,
            api_prefix,
            sign_in_path,
            route_matching,
            submit_delay: Duration::from_millis(raw.submit_delay_ms.unwrap_or(DEFAULT_SUBMIT_DELAY_MS)),
        })
    }

    /// Test configuration: fixed secret, no submit delay.
    pub fn new_for_test(session_secret: impl Into<String>) -> Self {
        Self {
            env: Env::Test,
            bind_addr: "127.0.0.1".to_string(),
            port: 0,
            session_secret: session_secret.into(),
            session_cookie: DEFAULT_SESSION_COOKIE.to_string(),
            public_routes: DEFAULT_PUBLIC_ROUTES.iter().map(|r| (*r).to_string()).collect(),
            api_prefix: DEFAULT_API_PREFIX.to_string(),
            sign_in_path: DEFAULT_SIGN_IN_PATH.to_string(),
            route_matching: MatchMode::default(),
            submit_delay: Duration::ZERO,
        }
    }

    pub fn env(&self) -> Env {
        self.env
    }

    pub fn bind_addr(&self) -> &str {
        &self.bind_addr
    }

    pub fn port(&self) -> u16 {
        self.port
    }

    pub fn socket_addr(&self) -> anyhow::Result<SocketAddr> {
        let ip: IpAddr = self.bind_addr.parse()?;
        Ok(SocketAddr::from((ip, self.port)))
    }

    pub fn session_secret(&self) -> &str {
        &self.session_secret
    }

    pub fn session_cookie(&self) -> &str {
        &self.session_cookie
    }

    pub fn sign_in_path(&self) -> &str {
        &self.sign_in_path
    }

    pub fn route_matching(&self) -> MatchMode {
        self.route_matching
    }

    pub fn submit_delay(&self) -> Duration {
        self.submit_delay
    }

    pub fn route_policy(&self) -> RoutePolicy {
        RoutePolicy::new(
            self.public_routes.iter().cloned(),
            self.api_prefix.clone(),
            self.sign_in_path.clone(),
        )
        .with_match_mode(self.route_matching)
    }
}

fn require_absolute(var: &str, path: &str) -> anyhow::Result<()> {
    if !path.starts_with('/') {
        bail!("{var} entries must start with '/': {path}");
    }
    Ok(())
}
