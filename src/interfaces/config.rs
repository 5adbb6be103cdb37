use std::net::SocketAddr;
use std::time::Duration;

const DEFAULT_BIND: &str = "0.0.0.0:5000";
const DEFAULT_UDP_PORT: u16 = 5005;
const DEFAULT_COOLDOWN_SECONDS: u64 = 2;

/// Process configuration, read from the environment (`.env` honored).
#[derive(Debug, Clone)]
pub struct Config {
    pub bind: SocketAddr,
    pub udp_port: u16,
    pub cooldown: Duration,
    pub spotify: SpotifyConfig,
}

/// Credential material handed to the external auth concern. The daemon only
/// ever consumes a ready access token or performs a refresh-token exchange.
#[derive(Debug, Clone)]
pub struct SpotifyConfig {
    pub client_id: Option<String>,
    pub client_secret: Option<String>,
    pub redirect_uri: Option<String>,
    pub access_token: Option<String>,
    pub refresh_token: Option<String>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        let bind = match std::env::var("WAVECTL_BIND") {
            Ok(v) => v
                .parse::<SocketAddr>()
                .map_err(|e| anyhow::anyhow!("WAVECTL_BIND {v:?}: {e}"))?,
            Err(_) => DEFAULT_BIND.parse().expect("default bind is valid"),
        };

        let udp_port = match std::env::var("WAVECTL_UDP_PORT") {
            Ok(v) => v
                .parse::<u16>()
                .map_err(|e| anyhow::anyhow!("WAVECTL_UDP_PORT {v:?}: {e}"))?,
            Err(_) => DEFAULT_UDP_PORT,
        };

        let cooldown_seconds = match std::env::var("WAVECTL_COOLDOWN_SECONDS") {
            Ok(v) => v
                .parse::<u64>()
                .map_err(|e| anyhow::anyhow!("WAVECTL_COOLDOWN_SECONDS {v:?}: {e}"))?,
            Err(_) => DEFAULT_COOLDOWN_SECONDS,
        };

        Ok(Self {
            bind,
            udp_port,
            cooldown: Duration::from_secs(cooldown_seconds),
            spotify: SpotifyConfig {
                client_id: std::env::var("SPOTIFY_CLIENT_ID").ok(),
                client_secret: std::env::var("SPOTIFY_CLIENT_SECRET").ok(),
                redirect_uri: std::env::var("SPOTIFY_REDIRECT_URI").ok(),
                access_token: std::env::var("SPOTIFY_ACCESS_TOKEN").ok(),
                refresh_token: std::env::var("SPOTIFY_REFRESH_TOKEN").ok(),
            },
        })
    }
}
