use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;

use clap::Parser;
use tokio::sync::watch;
use tracing_subscriber::EnvFilter;

use wavectl::application::PlaybackController;
use wavectl::application::usecases::{DispatchManager, RecognitionLoop};
use wavectl::domain::{ActionRegistry, GestureId};
use wavectl::infrastructure::{
    console_controller::ConsoleController, scripted_sensor::ScriptedSensor,
    spotify_controller::{SpotifyController, refresh_access_token},
    udp_sensor::UdpGestureSensor,
};
use wavectl::interfaces::config::Config;
use wavectl::interfaces::http_api::{ApiState, build_router};

#[derive(Parser, Debug)]
#[command(name = "wavectl")]
struct Args {
    /// HTTP bind address, e.g. 0.0.0.0:5000 (overrides WAVECTL_BIND)
    #[arg(long)]
    bind: Option<SocketAddr>,

    /// Seconds between allowed firings of the same gesture (overrides env)
    #[arg(long)]
    cooldown_seconds: Option<u64>,

    /// UDP port the recognition sensor listens on (overrides env)
    #[arg(long)]
    udp_port: Option<u16>,

    /// Gesture source: udp | scripted
    #[arg(long, default_value = "udp")]
    source: String,

    /// Do not call the playback service (console output only)
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::from_default_env().add_directive("wavectl=info".parse().unwrap()),
        )
        .init();
    if dotenvy::dotenv().is_err() {
        let _ = dotenvy::from_path(std::path::Path::new(env!("CARGO_MANIFEST_DIR")).join(".env"));
    }
    let args = Args::parse();

    // 1) config
    let mut cfg = match Config::from_env() {
        Ok(c) => c,
        Err(e) => {
            tracing::error!("Invalid configuration: {e}");
            std::process::exit(1);
        }
    };
    if let Some(bind) = args.bind {
        cfg.bind = bind;
    }
    if let Some(secs) = args.cooldown_seconds {
        cfg.cooldown = Duration::from_secs(secs);
    }
    if let Some(port) = args.udp_port {
        cfg.udp_port = port;
    }

    // 2) playback controller
    let controller: Arc<dyn PlaybackController> = if args.dry_run {
        tracing::warn!("--dry-run enabled: actions print to console only");
        Arc::new(ConsoleController::new())
    } else if let Some(token) = cfg.spotify.access_token.clone() {
        Arc::new(SpotifyController::new(token))
    } else if let (Some(id), Some(secret), Some(refresh)) = (
        cfg.spotify.client_id.as_deref(),
        cfg.spotify.client_secret.as_deref(),
        cfg.spotify.refresh_token.as_deref(),
    ) {
        match refresh_access_token(id, secret, refresh).await {
            Ok(token) => Arc::new(SpotifyController::new(token)),
            Err(e) => {
                tracing::error!("Spotify token refresh failed: {e}");
                std::process::exit(1);
            }
        }
    } else {
        tracing::error!(
            "no playback credentials: set SPOTIFY_ACCESS_TOKEN, or SPOTIFY_CLIENT_ID + SPOTIFY_CLIENT_SECRET + SPOTIFY_REFRESH_TOKEN, or pass --dry-run"
        );
        std::process::exit(1);
    };

    // 3) the one shared dispatcher
    let registry = ActionRegistry::with_default_bindings();
    tracing::info!(
        bindings = registry.len(),
        cooldown_secs = cfg.cooldown.as_secs(),
        "dispatcher ready"
    );
    let manager = Arc::new(DispatchManager::new(registry, cfg.cooldown, controller));

    // 4) recognition-loop producer
    let (shutdown_tx, shutdown_rx) = watch::channel(false);
    let recognition = {
        let manager = manager.clone();
        let source = args.source.clone();
        let udp_addr = format!("0.0.0.0:{}", cfg.udp_port);
        tokio::spawn(async move {
            let recognition_loop = RecognitionLoop::new(manager, shutdown_rx);
            let run = match source.as_str() {
                "scripted" => {
                    let sensor = ScriptedSensor::new([
                        GestureId::from("play_pause"),
                        GestureId::from("swipe_right"),
                        GestureId::from("play_pause"),
                    ]);
                    recognition_loop.run(Box::new(sensor)).await
                }
                "udp" => match UdpGestureSensor::bind(&udp_addr).await {
                    Ok(sensor) => recognition_loop.run(Box::new(sensor)).await,
                    Err(e) => {
                        tracing::error!("recognition source unavailable: {e}");
                        Ok(())
                    }
                },
                other => {
                    tracing::error!("unknown --source {other:?} (use udp or scripted)");
                    Ok(())
                }
            };
            // sensor loss must not take the HTTP producer down with it
            if let Err(e) = run {
                tracing::error!("recognition loop aborted: {e}");
            }
        })
    };

    // 5) HTTP producer
    let router = build_router(ApiState {
        manager: manager.clone(),
    });
    let listener = match tokio::net::TcpListener::bind(cfg.bind).await {
        Ok(l) => l,
        Err(e) => {
            tracing::error!("failed to bind {}: {e}", cfg.bind);
            std::process::exit(1);
        }
    };
    tracing::info!("HTTP listening on {}", cfg.bind);

    let server = axum::serve(listener, router).with_graceful_shutdown(async {
        if let Err(e) = tokio::signal::ctrl_c().await {
            tracing::error!("failed to install interrupt handler: {e}");
        }
        tracing::info!("shutdown signal received");
    });

    if let Err(e) = server.await {
        tracing::error!("HTTP server failed: {e}");
    }

    // 6) stop the recognition loop, bounded grace
    let _ = shutdown_tx.send(true);
    if tokio::time::timeout(Duration::from_secs(5), recognition)
        .await
        .is_err()
    {
        tracing::warn!("recognition loop did not stop within grace period");
    }

    tracing::info!("bye");
}
