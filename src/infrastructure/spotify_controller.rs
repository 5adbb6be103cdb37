use async_trait::async_trait;
use reqwest::header::AUTHORIZATION;
use serde::Deserialize;

use crate::application::{AppError, AppResult, PlaybackController};
use crate::domain::PlaybackAction;

const API_BASE: &str = "https://api.spotify.com/v1";
const ACCOUNTS_TOKEN_URL: &str = "https://accounts.spotify.com/api/token";
const VOLUME_STEP: u8 = 10;

/// Playback controller backed by the Spotify Web API player endpoints.
///
/// Holds a bearer token handed in at construction; acquiring and refreshing
/// credentials interactively is not this component's job (see
/// `refresh_access_token` for the non-interactive exchange).
pub struct SpotifyController {
    client: reqwest::Client,
    access_token: String,
}

impl SpotifyController {
    pub fn new(access_token: String) -> Self {
        Self {
            client: reqwest::Client::new(),
            access_token,
        }
    }

    fn bearer(&self) -> String {
        format!("Bearer {}", self.access_token)
    }

    async fn player_state(&self) -> AppResult<Option<PlayerState>> {
        let resp = self
            .client
            .get(format!("{API_BASE}/me/player"))
            .header(AUTHORIZATION, self.bearer())
            .send()
            .await
            .map_err(|e| AppError::Controller(e.to_string()))?;

        // 204: no active device
        if resp.status() == reqwest::StatusCode::NO_CONTENT {
            return Ok(None);
        }

        let state = resp
            .error_for_status()
            .map_err(|e| AppError::Controller(e.to_string()))?
            .json::<PlayerState>()
            .await
            .map_err(|e| AppError::Controller(e.to_string()))?;

        Ok(Some(state))
    }

    async fn put(&self, path_and_query: &str) -> AppResult<()> {
        self.client
            .put(format!("{API_BASE}{path_and_query}"))
            .header(AUTHORIZATION, self.bearer())
            .send()
            .await
            .map_err(|e| AppError::Controller(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Controller(e.to_string()))?;
        Ok(())
    }

    async fn post(&self, path: &str) -> AppResult<()> {
        self.client
            .post(format!("{API_BASE}{path}"))
            .header(AUTHORIZATION, self.bearer())
            .send()
            .await
            .map_err(|e| AppError::Controller(e.to_string()))?
            .error_for_status()
            .map_err(|e| AppError::Controller(e.to_string()))?;
        Ok(())
    }
}

#[derive(Debug, Deserialize)]
struct PlayerState {
    is_playing: bool,
    device: Option<Device>,
}

#[derive(Debug, Deserialize)]
struct Device {
    volume_percent: Option<u8>,
}

#[async_trait]
impl PlaybackController for SpotifyController {
    async fn perform(&self, action: PlaybackAction) -> AppResult<()> {
        match action {
            PlaybackAction::PlayPause => match self.player_state().await? {
                None => Err(AppError::Controller("no active playback device".into())),
                Some(s) if s.is_playing => self.put("/me/player/pause").await,
                Some(_) => self.put("/me/player/play").await,
            },
            PlaybackAction::NextTrack => self.post("/me/player/next").await,
            PlaybackAction::PreviousTrack => self.post("/me/player/previous").await,
            PlaybackAction::VolumeUp | PlaybackAction::VolumeDown => {
                let state = self
                    .player_state()
                    .await?
                    .ok_or_else(|| AppError::Controller("no active playback device".into()))?;
                let current = state
                    .device
                    .and_then(|d| d.volume_percent)
                    .ok_or_else(|| AppError::Controller("device does not report volume".into()))?;
                let target = if action == PlaybackAction::VolumeUp {
                    current.saturating_add(VOLUME_STEP).min(100)
                } else {
                    current.saturating_sub(VOLUME_STEP)
                };
                self.put(&format!("/me/player/volume?volume_percent={target}"))
                    .await
            }
        }
    }
}

#[derive(Debug, Deserialize)]
struct TokenResp {
    access_token: String,
}

/// Exchange a stored refresh token for a fresh access token.
pub async fn refresh_access_token(
    client_id: &str,
    client_secret: &str,
    refresh_token: &str,
) -> AppResult<String> {
    let client = reqwest::Client::new();
    let resp = client
        .post(ACCOUNTS_TOKEN_URL)
        .basic_auth(client_id, Some(client_secret))
        .form(&[
            ("grant_type", "refresh_token"),
            ("refresh_token", refresh_token),
        ])
        .send()
        .await
        .map_err(|e| AppError::Controller(e.to_string()))?
        .error_for_status()
        .map_err(|e| AppError::Controller(e.to_string()))?;

    let token = resp
        .json::<TokenResp>()
        .await
        .map_err(|e| AppError::Controller(e.to_string()))?;

    Ok(token.access_token)
}
