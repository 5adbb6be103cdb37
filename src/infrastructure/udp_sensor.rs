use async_trait::async_trait;
use tokio::net::UdpSocket;

use crate::application::{AppError, AppResult, GestureSensor};
use crate::domain::GestureId;

/// Receives gesture tokens from the external recognition process over UDP.
/// One datagram carries one UTF-8 gesture identifier.
///
/// Dropping the sensor (the recognition loop does so when it stops) closes
/// the socket.
pub struct UdpGestureSensor {
    socket: UdpSocket,
    buf: [u8; 256],
}

impl UdpGestureSensor {
    pub async fn bind(addr: &str) -> AppResult<Self> {
        let socket = UdpSocket::bind(addr)
            .await
            .map_err(|e| AppError::Sensor(format!("bind {addr}: {e}")))?;
        tracing::info!(%addr, "listening for gesture datagrams");
        Ok(Self {
            socket,
            buf: [0; 256],
        })
    }

    pub fn local_addr(&self) -> AppResult<std::net::SocketAddr> {
        self.socket
            .local_addr()
            .map_err(|e| AppError::Sensor(e.to_string()))
    }
}

#[async_trait]
impl GestureSensor for UdpGestureSensor {
    async fn next_gesture(&mut self) -> AppResult<Option<GestureId>> {
        loop {
            let (len, src) = self
                .socket
                .recv_from(&mut self.buf)
                .await
                .map_err(|e| AppError::Sensor(e.to_string()))?;

            match std::str::from_utf8(&self.buf[..len]) {
                Ok(s) => {
                    let token = s.trim();
                    if token.is_empty() {
                        continue;
                    }
                    tracing::debug!(%src, gesture = token, "datagram received");
                    return Ok(Some(GestureId::from(token)));
                }
                Err(_) => {
                    tracing::warn!(%src, "dropping non-utf8 datagram");
                }
            }
        }
    }
}
