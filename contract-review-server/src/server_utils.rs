use anyhow::Result;
use listenfd::ListenFd;
use socket2::{Domain, Protocol, Socket, Type};
use std::net::SocketAddr;
use tokio::signal;
use tracing::{info, warn};

/// Take the systemd-passed socket if present, otherwise bind `bind:port`
/// with address/port reuse so a replacement process can start alongside.
pub async fn create_listener(bind: &str, port: u16) -> Result<tokio::net::TcpListener> {
    let mut listenfd = ListenFd::from_env();

    if let Some(listener) = listenfd.take_tcp_listener(0)? {
        info!("🔌 Using systemd socket activation (fd=3)");
        listener.set_nonblocking(true)?;
        return Ok(tokio::net::TcpListener::from_std(listener)?);
    }

    let ip: std::net::IpAddr =
        bind.parse().map_err(|e| anyhow::anyhow!("Invalid bind address '{}': {}", bind, e))?;
    let addr = SocketAddr::new(ip, port);
    let domain = if addr.is_ipv4() { Domain::IPV4 } else { Domain::IPV6 };
    let socket = Socket::new(domain, Type::STREAM, Some(Protocol::TCP))?;

    socket.set_reuse_address(true)?;
    #[cfg(unix)]
    socket.set_reuse_port(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(1024)?;

    info!("🔌 Bound to {}", addr);

    Ok(tokio::net::TcpListener::from_std(socket.into())?)
}

/// Resolve with the name of the first termination signal received.
///
/// A signal source that cannot be installed is logged and never fires, so
/// the other one still triggers shutdown.
pub async fn wait_for_termination() -> &'static str {
    let ctrl_c = async {
        if let Err(e) = signal::ctrl_c().await {
            warn!("Ctrl+C handler unavailable: {}", e);
            std::future::pending::<()>().await;
        }
    };

    #[cfg(unix)]
    let terminate = async {
        match signal::unix::signal(signal::unix::SignalKind::terminate()) {
            Ok(mut sigterm) => {
                sigterm.recv().await;
            }
            Err(e) => {
                warn!("SIGTERM handler unavailable: {}", e);
                std::future::pending::<()>().await;
            }
        }
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => "SIGINT",
        () = terminate => "SIGTERM",
    }
}

/// Graceful-shutdown future for `axum::serve`.
///
/// In-flight analyses are bounded by the provider timeout, so that is the
/// longest the drain can take.
pub async fn shutdown_signal(provider_timeout_ms: u64) {
    let received = wait_for_termination().await;
    info!(
        "🛑 {} received, no new analyses accepted; draining in-flight provider calls (up to {}ms)",
        received, provider_timeout_ms
    );
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_rejects_invalid_bind_address() {
        let err = create_listener("not-an-ip", 0).await.err().map(|e| e.to_string());
        assert!(err.is_some_and(|msg| msg.contains("Invalid bind address")));
    }

    #[tokio::test]
    async fn test_termination_waits_for_a_signal() {
        let waited =
            tokio::time::timeout(std::time::Duration::from_millis(50), wait_for_termination())
                .await;
        assert!(waited.is_err(), "resolved without a signal: {:?}", waited);
    }

    #[tokio::test]
    async fn test_binds_ephemeral_port() {
        let listener = create_listener("127.0.0.1", 0).await;
        let port = listener.ok().and_then(|l| l.local_addr().ok()).map(|a| a.port());
        assert!(port.is_some_and(|p| p != 0));
    }
}
