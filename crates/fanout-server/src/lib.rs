//! # fanout-server
//!
//! HTTP API for the batch operations, built on axum.
//!
//! ## Endpoints
//!
//! - `POST /linear_factorial` - arbitrary-precision factorial, sequential
//! - `POST /linear_fib` - Fibonacci, sequential
//! - `POST /linear_primechecker` - primality, sequential
//! - `POST /concurrent_factorial` - fixed-width factorial, one task per element
//! - `POST /concurrent_fib` - Fibonacci, one task per element
//! - `POST /concurrent_primechecker` - primality, one task per element
//! - `GET /health` - liveness probe
//! - `GET /operations` - list of operation names
//!
//! Every `POST` takes `{"numbers": [..]}` and answers
//! `{"results": [..], "execution_time": ".."}`.

pub mod error;
pub mod routes;

use std::io;

use tokio::net::{TcpListener, ToSocketAddrs};
use tracing::{info, warn};

pub use error::ApiError;
pub use routes::create_router;

/// Bind a TCP listener for the service.
pub async fn bind(addr: impl ToSocketAddrs) -> io::Result<TcpListener> {
    TcpListener::bind(addr).await
}

/// Serve the router on `listener` until Ctrl-C.
pub async fn serve(listener: TcpListener) -> io::Result<()> {
    let addr = listener.local_addr()?;
    info!(%addr, "fanout server listening");
    for op in fanout_orchestration::operation_selection::available_operations() {
        info!("  POST http://{addr}/{op}");
    }

    axum::serve(listener, create_router())
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    info!("fanout server stopped");
    Ok(())
}

async fn shutdown_signal() {
    match tokio::signal::ctrl_c().await {
        Ok(()) => info!("shutdown signal received"),
        Err(e) => {
            warn!(error = %e, "cannot listen for Ctrl-C; serving until killed");
            std::future::pending::<()>().await;
        }
    }
}
