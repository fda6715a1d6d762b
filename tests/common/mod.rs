//! Shared utilities for integration tests.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

use tempfile::TempDir;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use wikid::config::ServerConfig;
use wikid::health::HealthFlag;
use wikid::http::HttpServer;
use wikid::lifecycle::Shutdown;
use wikid::security::AuthConfig;

/// A wikid server running on an ephemeral port with a temp document dir.
#[allow(dead_code)]
pub struct TestServer {
    pub addr: SocketAddr,
    pub document_path: PathBuf,
    pub health: HealthFlag,
    pub shutdown: Shutdown,
    pub task: JoinHandle<Result<(), std::io::Error>>,
    _dir: TempDir,
}

#[allow(dead_code)]
impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

/// Credentials used by most upload tests.
#[allow(dead_code)]
pub fn alice() -> AuthConfig {
    AuthConfig {
        user: "alice".into(),
        password: "secret".into(),
    }
}

/// Start a server with the given auth secrets and wait until it serves.
pub async fn spawn_server(auth: AuthConfig) -> TestServer {
    let dir = tempfile::tempdir().unwrap();
    let document_path = dir.path().join("wiki.html");

    let mut config = ServerConfig::default();
    config.document.path = document_path.clone();
    config.auth = auth;

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    let server = HttpServer::new(config);
    let health = server.health();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let task = tokio::spawn(server.run(listener, rx));

    // The serve task raises the flag just before accepting.
    for _ in 0..100 {
        if health.is_serving() {
            break;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    assert!(health.is_serving(), "server did not start serving");

    TestServer {
        addr,
        document_path,
        health,
        shutdown,
        task,
        _dir: dir,
    }
}
