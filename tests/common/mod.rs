//! Shared utilities for integration testing.

use std::future::Future;
use std::net::SocketAddr;
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpListener;

use drng_monitor::config::MonitorConfig;
use drng_monitor::{Location, Reachability, StatusSink};

/// Start a programmable mock backend on an ephemeral port.
///
/// `f` receives the request path and returns the status code and body.
#[allow(dead_code)]
pub async fn start_programmable_backend<F, Fut>(f: F) -> SocketAddr
where
    F: Fn(String) -> Fut + Send + Sync + 'static,
    Fut: Future<Output = (u16, String)> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let f = Arc::new(f);

    tokio::spawn(async move {
        loop {
            match listener.accept().await {
                Ok((mut socket, _)) => {
                    let f = f.clone();
                    tokio::spawn(async move {
                        let path = read_request_path(&mut socket).await;
                        let (status, body) = f(path).await;
                        let status_text = match status {
                            200 => "200 OK",
                            404 => "404 Not Found",
                            500 => "500 Internal Server Error",
                            503 => "503 Service Unavailable",
                            _ => "200 OK",
                        };

                        let response_str = format!(
                            "HTTP/1.1 {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status_text,
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response_str.as_bytes()).await;
                        let _ = socket.shutdown().await;
                        tokio::time::sleep(Duration::from_millis(10)).await;
                    });
                }
                Err(_) => break,
            }
        }
    });

    addr
}

/// Start a mock backend that always returns `status` and `body`.
#[allow(dead_code)]
pub async fn start_mock_backend(status: u16, body: &'static str) -> SocketAddr {
    start_programmable_backend(move |_| async move { (status, body.to_string()) }).await
}

/// Start a mock backend that writes `response` verbatim and closes.
///
/// Lets tests send responses a well-behaved server never would, such as a
/// body shorter than its `Content-Length`.
#[allow(dead_code)]
pub async fn start_raw_backend(response: &'static str) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            tokio::spawn(async move {
                read_request_path(&mut socket).await;
                let _ = socket.write_all(response.as_bytes()).await;
                let _ = socket.shutdown().await;
            });
        }
    });

    addr
}

async fn read_request_path(socket: &mut tokio::net::TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 1024];
    while !buf.windows(4).any(|w| w == b"\r\n\r\n") {
        match socket.read(&mut chunk).await {
            Ok(0) | Err(_) => break,
            Ok(n) => buf.extend_from_slice(&chunk[..n]),
        }
    }
    let head = String::from_utf8_lossy(&buf);
    head.split_whitespace().nth(1).unwrap_or("").to_string()
}

/// An address nothing listens on.
#[allow(dead_code)]
pub async fn closed_port() -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    listener.local_addr().unwrap()
}

/// Geolocation body for San Francisco.
#[allow(dead_code)]
pub const SF_LOCATION: &str =
    r#"{"status":"success","countryCode":"US","lat":37.7749,"lon":-122.4194,"query":"127.0.0.1"}"#;

/// A drand beacon as served by `/public/latest`.
#[allow(dead_code)]
pub const BEACON: &str = r#"{"round":367,"randomness":"8c1b9a7f0e","signature":"a1b2"}"#;

/// Config pointing the monitor at local mocks.
#[allow(dead_code)]
pub fn monitor_config(geo: SocketAddr, node: SocketAddr) -> MonitorConfig {
    let mut config = MonitorConfig::default();
    config.target.host = Some(node.ip().to_string());
    config.target.drng_port = node.port().to_string();
    config.geo.endpoint = format!("http://{}/json/", geo);
    config.poll.period = "10ms".into();
    config
}

#[allow(dead_code)]
pub fn test_client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Sink recording every published sample.
#[derive(Clone, Default)]
#[allow(dead_code)]
pub struct RecordingSink {
    samples: Arc<Mutex<Vec<(Location, Reachability)>>>,
}

#[allow(dead_code)]
impl RecordingSink {
    pub fn samples(&self) -> Vec<(Location, Reachability)> {
        self.samples.lock().unwrap().clone()
    }
}

impl StatusSink for RecordingSink {
    fn publish(&self, location: &Location, status: Reachability) {
        self.samples
            .lock()
            .unwrap()
            .push((location.clone(), status));
    }
}
