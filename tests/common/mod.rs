//! Shared utilities for integration testing.

#![allow(dead_code)]

use std::future::Future;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};

use dictionary_gateway::config::GatewayConfig;
use dictionary_gateway::http::HttpServer;
use dictionary_gateway::lifecycle::Shutdown;

pub const CAT_ENTRY: &str = r#"[{"word":"cat","phonetic":"/kat/","meanings":[{"partOfSpeech":"noun","definitions":[{"definition":"a feline","synonyms":[]}]}]}]"#;

/// A raw-TCP dictionary API double.
pub struct MockUpstream {
    pub addr: SocketAddr,
    /// Requests received.
    pub calls: Arc<AtomicUsize>,
    /// Request paths, in arrival order, exactly as sent on the wire.
    pub paths: Arc<Mutex<Vec<String>>>,
    /// Stalled connections the client has since closed.
    pub closed: Arc<AtomicUsize>,
}

impl MockUpstream {
    /// Base URL to configure the gateway with.
    pub fn base_url(&self) -> String {
        format!("http://{}/entries", self.addr)
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }

    pub fn closed(&self) -> usize {
        self.closed.load(Ordering::SeqCst)
    }

    pub fn paths(&self) -> Vec<String> {
        self.paths.lock().unwrap().clone()
    }

    /// Wait up to `limit` for `n` stalled connections to be closed by the client.
    pub async fn wait_for_closed(&self, n: usize, limit: Duration) -> bool {
        let deadline = tokio::time::Instant::now() + limit;
        while tokio::time::Instant::now() < deadline {
            if self.closed() >= n {
                return true;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        self.closed() >= n
    }
}

/// Start a mock upstream that always answers with `status` and `body`.
pub async fn start_mock_upstream(status: u16, body: &'static str) -> MockUpstream {
    start_programmable_upstream(move || async move { Some((status, body.to_string())) }).await
}

/// Start a programmable mock upstream.
///
/// `f` is called once per request. `Some((status, body))` is written back;
/// `None` stalls: no response is sent and the connection is held until the
/// client closes it.
pub async fn start_programmable_upstream<F, Fut>(f: F) -> MockUpstream
where
    F: Fn() -> Fut + Send + Sync + 'static,
    Fut: Future<Output = Option<(u16, String)>> + Send + 'static,
{
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let mock = MockUpstream {
        addr,
        calls: Arc::new(AtomicUsize::new(0)),
        paths: Arc::new(Mutex::new(Vec::new())),
        closed: Arc::new(AtomicUsize::new(0)),
    };

    let f = Arc::new(f);
    let calls = mock.calls.clone();
    let paths = mock.paths.clone();
    let closed = mock.closed.clone();

    tokio::spawn(async move {
        loop {
            let Ok((mut socket, _)) = listener.accept().await else {
                break;
            };
            let f = f.clone();
            let calls = calls.clone();
            let paths = paths.clone();
            let closed = closed.clone();

            tokio::spawn(async move {
                let Some(path) = read_request_path(&mut socket).await else {
                    return;
                };
                calls.fetch_add(1, Ordering::SeqCst);
                paths.lock().unwrap().push(path);

                match f().await {
                    Some((status, body)) => {
                        let response = format!(
                            "HTTP/1.1 {} {}\r\nContent-Type: application/json\r\nContent-Length: {}\r\nConnection: close\r\n\r\n{}",
                            status,
                            reason(status),
                            body.len(),
                            body
                        );
                        let _ = socket.write_all(response.as_bytes()).await;
                        let _ = socket.shutdown().await;
                    }
                    None => {
                        let mut buf = [0u8; 1024];
                        loop {
                            match socket.read(&mut buf).await {
                                Ok(0) | Err(_) => break,
                                Ok(_) => continue,
                            }
                        }
                        closed.fetch_add(1, Ordering::SeqCst);
                    }
                }
            });
        }
    });

    mock
}

/// Start a mock upstream that writes `raw` verbatim after each request head.
///
/// With `hold_open` the connection then stays open until the client closes
/// it, which is counted in `closed`; otherwise it is closed straight away.
pub async fn start_raw_upstream(raw: &'static str, hold_open: bool) -> MockUpstream {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let mock = MockUpstream {
        addr,
        calls: Arc::new(AtomicUsize::new(0)),
        paths: Arc::new(Mutex::new(Vec::new())),
        closed: Arc::new(AtomicUsize::new(0)),
    };

    let calls = mock.calls.clone();
    let paths = mock.paths.clone();
    let closed = mock.closed.clone();

    tokio::spawn(async move {
        while let Ok((mut socket, _)) = listener.accept().await {
            let calls = calls.clone();
            let paths = paths.clone();
            let closed = closed.clone();

            tokio::spawn(async move {
                let Some(path) = read_request_path(&mut socket).await else {
                    return;
                };
                calls.fetch_add(1, Ordering::SeqCst);
                paths.lock().unwrap().push(path);

                let _ = socket.write_all(raw.as_bytes()).await;
                if !hold_open {
                    let _ = socket.shutdown().await;
                    return;
                }
                let mut buf = [0u8; 1024];
                loop {
                    match socket.read(&mut buf).await {
                        Ok(0) | Err(_) => break,
                        Ok(_) => continue,
                    }
                }
                closed.fetch_add(1, Ordering::SeqCst);
            });
        }
    });

    mock
}

/// Read a request head and return the request-target of its request line.
async fn read_request_path(socket: &mut TcpStream) -> Option<String> {
    let mut head = Vec::new();
    let mut buf = [0u8; 1024];
    while !head.windows(4).any(|w| w == b"\r\n\r\n") {
        let n = socket.read(&mut buf).await.ok()?;
        if n == 0 {
            return None;
        }
        head.extend_from_slice(&buf[..n]);
    }
    let head = String::from_utf8_lossy(&head);
    let path = head.lines().next()?.split_whitespace().nth(1)?.to_string();
    Some(path)
}

fn reason(status: u16) -> &'static str {
    match status {
        200 => "OK",
        404 => "Not Found",
        429 => "Too Many Requests",
        500 => "Internal Server Error",
        502 => "Bad Gateway",
        503 => "Service Unavailable",
        _ => "Unknown",
    }
}

/// A gateway running on an ephemeral port.
pub struct TestGateway {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
}

impl TestGateway {
    pub fn search_url(&self, query: &str) -> String {
        format!("http://{}/search{}", self.addr, query)
    }

    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestGateway {
    fn drop(&mut self) {
        self.shutdown.trigger();
    }
}

/// Start a gateway forwarding to `upstream_base` with the given lookup deadline.
pub async fn start_gateway(upstream_base: String, timeout_ms: u64) -> TestGateway {
    let mut config = GatewayConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.upstream.base_url = upstream_base;
    config.upstream.timeout_ms = timeout_ms;

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config).unwrap();

    let shutdown = Shutdown::new();
    let server_shutdown = shutdown.subscribe();
    tokio::spawn(async move {
        let _ = server.run(listener, server_shutdown).await;
    });

    TestGateway { addr, shutdown }
}

/// HTTP client for talking to the gateway.
pub fn client() -> reqwest::Client {
    reqwest::Client::builder()
        .no_proxy()
        .timeout(Duration::from_secs(10))
        .build()
        .unwrap()
}
