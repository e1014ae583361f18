//! Local HTTP/1.1 stub used by the wire-level tests.
//!
//! Serves one canned response per connection and records what the client
//! sent, so tests can check request lines, headers and bodies.

#![allow(dead_code)] // each test binary uses a different subset

use std::time::Duration;

use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// One request as received on the wire.
#[derive(Debug, Clone)]
pub struct Recorded {
    /// Request line plus headers, without the blank line
    pub head: String,
    pub body: Vec<u8>,
}

impl Recorded {
    pub fn request_line(&self) -> &str {
        self.head.lines().next().unwrap_or_default()
    }

    /// Header value, matched case-insensitively (hyper lowercases names).
    pub fn header(&self, name: &str) -> Option<&str> {
        self.head.lines().skip(1).find_map(|line| {
            let (key, value) = line.split_once(':')?;
            key.trim().eq_ignore_ascii_case(name).then(|| value.trim())
        })
    }

    pub fn body_text(&self) -> String {
        String::from_utf8_lossy(&self.body).into_owned()
    }
}

/// Stub API answering `responses` in order, one per connection.
pub struct StubServer {
    pub base_url: String,
    handle: JoinHandle<Vec<Recorded>>,
}

impl StubServer {
    pub async fn start(responses: Vec<(u16, &'static str)>) -> Self {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        let handle = tokio::spawn(async move {
            let mut recorded = Vec::new();
            for (status, body) in responses {
                let (mut stream, _) = listener.accept().await.unwrap();
                recorded.push(read_request(&mut stream).await);
                let reply = format!(
                    "HTTP/1.1 {status} Stub\r\n\
                     content-type: application/json\r\n\
                     content-length: {}\r\n\
                     connection: close\r\n\r\n{body}",
                    body.len()
                );
                stream.write_all(reply.as_bytes()).await.unwrap();
                let _ = stream.shutdown().await;
            }
            recorded
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    /// Wait until every canned response was served and return the requests.
    pub async fn requests(self) -> Vec<Recorded> {
        tokio::time::timeout(Duration::from_secs(10), self.handle)
            .await
            .expect("client never made all expected requests")
            .unwrap()
    }
}

async fn read_request(stream: &mut TcpStream) -> Recorded {
    let mut buf = Vec::new();
    let mut chunk = [0u8; 4096];

    let head_end = loop {
        if let Some(pos) = buf.windows(4).position(|w| w == b"\r\n\r\n") {
            break pos;
        }
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break buf.len();
        }
        buf.extend_from_slice(&chunk[..n]);
    };

    let head = String::from_utf8_lossy(&buf[..head_end]).into_owned();
    let mut body = buf.get(head_end + 4..).map(<[u8]>::to_vec).unwrap_or_default();
    let mut recorded = Recorded {
        head,
        body: Vec::new(),
    };

    let content_length = recorded
        .header("content-length")
        .and_then(|v| v.parse::<usize>().ok());
    let chunked = recorded
        .header("transfer-encoding")
        .is_some_and(|v| v.eq_ignore_ascii_case("chunked"));

    loop {
        let done = match content_length {
            Some(len) => body.len() >= len,
            None if chunked => body.ends_with(b"0\r\n\r\n"),
            None => true,
        };
        if done {
            break;
        }
        let n = stream.read(&mut chunk).await.unwrap();
        if n == 0 {
            break;
        }
        body.extend_from_slice(&chunk[..n]);
    }

    recorded.body = body;
    recorded
}
