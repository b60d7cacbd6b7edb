//! Loopback DNS servers driven by a reply closure.

use std::net::SocketAddr;
use std::sync::Arc;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, UdpSocket};

/// Returns `None` to stay silent.
pub type ReplyFn = Arc<dyn Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync>;

pub fn reply_fn<F>(f: F) -> ReplyFn
where
    F: Fn(&[u8]) -> Option<Vec<u8>> + Send + Sync + 'static,
{
    Arc::new(f)
}

pub async fn spawn_udp_upstream(reply: ReplyFn) -> SocketAddr {
    let socket = UdpSocket::bind("127.0.0.1:0").await.unwrap();
    let addr = socket.local_addr().unwrap();
    serve_udp(socket, reply);
    addr
}

/// UDP and TCP listeners sharing one port.
pub async fn spawn_dual_upstream(udp_reply: ReplyFn, tcp_reply: ReplyFn) -> SocketAddr {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let socket = UdpSocket::bind(addr).await.unwrap();
    serve_udp(socket, udp_reply);

    tokio::spawn(async move {
        while let Ok((mut stream, _)) = listener.accept().await {
            let reply = tcp_reply.clone();
            tokio::spawn(async move {
                let mut len = [0u8; 2];
                if stream.read_exact(&mut len).await.is_err() {
                    return;
                }
                let mut query = vec![0u8; usize::from(u16::from_be_bytes(len))];
                if stream.read_exact(&mut query).await.is_err() {
                    return;
                }
                if let Some(bytes) = reply(&query) {
                    let _ = stream.write_all(&(bytes.len() as u16).to_be_bytes()).await;
                    let _ = stream.write_all(&bytes).await;
                }
            });
        }
    });

    addr
}

fn serve_udp(socket: UdpSocket, reply: ReplyFn) {
    tokio::spawn(async move {
        let mut buf = vec![0u8; 4096];
        while let Ok((n, peer)) = socket.recv_from(&mut buf).await {
            if let Some(bytes) = reply(&buf[..n]) {
                let _ = socket.send_to(&bytes, peer).await;
            }
        }
    });
}
