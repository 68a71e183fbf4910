use std::net::SocketAddr;

use tokio::net::{TcpListener, TcpSocket};

use crate::error::Result;

const BACKLOG: u32 = 1024;

/// 创建 TCP 监听器，开启 SO_REUSEADDR 以便重启时不被 TIME_WAIT 阻塞
pub fn create_listener(addr: SocketAddr) -> Result<TcpListener> {
    let socket = if addr.is_ipv4() {
        TcpSocket::new_v4()?
    } else {
        TcpSocket::new_v6()?
    };

    socket.set_reuseaddr(true)?;

    socket.bind(addr)?;
    let listener = socket.listen(BACKLOG)?;
    Ok(listener)
}
