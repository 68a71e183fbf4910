use std::net::SocketAddr;

use tokio::net::TcpListener;
use tracing::{info, warn};

use crate::config::ServerConfig;
use crate::error::Result;
use crate::handler::{ServeContext, handle_client};
use crate::listener::create_listener;

/// 顺序处理连接的静态文件服务：一次只服务一个客户端
pub struct Server {
    listener: TcpListener,
    ctx: ServeContext,
}

impl Server {
    /// 绑定监听地址并准备上下文
    pub fn bind(config: &ServerConfig) -> Result<Self> {
        let ctx = ServeContext::from_config(config)?;
        let listener = create_listener(config.socket_addr()?)?;
        Ok(Self { listener, ctx })
    }

    pub fn local_addr(&self) -> Result<SocketAddr> {
        Ok(self.listener.local_addr()?)
    }

    /// 接受并完整处理一个连接；单个连接的失败只记录日志，accept 失败才向上返回
    pub async fn serve_one(&self) -> Result<()> {
        let (mut stream, peer) = self.listener.accept().await?;
        info!("Connected by: {}", peer);

        if let Err(e) = handle_client(&mut stream, &self.ctx).await {
            warn!("connection from {} failed: {}", peer, e);
        }
        Ok(())
    }

    /// 主循环：不派生任务，上一个连接处理完才会再次 accept
    pub async fn run(self) -> Result<()> {
        info!(
            "Listening on {} (root: {}, {} mime types)",
            self.local_addr()?,
            self.ctx.resource_root.display(),
            self.ctx.mime.len()
        );

        loop {
            self.serve_one().await?;
        }
    }
}
