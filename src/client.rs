use tokio::io::{AsyncRead, AsyncReadExt, AsyncWriteExt};
use tokio::net::TcpStream;
use tracing::{debug, info};

use crate::config::ClientConfig;
use crate::encoding::TextEncoding;
use crate::error::Result;

const READ_CHUNK: usize = 4096;

/// 单次 GET 的最小 HTTP 客户端
#[derive(Debug, Clone)]
pub struct WebClient {
    host: String,
    port: u16,
    resource: String,
    encoding: TextEncoding,
}

impl WebClient {
    /// 按配置构造，编码标签无法识别时报错
    pub fn new(config: &ClientConfig) -> Result<Self> {
        Ok(Self {
            host: config.host.clone(),
            port: config.port,
            resource: config.resource.clone(),
            encoding: TextEncoding::for_label(&config.encoding)?,
        })
    }

    /// 按配置编码请求，路径或主机名含无法编码的字符时报错
    pub fn build_request(&self) -> Result<Vec<u8>> {
        let http = format!(
            "GET {} HTTP/1.1\r\nHost: {}\r\nConnection: close\r\n\r\n",
            self.resource, self.host
        );
        self.encoding.encode(&http)
    }

    /// 连接、发送请求并读取到对端关闭，返回解码后的完整响应文本
    pub async fn issue_request(&self) -> Result<String> {
        let encoded = self.build_request()?;

        info!("connecting to {}:{}", self.host, self.port);
        let mut stream = TcpStream::connect((self.host.as_str(), self.port)).await?;
        stream.write_all(&encoded).await?;

        self.read_response(&mut stream).await
    }

    /// 反复读取直到零长度读，再整体解码
    pub async fn read_response<R>(&self, conn: &mut R) -> Result<String>
    where
        R: AsyncRead + Unpin,
    {
        let mut buffer = Vec::new();
        let mut chunk = [0u8; READ_CHUNK];

        loop {
            let n = conn.read(&mut chunk).await?;
            if n == 0 {
                break;
            }
            buffer.extend_from_slice(&chunk[..n]);
        }

        debug!("received {} bytes", buffer.len());
        Ok(self.encoding.decode(&buffer))
    }
}
