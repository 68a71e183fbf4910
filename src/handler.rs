use std::path::PathBuf;

use tokio::fs;
use tokio::io::{AsyncRead, AsyncWrite, AsyncWriteExt};
use tracing::{debug, info};

use crate::config::ServerConfig;
use crate::encoding::TextEncoding;
use crate::error::Result;
use crate::mime::MimeTable;
use crate::request::{RequestLine, read_request_head};
use crate::response::Response;

/// 每个连接共享的只读上下文
#[derive(Debug, Clone)]
pub struct ServeContext {
    pub resource_root: PathBuf,
    pub mime: MimeTable,
    pub encoding: TextEncoding,
}

impl ServeContext {
    pub fn from_config(config: &ServerConfig) -> Result<Self> {
        Ok(Self {
            resource_root: config.resource_root.clone(),
            mime: config.mime_table(),
            encoding: config.text_encoding()?,
        })
    }
}

/// 处理单个连接：读请求头、解析、解析资源、写回一次响应。
///
/// 返回写出的状态码；对端未发送任何数据即关闭时返回 `None`。
pub async fn handle_client<S>(stream: &mut S, ctx: &ServeContext) -> Result<Option<u16>>
where
    S: AsyncRead + AsyncWrite + Unpin,
{
    let head = read_request_head(stream).await?;
    if head.is_empty() {
        debug!("peer closed before sending a request");
        return Ok(None);
    }

    let req_str = ctx.encoding.decode(&head);
    let request_line = RequestLine::parse(&req_str)?;
    let filename = request_line.filename();

    let response = resolve(ctx, filename).await;
    info!(
        "Request: {} {} {} -> File: {:?} ({})",
        request_line.method,
        request_line.path,
        request_line.version,
        filename,
        response.status_code()
    );

    stream.write_all(&response.to_bytes(ctx.encoding)?).await?;
    stream.flush().await?;
    Ok(Some(response.status_code()))
}

/// 文件名到响应：后缀未登记或文件读取失败都返回 404
pub async fn resolve(ctx: &ServeContext, filename: &str) -> Response {
    let Some(content_type) = ctx.mime.lookup(filename) else {
        debug!("no content type registered for {:?}", filename);
        return Response::NotFound;
    };

    let file_path = ctx.resource_root.join(filename);
    match fs::read(&file_path).await {
        Ok(content) => Response::ok(content_type, content),
        Err(e) => {
            debug!("cannot read {}: {}", file_path.display(), e);
            Response::NotFound
        }
    }
}
