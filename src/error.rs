use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// 客户端与服务端共用的错误类型
#[derive(Debug, Error)]
pub enum Error {
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Config(#[from] serde_json::Error),

    #[error("invalid address: {0}")]
    InvalidAddress(String),

    #[error("unknown text encoding: {0}")]
    UnknownEncoding(String),

    /// 文本含有目标编码无法表示的字符
    #[error("text cannot be encoded without loss: {0:?}")]
    Unencodable(String),

    /// 请求行不足三个字段
    #[error("malformed request line: {0:?}")]
    MalformedRequest(String),

    #[error("request head exceeds {0} bytes")]
    HeaderTooLarge(usize),

    #[error("failed to install log subscriber: {0}")]
    Logging(String),
}
