use std::fmt;

use tokio::io::{AsyncRead, AsyncReadExt};

use crate::error::{Error, Result};

/// 请求头结束标记
pub const HEADER_TERMINATOR: &[u8] = b"\r\n\r\n";

/// 请求头最大字节数，超过即放弃该连接
pub const MAX_REQUEST_HEAD: usize = 32768;

const READ_CHUNK: usize = 4096;

/// HTTP 方法，服务端只解析不分发
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Method {
    Get,
    Head,
    Post,
    Put,
    Delete,
    Options,
    Patch,
    Other(String),
}

impl From<&str> for Method {
    fn from(s: &str) -> Self {
        match s {
            "GET" => Method::Get,
            "HEAD" => Method::Head,
            "POST" => Method::Post,
            "PUT" => Method::Put,
            "DELETE" => Method::Delete,
            "OPTIONS" => Method::Options,
            "PATCH" => Method::Patch,
            other => Method::Other(other.to_string()),
        }
    }
}

impl fmt::Display for Method {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Method::Get => "GET",
            Method::Head => "HEAD",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
            Method::Options => "OPTIONS",
            Method::Patch => "PATCH",
            Method::Other(s) => s.as_str(),
        };
        f.write_str(s)
    }
}

/// 请求行三元组：方法、路径、协议版本
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestLine {
    pub method: Method,
    pub path: String,
    pub version: String,
}

impl RequestLine {
    /// 解析整段请求文本的第一行，字段按 ASCII 空白切分，不足三个时报错
    pub fn parse(request: &str) -> Result<Self> {
        let first_line = request.split("\r\n").next().unwrap_or("");
        let mut parts = first_line.split_ascii_whitespace();

        match (parts.next(), parts.next(), parts.next()) {
            (Some(method), Some(path), Some(version)) => Ok(RequestLine {
                method: Method::from(method),
                path: path.to_string(),
                version: version.to_string(),
            }),
            _ => Err(Error::MalformedRequest(first_line.to_string())),
        }
    }

    /// 路径按 "/" 切分后的最后一段，作为资源文件名
    pub fn filename(&self) -> &str {
        filename_of(&self.path)
    }
}

pub fn filename_of(path: &str) -> &str {
    path.rsplit('/').next().unwrap_or("")
}

pub fn find_header_end(buf: &[u8]) -> Option<usize> {
    buf.windows(HEADER_TERMINATOR.len())
        .position(|w| w == HEADER_TERMINATOR)
        .map(|i| i + HEADER_TERMINATOR.len())
}

/// 读到请求头结束标记或对端关闭为止；对端直接关闭时返回空缓冲
pub async fn read_request_head<R>(stream: &mut R) -> Result<Vec<u8>>
where
    R: AsyncRead + Unpin,
{
    let mut buffer = Vec::with_capacity(READ_CHUNK);
    let mut temp = [0u8; READ_CHUNK];

    while find_header_end(&buffer).is_none() {
        let n = stream.read(&mut temp).await?;
        if n == 0 {
            break;
        }
        buffer.extend_from_slice(&temp[..n]);
        if buffer.len() > MAX_REQUEST_HEAD && find_header_end(&buffer).is_none() {
            return Err(Error::HeaderTooLarge(MAX_REQUEST_HEAD));
        }
    }

    Ok(buffer)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_request_line() {
        let line = RequestLine::parse("GET /docs/index.html HTTP/1.1\r\nHost: x\r\n\r\n").unwrap();
        assert_eq!(line.method, Method::Get);
        assert_eq!(line.path, "/docs/index.html");
        assert_eq!(line.version, "HTTP/1.1");
        assert_eq!(line.filename(), "index.html");
    }

    #[test]
    fn test_other_method_is_kept() {
        let line = RequestLine::parse("BREW /pot HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(line.method, Method::Other("BREW".to_string()));
        assert_eq!(line.method.to_string(), "BREW");
    }

    #[test]
    fn test_unicode_space_stays_in_path() {
        let line = RequestLine::parse("GET /\u{85}\u{a0}.txt HTTP/1.1\r\n\r\n").unwrap();
        assert_eq!(line.path, "/\u{85}\u{a0}.txt");
        assert_eq!(line.filename(), "\u{85}\u{a0}.txt");
    }

    #[test]
    fn test_too_few_tokens() {
        assert!(matches!(
            RequestLine::parse("GET /\r\n\r\n"),
            Err(Error::MalformedRequest(_))
        ));
        assert!(matches!(RequestLine::parse(""), Err(Error::MalformedRequest(_))));
    }

    #[test]
    fn test_filename_of() {
        assert_eq!(filename_of("/"), "");
        assert_eq!(filename_of("/a/b/../secret.txt"), "secret.txt");
        assert_eq!(filename_of("plain.txt"), "plain.txt");
        assert_eq!(filename_of("/dir/"), "");
    }

    #[tokio::test]
    async fn test_read_stops_at_terminator() {
        let mut input: &[u8] = b"GET / HTTP/1.1\r\n\r\ntrailing body";
        let head = read_request_head(&mut input).await.unwrap();
        assert!(find_header_end(&head).is_some());
    }

    #[tokio::test]
    async fn test_read_empty_stream() {
        let mut input: &[u8] = b"";
        assert!(read_request_head(&mut input).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_read_rejects_huge_head() {
        let big = vec![b'a'; MAX_REQUEST_HEAD + READ_CHUNK];
        let mut input: &[u8] = &big;
        assert!(matches!(
            read_request_head(&mut input).await,
            Err(Error::HeaderTooLarge(_))
        ));
    }
}
