use crate::encoding::TextEncoding;
use crate::error::Result;

/// 响应体之后追加的空行，保持与原始演示逐字节一致
pub const BODY_TRAILER: &[u8] = b"\r\n\r\n";

/// 固定的 404 响应，扩展名未登记与文件不存在共用
pub const NOT_FOUND_RESPONSE: &[u8] = b"HTTP/1.1 404 Not Found\r\n\
Content-Type: text/plain\r\n\
Content-Length: 13\r\n\
Connection: close\r\n\
\r\n\
404 not found\r\n\r\n";

/// 一次完整的响应：状态行、头部、正文
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Response {
    Ok { content_type: String, body: Vec<u8> },
    NotFound,
}

impl Response {
    pub fn ok(content_type: &str, body: Vec<u8>) -> Self {
        Response::Ok {
            content_type: content_type.to_string(),
            body,
        }
    }

    pub fn status_code(&self) -> u16 {
        match self {
            Response::Ok { .. } => 200,
            Response::NotFound => 404,
        }
    }

    /// 序列化为线路字节，头部按给定编码写出，正文原样拼接
    pub fn to_bytes(&self, encoding: TextEncoding) -> Result<Vec<u8>> {
        match self {
            Response::Ok { content_type, body } => {
                let header = format!(
                    "HTTP/1.1 200 OK\r\nContent-Type: {}\r\nContent-Length: {}\r\nConnection: close\r\n\r\n",
                    content_type,
                    body.len()
                );
                let mut out = encoding.encode(&header)?;
                out.reserve(body.len() + BODY_TRAILER.len());
                out.extend_from_slice(body);
                out.extend_from_slice(BODY_TRAILER);
                Ok(out)
            }
            Response::NotFound => Ok(NOT_FOUND_RESPONSE.to_vec()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_payload() {
        let bytes = Response::NotFound.to_bytes(TextEncoding::default()).unwrap();
        let text = String::from_utf8(bytes).unwrap();
        assert!(text.starts_with("HTTP/1.1 404 Not Found\r\n"));
        assert!(text.contains("Content-Length: 13\r\n"));
        assert!(text.ends_with("\r\n\r\n404 not found\r\n\r\n"));
        assert_eq!("404 not found".len(), 13);
    }

    #[test]
    fn test_ok_envelope() {
        let body = b"<p>hello, world</p>\n".to_vec();
        assert_eq!(body.len(), 20);
        let response = Response::ok("text/html", body.clone());
        assert_eq!(response.status_code(), 200);

        let mut expected = b"HTTP/1.1 200 OK\r\n\
Content-Type: text/html\r\n\
Content-Length: 20\r\n\
Connection: close\r\n\r\n"
            .to_vec();
        expected.extend_from_slice(&body);
        expected.extend_from_slice(b"\r\n\r\n");
        assert_eq!(response.to_bytes(TextEncoding::default()).unwrap(), expected);
    }

    #[test]
    fn test_length_counts_raw_bytes() {
        let body = vec![0xE2, 0x82, 0xAC, 0x00, 0xFF];
        let bytes = Response::ok("text/plain", body).to_bytes(TextEncoding::default()).unwrap();
        let text = String::from_utf8_lossy(&bytes);
        assert!(text.contains("Content-Length: 5\r\n"));
    }
}
