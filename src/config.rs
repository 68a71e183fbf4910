use std::collections::HashMap;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use serde::Deserialize;
use tokio::fs;

use crate::encoding::{DEFAULT_ENCODING, TextEncoding};
use crate::error::{Error, Result};
use crate::mime::{DEFAULT_MIME_TYPES, MimeTable};

/// 服务端配置：监听地址、资源根目录、编码与 MIME 表
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// 监听网卡，"0.0.0.0" 表示全部
    #[serde(default = "default_server_host")]
    pub host: String,
    #[serde(default = "default_server_port")]
    pub port: u16,
    /// 静态文件根目录，只按文件名查找
    #[serde(default = "default_resource_root")]
    pub resource_root: PathBuf,
    /// 请求解码与响应头编码
    #[serde(default = "default_encoding")]
    pub encoding: String,
    /// 后缀（含点）到 Content-Type，空表表示全部 404
    #[serde(default = "default_mime_types")]
    pub mime_types: HashMap<String, String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_server_host(),
            port: default_server_port(),
            resource_root: default_resource_root(),
            encoding: default_encoding(),
            mime_types: default_mime_types(),
        }
    }
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        socket_addr(&self.host, self.port)
    }

    pub fn text_encoding(&self) -> Result<TextEncoding> {
        TextEncoding::for_label(&self.encoding)
    }

    pub fn mime_table(&self) -> MimeTable {
        MimeTable::from(&self.mime_types)
    }
}

/// 客户端配置
#[derive(Debug, Deserialize, Clone)]
pub struct ClientConfig {
    #[serde(default = "default_client_host")]
    pub host: String,
    #[serde(default = "default_client_port")]
    pub port: u16,
    /// 请求的资源路径，例如 "/index.html"
    #[serde(default = "default_resource")]
    pub resource: String,
    #[serde(default = "default_encoding")]
    pub encoding: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            host: default_client_host(),
            port: default_client_port(),
            resource: default_resource(),
            encoding: default_encoding(),
        }
    }
}

fn default_server_host() -> String {
    "0.0.0.0".to_string()
}

fn default_server_port() -> u16 {
    28333
}

fn default_resource_root() -> PathBuf {
    PathBuf::from("resources")
}

fn default_encoding() -> String {
    DEFAULT_ENCODING.to_string()
}

fn default_mime_types() -> HashMap<String, String> {
    DEFAULT_MIME_TYPES
        .iter()
        .map(|(ext, content_type)| (ext.to_string(), content_type.to_string()))
        .collect()
}

fn default_client_host() -> String {
    "example.com".to_string()
}

fn default_client_port() -> u16 {
    80
}

fn default_resource() -> String {
    "/".to_string()
}

fn socket_addr(host: &str, port: u16) -> Result<SocketAddr> {
    // 与 Python socket 一样，空主机名视为全部网卡
    let host = if host.is_empty() { "0.0.0.0" } else { host };
    let ip: IpAddr = host
        .trim_matches(|c| c == '[' || c == ']')
        .parse()
        .map_err(|_| Error::InvalidAddress(format!("{host}:{port}")))?;
    Ok(SocketAddr::new(ip, port))
}

/// 从指定路径读取并解析服务端配置文件
pub async fn load_config(path: &str) -> Result<ServerConfig> {
    let config_content = fs::read_to_string(path).await?;
    parse_config(&config_content)
}

pub fn parse_config(content: &str) -> Result<ServerConfig> {
    let config: ServerConfig = serde_json::from_str(content)?;
    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_object_uses_defaults() {
        let config = parse_config("{}").unwrap();
        assert_eq!(config.port, 28333);
        assert_eq!(config.resource_root, PathBuf::from("resources"));
        assert_eq!(config.mime_table(), MimeTable::default());
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:28333");
    }

    #[test]
    fn test_explicit_empty_mime_table() {
        let config = parse_config(r#"{"port": 8081, "mime_types": {}}"#).unwrap();
        assert_eq!(config.port, 8081);
        assert!(config.mime_table().is_empty());
    }

    #[test]
    fn test_bad_json() {
        assert!(matches!(parse_config("{port"), Err(Error::Config(_))));
    }

    #[test]
    fn test_socket_addr_variants() {
        assert_eq!(socket_addr("", 80).unwrap().to_string(), "0.0.0.0:80");
        assert_eq!(socket_addr("[::1]", 80).unwrap().to_string(), "[::1]:80");
        assert!(matches!(
            socket_addr("not a host", 80),
            Err(Error::InvalidAddress(_))
        ));
    }

    #[tokio::test]
    async fn test_load_config_missing_file() {
        let err = load_config("/definitely/not/here/config.json").await.unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }
}
