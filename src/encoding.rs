use encoding_rs::Encoding;

use crate::error::{Error, Result};

/// 默认线路编码
pub const DEFAULT_ENCODING: &str = "ISO-8859-1";

// encoding_rs 把这些标签映射到 windows-1252，这里按真正的 latin-1 逐字节处理
const LATIN1_LABELS: &[&str] = &[
    "iso-8859-1",
    "iso8859-1",
    "iso_8859-1",
    "iso88591",
    "latin1",
    "latin-1",
    "l1",
];

/// 请求/响应文本使用的字符编码
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextEncoding {
    /// 字节与 U+0000..=U+00FF 一一对应
    Latin1,
    Whatwg(&'static Encoding),
}

impl TextEncoding {
    /// 按标签查找编码，例如 "utf-8"、"latin1"
    pub fn for_label(label: &str) -> Result<Self> {
        let label = label.trim();
        if LATIN1_LABELS.iter().any(|l| l.eq_ignore_ascii_case(label)) {
            return Ok(TextEncoding::Latin1);
        }
        Encoding::for_label(label.as_bytes())
            .map(TextEncoding::Whatwg)
            .ok_or_else(|| Error::UnknownEncoding(label.to_string()))
    }

    /// 编码文本，存在无法表示的字符时报错而不是替换
    pub fn encode(&self, text: &str) -> Result<Vec<u8>> {
        match self {
            TextEncoding::Latin1 => text
                .chars()
                .map(|c| u8::try_from(u32::from(c)).map_err(|_| Error::Unencodable(text.to_string())))
                .collect(),
            TextEncoding::Whatwg(encoding) => {
                let (bytes, _, had_errors) = encoding.encode(text);
                if had_errors {
                    return Err(Error::Unencodable(text.to_string()));
                }
                Ok(bytes.into_owned())
            }
        }
    }

    /// 解码字节，无法解码的部分替换为 U+FFFD
    pub fn decode(&self, bytes: &[u8]) -> String {
        match self {
            TextEncoding::Latin1 => bytes.iter().map(|&b| char::from(b)).collect(),
            TextEncoding::Whatwg(encoding) => {
                let (text, _) = encoding.decode_without_bom_handling(bytes);
                text.into_owned()
            }
        }
    }
}

impl Default for TextEncoding {
    fn default() -> Self {
        TextEncoding::Latin1
    }
}
