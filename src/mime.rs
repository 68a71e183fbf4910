use std::collections::HashMap;

/// 内置 MIME 表：后缀（含点）到 Content-Type
pub const DEFAULT_MIME_TYPES: &[(&str, &str)] = &[(".txt", "text/plain"), (".html", "text/html")];

/// 规范化后的文件后缀，保留前导点且为小写，例如 ".html"
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Extension(String);

impl Extension {
    /// 从配置键构造，"html" 与 ".HTML" 都得到 ".html"
    pub fn new(raw: &str) -> Self {
        let raw = raw.trim();
        let lower = raw.to_ascii_lowercase();
        if lower.starts_with('.') {
            Extension(lower)
        } else {
            Extension(format!(".{lower}"))
        }
    }

    /// 取文件名最后一个点起的后缀，忽略前导点（".txt" 没有后缀）
    pub fn of(filename: &str) -> Option<Self> {
        let stem = filename.trim_start_matches('.');
        let dot = stem.rfind('.')?;
        Some(Extension(stem[dot..].to_ascii_lowercase()))
    }
}

/// 后缀到 Content-Type 的查找表，可以为空（此时所有请求都返回 404）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MimeTable {
    types: HashMap<Extension, String>,
}

impl MimeTable {
    pub fn from_pairs<'a, I>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let types = pairs
            .into_iter()
            .map(|(ext, content_type)| (Extension::new(ext), content_type.to_string()))
            .collect();
        Self { types }
    }

    fn get(&self, ext: &Extension) -> Option<&str> {
        self.types.get(ext).map(String::as_str)
    }

    /// 根据文件名查 Content-Type，后缀缺失或未登记时返回 None
    pub fn lookup(&self, filename: &str) -> Option<&str> {
        Extension::of(filename).and_then(|ext| self.get(&ext))
    }

    pub fn len(&self) -> usize {
        self.types.len()
    }

    pub fn is_empty(&self) -> bool {
        self.types.is_empty()
    }
}

impl Default for MimeTable {
    fn default() -> Self {
        Self::from_pairs(DEFAULT_MIME_TYPES.iter().copied())
    }
}

impl From<&HashMap<String, String>> for MimeTable {
    fn from(map: &HashMap<String, String>) -> Self {
        Self::from_pairs(map.iter().map(|(k, v)| (k.as_str(), v.as_str())))
    }
}
