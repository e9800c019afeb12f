use std::error::Error;
use std::fmt;

use encoding_rs::Encoding;
use url::Url;

use crate::network::session::Session;
use crate::parsers::html::{
    get_charset, get_title, html_to_dom, rewrite_attributes, rewrite_inline_styles,
    rewrite_style_blocks, serialize_document,
};

/// Represents errors that can occur during pagemirror processing
///
/// This error type encapsulates all possible errors that can occur
/// when capturing and rewriting a page with the pagemirror library.
#[derive(Debug)]
pub struct PagemirrorError {
    details: String,
}

impl PagemirrorError {
    /// Creates a new PagemirrorError with the given message
    pub fn new(msg: &str) -> PagemirrorError {
        PagemirrorError {
            details: msg.to_string(),
        }
    }
}

impl fmt::Display for PagemirrorError {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.details)
    }
}

impl Error for PagemirrorError {
    fn description(&self) -> &str {
        &self.details
    }
}

/// 默认网络超时（秒）
pub const DEFAULT_NETWORK_TIMEOUT: u64 = 30;

/// Configuration options for pagemirror processing
///
/// This struct contains the per-job options that control how the
/// source document is fetched and re-encoded.
#[derive(Clone, Debug)]
pub struct PagemirrorOptions {
    pub encoding: Option<String>,
    pub timeout: u64,
    pub user_agent: Option<String>,
}

impl Default for PagemirrorOptions {
    fn default() -> Self {
        Self {
            encoding: None,
            timeout: DEFAULT_NETWORK_TIMEOUT,
            user_agent: None,
        }
    }
}

/// 一次重写任务：源页面URL加替换主机名
///
/// 两个字段都必须非空，且源URL必须是合法的绝对URL；
/// 否则任务在任何网络访问之前就被拒绝。
#[derive(Clone, Debug)]
pub struct RewriteJob {
    source_url: Url,
    replacement_host: String,
}

impl RewriteJob {
    pub fn new(source_url: &str, replacement_host: &str) -> Result<RewriteJob, PagemirrorError> {
        if source_url.trim().is_empty() || replacement_host.trim().is_empty() {
            return Err(PagemirrorError::new(
                "URL and replacement domain are required",
            ));
        }

        let source_url = Url::parse(source_url)
            .map_err(|e| PagemirrorError::new(&format!("Invalid source URL: {e}")))?;

        if source_url.scheme() != "http" && source_url.scheme() != "https" {
            return Err(PagemirrorError::new(
                "Source URL must use the http or https scheme",
            ));
        }

        Ok(RewriteJob {
            source_url,
            replacement_host: replacement_host.to_string(),
        })
    }

    /// 所有相对引用的解析基准，等于源URL
    pub fn base_url(&self) -> &Url {
        &self.source_url
    }

    pub fn replacement_host(&self) -> &str {
        &self.replacement_host
    }
}

/// 重写完成的页面：序列化后的标记加可选的文档标题
pub struct MirroredPage {
    pub html: Vec<u8>,
    pub title: Option<String>,
}

/// 抓取源页面并重写其中所有URL引用的主机名
///
/// 这是核心处理入口：通过会话抓取任务指定的页面，
/// 然后交给 [`rewrite_page_from_data`] 完成解析、三趟重写和序列化。
pub fn mirror_page(session: &Session, job: &RewriteJob) -> Result<MirroredPage, PagemirrorError> {
    let (data, charset) = session.retrieve_document(job.base_url())?;

    rewrite_page_from_data(
        &data,
        if charset.is_empty() {
            None
        } else {
            Some(charset)
        },
        job.base_url(),
        job.replacement_host(),
    )
}

/// 对已获取的HTML数据执行整个重写流程
///
/// 解析文档、确定字符编码、依次运行属性/内联样式/样式块三个
/// 转换器，最后按最终编码序列化。三个转换器彼此独立，
/// 顺序不影响结果，但都必须在序列化之前完成。
pub fn rewrite_page_from_data(
    data: &[u8],
    input_encoding: Option<String>,
    base_url: &Url,
    replacement_host: &str,
) -> Result<MirroredPage, PagemirrorError> {
    let mut document_encoding = input_encoding.unwrap_or_else(|| "utf-8".to_string());
    let mut dom = html_to_dom(data, document_encoding.clone());

    // 尝试确定文档自己声明的编码；有效时用它重新解析
    if let Some(html_charset) = get_charset(&dom.document) {
        if !html_charset.is_empty() {
            if let Some(document_charset) =
                Encoding::for_label_no_replacement(html_charset.as_bytes())
            {
                document_encoding = html_charset;
                dom = html_to_dom(data, document_charset.name().to_string());
            }
        }
    }

    rewrite_attributes(&dom.document, base_url, replacement_host);
    rewrite_inline_styles(&dom.document, base_url, replacement_host);
    rewrite_style_blocks(&dom.document, base_url, replacement_host);

    let title = get_title(&dom.document);
    let html = serialize_document(dom, document_encoding);

    Ok(MirroredPage { html, title })
}

/// Parses Content-Type header value
pub fn parse_content_type(content_type: &str) -> (String, String, bool) {
    let mut media_type = String::new();
    let mut charset = String::new();
    let mut is_base64 = false;

    let parts: Vec<&str> = content_type.split(';').collect();

    if !parts.is_empty() {
        media_type = parts[0].trim().to_lowercase();
    }

    for part in parts.iter().skip(1) {
        let part = part.trim();
        if part.starts_with("charset=") {
            charset = part[8..].trim_matches('"').to_string();
        } else if part == "base64" {
            is_base64 = true;
        }
    }

    (media_type, charset, is_base64)
}

/// Checks if the given media type represents an HTML document
pub fn is_html_media_type(media_type: &str) -> bool {
    media_type == "text/html" || media_type == "application/xhtml+xml"
}
