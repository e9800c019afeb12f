//! HTTP 会话管理
//!
//! 每个重写任务拥有自己的会话；会话之间没有共享可变状态。

use std::time::Duration;

use reqwest::blocking::Client;
use url::Url;

use crate::core::{is_html_media_type, parse_content_type, PagemirrorError, PagemirrorOptions};

const DEFAULT_USER_AGENT: &str =
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/91.0.4472.124 Safari/537.36";

/// HTTP 会话：封装客户端配置和源文档下载
pub struct Session {
    client: Client,
    pub options: PagemirrorOptions,
}

impl Session {
    /// 根据选项构建新的会话
    pub fn new(options: PagemirrorOptions) -> Result<Session, PagemirrorError> {
        let mut builder = Client::builder();

        if options.timeout > 0 {
            builder = builder.timeout(Duration::from_secs(options.timeout));
        }

        builder = builder.user_agent(
            options
                .user_agent
                .as_deref()
                .unwrap_or(DEFAULT_USER_AGENT),
        );

        let client = builder
            .build()
            .map_err(|e| PagemirrorError::new(&format!("Failed to build HTTP client: {e}")))?;

        Ok(Session { client, options })
    }

    /// 下载源HTML文档
    ///
    /// 返回响应体字节和响应头里声明的字符编码（可能为空字符串）。
    /// 非成功状态码或非HTML内容类型都视为抓取失败。
    pub fn retrieve_document(&self, url: &Url) -> Result<(Vec<u8>, String), PagemirrorError> {
        let response = self
            .client
            .get(url.as_str())
            .send()
            .map_err(|e| PagemirrorError::new(&format!("Failed to fetch URL: {e}")))?;

        let status = response.status();
        if !status.is_success() {
            return Err(PagemirrorError::new(&format!(
                "Failed to fetch URL: server responded with status {status}"
            )));
        }

        let content_type = response
            .headers()
            .get(reqwest::header::CONTENT_TYPE)
            .and_then(|value| value.to_str().ok())
            .unwrap_or_default()
            .to_string();
        let (media_type, charset, _) = parse_content_type(&content_type);

        if !media_type.is_empty() && !is_html_media_type(&media_type) {
            return Err(PagemirrorError::new(&format!(
                "URL does not return HTML content (got {media_type})"
            )));
        }

        let data = response
            .bytes()
            .map_err(|e| PagemirrorError::new(&format!("Failed to read response body: {e}")))?
            .to_vec();

        Ok((data, charset))
    }
}
