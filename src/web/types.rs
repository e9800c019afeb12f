//! Web 模块的数据类型定义

use serde::{Deserialize, Serialize};

use crate::core::PagemirrorOptions;

/// 应用状态
#[derive(Clone)]
pub struct AppState {
    pub options: PagemirrorOptions,
}

/// 下载请求
///
/// 两个字段在请求体里都必须出现且非空；
/// 字段名沿用对外已有的 camelCase 线格式。
#[derive(Deserialize)]
pub struct DownloadRequest {
    pub url: Option<String>,
    #[serde(rename = "replacementDomain")]
    pub replacement_domain: Option<String>,
}

/// 统一的错误响应体
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

impl ErrorResponse {
    pub fn new(error: &str) -> ErrorResponse {
        ErrorResponse {
            error: error.to_string(),
        }
    }
}
