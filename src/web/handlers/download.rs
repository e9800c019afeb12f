//! 下载端点：抓取、重写并打包页面
//!
//! 这是服务的唯一业务端点。校验在任何网络访问之前完成；
//! 抓取和DOM处理是阻塞操作，放到 `spawn_blocking` 里执行。

use std::sync::Arc;

use axum::{
    extract::{Json as ExtractJson, State},
    http::{header, StatusCode},
    response::{IntoResponse, Json},
};
use tokio::task;

use crate::builders::{build_zip_archive, ArchiveFile, INDEX_FILE_NAME};
use crate::core::{mirror_page, PagemirrorError, RewriteJob};
use crate::network::session::Session;
use crate::web::types::{AppState, DownloadRequest, ErrorResponse};

/// 成功响应的下载文件名
const ARCHIVE_FILE_NAME: &str = "website.zip";

/// 处理 POST /download
///
/// 成功时返回包含单个 `index.html` 条目的ZIP归档；
/// 字段缺失或非法 → 400，抓取/处理/打包失败 → 500。
/// 任何失败都不会输出部分归档。
pub async fn download_website(
    State(state): State<Arc<AppState>>,
    ExtractJson(request): ExtractJson<DownloadRequest>,
) -> Result<impl IntoResponse, (StatusCode, Json<ErrorResponse>)> {
    let url = request.url.unwrap_or_default();
    let replacement_domain = request.replacement_domain.unwrap_or_default();

    if url.trim().is_empty() || replacement_domain.trim().is_empty() {
        return Err((
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(
                "URL and replacement domain are required",
            )),
        ));
    }

    // 源URL必须是合法的绝对URL，否则在抓取之前就拒绝
    let job = RewriteJob::new(&url, &replacement_domain).map_err(|e| {
        (
            StatusCode::BAD_REQUEST,
            Json(ErrorResponse::new(&e.to_string())),
        )
    })?;

    tracing::info!("mirroring {} onto host {}", url, replacement_domain);

    let options = state.options.clone();
    let result: Result<Result<Vec<u8>, PagemirrorError>, task::JoinError> =
        task::spawn_blocking(move || {
            let session = Session::new(options)?;
            let page = mirror_page(&session, &job)?;

            if let Some(ref title) = page.title {
                tracing::debug!("captured page title: {}", title);
            }

            build_zip_archive(&[ArchiveFile::new(INDEX_FILE_NAME, page.html)])
        })
        .await;

    let archive = match result {
        Ok(Ok(archive)) => archive,
        Ok(Err(e)) => {
            tracing::error!("failed to process {}: {}", url, e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new(&e.to_string())),
            ));
        }
        Err(e) => {
            tracing::error!("mirror task panicked for {}: {}", url, e);
            return Err((
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(ErrorResponse::new("Failed to process the website")),
            ));
        }
    };

    tracing::info!("finished mirroring {} ({} archive bytes)", url, archive.len());

    let headers = [
        (header::CONTENT_TYPE, "application/zip".to_string()),
        (
            header::CONTENT_DISPOSITION,
            format!("attachment; filename=\"{ARCHIVE_FILE_NAME}\""),
        ),
    ];

    Ok((headers, archive))
}
