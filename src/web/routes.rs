//! Web 路由定义

use std::sync::Arc;

use axum::{
    routing::{get, post},
    Router,
};

use crate::web::{handlers, types::AppState};

/// 创建路由结构
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new()
        // 落地页
        .route("/", get(handlers::index))
        // 唯一的业务端点
        .route("/download", post(handlers::download_website))
}
