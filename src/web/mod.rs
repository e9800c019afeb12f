//! Web 服务器模块
//!
//! 对外提供抓取-重写-打包服务的HTTP层；
//! 每个请求独立处理，服务器自身不保存任何任务状态。

pub mod config;
pub mod handlers;
pub mod routes;
pub mod types;

pub use config::*;
pub use routes::*;
pub use types::*;

use std::sync::Arc;

use axum::Router;
use tower_http::{cors::CorsLayer, services::ServeDir};

use crate::core::{PagemirrorError, PagemirrorOptions};

/// Web 服务器
pub struct WebServer {
    config: WebConfig,
    options: PagemirrorOptions,
}

impl WebServer {
    /// 创建新的 Web 服务器
    pub fn new(config: WebConfig, options: PagemirrorOptions) -> Self {
        Self { config, options }
    }

    /// 启动 Web 服务器
    pub async fn start(&self) -> Result<(), PagemirrorError> {
        let app_state = Arc::new(AppState {
            options: self.options.clone(),
        });

        let app = create_router(app_state, &self.config);

        let listener = tokio::net::TcpListener::bind(self.config.listen_address())
            .await
            .map_err(|e| PagemirrorError::new(&format!("Failed to bind server: {e}")))?;

        tracing::info!(
            "Web server starting at http://{}",
            self.config.listen_address()
        );

        axum::serve(listener, app)
            .await
            .map_err(|e| PagemirrorError::new(&format!("Server error: {e}")))?;

        Ok(())
    }
}

/// 创建路由器
fn create_router(app_state: Arc<AppState>, config: &WebConfig) -> Router {
    let mut app = create_routes().with_state(app_state);

    // 添加CORS支持
    app = app.layer(CorsLayer::permissive());

    // 添加静态文件服务（如果配置了）
    if let Some(static_dir) = &config.static_dir {
        app = app.nest_service("/static", ServeDir::new(static_dir));
    }

    app
}
