//! 页面处理器

use axum::response::Html;

/// 根路由：静态落地页
pub async fn index() -> Html<&'static str> {
    Html(include_str!("../../../templates/index.html"))
}
