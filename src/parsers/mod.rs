//! # 解析器模块
//!
//! 这个模块包含页面重写用到的各种解析器：
//!
//! - `html` - HTML文档解析、DOM遍历和序列化
//! - `css` - CSS文本中url()引用的扫描和重写
//! - `rewriter` - URL主机名替换（核心纯函数）

pub mod css;
pub mod html;
pub mod rewriter;

// Re-export commonly used items for convenience
pub use css::rewrite_css_urls;
pub use rewriter::{rewrite_url, RewriteOutcome};
