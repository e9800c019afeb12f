//! # 网络模块
//!
//! 这个模块包含与网络通信相关的功能：
//!
//! - HTTP会话管理和源页面下载
//!
//! # 模块组织
//!
//! - `session` - HTTP会话管理、请求处理、文档下载

pub mod session;

// Re-export commonly used items for convenience
pub use session::Session;
