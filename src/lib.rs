//! # Pagemirror Library
//!
//! 一个小型工具库，用于抓取网页并把页面中所有URL引用的主机名
//! 替换为调用方指定的域名，最终打包为可下载的ZIP归档。
//!
//! ## 模块组织
//!
//! - `core` - 核心功能和主要处理逻辑
//! - `parsers` - 资源解析器（HTML、CSS、URL重写）
//! - `network` - 网络通信
//! - `builders` - 输出归档构建器
//! - `web` - Web服务器功能

pub mod builders;
pub mod core;
pub mod env;
pub mod network;
pub mod parsers;
pub mod web;

// Re-export commonly used items for convenience
pub use crate::core::*;
pub use crate::network::*;
pub use crate::parsers::*;
