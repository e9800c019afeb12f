//! # 输出构建器模块
//!
//! 把重写完成的页面打包为最终交付格式：
//!
//! - `zip_builder` - ZIP归档构建器

pub mod zip_builder;

// Re-export commonly used items for convenience
pub use zip_builder::{build_zip_archive, ArchiveFile, INDEX_FILE_NAME};
