//! ZIP归档构建器
//!
//! 把一个或多个命名字节流打包为内存中的ZIP归档，
//! deflate最高压缩级别。归档按任务构建一次，输出后即丢弃。

use std::io::{Cursor, Write};

use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use crate::core::PagemirrorError;

/// 归档里页面条目的固定名称
pub const INDEX_FILE_NAME: &str = "index.html";

/// 归档中的一个命名条目
pub struct ArchiveFile {
    pub name: String,
    pub data: Vec<u8>,
}

impl ArchiveFile {
    pub fn new(name: &str, data: Vec<u8>) -> ArchiveFile {
        ArchiveFile {
            name: name.to_string(),
            data,
        }
    }
}

/// 把给定条目打包为ZIP归档字节
pub fn build_zip_archive(files: &[ArchiveFile]) -> Result<Vec<u8>, PagemirrorError> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default()
        .compression_method(CompressionMethod::Deflated)
        .compression_level(Some(9));

    for file in files {
        writer
            .start_file(file.name.as_str(), options)
            .map_err(|e| PagemirrorError::new(&format!("Failed to create archive entry: {e}")))?;
        writer
            .write_all(&file.data)
            .map_err(|e| PagemirrorError::new(&format!("Failed to write archive entry: {e}")))?;
    }

    let cursor = writer
        .finish()
        .map_err(|e| PagemirrorError::new(&format!("Failed to finalize archive: {e}")))?;

    Ok(cursor.into_inner())
}
