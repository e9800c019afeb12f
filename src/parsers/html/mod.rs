//! HTML解析和处理模块
//!
//! 这个模块分为多个子模块：
//!
//! - `dom`: 基础DOM操作
//! - `metadata`: 文档元数据读取
//! - `serializer`: 序列化功能
//! - `walker`: 三个重写转换器（属性、内联样式、样式块）

pub mod dom;
pub mod metadata;
pub mod serializer;
pub mod walker;

// 重新导出主要的公共 API
pub use dom::{
    find_nodes, get_node_attr, get_node_name, get_text_content, html_to_dom, set_node_attr,
    set_text_content,
};
pub use metadata::{get_charset, get_title};
pub use serializer::serialize_document;
pub use walker::{rewrite_attributes, rewrite_inline_styles, rewrite_style_blocks};
