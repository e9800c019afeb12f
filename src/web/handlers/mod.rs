//! Web 请求处理器

pub mod download;
pub mod pages;

pub use download::download_website;
pub use pages::index;
