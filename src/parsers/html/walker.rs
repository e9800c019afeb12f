//! DOM重写转换器
//!
//! 三个独立的遍历转换器，分别处理：
//!
//! - `href`/`src` 属性里的URL
//! - `style` 属性里的 `url(...)` 引用
//! - `<style>` 块文本内容里的 `url(...)` 引用
//!
//! 每个转换器都是对DOM树的一次深度优先遍历，原地修改节点；
//! 转换器之间没有共享状态，相互顺序不影响结果，
//! 但都必须在序列化之前运行。

use markup5ever_rcdom::{Handle, NodeData};
use url::Url;

use crate::parsers::css::rewrite_css_urls;
use crate::parsers::rewriter::rewrite_url;

use super::dom::{get_node_attr, get_node_name, get_text_content, set_node_attr, set_text_content};

/// 被重写的URL属性；srcset、data-src、poster 等懒加载属性
/// 不在覆盖范围内
const URL_ATTRIBUTES: &[&str] = &["href", "src"];

/// 重写所有元素 href/src 属性里的主机名
pub fn rewrite_attributes(node: &Handle, base_url: &Url, replacement_host: &str) {
    if let NodeData::Element { .. } = node.data {
        for attr_name in URL_ATTRIBUTES {
            if let Some(attr_value) = get_node_attr(node, attr_name) {
                // 空属性值跳过，不算错误
                if attr_value.is_empty() {
                    continue;
                }

                let rewritten = rewrite_url(&attr_value, base_url, replacement_host).into_inner();
                set_node_attr(node, attr_name, Some(rewritten));
            }
        }
    }

    for child_node in node.children.borrow().iter() {
        rewrite_attributes(child_node, base_url, replacement_host);
    }
}

/// 重写所有元素 style 属性里的 url() 引用
pub fn rewrite_inline_styles(node: &Handle, base_url: &Url, replacement_host: &str) {
    if let NodeData::Element { .. } = node.data {
        if let Some(style_value) = get_node_attr(node, "style") {
            let rewritten = rewrite_css_urls(&style_value, base_url, replacement_host);

            // 没有任何匹配时属性保持原样，不重新格式化
            if rewritten != style_value {
                set_node_attr(node, "style", Some(rewritten));
            }
        }
    }

    for child_node in node.children.borrow().iter() {
        rewrite_inline_styles(child_node, base_url, replacement_host);
    }
}

/// 重写所有 <style> 块文本内容里的 url() 引用
pub fn rewrite_style_blocks(node: &Handle, base_url: &Url, replacement_host: &str) {
    if get_node_name(node) == Some("style") {
        let css = get_text_content(node);
        let rewritten = rewrite_css_urls(&css, base_url, replacement_host);

        if rewritten != css {
            set_text_content(node, &rewritten);
        }
    }

    for child_node in node.children.borrow().iter() {
        rewrite_style_blocks(child_node, base_url, replacement_host);
    }
}
