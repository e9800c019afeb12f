//! CSS url() 引用扫描和重写
//!
//! 按文本方式扫描CSS片段中的 `url(...)` 引用并重写其中的URL，
//! 不做完整的CSS语法解析，因此对残缺或不合法的CSS同样有效。
//!
//! 已知局限：不处理嵌套引号，也不处理URL里出现字面 `)` 的情况。

use std::sync::OnceLock;

use regex::{Captures, Regex};
use url::Url;

use crate::parsers::rewriter::rewrite_url;

/// `url(`，可选的单/双引号，非贪婪的URL本体，可选引号，`)`
fn css_url_regex() -> &'static Regex {
    static CSS_URL_REGEX: OnceLock<Regex> = OnceLock::new();
    CSS_URL_REGEX.get_or_init(|| Regex::new(r#"url\(['"]?(.*?)['"]?\)"#).unwrap())
}

/// 重写CSS文本中每个 url() 引用的主机名
///
/// 每个匹配重新输出为单引号形式 `url('...')`，不管原来带不带引号；
/// 匹配之外的文本逐字保留。没有任何匹配时返回值与输入完全相同。
pub fn rewrite_css_urls(css: &str, base_url: &Url, replacement_host: &str) -> String {
    css_url_regex()
        .replace_all(css, |caps: &Captures| {
            let candidate = &caps[1];
            format!(
                "url('{}')",
                rewrite_url(candidate, base_url, replacement_host).into_inner()
            )
        })
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn base() -> Url {
        Url::parse("https://old.com/styles/main.css").unwrap()
    }

    #[test]
    fn test_rewrite_single_quoted_url() {
        let css = "background:url('/img.png')";
        assert_eq!(
            rewrite_css_urls(css, &base(), "new.com"),
            "background:url('https://new.com/img.png')"
        );
    }

    #[test]
    fn test_rewrite_double_quoted_url() {
        let css = r#"background-image: url("https://old.com/bg.jpg");"#;
        assert_eq!(
            rewrite_css_urls(css, &base(), "new.com"),
            "background-image: url('https://new.com/bg.jpg');"
        );
    }

    #[test]
    fn test_rewrite_unquoted_url_normalizes_quoting() {
        let css = ".x{background:url(../a.png)}";
        assert_eq!(
            rewrite_css_urls(css, &base(), "new.com"),
            ".x{background:url('https://new.com/a.png')}"
        );
    }

    #[test]
    fn test_rewrite_multiple_urls_preserves_surrounding_text() {
        let css = "body{background:url(/a.png) no-repeat;cursor:url('/b.cur'),auto}";
        assert_eq!(
            rewrite_css_urls(css, &base(), "new.com"),
            "body{background:url('https://new.com/a.png') no-repeat;cursor:url('https://new.com/b.cur'),auto}"
        );
    }

    #[test]
    fn test_no_match_leaves_css_untouched() {
        let css = "  .a { color: red; }  /* no references here */";
        assert_eq!(rewrite_css_urls(css, &base(), "new.com"), css);
    }

    #[test]
    fn test_data_url_kept_but_requoted() {
        // data: URL没有主机名可换，值本身原样保留，只有引号被归一化
        let css = "background:url(\"data:image/gif;base64,R0lGOD\")";
        assert_eq!(
            rewrite_css_urls(css, &base(), "new.com"),
            "background:url('data:image/gif;base64,R0lGOD')"
        );
    }
}
