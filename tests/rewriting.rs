//! 端到端重写流程测试
//!
//! 不经过网络，直接把HTML字节喂给核心流程，
//! 验证三个转换器加序列化的整体行为。

mod common;

use common::HtmlTestHelper;

/// 场景1：相对 href 被解析到基准URL并替换主机名
#[test]
fn test_relative_href_is_rewritten() {
    let output = HtmlTestHelper::rewrite_to_string(
        r#"<html><body><a href="/about">About</a></body></html>"#,
        "https://old.com/index.html",
        "new.com",
    );

    assert!(
        output.contains(r#"<a href="https://new.com/about">"#),
        "unexpected output: {output}"
    );
}

/// 场景2：内联样式里的 url() 引用被重写并归一化为单引号
#[test]
fn test_inline_style_url_is_rewritten() {
    let output = HtmlTestHelper::rewrite_to_string(
        r#"<html><body><div style="background:url('/img.png')"></div></body></html>"#,
        "https://old.com",
        "new.com",
    );

    assert!(
        output.contains("background:url('https://new.com/img.png')"),
        "unexpected output: {output}"
    );
}

/// 场景3：样式块里的相对引用先解析再替换主机名，其余CSS文本逐字保留
#[test]
fn test_style_block_url_is_rewritten() {
    let output = HtmlTestHelper::rewrite_to_string(
        "<html><head><style>.x{background:url(../a.png)}</style></head></html>",
        "https://old.com/sub/page.html",
        "new.com",
    );

    assert!(
        output.contains(".x{background:url('https://new.com/a.png')}"),
        "unexpected output: {output}"
    );
}

/// 不带 href/src/style 的元素在三个转换器之后保持原样
#[test]
fn test_untargeted_elements_are_untouched() {
    let output = HtmlTestHelper::rewrite_to_string(
        r#"<html><body><p data-url="/x" class="c">plain text</p></body></html>"#,
        "https://old.com",
        "new.com",
    );

    assert!(
        output.contains(r#"<p data-url="/x" class="c">plain text</p>"#),
        "unexpected output: {output}"
    );
}

/// 查询串和片段跟着主机名替换一起原样保留
#[test]
fn test_query_and_fragment_preserved() {
    let output = HtmlTestHelper::rewrite_to_string(
        r#"<html><body><a href="https://old.com/contact?tab=1#top">c</a></body></html>"#,
        "https://old.com/index.html",
        "new.com",
    );

    assert!(
        output.contains(r#"href="https://new.com/contact?tab=1#top""#),
        "unexpected output: {output}"
    );
}

/// javascript: 等无法解析为可替换URL的值原样放行
#[test]
fn test_javascript_href_passes_through() {
    let output = HtmlTestHelper::rewrite_to_string(
        r#"<html><body><a href="javascript:void(0)">x</a></body></html>"#,
        "https://old.com",
        "new.com",
    );

    assert!(
        output.contains(r#"href="javascript:void(0)""#),
        "unexpected output: {output}"
    );
}

/// 没有 url() 引用的 style 属性不被重新格式化
#[test]
fn test_plain_style_attribute_untouched() {
    let output = HtmlTestHelper::rewrite_to_string(
        r#"<html><body><div style="color: red;  font-weight:bold"></div></body></html>"#,
        "https://old.com",
        "new.com",
    );

    assert!(
        output.contains(r#"style="color: red;  font-weight:bold""#),
        "unexpected output: {output}"
    );
}

/// 整个流程幂等：对输出再跑一遍得到完全相同的字节
#[test]
fn test_pipeline_is_idempotent() {
    let first = HtmlTestHelper::rewrite_to_string(
        HtmlTestHelper::sample_page(),
        "https://old.com/sub/page.html",
        "new.com",
    );
    let second =
        HtmlTestHelper::rewrite_to_string(&first, "https://old.com/sub/page.html", "new.com");

    assert_eq!(first, second);
}

/// 示例页面的全部重写目标一次通过
#[test]
fn test_sample_page_covers_all_transformers() {
    let output = HtmlTestHelper::rewrite_to_string(
        HtmlTestHelper::sample_page(),
        "https://old.com/sub/page.html",
        "new.com",
    );

    // 属性转换器
    assert!(output.contains(r#"href="https://new.com/css/main.css""#));
    assert!(output.contains(r#"href="https://new.com/about""#));
    assert!(output.contains(r#"src="https://new.com/logo.png""#));
    assert!(output.contains(r#"src="https://new.com/sub/app.js""#));
    // 内联样式转换器（url()之外的声明逐字保留）
    assert!(output.contains("background:url('https://new.com/img.png');color:red"));
    // 样式块转换器
    assert!(output.contains(".hero{background:url('https://new.com/banner.jpg')}"));
    // 未覆盖的属性保持原样
    assert!(output.contains(r#"data-url="/untouched""#));
}
