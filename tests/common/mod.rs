// 集成测试公共模块
//
// 提供测试辅助工具和共享的示例页面

use url::Url;

use pagemirror::core::rewrite_page_from_data;

/// HTML测试工具
pub struct HtmlTestHelper;

impl HtmlTestHelper {
    /// 跑完整的重写流程并把结果转成字符串
    pub fn rewrite_to_string(html: &str, base: &str, replacement_host: &str) -> String {
        let base_url = Url::parse(base).unwrap();
        let page = rewrite_page_from_data(html.as_bytes(), None, &base_url, replacement_host)
            .expect("rewrite pipeline failed");
        String::from_utf8(page.html).unwrap()
    }

    /// 覆盖三类重写目标的示例页面
    pub fn sample_page() -> &'static str {
        r#"<!DOCTYPE html>
<html>
<head>
    <title>Sample</title>
    <link rel="stylesheet" href="/css/main.css">
    <style>.hero{background:url(../banner.jpg)}</style>
</head>
<body>
    <a href="/about">About</a>
    <a href="https://old.com/contact?tab=1#top">Contact</a>
    <img src="//cdn.old.com/logo.png">
    <div style="background:url('/img.png');color:red"></div>
    <p data-url="/untouched">plain</p>
    <script src="app.js"></script>
</body>
</html>"#
    }
}
