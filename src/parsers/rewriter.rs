//! URL主机名重写
//!
//! 核心纯函数：把候选URL解析到基准URL上，只替换主机名部分，
//! 其余组成部分（协议、端口、路径、查询、片段）保持原样。

use url::Url;

/// 单个URL的重写结果
///
/// 无法解析的候选值按设计静默放行（不是错误）；
/// 用显式的标签区分两条路径，调用方和测试不必靠字符串比较推断。
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum RewriteOutcome {
    /// 解析成功，主机名已替换为新域名
    Rewritten(String),
    /// 候选值无法作为URL处理，原样保留
    Unchanged(String),
}

impl RewriteOutcome {
    /// 取出最终写回文档的字符串值
    pub fn into_inner(self) -> String {
        match self {
            RewriteOutcome::Rewritten(value) => value,
            RewriteOutcome::Unchanged(value) => value,
        }
    }

    pub fn is_rewritten(&self) -> bool {
        matches!(self, RewriteOutcome::Rewritten(_))
    }
}

/// 把候选URL的主机名替换为新域名
///
/// `raw` 可以是绝对URL、协议相对、路径相对、片段（`#...`），
/// 也可以是根本不是URL的字符串。相对引用先按标准规则解析到
/// `base` 上；解析失败时原值原样返回。空字符串同样原样返回。
///
/// 对已经指向 `new_host` 的URL重复调用产生相同结果（幂等）。
pub fn rewrite_url(raw: &str, base: &Url, new_host: &str) -> RewriteOutcome {
    if raw.is_empty() {
        return RewriteOutcome::Unchanged(raw.to_string());
    }

    let mut resolved = match Url::options().base_url(Some(base)).parse(raw) {
        Ok(url) => url,
        Err(_) => return RewriteOutcome::Unchanged(raw.to_string()),
    };

    // cannot-be-a-base URL（javascript:、mailto:、data: 等）没有
    // 可替换的主机名，set_host 会失败；这类值原样放行
    if resolved.set_host(Some(new_host)).is_err() {
        return RewriteOutcome::Unchanged(raw.to_string());
    }

    RewriteOutcome::Rewritten(resolved.to_string())
}
