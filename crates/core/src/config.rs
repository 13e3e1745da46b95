use serde::{Deserialize, Serialize};

/// 全局应用配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub loader: LoaderConfig,
}

/// 数据加载器配置
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoaderConfig {
    // 抓取失败时的处理策略
    pub failure_policy: FailurePolicy,
    // 透传给数据提供者的交易所代码
    pub exchange: Option<String>,
}

/// # Summary
/// 加载器在数据提供者失败时的处理策略。
///
/// # Invariants
/// - `FailSoft` 下调用方永远拿不到抓取错误，只能通过日志区分“无数据”与“抓取失败”。
/// - `Strict` 下抓取失败以 `Err` 返回，空列表仅代表区间内确实没有数据。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FailurePolicy {
    // 记录诊断信息并返回空列表
    #[default]
    FailSoft,
    // 记录诊断信息并返回错误
    Strict,
}
