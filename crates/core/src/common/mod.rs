use chrono::Duration;
use serde::{Deserialize, Serialize};
use std::str::FromStr;

/// # Summary
/// 证券标的实体，代表一次历史数据请求所针对的股票。
///
/// # Invariants
/// - `symbol` 必须是非空的交易代码，合法性由数据提供者校验。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Stock {
    // 股票代码 (例如: AAPL, MSFT)
    pub symbol: String,
    // 交易所代码 (可选，例如: NASDAQ)
    pub exchange: Option<String>,
}

impl Stock {
    /// 以代码与可选交易所构造证券身份。
    pub fn new(symbol: impl Into<String>, exchange: Option<String>) -> Self {
        Self {
            symbol: symbol.into(),
            exchange,
        }
    }
}

/// # Summary
/// K 线采样周期枚举，定义每根 K 线覆盖的时间跨度。
///
/// # Invariants
/// - `Day1` 恰好对应一个自然日。
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TimeFrame {
    // 1分钟
    Minute1,
    // 5分钟
    Minute5,
    // 1小时
    Hour1,
    // 1日
    Day1,
}

impl TimeFrame {
    /// # Summary
    /// 返回该周期对应的时间跨度。
    ///
    /// # Returns
    /// 以 `chrono::Duration` 表示的单根 K 线时长。
    pub fn duration(&self) -> Duration {
        match self {
            TimeFrame::Minute1 => Duration::minutes(1),
            TimeFrame::Minute5 => Duration::minutes(5),
            TimeFrame::Hour1 => Duration::hours(1),
            TimeFrame::Day1 => Duration::days(1),
        }
    }
}

impl FromStr for TimeFrame {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "1m" | "minute1" => Ok(TimeFrame::Minute1),
            "5m" | "minute5" => Ok(TimeFrame::Minute5),
            "1h" | "hour1" => Ok(TimeFrame::Hour1),
            "1d" | "day1" => Ok(TimeFrame::Day1),
            _ => Err(format!("Unknown TimeFrame: {}", s)),
        }
    }
}

impl std::fmt::Display for TimeFrame {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TimeFrame::Minute1 => write!(f, "1m"),
            TimeFrame::Minute5 => write!(f, "5m"),
            TimeFrame::Hour1 => write!(f, "1h"),
            TimeFrame::Day1 => write!(f, "1d"),
        }
    }
}
