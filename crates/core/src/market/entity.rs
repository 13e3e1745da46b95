use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// # Summary
/// 单根 K 线数据实体，即数据提供者返回的原始 OHLCV 样本。
///
/// # Invariants
/// - 由数据提供者产出，返回后不再修改。
/// - 本层不校验 `high >= low` 等业务约束，异常数据原样向下游传递。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Candle {
    // K 线开始时间
    pub time: DateTime<Utc>,
    // 开盘价
    pub open: Decimal,
    // 最高价
    pub high: Decimal,
    // 最低价
    pub low: Decimal,
    // 收盘价
    pub close: Decimal,
    // 成交量
    pub volume: i64,
}
