use crate::market::entity::Candle;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// # Summary
/// 系统内部统一的日线行情记录，由转换器从 `Candle` 生成。
///
/// # Invariants
/// - 与来源 `Candle` 逐字段相等，仅 `time` 更名为 `date`。
/// - 创建后归调用方所有，不再修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StockData {
    // 采样时间
    pub date: DateTime<Utc>,
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

impl From<Candle> for StockData {
    fn from(candle: Candle) -> Self {
        Self {
            date: candle.time,
            open: candle.open,
            high: candle.high,
            low: candle.low,
            close: candle.close,
            volume: candle.volume,
        }
    }
}

/// # Summary
/// 收盘价投影。
///
/// # Invariants
/// - 输出长度等于输入长度，第 i 个元素为 `data[i].close`。
pub fn closing_prices(data: &[StockData]) -> Vec<Decimal> {
    data.iter().map(|d| d.close).collect()
}
