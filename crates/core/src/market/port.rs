use crate::common::{Stock, TimeFrame};
use crate::market::entity::Candle;
use crate::market::error::MarketError;
use async_trait::async_trait;
use chrono::{DateTime, Utc};

/// # Summary
/// 历史行情数据提供者接口（原始数据源）。
///
/// # Invariants
/// - 参数校验、限流与鉴权均由实现者负责，调用方只做透传。
/// - 返回顺序即数据源给出的顺序，调用方不会重新排序。
#[async_trait]
pub trait HistoricalDataProvider: Send + Sync {
    /// # Summary
    /// 获取特定证券在指定时间范围内的 K 线数据。
    ///
    /// # Logic
    /// 1. 验证时间范围与证券代码合法性。
    /// 2. 构建数据源请求。
    /// 3. 执行网络请求并解析响应数据。
    ///
    /// # Arguments
    /// * `stock`: 证券身份。
    /// * `timeframe`: K 线周期。
    /// * `start`: 开始时间。
    /// * `end`: 结束时间，满足 `start <= end`。
    ///
    /// # Returns
    /// 成功返回 K 线列表，失败返回 MarketError。
    async fn fetch_candles(
        &self,
        stock: &Stock,
        timeframe: TimeFrame,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Candle>, MarketError>;
}
