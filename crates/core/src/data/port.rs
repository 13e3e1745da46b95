use crate::data::entity::{StockData, closing_prices};
use crate::data::error::LoadError;
use crate::market::entity::Candle;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;

/// # Summary
/// K 线到内部记录的转换器接口。
///
/// # Invariants
/// - 纯函数：无副作用、不失败。
/// - 一对一且保序：输出长度与输入相同，不过滤、不去重、不排序。
pub trait StockDataConverter: Send + Sync {
    /// # Summary
    /// 将一组 K 线转换为内部记录列表。
    ///
    /// # Arguments
    /// * `candles`: 数据提供者返回的原始 K 线。
    ///
    /// # Returns
    /// 与输入等长、同序的 `StockData` 列表。
    fn convert(&self, candles: Vec<Candle>) -> Vec<StockData>;
}

/// # Summary
/// 历史行情加载器接口，编排“抓取 → 转换”流程。
///
/// # Invariants
/// - 每次调用相互独立，无缓存、无重试、无跨调用状态。
/// - 要么返回完整的转换结果，要么返回空列表或错误，不存在部分结果。
#[async_trait]
pub trait StockDataLoader: Send + Sync {
    /// # Summary
    /// 加载指定证券在时间范围内的日线数据。
    ///
    /// # Logic
    /// 1. 以固定的一日周期请求数据提供者。
    /// 2. 将 K 线交给转换器。
    /// 3. 失败时按加载器的容错策略处理。
    ///
    /// # Arguments
    /// * `symbol`: 证券代码。
    /// * `start`: 开始时间。
    /// * `end`: 结束时间。
    ///
    /// # Returns
    /// 成功返回记录列表；仅在严格策略下返回 `LoadError`。
    async fn load_data(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StockData>, LoadError>;

    /// # Summary
    /// 加载收盘价序列。
    ///
    /// # Logic
    /// 1. 委托 `load_data`。
    /// 2. 按顺序投影 `close` 字段，继承相同的容错策略。
    async fn load_closing_prices(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Decimal>, LoadError> {
        let data = self.load_data(symbol, start, end).await?;
        Ok(closing_prices(&data))
    }
}
