use stockpred_core::data::entity::StockData;
use stockpred_core::data::port::StockDataConverter;
use stockpred_core::market::entity::Candle;

/// # Summary
/// 默认的 K 线转换器，逐字段复制为内部记录。
///
/// # Invariants
/// - 不做任何业务校验，负成交量等异常数据原样保留。
#[derive(Debug, Clone, Copy, Default)]
pub struct CandleConverter;

impl CandleConverter {
    pub fn new() -> Self {
        Self
    }
}

impl StockDataConverter for CandleConverter {
    /// # Summary
    /// 将 K 线列表转换为 `StockData` 列表。
    ///
    /// # Logic
    /// 1. 按输入顺序逐个映射 (date←time, open, high, low, close, volume)。
    ///
    /// # Returns
    /// 与输入等长、同序的记录列表；空输入返回空列表。
    fn convert(&self, candles: Vec<Candle>) -> Vec<StockData> {
        candles.into_iter().map(StockData::from).collect()
    }
}
