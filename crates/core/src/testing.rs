//! 测试替身，仅在 `test-utils` feature 下编译。

use crate::common::{Stock, TimeFrame};
use crate::market::entity::Candle;
use crate::market::error::MarketError;
use crate::market::port::HistoricalDataProvider;
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::Mutex;

/// 数据提供者收到的一次请求。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FetchRequest {
    pub stock: Stock,
    pub timeframe: TimeFrame,
    pub start: DateTime<Utc>,
    pub end: DateTime<Utc>,
}

/// # Summary
/// 返回预设结果的数据提供者，并记录收到的每一次请求。
///
/// # Invariants
/// - 每次调用都返回同一份预设结果的克隆。
pub struct ScriptedProvider {
    // 预设的返回结果
    response: Result<Vec<Candle>, MarketError>,
    // 已收到的请求记录
    requests: Mutex<Vec<FetchRequest>>,
}

impl ScriptedProvider {
    /// 创建一个总是返回给定 K 线的提供者。
    pub fn with_candles(candles: Vec<Candle>) -> Self {
        Self {
            response: Ok(candles),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 创建一个总是返回给定错误的提供者。
    pub fn failing(error: MarketError) -> Self {
        Self {
            response: Err(error),
            requests: Mutex::new(Vec::new()),
        }
    }

    /// 返回迄今为止收到的全部请求。
    pub async fn requests(&self) -> Vec<FetchRequest> {
        self.requests.lock().await.clone()
    }
}

#[async_trait]
impl HistoricalDataProvider for ScriptedProvider {
    async fn fetch_candles(
        &self,
        stock: &Stock,
        timeframe: TimeFrame,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<Candle>, MarketError> {
        self.requests.lock().await.push(FetchRequest {
            stock: stock.clone(),
            timeframe,
            start,
            end,
        });
        self.response.clone()
    }
}
