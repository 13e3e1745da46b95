use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::sync::Arc;
use stockpred_core::common::{Stock, TimeFrame};
use stockpred_core::config::{FailurePolicy, LoaderConfig};
use stockpred_core::data::entity::StockData;
use stockpred_core::data::error::LoadError;
use stockpred_core::data::port::{StockDataConverter, StockDataLoader};
use stockpred_core::market::error::MarketError;
use stockpred_core::market::port::HistoricalDataProvider;
use tracing::{debug, error};

/// 加载器请求数据提供者时使用的固定采样周期。
pub const DAILY: TimeFrame = TimeFrame::Day1;

/// # Summary
/// 历史日线加载器，串联数据提供者与转换器。
///
/// # Invariants
/// - 两个协作者在构造时即已就位，之后不可替换。
/// - 不持有任何跨调用的可变状态，可通过 `Arc` 在多个任务间共享。
pub struct DataLoader {
    // 历史行情数据源
    provider: Arc<dyn HistoricalDataProvider>,
    // K 线转换器
    converter: Arc<dyn StockDataConverter>,
    // 加载器配置
    config: LoaderConfig,
}

impl DataLoader {
    /// # Summary
    /// 使用默认配置创建加载器。
    ///
    /// # Arguments
    /// * `provider`: 历史行情数据源。
    /// * `converter`: K 线转换器。
    ///
    /// # Returns
    /// 采用 `FailSoft` 策略的加载器。
    pub fn new(
        provider: Arc<dyn HistoricalDataProvider>,
        converter: Arc<dyn StockDataConverter>,
    ) -> Self {
        Self::with_config(provider, converter, LoaderConfig::default())
    }

    /// 使用指定配置创建加载器。
    pub fn with_config(
        provider: Arc<dyn HistoricalDataProvider>,
        converter: Arc<dyn StockDataConverter>,
        config: LoaderConfig,
    ) -> Self {
        Self {
            provider,
            converter,
            config,
        }
    }

    /// 返回逐项组装加载器的构建器。
    pub fn builder() -> DataLoaderBuilder {
        DataLoaderBuilder::default()
    }

    pub fn config(&self) -> &LoaderConfig {
        &self.config
    }

    /// # Summary
    /// 执行一次“抓取 → 转换”。
    ///
    /// # Logic
    /// 1. 以配置中的交易所构造证券身份。
    /// 2. 以固定日线周期请求数据提供者。
    /// 3. 将结果整体交给转换器。
    async fn fetch(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StockData>, MarketError> {
        let stock = Stock::new(symbol, self.config.exchange.clone());
        let candles = self
            .provider
            .fetch_candles(&stock, DAILY, start, end)
            .await?;
        Ok(self.converter.convert(candles))
    }
}

#[async_trait]
impl StockDataLoader for DataLoader {
    /// # Summary
    /// 加载日线数据并按容错策略处理失败。
    ///
    /// # Logic
    /// 1. 调用内部 `fetch`。
    /// 2. 成功则原样返回转换结果。
    /// 3. 失败时输出诊断日志；`FailSoft` 返回空列表，`Strict` 返回错误。
    ///
    /// # Arguments
    /// * `symbol`: 证券代码。
    /// * `start`: 开始时间。
    /// * `end`: 结束时间。
    ///
    /// # Returns
    /// 记录列表，或严格策略下的 `LoadError::Provider`。
    async fn load_data(
        &self,
        symbol: &str,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<Vec<StockData>, LoadError> {
        debug!("Loading daily data for {} from {} to {}", symbol, start, end);

        match self.fetch(symbol, start, end).await {
            Ok(data) => {
                debug!("Loaded {} records for {}", data.len(), symbol);
                Ok(data)
            }
            Err(e) => {
                error!("Error fetching stock data for {}: {}", symbol, e);
                match self.config.failure_policy {
                    FailurePolicy::FailSoft => Ok(Vec::new()),
                    FailurePolicy::Strict => Err(LoadError::Provider(e)),
                }
            }
        }
    }
}

/// # Summary
/// `DataLoader` 的构建器。
///
/// # Invariants
/// - `build` 在缺少数据提供者或转换器时立即失败，不会延迟到首次调用。
#[derive(Default)]
pub struct DataLoaderBuilder {
    provider: Option<Arc<dyn HistoricalDataProvider>>,
    converter: Option<Arc<dyn StockDataConverter>>,
    config: LoaderConfig,
}

impl DataLoaderBuilder {
    pub fn provider(mut self, provider: Arc<dyn HistoricalDataProvider>) -> Self {
        self.provider = Some(provider);
        self
    }

    pub fn converter(mut self, converter: Arc<dyn StockDataConverter>) -> Self {
        self.converter = Some(converter);
        self
    }

    pub fn config(mut self, config: LoaderConfig) -> Self {
        self.config = config;
        self
    }

    /// # Summary
    /// 校验协作者并生成加载器。
    ///
    /// # Returns
    /// 缺少协作者时返回 `LoadError::MissingCollaborator`。
    pub fn build(self) -> Result<DataLoader, LoadError> {
        let provider = self
            .provider
            .ok_or(LoadError::MissingCollaborator("provider"))?;
        let converter = self
            .converter
            .ok_or(LoadError::MissingCollaborator("converter"))?;
        Ok(DataLoader::with_config(provider, converter, self.config))
    }
}
