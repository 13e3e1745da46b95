use crate::market::error::MarketError;
use thiserror::Error;

/// # Summary
/// 数据加载域错误枚举。
///
/// # Invariants
/// - 必须通过 `thiserror` 派生 `Error` trait。
/// - `MissingCollaborator` 只会在构造阶段出现，不会被容错策略吞掉。
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LoadError {
    // 数据提供者返回的错误
    #[error("Error fetching stock data: {0}")]
    Provider(#[from] MarketError),
    // 构造加载器时缺少必需的协作者
    #[error("Missing required collaborator: {0}")]
    MissingCollaborator(&'static str),
}
