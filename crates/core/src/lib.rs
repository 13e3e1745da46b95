//! stockpred 领域核心：实体、端口 (Port) 与错误定义。
//!
//! 本 crate 不包含任何具体 I/O，所有外部能力均通过 trait 注入。

pub mod common;
pub mod config;
pub mod data;
pub mod market;

#[cfg(feature = "test-utils")]
pub mod testing;
