//! 历史行情加载：K 线转换器、加载器实现与配置读取。

pub mod converter;
pub mod loader;
pub mod settings;
