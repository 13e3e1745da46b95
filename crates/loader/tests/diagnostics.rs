use chrono::{TimeZone, Utc};
use std::io::{self, Write};
use std::sync::{Arc, Mutex};
use stockpred_core::data::port::StockDataLoader;
use stockpred_core::market::error::MarketError;
use stockpred_core::testing::ScriptedProvider;
use stockpred_loader::converter::CandleConverter;
use stockpred_loader::loader::DataLoader;
use tracing_subscriber::fmt::MakeWriter;

/// 将日志输出收集到内存中的写入器。
#[derive(Clone, Default)]
struct Capture(Arc<Mutex<Vec<u8>>>);

impl Capture {
    fn contents(&self) -> String {
        String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
    }
}

impl Write for Capture {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.lock().unwrap().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for Capture {
    type Writer = Capture;

    fn make_writer(&'a self) -> Self::Writer {
        self.clone()
    }
}

/// # Summary
/// 容错模式吞掉错误时，诊断日志中必须带有错误原文与证券代码。
///
/// # Logic
/// 1. 在当前线程挂载一个写入内存的 fmt subscriber。
/// 2. 使用必然失败的数据提供者调用加载器。
/// 3. 断言返回空列表，且日志包含 ERROR 级别、代码与错误文本。
#[tokio::test]
async fn test_fail_soft_emits_diagnostic() {
    let capture = Capture::default();
    let subscriber = tracing_subscriber::fmt()
        .with_writer(capture.clone())
        .with_ansi(false)
        .finish();
    let _guard = tracing::subscriber::set_default(subscriber);

    let provider = Arc::new(ScriptedProvider::failing(MarketError::Network(
        "connection refused".to_string(),
    )));
    let loader = DataLoader::new(provider, Arc::new(CandleConverter::new()));

    let start = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    let end = Utc.with_ymd_and_hms(2024, 1, 3, 0, 0, 0).unwrap();
    let data = loader.load_data("AAPL", start, end).await;
    assert_eq!(data, Ok(Vec::new()));

    let logs = capture.contents();
    assert!(logs.contains("ERROR"), "日志应为 ERROR 级别: {logs}");
    assert!(
        logs.contains("Error fetching stock data for AAPL: Network error: connection refused"),
        "日志应包含错误原文: {logs}"
    );
}
