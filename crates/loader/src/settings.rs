use config::{Config, ConfigError, Environment, File, FileFormat};
use std::path::Path;
use stockpred_core::config::AppConfig;

/// 环境变量前缀，例如 `STOCKPRED_LOADER__FAILURE_POLICY=strict`。
pub const ENV_PREFIX: &str = "STOCKPRED";

/// # Summary
/// 读取应用配置。
///
/// # Logic
/// 1. 以 `AppConfig::default()` 为底。
/// 2. 若指定了路径，叠加该 TOML 文件（文件必须存在）。
/// 3. 叠加 `STOCKPRED_` 前缀的环境变量，层级分隔符为 `__`。
///
/// # Arguments
/// * `path`: 可选的 TOML 配置文件路径。
///
/// # Returns
/// 合并后的配置，或 `ConfigError`。
pub fn load_config(path: Option<&Path>) -> Result<AppConfig, ConfigError> {
    build_config(path, env_source())
}

fn env_source() -> Environment {
    Environment::with_prefix(ENV_PREFIX)
        .prefix_separator("_")
        .separator("__")
}

fn build_config(path: Option<&Path>, env: Environment) -> Result<AppConfig, ConfigError> {
    let mut builder = Config::builder();
    if let Some(path) = path {
        builder = builder.add_source(File::from(path).format(FileFormat::Toml).required(true));
    }
    builder.add_source(env).build()?.try_deserialize()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use stockpred_core::config::FailurePolicy;

    fn env_of(vars: &[(&str, &str)]) -> Environment {
        let map = vars
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        env_source().source(Some(map))
    }

    #[test]
    fn test_defaults_without_sources() {
        let config = build_config(None, env_of(&[])).unwrap();
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_toml_file_overrides_defaults() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(
            file,
            "[loader]\nfailure_policy = \"strict\"\nexchange = \"NASDAQ\""
        )
        .unwrap();

        let config = build_config(Some(file.path()), env_of(&[])).unwrap();
        assert_eq!(config.loader.failure_policy, FailurePolicy::Strict);
        assert_eq!(config.loader.exchange.as_deref(), Some("NASDAQ"));
    }

    #[test]
    fn test_env_overrides_file() {
        let mut file = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "[loader]\nfailure_policy = \"strict\"").unwrap();

        let env = env_of(&[("STOCKPRED_LOADER__FAILURE_POLICY", "fail_soft")]);
        let config = build_config(Some(file.path()), env).unwrap();
        assert_eq!(config.loader.failure_policy, FailurePolicy::FailSoft);
    }

    #[test]
    fn test_missing_file_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("absent.toml");
        assert!(build_config(Some(&missing), env_of(&[])).is_err());
    }

    #[test]
    fn test_unknown_policy_is_an_error() {
        let env = env_of(&[("STOCKPRED_LOADER__FAILURE_POLICY", "retry")]);
        assert!(build_config(None, env).is_err());
    }
}
