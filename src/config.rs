use serde::Deserialize;
use std::path::Path;

use crate::error::{AppError, AppResult};
use crate::models::DEFAULT_ZIP_NAME;

/// 上传文件大小上限（500MB）
pub const MAX_FILE_SIZE_BYTES: u64 = 500 * 1024 * 1024;

/// 压缩包条目的压缩方式
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Compression {
    /// DEFLATE 压缩
    #[default]
    Deflate,
    /// 只打包不压缩
    Store,
}

impl Compression {
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_lowercase().as_str() {
            "deflate" | "deflated" => Some(Compression::Deflate),
            "store" | "stored" | "none" => Some(Compression::Store),
            _ => None,
        }
    }
}

/// 程序配置文件
#[derive(Clone, Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// 允许的最大源文件大小（字节）
    pub max_file_size: u64,
    /// 未指定时使用的压缩包名称
    pub default_zip_name: String,
    /// 压缩包输出目录
    pub output_dir: String,
    /// 压缩方式
    pub compression: Compression,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 失败报告文件
    pub report_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            max_file_size: MAX_FILE_SIZE_BYTES,
            default_zip_name: DEFAULT_ZIP_NAME.to_string(),
            output_dir: ".".to_string(),
            compression: Compression::Deflate,
            verbose_logging: false,
            report_file: "split_report.txt".to_string(),
        }
    }
}

impl Config {
    /// 默认值 + 环境变量
    pub fn from_env() -> Self {
        Self::default().with_env_overrides()
    }

    /// 读取 TOML 配置文件，未出现的字段使用默认值，然后应用环境变量
    pub fn from_file(path: &Path) -> AppResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| AppError::file(path.display().to_string(), e))?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| {
                AppError::Config(format!("无法解析配置文件 {}: {}", path.display(), e))
            })?;

        Ok(config.with_env_overrides())
    }

    fn with_env_overrides(self) -> Self {
        Self {
            max_file_size: std::env::var("PDF_SPLIT_MAX_FILE_SIZE").ok().and_then(|v| v.parse().ok()).unwrap_or(self.max_file_size),
            default_zip_name: std::env::var("PDF_SPLIT_ZIP_NAME").unwrap_or(self.default_zip_name),
            output_dir: std::env::var("PDF_SPLIT_OUTPUT_DIR").unwrap_or(self.output_dir),
            compression: std::env::var("PDF_SPLIT_COMPRESSION").ok().and_then(|v| Compression::from_name(&v)).unwrap_or(self.compression),
            verbose_logging: std::env::var("VERBOSE_LOGGING").ok().and_then(|v| v.parse().ok()).unwrap_or(self.verbose_logging),
            report_file: std::env::var("PDF_SPLIT_REPORT_FILE").unwrap_or(self.report_file),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = Config::default();
        assert_eq!(config.max_file_size, 500 * 1024 * 1024);
        assert_eq!(config.default_zip_name, "split_files");
        assert_eq!(config.compression, Compression::Deflate);
    }

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: Config = toml::from_str(
            r#"
            output_dir = "out"
            compression = "store"
            "#,
        )
        .unwrap();
        assert_eq!(config.output_dir, "out");
        assert_eq!(config.compression, Compression::Store);
        assert_eq!(config.default_zip_name, "split_files");
        assert!(!config.verbose_logging);
    }

    #[test]
    fn test_from_file_reports_bad_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("bad.toml");
        std::fs::write(&path, "max_file_size = \"lots\"").unwrap();

        match Config::from_file(&path) {
            Err(AppError::Config(msg)) => assert!(msg.contains("bad.toml")),
            other => panic!("应该返回配置错误，实际: {:?}", other),
        }
    }

    #[test]
    fn test_compression_from_name() {
        assert_eq!(Compression::from_name("Deflate"), Some(Compression::Deflate));
        assert_eq!(Compression::from_name(" store "), Some(Compression::Store));
        assert_eq!(Compression::from_name("bzip2"), None);
    }
}
