//! 拆分配置
//!
//! 一次处理运行的全部输入，普通可变结构体 + setter，不做持久化

use crate::error::{AppError, AppResult};
use std::path::Path;
use std::sync::Arc;

/// 默认的压缩包名称（不含扩展名）
pub const DEFAULT_ZIP_NAME: &str = "split_files";

/// 待拆分的源文件
#[derive(Debug, Clone)]
pub struct SourceFile {
    /// 文件名（仅用于校验和日志）
    pub name: String,
    /// 文件内容
    pub bytes: Arc<[u8]>,
}

impl SourceFile {
    pub fn new(name: impl Into<String>, bytes: impl Into<Arc<[u8]>>) -> Self {
        Self {
            name: name.into(),
            bytes: bytes.into(),
        }
    }

    /// 从磁盘读取源文件
    pub async fn from_path(path: &Path) -> AppResult<Self> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| AppError::file(path.display().to_string(), e))?;

        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| path.display().to_string());

        Ok(Self::new(name, bytes))
    }

    /// 文件大小（字节）
    pub fn size(&self) -> u64 {
        self.bytes.len() as u64
    }
}

/// 拆分配置
#[derive(Debug, Clone)]
pub struct SplitConfig {
    pub file: Option<SourceFile>,
    pub prefix: String,
    pub suffix: String,
    pub zip_name: String,
    /// 页码范围表达式，例如 `1-5,8,10-12`
    pub ranges: String,
    /// 跳过的编号，例如 `3,6`
    pub exclusions: String,
}

impl Default for SplitConfig {
    fn default() -> Self {
        Self {
            file: None,
            prefix: String::new(),
            suffix: String::new(),
            zip_name: DEFAULT_ZIP_NAME.to_string(),
            ranges: String::new(),
            exclusions: String::new(),
        }
    }
}

impl SplitConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_file(&mut self, file: Option<SourceFile>) {
        self.file = file;
    }

    pub fn set_prefix(&mut self, prefix: impl Into<String>) {
        self.prefix = prefix.into();
    }

    pub fn set_suffix(&mut self, suffix: impl Into<String>) {
        self.suffix = suffix.into();
    }

    pub fn set_zip_name(&mut self, zip_name: impl Into<String>) {
        self.zip_name = zip_name.into();
    }

    pub fn set_ranges(&mut self, ranges: impl Into<String>) {
        self.ranges = ranges.into();
    }

    pub fn set_exclusions(&mut self, exclusions: impl Into<String>) {
        self.exclusions = exclusions.into();
    }

    /// 恢复初始状态
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// 下载用的压缩包文件名
    ///
    /// 名称为空时回退到 `split_files`，并去掉文件名中不允许的字符
    pub fn archive_file_name(&self) -> String {
        let name = crate::services::file_name::sanitize_component(&self.zip_name);
        if name.is_empty() {
            format!("{}.zip", DEFAULT_ZIP_NAME)
        } else {
            format!("{}.zip", name)
        }
    }
}
