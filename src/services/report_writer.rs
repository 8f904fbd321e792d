//! 报告写入服务 - 业务能力层
//!
//! 只负责把失败的页面追加到报告文件，不关心流程

use anyhow::{Context, Result};
use std::fs::OpenOptions;
use std::io::Write;
use tracing::debug;

use crate::models::ProcessingResult;

/// 报告写入服务
///
/// 职责：
/// - 将处理失败的页面写入报告文件
/// - 只处理单条结果
/// - 不关心流程顺序
pub struct ReportWriter {
    report_file_path: String,
}

impl ReportWriter {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            report_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.report_file_path
    }

    /// 写入一条失败记录，成功的结果直接忽略
    ///
    /// # 参数
    /// - `result`: 单页处理结果
    pub fn write_failure(&self, result: &ProcessingResult) -> Result<()> {
        if result.success {
            return Ok(());
        }

        debug!(
            "写入失败记录: 第 {} 页 | {}",
            result.page_number, result.file_name
        );

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.report_file_path)
            .with_context(|| format!("无法打开报告文件: {}", self.report_file_path))?;

        let line = format!(
            "第 {} 页 | 文件 {} | 错误: {}\n",
            result.page_number,
            result.file_name,
            result.error.as_deref().unwrap_or("未知错误")
        );

        file.write_all(line.as_bytes())?;

        Ok(())
    }
}

impl Default for ReportWriter {
    fn default() -> Self {
        Self::with_path("split_report.txt")
    }
}
