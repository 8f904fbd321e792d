//! 命令行应用 - 编排层
//!
//! ## 职责
//!
//! 本模块是命令行的入口，负责文件读写和结果输出。
//!
//! ## 核心功能
//!
//! 1. **应用初始化**：读取源文件、检查文件类型和大小、初始化报告文件
//! 2. **组装配置**：把命令行参数转成 `SplitConfig`
//! 3. **向下委托**：委托 `DocumentProcessor` 完成拆分
//! 4. **写出结果**：保存压缩包，失败页面写入报告
//! 5. **统计输出**：日志统计或 JSON

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::infrastructure::{LopdfBackend, ZipArchiveWriter};
use crate::models::{ProcessOutcome, ProcessingResult, SourceFile, SplitConfig};
use crate::orchestrator::document_processor::{DocumentProcessor, ProcessObserver};
use crate::services::{validate_source_file, ReportWriter};
use crate::utils::logging;

/// 一次运行的参数
#[derive(Debug, Clone, Default)]
pub struct AppArgs {
    pub input: PathBuf,
    pub ranges: String,
    pub exclusions: String,
    pub prefix: String,
    pub suffix: String,
    /// 为空时使用配置中的默认名称
    pub zip_name: Option<String>,
    /// 覆盖配置中的输出目录
    pub output_dir: Option<PathBuf>,
    /// 以 JSON 输出结果
    pub json: bool,
}

/// 运行结果
#[derive(Debug)]
pub struct RunSummary {
    pub archive_path: PathBuf,
    pub outcome: ProcessOutcome,
}

/// 应用主结构
pub struct App {
    config: Config,
    args: AppArgs,
    source: SourceFile,
}

impl App {
    /// 初始化应用
    pub async fn initialize(config: Config, args: AppArgs) -> Result<Self> {
        let source = SourceFile::from_path(&args.input)
            .await
            .with_context(|| format!("无法读取源文件: {}", args.input.display()))?;

        if let Some(err) = validate_source_file(&source, config.max_file_size) {
            bail!(err);
        }

        logging::init_report_file(&config.report_file, &source.name)
            .with_context(|| format!("无法初始化报告文件: {}", config.report_file))?;

        logging::log_startup(&source.name, source.size());

        Ok(Self {
            config,
            args,
            source,
        })
    }

    /// 运行应用主逻辑
    pub async fn run(&self) -> Result<RunSummary> {
        let split_config = self.split_config();
        log_request(&split_config);

        let mut observer = ReportObserver {
            writer: ReportWriter::with_path(&self.config.report_file),
        };
        let archive = ZipArchiveWriter::new(self.config.compression);
        let outcome = DocumentProcessor::new(LopdfBackend)
            .process_document(&split_config, archive, &mut observer)
            .await;

        if self.args.json {
            println!("{}", serde_json::to_string_pretty(&outcome)?);
        }

        let bytes = match (&outcome.archive, &outcome.error) {
            (Some(bytes), _) => bytes,
            (None, Some(error)) => bail!("处理失败: {}", error),
            (None, None) => bail!("处理失败: 没有生成压缩包"),
        };

        let archive_path = self.output_dir().join(split_config.archive_file_name());
        write_archive(&archive_path, bytes).await?;

        logging::print_final_stats(
            outcome.succeeded_count(),
            outcome.failed_count(),
            &archive_path.display().to_string(),
        );
        if outcome.failed_count() > 0 {
            info!("失败页面已记录至: {}", self.config.report_file);
        }

        Ok(RunSummary {
            archive_path,
            outcome,
        })
    }

    fn split_config(&self) -> SplitConfig {
        let mut split_config = SplitConfig::new();
        split_config.set_file(Some(self.source.clone()));
        split_config.set_ranges(self.args.ranges.as_str());
        split_config.set_exclusions(self.args.exclusions.as_str());
        split_config.set_prefix(self.args.prefix.as_str());
        split_config.set_suffix(self.args.suffix.as_str());
        split_config.set_zip_name(
            self.args
                .zip_name
                .clone()
                .unwrap_or_else(|| self.config.default_zip_name.clone()),
        );
        split_config
    }

    fn output_dir(&self) -> PathBuf {
        self.args
            .output_dir
            .clone()
            .unwrap_or_else(|| PathBuf::from(&self.config.output_dir))
    }
}

/// 把失败的页面实时写入报告文件
struct ReportObserver {
    writer: ReportWriter,
}

impl ProcessObserver for ReportObserver {
    fn on_progress(&mut self, progress: f64) {
        debug!("⏳ 进度 {:.0}%", progress);
    }

    fn on_result(&mut self, result: &ProcessingResult) {
        if let Err(e) = self.writer.write_failure(result) {
            warn!("⚠️ 写入报告失败: {}", e);
        }
    }
}

async fn write_archive(path: &Path, bytes: &[u8]) -> Result<()> {
    if let Some(parent) = path.parent() {
        tokio::fs::create_dir_all(parent)
            .await
            .with_context(|| format!("无法创建输出目录: {}", parent.display()))?;
    }

    tokio::fs::write(path, bytes)
        .await
        .with_context(|| format!("无法写入压缩包: {}", path.display()))?;

    info!(
        "💾 压缩包已写入 {} ({})",
        path.display(),
        logging::format_file_size(bytes.len() as u64, 2)
    );
    Ok(())
}

// ========== 日志辅助函数 ==========

fn log_request(config: &SplitConfig) {
    info!("📋 页码范围: {}", config.ranges);
    if !config.exclusions.trim().is_empty() {
        info!("🚫 跳过编号: {}", config.exclusions);
    }
    if !config.prefix.is_empty() || !config.suffix.is_empty() {
        info!("🏷️ 前缀 \"{}\" / 后缀 \"{}\"", config.prefix, config.suffix);
    }
}
