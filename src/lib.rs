//! # PDF Splitter
//!
//! 按页码范围把 PDF 拆分成单页文件并打包成 ZIP 的 Rust 应用程序
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有外部能力，只暴露接口
//! - `PdfBackend` / `PdfDocument` - 加载文档、导出单页（lopdf）
//! - `ArchiveWriter` - 按顺序写入压缩包条目（zip）
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 纯函数，描述"我能算什么"
//! - `parse_page_ranges` - 页码范围解析
//! - `ExclusionSet` / `filename_sequence` - 跳过编号与文件名编号
//! - `resolve_padding` / `build_file_name` - 补零宽度与文件名
//! - `validate_config` - 配置校验
//! - `ReportWriter` - 写失败报告
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一页"的完整处理流程
//! - `PageCtx` - 上下文封装（序号 + 源页码 + 文件名）
//! - `PageFlow` - 导出 → 写入压缩包 → 生成结果
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/document_processor` - 一次完整的拆分运行
//! - `orchestrator/app` - 命令行应用，负责文件读写和输出
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::{Compression, Config};
pub use error::{AppError, AppResult, ProcessError, RangeError, ValidationError};
pub use infrastructure::{ArchiveWriter, LopdfBackend, PdfBackend, PdfDocument, ZipArchiveWriter};
pub use models::{ProcessOutcome, ProcessingResult, SourceFile, SplitConfig};
pub use orchestrator::{
    process_document, App, AppArgs, DocumentProcessor, NoopObserver, ProcessObserver, ProgressFn,
    RunSummary, SplitPlan,
};
pub use workflow::{PageCtx, PageFlow};
