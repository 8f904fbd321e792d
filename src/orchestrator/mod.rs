//! 编排层（Orchestration Layer）
//!
//! ## 职责
//!
//! 本层负责一次拆分运行的调度，是整个系统的"指挥中心"。
//!
//! ## 模块划分
//!
//! ### `app` - 命令行应用
//! - 读取源文件，检查类型和大小
//! - 组装 `SplitConfig`
//! - 保存压缩包、写报告、输出统计
//!
//! ### `document_processor` - 单个文档处理器
//! - 校验配置、加载文档
//! - 按 `SplitPlan` 逐页委托 `PageFlow`
//! - 汇报进度，生成压缩包
//!
//! ### `split_plan` - 拆分计划
//! - 页码序列、文件名编号、补零宽度、文件名
//!
//! ## 层次关系
//!
//! ```text
//! app (源文件 → 压缩包文件)
//!     ↓
//! document_processor (SplitConfig → ProcessOutcome)
//!     ↓
//! workflow::PageFlow (处理单页)
//!     ↓
//! services (能力层：range / exclusions / padding / file_name)
//!     ↓
//! infrastructure (基础设施：PdfBackend / ArchiveWriter)
//! ```
//!
//! ## 设计原则
//!
//! 1. **单一职责**：app 管文件，document_processor 管一次运行
//! 2. **资源隔离**：只有编排层持有 PDF 文档和压缩包
//! 3. **向下依赖**：编排层 → workflow → services → infrastructure

pub mod app;
pub mod document_processor;
pub mod split_plan;

// 重新导出主要类型
pub use app::{App, AppArgs, RunSummary};
pub use document_processor::{
    process_document, DocumentProcessor, NoopObserver, ProcessObserver, ProgressFn,
};
pub use split_plan::{PlannedPage, SplitPlan};
