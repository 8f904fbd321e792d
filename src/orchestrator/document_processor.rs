//! 单个文档处理器 - 编排层
//!
//! ## 职责
//!
//! 本模块负责一次完整的拆分运行，是文档级别的编排器。
//!
//! ## 核心功能
//!
//! 1. **配置校验**：在做任何工作之前检查配置
//! 2. **加载文档**：委托 PDF 协作方解析源文件
//! 3. **推导计划**：页码序列、文件名编号、补零宽度
//! 4. **逐页处理**：按顺序委托 `PageFlow`，单页失败不中断
//! 5. **打包输出**：委托压缩包协作方生成压缩包
//! 6. **进度汇报**：加载 0-10，解析 10-20，逐页 20-90，打包 90-100
//!
//! 所有耗时操作都放到后台线程并依次等待，页面之间从不并发

use std::sync::Arc;
use tracing::{error, info};

use crate::error::{ProcessError, ValidationError};
use crate::infrastructure::{ArchiveWriter, LopdfBackend, PdfBackend, PdfDocument, ZipArchiveWriter};
use crate::models::{ProcessOutcome, ProcessingResult, SplitConfig};
use crate::orchestrator::split_plan::SplitPlan;
use crate::services::validate_config;
use crate::workflow::{PageCtx, PageFlow};

/// 进度与结果的观察者
pub trait ProcessObserver {
    /// 进度，范围 [0, 100]，单调不减
    fn on_progress(&mut self, _progress: f64) {}

    /// 每产生一条单页结果调用一次
    fn on_result(&mut self, _result: &ProcessingResult) {}
}

/// 不关心进度的调用方使用
#[derive(Debug, Default)]
pub struct NoopObserver;

impl ProcessObserver for NoopObserver {}

/// 只接收进度的闭包
pub struct ProgressFn<F>(pub F);

impl<F: FnMut(f64)> ProcessObserver for ProgressFn<F> {
    fn on_progress(&mut self, progress: f64) {
        (self.0)(progress)
    }
}

/// 保证上报的进度落在 [0, 100] 且不回退
struct ProgressTracker<'a, O: ProcessObserver + ?Sized> {
    observer: &'a mut O,
    last: f64,
}

impl<'a, O: ProcessObserver + ?Sized> ProgressTracker<'a, O> {
    fn new(observer: &'a mut O) -> Self {
        Self { observer, last: 0.0 }
    }

    fn report(&mut self, progress: f64) {
        let value = progress.clamp(0.0, 100.0).max(self.last);
        self.last = value;
        self.observer.on_progress(value);
    }

    fn result(&mut self, result: &ProcessingResult) {
        self.observer.on_result(result);
    }
}

/// 文档处理器
pub struct DocumentProcessor<B: PdfBackend> {
    backend: Arc<B>,
}

impl<B: PdfBackend> DocumentProcessor<B> {
    pub fn new(backend: B) -> Self {
        Self {
            backend: Arc::new(backend),
        }
    }

    /// 处理一个文档
    ///
    /// # 参数
    /// - `config`: 拆分配置
    /// - `archive`: 压缩包构建器
    /// - `observer`: 进度 / 结果观察者
    ///
    /// # 返回
    /// 致命错误时 `success = false`，不返回任何部分结果或压缩包
    pub async fn process_document<A, O>(
        &self,
        config: &SplitConfig,
        archive: A,
        observer: &mut O,
    ) -> ProcessOutcome
    where
        A: ArchiveWriter,
        O: ProcessObserver + ?Sized,
    {
        let mut progress = ProgressTracker::new(observer);

        match self.run(config, archive, &mut progress).await {
            Ok((results, bytes)) => {
                log_run_complete(&results, bytes.len());
                ProcessOutcome::completed(results, bytes)
            }
            Err(e) => {
                error!("❌ 处理中止: {}", e);
                ProcessOutcome::aborted(e.to_string())
            }
        }
    }

    async fn run<A, O>(
        &self,
        config: &SplitConfig,
        mut archive: A,
        progress: &mut ProgressTracker<'_, O>,
    ) -> Result<(Vec<ProcessingResult>, Vec<u8>), ProcessError>
    where
        A: ArchiveWriter,
        O: ProcessObserver + ?Sized,
    {
        progress.report(0.0);

        if let Some(err) = validate_config(config) {
            return Err(err.into());
        }
        let file = config.file.as_ref().ok_or(ValidationError::NoFile)?;

        // ========== 加载文档 ==========
        info!("📄 正在加载文档: {}", file.name);
        let backend = Arc::clone(&self.backend);
        let bytes = Arc::clone(&file.bytes);
        let document = tokio::task::spawn_blocking(move || backend.load(&bytes)).await??;
        let document = Arc::new(document);
        let total_pages = document.page_count();
        info!("✓ 文档加载完成，共 {} 页", total_pages);
        progress.report(10.0);

        // ========== 推导计划 ==========
        let plan = SplitPlan::build(
            &config.ranges,
            &config.exclusions,
            &config.prefix,
            &config.suffix,
            total_pages,
        )?;
        log_plan(&plan, total_pages);
        progress.report(20.0);

        // ========== 逐页处理 ==========
        let flow = PageFlow::new(document);
        let total = plan.len();
        let mut results = Vec::with_capacity(total);

        for (slot, page) in plan.pages.iter().enumerate() {
            let ctx = PageCtx::new(slot, total, page.file_name.clone());
            let result = flow.run(&mut archive, &ctx).await;

            progress.result(&result);
            results.push(result);
            progress.report(20.0 + (slot + 1) as f64 / total as f64 * 70.0);
        }

        // ========== 打包 ==========
        progress.report(90.0);
        info!("🗜️ 正在生成压缩包...");
        let archive_bytes = tokio::task::spawn_blocking(move || archive.finalize())
            .await?
            .map_err(ProcessError::Archive)?;
        progress.report(100.0);

        Ok((results, archive_bytes))
    }
}

impl Default for DocumentProcessor<LopdfBackend> {
    fn default() -> Self {
        Self::new(LopdfBackend)
    }
}

/// 使用 lopdf + DEFLATE 压缩包处理一个文档
pub async fn process_document<O>(config: &SplitConfig, observer: &mut O) -> ProcessOutcome
where
    O: ProcessObserver + ?Sized,
{
    DocumentProcessor::new(LopdfBackend)
        .process_document(config, ZipArchiveWriter::default(), observer)
        .await
}

// ========== 日志辅助函数 ==========

fn log_plan(plan: &SplitPlan, total_pages: usize) {
    info!(
        "📋 请求 {} 页，文档 {} 页，实际处理 {} 页",
        plan.requested,
        total_pages,
        plan.len()
    );
    info!("🔢 文件名补零宽度: {}", plan.padding_length);
}

fn log_run_complete(results: &[ProcessingResult], archive_size: usize) {
    let succeeded = results.iter().filter(|r| r.success).count();
    info!(
        "✅ 处理完成: 成功 {}/{}，压缩包 {} 字节",
        succeeded,
        results.len(),
        archive_size
    );
}
