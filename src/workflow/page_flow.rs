//! 单页处理流程 - 流程层
//!
//! 核心职责：定义"一页"的完整处理流程
//!
//! 流程顺序：
//! 1. 从源文档导出单页（后台线程）
//! 2. 写入压缩包
//! 3. 生成处理结果（失败只记录，不中断）

use anyhow::Result;
use std::sync::Arc;
use tracing::{debug, info, warn};

use crate::infrastructure::{ArchiveWriter, PdfDocument};
use crate::models::ProcessingResult;
use crate::workflow::page_ctx::PageCtx;

/// 单页处理流程
///
/// - 共享已加载的源文档
/// - 不持有压缩包，由编排层传入
/// - 不关心页码和文件名是怎么算出来的
pub struct PageFlow<D: PdfDocument> {
    document: Arc<D>,
}

impl<D: PdfDocument> PageFlow<D> {
    /// 创建新的单页处理流程
    pub fn new(document: Arc<D>) -> Self {
        Self { document }
    }

    /// 处理一页
    ///
    /// 任何错误都转成失败的 `ProcessingResult`
    pub async fn run<A: ArchiveWriter>(&self, archive: &mut A, ctx: &PageCtx) -> ProcessingResult {
        match self.export_page(archive, ctx).await {
            Ok(size) => {
                info!("{} ✓ 导出成功 ({} 字节)", ctx, size);
                ProcessingResult::succeeded(ctx.file_name.clone(), ctx.page_number)
            }
            Err(e) => {
                warn!("{} ⚠️ 导出失败: {}", ctx, e);
                ProcessingResult::failed(ctx.file_name.clone(), ctx.page_number, e.to_string())
            }
        }
    }

    /// 导出并写入压缩包，返回写入的字节数
    async fn export_page<A: ArchiveWriter>(&self, archive: &mut A, ctx: &PageCtx) -> Result<usize> {
        let document = Arc::clone(&self.document);
        let index = ctx.page_index();

        debug!("{} 正在导出源页索引 {}", ctx, index);
        let bytes = tokio::task::spawn_blocking(move || document.extract_page(index)).await??;

        archive.add_entry(&ctx.file_name, &bytes)?;
        Ok(bytes.len())
    }
}
