//! PDF 协作方 - 基础设施层
//!
//! 只暴露"读页数"和"导出单页"两个能力，PDF 解析与序列化交给 lopdf

use lopdf::Document;

use crate::error::DocumentError;

/// PDF 加载器
pub trait PdfBackend: Send + Sync + 'static {
    type Document: PdfDocument;

    /// 从内存加载文档
    fn load(&self, bytes: &[u8]) -> Result<Self::Document, DocumentError>;
}

/// 已加载的 PDF 文档
pub trait PdfDocument: Send + Sync + 'static {
    /// 总页数
    fn page_count(&self) -> usize;

    /// 导出单页为独立的 PDF
    ///
    /// # 参数
    /// - `index`: 页面索引（从 0 开始）
    fn extract_page(&self, index: usize) -> Result<Vec<u8>, DocumentError>;
}

/// 基于 lopdf 的实现
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfBackend;

impl PdfBackend for LopdfBackend {
    type Document = LopdfDocument;

    fn load(&self, bytes: &[u8]) -> Result<LopdfDocument, DocumentError> {
        let doc = Document::load_mem(bytes).map_err(|e| DocumentError::LoadFailed(e.to_string()))?;
        Ok(LopdfDocument::new(doc))
    }
}

/// lopdf 文档
///
/// 导出时克隆整个文档，删除其余页面后再清理无用对象
pub struct LopdfDocument {
    doc: Document,
    page_count: usize,
}

impl LopdfDocument {
    pub fn new(doc: Document) -> Self {
        let page_count = doc.get_pages().len();
        Self { doc, page_count }
    }
}

impl PdfDocument for LopdfDocument {
    fn page_count(&self) -> usize {
        self.page_count
    }

    fn extract_page(&self, index: usize) -> Result<Vec<u8>, DocumentError> {
        let page = index + 1;
        if page > self.page_count {
            return Err(DocumentError::PageOutOfRange {
                page,
                page_count: self.page_count,
            });
        }

        let keep = page as u32;
        let others: Vec<u32> = self
            .doc
            .get_pages()
            .keys()
            .copied()
            .filter(|n| *n != keep)
            .collect();

        let mut single = self.doc.clone();
        single.delete_pages(&others);
        single.prune_objects();
        single.compress();

        let mut buffer = Vec::new();
        single
            .save_to(&mut buffer)
            .map_err(|e| DocumentError::ExtractFailed {
                page,
                reason: e.to_string(),
            })?;

        Ok(buffer)
    }
}
