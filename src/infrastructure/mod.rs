//! 基础设施层（Infrastructure）
//!
//! 持有外部资源，只暴露能力：
//! - `pdf_backend` - 加载 PDF、读取页数、导出单页
//! - `zip_archive` - 按顺序写入条目并生成压缩包

pub mod pdf_backend;
pub mod zip_archive;

pub use pdf_backend::{LopdfBackend, LopdfDocument, PdfBackend, PdfDocument};
pub use zip_archive::{ArchiveWriter, ZipArchiveWriter};
