//! 配置校验 - 业务能力层
//!
//! 处理开始前的检查，不抛错，只返回第一个发现的问题

use crate::error::ValidationError;
use crate::models::{SourceFile, SplitConfig};
use crate::services::range_parser::validate_page_ranges;
use crate::utils::logging::format_file_size;

/// PDF 文件头
const PDF_MAGIC: &[u8] = b"%PDF-";

/// 校验拆分配置
///
/// 检查顺序：
/// 1. 必须选择文件
/// 2. 页码范围不能为空
/// 3. 页码范围必须符合语法（只检查，不展开）
///
/// # 返回
/// 没有问题时返回 `None`
pub fn validate_config(config: &SplitConfig) -> Option<ValidationError> {
    if config.file.is_none() {
        return Some(ValidationError::NoFile);
    }

    if config.ranges.trim().is_empty() {
        return Some(ValidationError::NoRanges);
    }

    validate_page_ranges(&config.ranges)
        .err()
        .map(|e| ValidationError::InvalidFormat(e.to_string()))
}

/// 校验源文件类型和大小
///
/// 扩展名是 `.pdf` 或文件头是 `%PDF-` 都视为 PDF
pub fn validate_source_file(file: &SourceFile, max_size: u64) -> Option<ValidationError> {
    let has_pdf_extension = file.name.to_lowercase().ends_with(".pdf");
    if !has_pdf_extension && !file.bytes.starts_with(PDF_MAGIC) {
        return Some(ValidationError::InvalidFileType {
            name: file.name.clone(),
        });
    }

    if file.size() > max_size {
        return Some(ValidationError::FileTooLarge {
            size: format_file_size(file.size(), 2),
            max: format_file_size(max_size, 2),
        });
    }

    None
}
