//! 拆分计划
//!
//! 把原始字符串一次性推导成"导出哪一页、叫什么名字"，不涉及任何 I/O

use crate::error::ProcessError;
use crate::services::{
    build_file_name, filename_sequence, parse_page_ranges, resolve_padding, ExclusionSet,
    FileNameParts,
};

/// 计划中的一页
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannedPage {
    /// 导出的源文档页码（从 1 开始），第 i 个位置导出第 i 页
    pub page_number: u32,
    /// 文件名编号
    pub filename_number: u32,
    pub file_name: String,
}

/// 一次运行的完整拆分计划
#[derive(Debug, Clone)]
pub struct SplitPlan {
    pub pages: Vec<PlannedPage>,
    pub padding_length: usize,
    /// 用户请求的页数（截断前）
    pub requested: usize,
}

impl SplitPlan {
    /// 推导拆分计划
    ///
    /// # 参数
    /// - `ranges`: 页码范围表达式
    /// - `exclusions`: 跳过编号
    /// - `prefix` / `suffix`: 文件名前后缀
    /// - `total_pages`: 源文档总页数
    pub fn build(
        ranges: &str,
        exclusions: &str,
        prefix: &str,
        suffix: &str,
        total_pages: usize,
    ) -> Result<Self, ProcessError> {
        let page_sequence = parse_page_ranges(ranges)?;
        if page_sequence.is_empty() {
            return Err(ProcessError::EmptyPageSequence);
        }

        let requested = page_sequence.len();
        let processed = requested.min(total_pages);
        if processed == 0 {
            return Err(ProcessError::NoPagesToProcess);
        }

        // 范围只决定页数和编号起点，导出的总是文档开头的页面
        let exclusions = ExclusionSet::parse(exclusions);
        let numbers = filename_sequence(processed, &exclusions, page_sequence[0]);
        if numbers.len() < processed {
            return Err(ProcessError::FilenameNumbersExhausted {
                needed: processed,
                produced: numbers.len(),
            });
        }
        let padding_length = resolve_padding(&numbers, ranges);

        let pages = (1u32..)
            .zip(&numbers)
            .map(|(page_number, &filename_number)| PlannedPage {
                page_number,
                filename_number,
                file_name: build_file_name(&FileNameParts {
                    prefix,
                    suffix,
                    sequence_number: filename_number,
                    padding_length,
                }),
            })
            .collect::<Vec<_>>();

        Ok(Self {
            pages,
            padding_length,
            requested,
        })
    }

    /// 实际处理的页数
    pub fn len(&self) -> usize {
        self.pages.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pages.is_empty()
    }

    pub fn file_names(&self) -> impl Iterator<Item = &str> {
        self.pages.iter().map(|p| p.file_name.as_str())
    }
}
