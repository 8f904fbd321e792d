//! 单页处理上下文
//!
//! 封装"我正在导出第几页、输出成什么文件名"这一信息
//!
//! 第 i 个位置总是导出源文档的第 i 页，文件名编号与源页码无关

use std::fmt::Display;

/// 单页处理上下文
#[derive(Debug, Clone)]
pub struct PageCtx {
    /// 在本次运行中的位置（从 0 开始）
    pub slot: usize,

    /// 本次运行处理的总页数（仅用于日志显示）
    pub total: usize,

    /// 导出的源文档页码（从 1 开始），等于 `slot + 1`
    pub page_number: u32,

    /// 输出文件名
    pub file_name: String,
}

impl PageCtx {
    /// 创建新的单页上下文
    pub fn new(slot: usize, total: usize, file_name: String) -> Self {
        Self {
            slot,
            total,
            page_number: u32::try_from(slot + 1).unwrap_or(u32::MAX),
            file_name,
        }
    }

    /// 源文档中的页面索引（从 0 开始）
    pub fn page_index(&self) -> usize {
        self.slot
    }
}

impl Display for PageCtx {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "[{}/{} 源页#{} → {}]",
            self.slot + 1,
            self.total,
            self.page_number,
            self.file_name
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_slot_selects_source_page() {
        let ctx = PageCtx::new(0, 3, "07.pdf".to_string());
        assert_eq!(ctx.page_index(), 0);
        assert_eq!(ctx.page_number, 1);
        assert_eq!(ctx.to_string(), "[1/3 源页#1 → 07.pdf]");

        let ctx = PageCtx::new(2, 3, "09.pdf".to_string());
        assert_eq!(ctx.page_index(), 2);
        assert_eq!(ctx.page_number, 3);
    }
}
