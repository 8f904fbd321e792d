//! 文件名编号序列
//!
//! 编号的是输出文件，不是源页面：跳过编号只会让后续编号整体后移，
//! 不会少导出任何一页

use super::exclusions::ExclusionSet;

/// 按顺序产生不在跳过集合中的编号
///
/// 每次取值：先越过所有被跳过的数字，返回当前值，然后前进一位
#[derive(Debug, Clone)]
pub struct FilenameNumbers<'a> {
    next: Option<u32>,
    exclusions: &'a ExclusionSet,
}

impl<'a> FilenameNumbers<'a> {
    pub fn new(start: u32, exclusions: &'a ExclusionSet) -> Self {
        Self {
            next: Some(start),
            exclusions,
        }
    }
}

impl Iterator for FilenameNumbers<'_> {
    type Item = u32;

    fn next(&mut self) -> Option<u32> {
        let mut current = self.next?;
        while self.exclusions.contains(current) {
            current = current.checked_add(1)?;
        }
        self.next = current.checked_add(1);
        Some(current)
    }
}

/// 生成长度为 `count` 的文件名编号序列
///
/// # 示例
/// - `(5, {3, 6}, 1)` → `[1, 2, 4, 5, 7]`
/// - `(3, {}, 5)` → `[5, 6, 7]`
pub fn filename_sequence(count: usize, exclusions: &ExclusionSet, start: u32) -> Vec<u32> {
    FilenameNumbers::new(start, exclusions).take(count).collect()
}
