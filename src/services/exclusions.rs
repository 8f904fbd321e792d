//! 跳过编号集合
//!
//! 与页码解析不同，这里是宽松的：无法解析的片段直接丢弃，永远不报错

use std::collections::BTreeSet;

/// 文件名编号中需要跳过的数字
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExclusionSet(BTreeSet<u32>);

impl ExclusionSet {
    /// 解析逗号分隔的跳过编号，例如 `"3, 6,abc"` → `{3, 6}`
    pub fn parse(expr: &str) -> Self {
        let numbers = expr
            .split(',')
            .map(str::trim)
            .filter(|t| !t.is_empty())
            .filter_map(|t| t.parse::<u32>().ok())
            .filter(|n| *n > 0)
            .collect();
        Self(numbers)
    }

    pub fn contains(&self, value: u32) -> bool {
        self.0.contains(&value)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// 升序遍历
    pub fn iter(&self) -> impl Iterator<Item = u32> + '_ {
        self.0.iter().copied()
    }
}

impl FromIterator<u32> for ExclusionSet {
    fn from_iter<I: IntoIterator<Item = u32>>(iter: I) -> Self {
        Self(iter.into_iter().filter(|n| *n > 0).collect())
    }
}
