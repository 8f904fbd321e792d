//! 页码范围解析 - 业务能力层
//!
//! 把用户输入的 `1-5,8,10-12` 解析成具体的页码列表
//!
//! 规则：
//! - 逗号分隔，每个片段去掉首尾空白
//! - 片段是单个正整数，或 `起始-结束`（包含两端）
//! - 结果按首次出现的顺序去重
//! - 空输入返回空列表，不算错误
//! - 累计展开页数不超过 `MAX_EXPANDED_PAGES`，先检查再展开

use std::collections::HashSet;
use std::sync::OnceLock;

use regex::Regex;

use crate::error::RangeError;

/// 一个表达式最多展开的页数（去重前累计）
pub const MAX_EXPANDED_PAGES: usize = 100_000;

/// 单个片段的格式：`5` 或 `1-3`
fn range_token_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^([0-9]+)(?:-([0-9]+))?$").expect("静态正则表达式合法"))
}

/// 解析页码范围表达式
///
/// # 示例
/// - `"1,3-5,7"` → `[1, 3, 4, 5, 7]`
/// - `"1-3,2-4"` → `[1, 2, 3, 4]`
pub fn parse_page_ranges(expr: &str) -> Result<Vec<u32>, RangeError> {
    let bounds = scan_ranges(expr)?;

    let mut expanded = Vec::new();
    for (start, end) in bounds {
        expanded.extend(start..=end);
    }

    Ok(dedupe_preserve_order(expanded))
}

/// 只检查语法和展开规模，不生成页码列表
pub fn validate_page_ranges(expr: &str) -> Result<(), RangeError> {
    scan_ranges(expr).map(|_| ())
}

/// 生成 `start..=end` 的页码列表
pub fn generate_inclusive_range(start: u32, end: u32) -> Result<Vec<u32>, RangeError> {
    let token = format!("{}-{}", start, end);
    if start > end {
        return Err(RangeError::InvalidRange { token });
    }
    if span(start, end) > MAX_EXPANDED_PAGES {
        return Err(RangeError::RangeTooLarge { token });
    }
    Ok((start..=end).collect())
}

/// 检查每个片段，返回 `(起始, 结束)` 列表
///
/// 累计展开页数超过 `MAX_EXPANDED_PAGES` 时报错
fn scan_ranges(expr: &str) -> Result<Vec<(u32, u32)>, RangeError> {
    let mut bounds = Vec::new();
    let mut total = 0usize;

    for token in expr.split(',').map(str::trim).filter(|t| !t.is_empty()) {
        let (start, end) = parse_token(token)?;

        total = total.saturating_add(span(start, end));
        if total > MAX_EXPANDED_PAGES {
            return Err(RangeError::RangeTooLarge {
                token: token.to_string(),
            });
        }
        bounds.push((start, end));
    }

    Ok(bounds)
}

/// 解析单个片段的两端
fn parse_token(token: &str) -> Result<(u32, u32), RangeError> {
    let caps = range_token_regex()
        .captures(token)
        .ok_or_else(|| RangeError::InvalidRangeFormat {
            token: token.to_string(),
        })?;

    // 数字太大无法表示时视为无效范围
    let to_number = |digits: &str| {
        digits.parse::<u32>().map_err(|_| RangeError::InvalidRange {
            token: token.to_string(),
        })
    };

    let start = to_number(&caps[1])?;
    let end = match caps.get(2) {
        Some(m) => to_number(m.as_str())?,
        None => start,
    };

    if start == 0 {
        return Err(RangeError::InvalidPageNumber {
            token: token.to_string(),
        });
    }
    if start > end {
        return Err(RangeError::InvalidRange {
            token: token.to_string(),
        });
    }

    Ok((start, end))
}

fn span(start: u32, end: u32) -> usize {
    (u64::from(end) - u64::from(start) + 1) as usize
}

fn dedupe_preserve_order(values: Vec<u32>) -> Vec<u32> {
    let mut seen = HashSet::with_capacity(values.len());
    values.into_iter().filter(|v| seen.insert(*v)).collect()
}
