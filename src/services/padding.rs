//! 补零宽度
//!
//! 输入里显式写了前导零（如 `01-05`）就按字面宽度补零，
//! 但宽度永远不小于序列中最大数字的位数

use std::sync::OnceLock;

use regex::Regex;

/// 最小补零宽度
pub const MIN_PADDING_LENGTH: usize = 1;

fn leading_zero_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"^0+[0-9]+$").expect("静态正则表达式合法"))
}

/// 从原始范围表达式中读取补零提示
///
/// 只看第一个逗号分隔的片段
pub fn padding_hint(raw_ranges: &str) -> usize {
    let first = raw_ranges.split(',').next().map(str::trim).unwrap_or_default();

    let literal = match first.split_once('-') {
        Some((start, _)) => start,
        None => first,
    };

    if leading_zero_regex().is_match(literal) {
        literal.len()
    } else {
        MIN_PADDING_LENGTH
    }
}

/// 计算最终补零宽度
///
/// # 示例
/// - `([1, 2, 3], "01-03")` → 2
/// - `([1, 2, 100], "1-100")` → 3
pub fn resolve_padding(sequence: &[u32], raw_ranges: &str) -> usize {
    let max_digits = sequence
        .iter()
        .map(|n| n.to_string().len())
        .max()
        .unwrap_or(0);

    padding_hint(raw_ranges)
        .max(max_digits)
        .max(MIN_PADDING_LENGTH)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_from_leading_zero_range() {
        assert_eq!(resolve_padding(&[1, 2, 3], "01-03"), 2);
        assert_eq!(resolve_padding(&[1, 2, 3], "001-3"), 3);
    }

    #[test]
    fn test_resolve_from_max_value() {
        assert_eq!(resolve_padding(&[1, 2, 100], "1-100"), 3);
        assert_eq!(resolve_padding(&[1], "1"), 1);
    }

    #[test]
    fn test_resolve_single_token_with_leading_zeros() {
        assert_eq!(resolve_padding(&[7], "007"), 3);
        assert_eq!(resolve_padding(&[7, 8], " 0007 ,8"), 4);
    }

    #[test]
    fn test_hint_never_shrinks_below_max_digits() {
        assert_eq!(resolve_padding(&[1, 1000], "01-1000"), 4);
    }

    #[test]
    fn test_hint_only_reads_first_token() {
        assert_eq!(padding_hint("1-5,010-015"), 1);
        assert_eq!(padding_hint("05,1"), 2);
    }

    #[test]
    fn test_hint_ignores_end_of_range() {
        assert_eq!(padding_hint("1-005"), 1);
    }

    #[test]
    fn test_hint_for_invalid_or_empty_input() {
        assert_eq!(padding_hint(""), 1);
        assert_eq!(padding_hint("abc"), 1);
        assert_eq!(padding_hint("10"), 1);
    }

    #[test]
    fn test_resolve_empty_sequence() {
        assert_eq!(resolve_padding(&[], ""), MIN_PADDING_LENGTH);
    }
}
