//! 输出文件名构造
//!
//! 最终文件名：`<前缀><补零编号><后缀>.pdf`

/// 前缀 / 后缀的最大长度（字符数）
pub const MAX_FILENAME_COMPONENT_LENGTH: usize = 100;

/// 输出文件扩展名
pub const OUTPUT_EXTENSION: &str = ".pdf";

/// 文件名组成部分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileNameParts<'a> {
    pub prefix: &'a str,
    pub suffix: &'a str,
    pub sequence_number: u32,
    pub padding_length: usize,
}

fn is_invalid_filename_char(c: char) -> bool {
    matches!(c, '<' | '>' | ':' | '"' | '/' | '\\' | '|' | '?' | '*')
        || ('\u{0}'..='\u{1f}').contains(&c)
}

/// 清理文件名片段：去掉各系统下非法的字符，去掉首尾空白，限制长度
pub fn sanitize_component(input: &str) -> String {
    let cleaned: String = input.chars().filter(|c| !is_invalid_filename_char(*c)).collect();
    cleaned
        .trim()
        .chars()
        .take(MAX_FILENAME_COMPONENT_LENGTH)
        .collect()
}

/// 数字补零，位数超过宽度时保持原样
pub fn pad_number(value: u32, width: usize) -> String {
    format!("{:0width$}", value, width = width)
}

/// 构造完整的输出文件名
pub fn build_file_name(parts: &FileNameParts<'_>) -> String {
    format!(
        "{}{}{}{}",
        sanitize_component(parts.prefix),
        pad_number(parts.sequence_number, parts.padding_length),
        sanitize_component(parts.suffix),
        OUTPUT_EXTENSION
    )
}
