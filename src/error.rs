use thiserror::Error;

/// 页码范围解析错误
///
/// 解析器是严格的：任何一个片段不合法，整个表达式都被拒绝
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RangeError {
    /// 片段不符合 `数字` 或 `数字-数字` 的格式
    #[error("无效的范围格式: \"{token}\"")]
    InvalidRangeFormat { token: String },
    /// 起始页大于结束页，或数字超出可表示范围
    #[error("无效的范围: \"{token}\"")]
    InvalidRange { token: String },
    /// 页码必须从 1 开始
    #[error("无效的页码: \"{token}\"")]
    InvalidPageNumber { token: String },
    /// 展开后的页数超过上限
    #[error(
        "范围过大: \"{token}\"，最多展开 {} 页",
        crate::services::range_parser::MAX_EXPANDED_PAGES
    )]
    RangeTooLarge { token: String },
}

impl RangeError {
    /// 出错的原始片段
    pub fn token(&self) -> &str {
        match self {
            RangeError::InvalidRangeFormat { token }
            | RangeError::InvalidRange { token }
            | RangeError::InvalidPageNumber { token }
            | RangeError::RangeTooLarge { token } => token,
        }
    }
}

/// 配置校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// 未选择文件
    #[error("请选择一个 PDF 文件")]
    NoFile,
    /// 未填写页码范围
    #[error("请填写页码范围")]
    NoRanges,
    /// 页码范围格式错误（包含出错的片段）
    #[error("{0}")]
    InvalidFormat(String),
    /// 文件类型不是 PDF
    #[error("文件类型无效: {name}，请上传 PDF 文件")]
    InvalidFileType { name: String },
    /// 文件超出大小限制
    #[error("文件过大 ({size})，最大允许 {max}")]
    FileTooLarge { size: String, max: String },
}

/// PDF 文档操作错误（来自 PDF 协作方）
#[derive(Debug, Error)]
pub enum DocumentError {
    /// 无法解析 PDF
    #[error("无法加载 PDF: {0}")]
    LoadFailed(String),
    /// 请求的页码超出文档页数
    #[error("第 {page} 页不存在 (文档共 {page_count} 页)")]
    PageOutOfRange { page: usize, page_count: usize },
    /// 单页导出失败
    #[error("导出第 {page} 页失败: {reason}")]
    ExtractFailed { page: usize, reason: String },
}

/// 压缩包操作错误（来自压缩包协作方）
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// 压缩包中已存在同名文件
    #[error("压缩包中已存在同名文件: {0}")]
    DuplicateEntry(String),
    /// 写入条目失败
    #[error("写入压缩包条目 {name} 失败: {source}")]
    WriteFailed {
        name: String,
        #[source]
        source: std::io::Error,
    },
    /// zip 库返回的错误
    #[error("压缩包错误: {0}")]
    Zip(#[from] zip::result::ZipError),
}

/// 一次处理运行中的致命错误
///
/// 单页错误不会出现在这里，它们被记录为失败的 `ProcessingResult`
#[derive(Debug, Error)]
pub enum ProcessError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Range(#[from] RangeError),
    #[error(transparent)]
    Document(#[from] DocumentError),
    #[error("没有可处理的有效页码")]
    EmptyPageSequence,
    #[error("没有需要处理的页面")]
    NoPagesToProcess,
    /// 文件名编号超出可表示范围，无法为每一页编号
    #[error("文件名编号不足: 需要 {needed} 个，只能生成 {produced} 个")]
    FilenameNumbersExhausted { needed: usize, produced: usize },
    #[error("生成压缩包失败: {0}")]
    Archive(#[source] ArchiveError),
    #[error("后台任务执行失败: {0}")]
    Task(#[from] tokio::task::JoinError),
}

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    #[error("处理错误: {0}")]
    Process(#[from] ProcessError),
    #[error("配置错误: {0}")]
    Config(String),
    #[error("文件错误 ({path}): {source}")]
    File {
        path: String,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    /// 创建文件错误
    pub fn file(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File {
            path: path.into(),
            source,
        }
    }
}

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_error_carries_token() {
        let err = RangeError::InvalidRangeFormat {
            token: "1-".to_string(),
        };
        assert_eq!(err.token(), "1-");
        assert!(err.to_string().contains("\"1-\""));
    }

    #[test]
    fn test_process_error_is_transparent_for_validation() {
        let err = ProcessError::from(ValidationError::NoRanges);
        assert_eq!(err.to_string(), ValidationError::NoRanges.to_string());
    }
}
