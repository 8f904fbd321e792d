use serde::Serialize;

/// 单页处理结果
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessingResult {
    pub file_name: String,
    /// 源文档中的页码（从 1 开始）
    pub page_number: u32,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessingResult {
    pub fn succeeded(file_name: impl Into<String>, page_number: u32) -> Self {
        Self {
            file_name: file_name.into(),
            page_number,
            success: true,
            error: None,
        }
    }

    pub fn failed(
        file_name: impl Into<String>,
        page_number: u32,
        error: impl Into<String>,
    ) -> Self {
        Self {
            file_name: file_name.into(),
            page_number,
            success: false,
            error: Some(error.into()),
        }
    }
}

/// 一次处理运行的最终结果
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProcessOutcome {
    pub success: bool,
    pub results: Vec<ProcessingResult>,
    /// 压缩包内容，只在成功时存在
    #[serde(skip)]
    pub archive: Option<Vec<u8>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ProcessOutcome {
    pub fn completed(results: Vec<ProcessingResult>, archive: Vec<u8>) -> Self {
        Self {
            success: true,
            results,
            archive: Some(archive),
            error: None,
        }
    }

    /// 致命错误：不返回任何部分结果
    pub fn aborted(error: impl Into<String>) -> Self {
        Self {
            success: false,
            results: Vec::new(),
            archive: None,
            error: Some(error.into()),
        }
    }

    pub fn succeeded_count(&self) -> usize {
        self.results.iter().filter(|r| r.success).count()
    }

    pub fn failed_count(&self) -> usize {
        self.results.len() - self.succeeded_count()
    }
}
