/// 日志工具模块
///
/// 提供日志初始化、日志格式化和输出的辅助函数
use anyhow::Result;
use std::fs;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// 初始化 tracing 日志
///
/// 优先使用 `RUST_LOG`，否则按 `verbose` 选择 debug / info
pub fn init(verbose: bool) {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // 测试中可能被多次调用，重复初始化直接忽略
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .try_init();
}

/// 初始化报告文件
///
/// # 参数
/// - `report_file_path`: 报告文件路径
/// - `source_name`: 源文件名
pub fn init_report_file(report_file_path: &str, source_name: &str) -> Result<()> {
    let header = format!(
        "{}\nPDF 拆分报告 - {}\n源文件: {}\n{}\n\n",
        "=".repeat(60),
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S"),
        source_name,
        "=".repeat(60)
    );
    fs::write(report_file_path, header)?;
    Ok(())
}

/// 记录程序启动信息
pub fn log_startup(source_name: &str, size: u64) {
    info!("{}", "=".repeat(60));
    info!("🚀 程序启动 - PDF 拆分模式");
    info!("📄 源文件: {} ({})", source_name, format_file_size(size, 2));
    info!("{}", "=".repeat(60));
}

/// 打印最终统计信息
///
/// # 参数
/// - `success`: 成功数量
/// - `failed`: 失败数量
/// - `archive_path`: 压缩包路径
pub fn print_final_stats(success: usize, failed: usize, archive_path: &str) {
    info!("\n{}", "=".repeat(60));
    info!("📊 全部处理完成统计");
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "=".repeat(60));
    info!("✅ 成功: {}/{}", success, success + failed);
    info!("❌ 失败: {}", failed);
    info!("{}", "=".repeat(60));
    info!("\n压缩包已保存至: {}", archive_path);
}

/// 把字节数格式化为易读的大小
///
/// # 示例
/// - `format_file_size(1024, 2)` → `"1.00 KB"`
/// - `format_file_size(500, 2)` → `"500 B"`
pub fn format_file_size(bytes: u64, fraction_digits: usize) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit_index = 0;
    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{} {}", bytes, UNITS[0])
    } else {
        format!("{:.*} {}", fraction_digits, size, UNITS[unit_index])
    }
}
