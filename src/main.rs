use anyhow::Result;
use clap::Parser;
use std::path::PathBuf;

use pdf_splitter::utils::logging;
use pdf_splitter::{App, AppArgs, Config};

/// 把一个 PDF 按页码范围拆分成单页文件并打包成 ZIP
#[derive(Parser, Debug)]
#[command(name = "pdf_splitter", version, about)]
struct Cli {
    /// 源 PDF 文件
    input: PathBuf,

    /// 页码范围，例如 "1-5,8,10-12"
    #[arg(short, long)]
    ranges: String,

    /// 跳过的文件名编号，例如 "3,7"
    #[arg(short = 'x', long, default_value = "")]
    exclusions: String,

    /// 文件名前缀
    #[arg(long, default_value = "")]
    prefix: String,

    /// 文件名后缀
    #[arg(long, default_value = "")]
    suffix: String,

    /// 压缩包名称（不含 .zip）
    #[arg(long)]
    zip_name: Option<String>,

    /// 输出目录
    #[arg(short, long)]
    output_dir: Option<PathBuf>,

    /// TOML 配置文件
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// 以 JSON 输出处理结果
    #[arg(long)]
    json: bool,

    /// 显示详细日志
    #[arg(short, long)]
    verbose: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // 加载配置
    let config = match &cli.config {
        Some(path) => Config::from_file(path)?,
        None => Config::from_env(),
    };

    // 初始化日志
    logging::init(cli.verbose || config.verbose_logging);

    let args = AppArgs {
        input: cli.input,
        ranges: cli.ranges,
        exclusions: cli.exclusions,
        prefix: cli.prefix,
        suffix: cli.suffix,
        zip_name: cli.zip_name,
        output_dir: cli.output_dir,
        json: cli.json,
    };

    // 初始化并运行应用
    App::initialize(config, args).await?.run().await?;

    Ok(())
}
