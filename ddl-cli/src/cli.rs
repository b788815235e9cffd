use crate::project_info::{metadata, version_info};
use clap::Parser;
use std::path::PathBuf;

/// 输入路径为此值时从标准输入读取
pub const STDIN_MARKER: &str = "-";

/// DDL CLI - 将 SQL DDL 脚本转换为 JSON
#[derive(Parser, Debug)]
#[command(name = "ddl-cli")]
#[command(about = metadata::PROJECT_DESCRIPTION)]
#[command(version = version_info::CLI_VERSION)]
#[command(long_about = metadata::display::DESCRIPTION_LONG)]
#[command(author = metadata::PROJECT_AUTHORS)]
pub struct Cli {
    /// DDL 文件路径，`-` 表示从标准输入读取
    pub input: PathBuf,

    /// 输出文件路径（默认输出到标准输出）
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// 输出单行 JSON（覆盖配置文件）
    #[arg(long)]
    pub compact: bool,

    /// 格式化输出的缩进宽度（覆盖配置文件）
    #[arg(long)]
    pub indent: Option<usize>,

    /// 配置文件路径（默认查找 ddl-cli.toml / .ddl-cli.toml）
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// 详细输出
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    pub fn reads_stdin(&self) -> bool {
        self.input.as_os_str() == STDIN_MARKER
    }
}
