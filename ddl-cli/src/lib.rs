// 私有模块声明
mod app;
mod cli;
mod config;
mod error;
pub mod project_info; // 公开项目信息模块
mod utils;

// 通过 pub use 精确控制对外暴露的接口
pub use app::{CliApp, render_document};
pub use cli::{Cli, STDIN_MARKER};
pub use config::{AppConfig, OutputConfig};
pub use error::{CliError, EXIT_INPUT_ERROR, EXIT_INTERNAL_ERROR, Result};
pub use utils::setup_logging;
