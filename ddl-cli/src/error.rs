use ddl_core::DdlError;
use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

/// 退出码：输入、配置或输出错误
pub const EXIT_INPUT_ERROR: i32 = 1;
/// 退出码：解析器内部错误
pub const EXIT_INTERNAL_ERROR: i32 = 2;

#[derive(Error, Debug)]
pub enum CliError {
    #[error("读取文件 {path} 失败: {source}")]
    ReadInput {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO 错误: {0}")]
    Io(#[from] std::io::Error),

    #[error("配置错误: {0}")]
    Config(#[from] toml::de::Error),

    #[error("JSON 输出错误: {0}")]
    Json(#[from] serde_json::Error),

    #[error("内部错误: {0}")]
    Core(#[from] DdlError),
}

impl CliError {
    /// 内部错误和输入错误使用不同的退出码
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::Core(_) => EXIT_INTERNAL_ERROR,
            _ => EXIT_INPUT_ERROR,
        }
    }
}
