use crate::error::Result;
use ddl_core::constants::config::{CONFIG_FILE_NAMES, DEFAULT_INDENT};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// 应用配置结构
#[derive(Debug, Deserialize, Clone, Default, PartialEq)]
#[serde(default)]
pub struct AppConfig {
    pub output: OutputConfig,
}

/// 输出相关配置
#[derive(Debug, Deserialize, Clone, PartialEq)]
#[serde(default)]
pub struct OutputConfig {
    /// 是否格式化输出 JSON
    pub pretty: bool,
    /// 格式化时每层缩进的空格数
    pub indent: usize,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            pretty: true,
            indent: DEFAULT_INDENT,
        }
    }
}

impl AppConfig {
    /// 在当前目录查找并加载配置文件
    pub fn find_and_load_config() -> Result<Self> {
        Self::find_and_load_config_in(Path::new("."))
    }

    /// 在指定目录查找并加载配置文件
    /// 按优先级查找：ddl-cli.toml -> .ddl-cli.toml
    pub fn find_and_load_config_in(dir: &Path) -> Result<Self> {
        for config_file in CONFIG_FILE_NAMES {
            let path = dir.join(config_file);
            if path.exists() {
                tracing::debug!("找到配置文件: {}", path.display());
                return Self::load_from_file(&path);
            }
        }

        // 没有配置文件时使用默认配置，不写入文件
        tracing::debug!("未找到配置文件，使用默认配置");
        Ok(Self::default())
    }

    /// 从指定文件加载配置
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(&path)?;
        let config: AppConfig = toml::from_str(&content)?;

        Ok(config)
    }
}
