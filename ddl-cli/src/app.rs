use crate::cli::Cli;
use crate::config::{AppConfig, OutputConfig};
use crate::error::{CliError, Result};
use crate::project_info::version_string;
use ddl_core::DdlParser;
use serde::Serialize;
use serde_json::Value;
use serde_json::ser::{PrettyFormatter, Serializer};
use std::fs;
use std::io::{self, Read, Write};
use std::path::Path;
use tracing::{debug, info, warn};

pub struct CliApp {
    pub config: AppConfig,
    parser: DdlParser,
}

impl CliApp {
    /// 加载配置（命令行参数优先）并初始化解析器
    pub fn new(cli: &Cli) -> Result<Self> {
        debug!("{}", version_string());

        let mut config = match &cli.config {
            Some(path) => AppConfig::load_from_file(path)?,
            None => AppConfig::find_and_load_config()?,
        };
        apply_overrides(&mut config.output, cli);

        Self::with_config(config)
    }

    pub fn with_config(config: AppConfig) -> Result<Self> {
        Ok(Self {
            config,
            parser: DdlParser::new()?,
        })
    }

    /// 读取输入、转换并写出结果
    pub fn run(&self, cli: &Cli) -> Result<()> {
        let ddl = if cli.reads_stdin() {
            debug!("从标准输入读取 DDL");
            let mut content = String::new();
            io::stdin().read_to_string(&mut content)?;
            content
        } else {
            read_input(&cli.input)?
        };

        let rendered = self.convert(&ddl)?;

        match &cli.output {
            Some(path) => {
                fs::write(path, format!("{rendered}\n"))?;
                info!("✅ 已写入 {}", path.display());
            }
            None => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{rendered}")?;
            }
        }
        Ok(())
    }

    /// 把 DDL 文本转换为 JSON 字符串
    pub fn convert(&self, ddl: &str) -> Result<String> {
        let output = self.parser.parse(ddl)?;
        if !output.diagnostics.is_empty() {
            warn!("⚠️  有 {} 条注释或表定义被忽略", output.diagnostics.len());
        }

        let document = output.to_document()?;
        if document.is_none() {
            warn!("⚠️  没有识别出任何对象");
        }
        render_document(document.as_ref(), &self.config.output)
    }
}

fn apply_overrides(output: &mut OutputConfig, cli: &Cli) {
    if cli.compact {
        output.pretty = false;
    }
    if let Some(indent) = cli.indent {
        output.indent = indent;
    }
}

fn read_input(path: &Path) -> Result<String> {
    fs::read_to_string(path).map_err(|source| CliError::ReadInput {
        path: path.to_path_buf(),
        source,
    })
}

/// 按配置渲染 JSON，没有任何对象时输出空数组
pub fn render_document(document: Option<&Value>, output: &OutputConfig) -> Result<String> {
    let empty = Value::Array(Vec::new());
    let document = document.unwrap_or(&empty);

    if !output.pretty {
        return Ok(serde_json::to_string(document)?);
    }

    let indent = " ".repeat(output.indent);
    let mut buf = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(indent.as_bytes()));
    document.serialize(&mut serializer)?;
    String::from_utf8(buf).map_err(|e| CliError::Io(io::Error::new(io::ErrorKind::InvalidData, e)))
}
