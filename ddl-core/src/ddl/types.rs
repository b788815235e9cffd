use crate::compact::compress_owned;
use crate::error::Result;
use indexmap::IndexMap;
use serde::Serialize;
use serde_json::Value;
use std::fmt;

/// 解析出的模式对象
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum SchemaObject {
    Sequence(SequenceRecord),
    Table(TableRecord),
}

impl SchemaObject {
    pub fn name(&self) -> &str {
        match self {
            SchemaObject::Sequence(sequence) => &sequence.name,
            SchemaObject::Table(table) => &table.name,
        }
    }

    pub fn as_table(&self) -> Option<&TableRecord> {
        match self {
            SchemaObject::Table(table) => Some(table),
            SchemaObject::Sequence(_) => None,
        }
    }
}

/// 序列定义
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SequenceRecord {
    pub schema: String,
    pub name: String,
    pub trailing_comment: Option<String>,
}

/// 表定义
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TableRecord {
    pub schema: String,
    pub name: String,
    pub columns: Vec<ColumnDef>,
    pub constraints: Vec<ConstraintDef>,
    pub indexes: Vec<IndexDef>,
    /// 列名 -> 注释，按出现顺序
    pub comments: IndexMap<String, String>,
    pub trailing_comment: Option<String>,
}

impl TableRecord {
    pub fn new(schema: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            schema: schema.into(),
            name: name.into(),
            columns: Vec::new(),
            constraints: Vec::new(),
            indexes: Vec::new(),
            comments: IndexMap::new(),
            trailing_comment: None,
        }
    }

    pub fn column(&self, name: &str) -> Option<&ColumnDef> {
        self.columns.iter().find(|c| c.name == name)
    }
}

/// 表列定义
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnDef {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: String,
    pub constraints: Vec<String>,
    pub default_value: Option<String>,
    pub trailing_comment: Option<String>,
}

impl ColumnDef {
    pub fn is_not_null(&self) -> bool {
        self.constraints
            .iter()
            .any(|c| c == crate::constants::ddl::NOT_NULL)
    }
}

/// 表约束
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case", rename_all_fields = "camelCase")]
pub enum ConstraintDef {
    PrimaryKey {
        index_name: String,
        columns: Vec<String>,
    },
    ForeignKey {
        index_name: String,
        columns: Vec<String>,
        /// `FOREIGN KEY (...)` 之后的原文，例如 `REFERENCES s.t(id) ON DELETE CASCADE`
        rule: String,
    },
}

/// 索引类型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum IndexKind {
    Unique,
    Btree,
}

/// 表索引定义
///
/// 索引的列不从语句中解析，`columns` 始终为空。
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct IndexDef {
    pub name: String,
    pub kind: IndexKind,
    pub columns: Vec<String>,
}

/// 解析过程中产生的非致命问题
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Diagnostic {
    /// 物理行号，从 1 开始
    pub line: usize,
    pub kind: DiagnosticKind,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DiagnosticKind {
    /// 列注释引用了未知的表，注释被丢弃
    UnresolvedComment { table: String, column: String },
    /// 输入结束时表定义仍未闭合，该表被丢弃
    UnclosedTable { name: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.kind {
            DiagnosticKind::UnresolvedComment { table, column } => write!(
                f,
                "第 {} 行: 注释引用了未知的表 {}（列 {}），已忽略",
                self.line, table, column
            ),
            DiagnosticKind::UnclosedTable { name } => write!(
                f,
                "第 {} 行: 表 {} 的定义没有闭合，已忽略",
                self.line, name
            ),
        }
    }
}

/// 一次解析的结果
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ParseOutput {
    /// 按文档顺序排列：序列在语句处产生，表在闭合行处产生
    pub objects: Vec<SchemaObject>,
    pub diagnostics: Vec<Diagnostic>,
}

impl ParseOutput {
    pub fn tables(&self) -> impl Iterator<Item = &TableRecord> {
        self.objects.iter().filter_map(SchemaObject::as_table)
    }

    pub fn table(&self, name: &str) -> Option<&TableRecord> {
        self.tables().find(|t| t.name == name)
    }

    /// 转换为压缩后的 JSON 文档，`None` 表示没有识别出任何对象
    pub fn to_document(&self) -> Result<Option<Value>> {
        let document = serde_json::to_value(&self.objects)?;
        Ok(compress_owned(document))
    }
}
