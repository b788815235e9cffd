use super::naming::{NameShape, QualifiedName, split_qualified_name};
use super::patterns::{LinePatterns, Statement};
use super::types::{
    ColumnDef, ConstraintDef, Diagnostic, DiagnosticKind, IndexDef, IndexKind, ParseOutput,
    SchemaObject, SequenceRecord, TableRecord,
};
use crate::constants::ddl::{LINE_COMMENT, NOT_NULL};
use crate::error::{DdlError, Result};
use serde_json::Value;
use std::collections::HashMap;
use tracing::{debug, info, warn};

/// 解析 DDL 文本，返回模式对象和诊断信息
pub fn parse(ddl: &str) -> Result<ParseOutput> {
    DdlParser::new()?.parse(ddl)
}

/// 解析 DDL 文本并压缩成 JSON 文档
///
/// 返回 `None` 表示没有识别出任何对象。
pub fn parse_document(ddl: &str) -> Result<Option<Value>> {
    DdlParser::new()?.parse_document(ddl)
}

/// 按行识别的 DDL 解析器
///
/// 正则只在构造时编译一次，同一个解析器可以反复使用。
#[derive(Debug)]
pub struct DdlParser {
    patterns: LinePatterns,
}

impl DdlParser {
    pub fn new() -> Result<Self> {
        Ok(Self {
            patterns: LinePatterns::compile()?,
        })
    }

    pub fn parse(&self, ddl: &str) -> Result<ParseOutput> {
        let mut run = ParseRun::new(&self.patterns);
        let mut line_count = 0;
        for (index, raw_line) in ddl.lines().enumerate() {
            line_count = index + 1;
            run.feed(line_count, raw_line)?;
        }
        let output = run.finish(line_count)?;

        info!(
            "解析完成: {} 个对象, {} 条诊断",
            output.objects.len(),
            output.diagnostics.len()
        );
        Ok(output)
    }

    pub fn parse_document(&self, ddl: &str) -> Result<Option<Value>> {
        self.parse(ddl)?.to_document()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ParserState {
    /// 不在任何表定义内
    None,
    /// 正在读取表定义
    Table,
}

/// 表名查找表中的位置
#[derive(Debug, Clone, Copy)]
enum TableHandle {
    /// 正在读取的当前表
    Open,
    /// 已经输出，值为在 `objects` 中的下标
    Closed(usize),
}

/// 单次解析的全部状态
struct ParseRun<'p> {
    patterns: &'p LinePatterns,
    state: ParserState,
    active_schema: String,
    current_table: Option<TableRecord>,
    tables_by_name: HashMap<String, TableHandle>,
    objects: Vec<SchemaObject>,
    diagnostics: Vec<Diagnostic>,
}

impl<'p> ParseRun<'p> {
    fn new(patterns: &'p LinePatterns) -> Self {
        Self {
            patterns,
            state: ParserState::None,
            active_schema: String::new(),
            current_table: None,
            tables_by_name: HashMap::new(),
            objects: Vec::new(),
            diagnostics: Vec::new(),
        }
    }

    fn feed(&mut self, line_no: usize, raw_line: &str) -> Result<()> {
        let (main, trailing_comment) = split_trailing_comment(raw_line);
        let main = main.trim();
        if main.is_empty() {
            return Ok(());
        }

        match self.state {
            ParserState::None => self.feed_top_level(line_no, main, trailing_comment),
            ParserState::Table => self.feed_table_body(line_no, main, trailing_comment),
        }
    }

    fn feed_top_level(
        &mut self,
        line_no: usize,
        line: &str,
        trailing_comment: Option<String>,
    ) -> Result<()> {
        let Some(statement) = self.patterns.classify_top_level(line) else {
            return Ok(());
        };

        match statement {
            Statement::CreateSchema { name } => {
                debug!("第 {} 行: 切换模式 {}", line_no, name);
                self.active_schema = name;
            }
            Statement::CreateSequence { name } => {
                let qualified = split_qualified_name(name, NameShape::SchemaTable);
                debug!("第 {} 行: 序列 {}", line_no, qualified.table);
                self.objects.push(SchemaObject::Sequence(SequenceRecord {
                    schema: self.record_schema(&qualified),
                    name: qualified.table,
                    trailing_comment,
                }));
            }
            Statement::CreateTable { name } => {
                self.open_table(line_no, name, trailing_comment)?;
            }
            Statement::CommentOnColumn { target, text } => {
                self.attach_comment(line_no, target, text)?;
            }
            _ => {}
        }
        Ok(())
    }

    fn feed_table_body(
        &mut self,
        line_no: usize,
        line: &str,
        trailing_comment: Option<String>,
    ) -> Result<()> {
        let Some(statement) = self.patterns.classify_table_body(line) else {
            return Ok(());
        };

        match statement {
            Statement::PrimaryKey {
                index_name,
                columns,
            } => {
                self.current_table_mut()?
                    .constraints
                    .push(ConstraintDef::PrimaryKey {
                        index_name,
                        columns,
                    });
            }
            Statement::ForeignKey {
                index_name,
                columns,
                rule,
            } => {
                self.current_table_mut()?
                    .constraints
                    .push(ConstraintDef::ForeignKey {
                        index_name,
                        columns,
                        rule: rule.to_string(),
                    });
            }
            Statement::CreateIndex {
                name,
                unique,
                target,
            } => {
                debug!("第 {} 行: 索引 {} 作用于 {}", line_no, name, target);
                let kind = if unique {
                    IndexKind::Unique
                } else {
                    IndexKind::Btree
                };
                self.current_table_mut()?.indexes.push(IndexDef {
                    name,
                    kind,
                    columns: Vec::new(),
                });
            }
            Statement::CommentOnColumn { target, text } => {
                self.attach_comment(line_no, target, text)?;
            }
            Statement::TableEnd => {
                self.close_table(line_no)?;
            }
            Statement::Column {
                name,
                data_type,
                modifiers,
            } => {
                let column = self.build_column(name, data_type, modifiers, trailing_comment);
                self.current_table_mut()?.columns.push(column);
            }
            _ => {}
        }
        Ok(())
    }

    fn open_table(
        &mut self,
        line_no: usize,
        name: &str,
        trailing_comment: Option<String>,
    ) -> Result<()> {
        if self.current_table.is_some() {
            return Err(DdlError::invalid_state(format!(
                "第 {line_no} 行: 顶层状态下仍存在未闭合的表"
            )));
        }

        let qualified = split_qualified_name(name, NameShape::SchemaTable);
        debug!("第 {} 行: 开始读取表 {}", line_no, qualified.table);

        let mut table = TableRecord::new(self.record_schema(&qualified), qualified.table);
        table.trailing_comment = trailing_comment;
        // 同名的表后出现的覆盖先出现的
        self.tables_by_name
            .insert(table.name.clone(), TableHandle::Open);
        self.current_table = Some(table);
        self.state = ParserState::Table;
        Ok(())
    }

    fn close_table(&mut self, line_no: usize) -> Result<()> {
        let table = self.current_table.take().ok_or_else(|| {
            DdlError::invalid_state(format!("第 {line_no} 行: 表定义状态下没有当前表"))
        })?;
        debug!(
            "第 {} 行: 表 {} 读取完成 ({} 列)",
            line_no,
            table.name,
            table.columns.len()
        );

        self.tables_by_name
            .insert(table.name.clone(), TableHandle::Closed(self.objects.len()));
        self.objects.push(SchemaObject::Table(table));
        self.state = ParserState::None;
        Ok(())
    }

    fn attach_comment(&mut self, line_no: usize, target: &str, text: String) -> Result<()> {
        let QualifiedName { table, column, .. } =
            split_qualified_name(target, NameShape::SchemaTableColumn);

        let record = match self.tables_by_name.get(&table).copied() {
            Some(TableHandle::Open) => self.current_table_mut()?,
            Some(TableHandle::Closed(index)) => match self.objects.get_mut(index) {
                Some(SchemaObject::Table(record)) => record,
                _ => {
                    return Err(DdlError::invalid_state(format!(
                        "表 {table} 的查找位置 {index} 不是表"
                    )));
                }
            },
            None => {
                let diagnostic = Diagnostic {
                    line: line_no,
                    kind: DiagnosticKind::UnresolvedComment { table, column },
                };
                warn!("{}", diagnostic);
                self.diagnostics.push(diagnostic);
                return Ok(());
            }
        };

        debug!("第 {} 行: 注释 {}.{}", line_no, record.name, column);
        record.comments.insert(column, text);
        Ok(())
    }

    fn build_column(
        &self,
        name: String,
        data_type: &str,
        modifiers: &str,
        trailing_comment: Option<String>,
    ) -> ColumnDef {
        let mut constraints = Vec::new();
        let mut default_value = None;
        if self.patterns.is_not_null(modifiers) {
            constraints.push(NOT_NULL.to_string());
        } else {
            default_value = self.patterns.default_expression(modifiers);
        }

        ColumnDef {
            name,
            data_type: data_type.trim().to_string(),
            constraints,
            default_value,
            trailing_comment,
        }
    }

    fn current_table_mut(&mut self) -> Result<&mut TableRecord> {
        self.current_table
            .as_mut()
            .ok_or_else(|| DdlError::invalid_state("表定义状态下没有当前表"))
    }

    /// 对象所属的模式：优先使用 `CREATE SCHEMA` 设置的模式，否则取名称中的模式部分
    fn record_schema(&self, qualified: &QualifiedName) -> String {
        if self.active_schema.is_empty() {
            qualified.schema.clone()
        } else {
            self.active_schema.clone()
        }
    }

    fn finish(mut self, last_line: usize) -> Result<ParseOutput> {
        match (self.state, self.current_table.take()) {
            (ParserState::None, None) => {}
            (ParserState::Table, Some(table)) => {
                let diagnostic = Diagnostic {
                    line: last_line,
                    kind: DiagnosticKind::UnclosedTable { name: table.name },
                };
                warn!("{}", diagnostic);
                self.diagnostics.push(diagnostic);
            }
            (state, _) => {
                return Err(DdlError::invalid_state(format!(
                    "解析结束时状态 {state:?} 与当前表不一致"
                )));
            }
        }

        Ok(ParseOutput {
            objects: self.objects,
            diagnostics: self.diagnostics,
        })
    }
}

/// 按第一个 `--` 拆分出正文和行尾注释
fn split_trailing_comment(line: &str) -> (&str, Option<String>) {
    match line.split_once(LINE_COMMENT) {
        Some((main, comment)) => (main, Some(comment.trim().to_string())),
        None => (line, None),
    }
}
