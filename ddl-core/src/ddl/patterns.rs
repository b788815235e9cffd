use super::naming::unquote;
use crate::constants::ddl::TABLE_LEVEL_KEYWORDS;
use crate::error::Result;
use regex::{Captures, Regex};

/// 一行 DDL 识别后的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum Statement<'a> {
    CreateSchema {
        name: String,
    },
    CreateSequence {
        name: &'a str,
    },
    CreateTable {
        name: &'a str,
    },
    CommentOnColumn {
        target: &'a str,
        text: String,
    },
    PrimaryKey {
        index_name: String,
        columns: Vec<String>,
    },
    ForeignKey {
        index_name: String,
        columns: Vec<String>,
        rule: &'a str,
    },
    CreateIndex {
        name: String,
        unique: bool,
        target: &'a str,
    },
    TableEnd,
    Column {
        name: String,
        data_type: &'a str,
        /// 类型之后的 `DEFAULT ...` / `NOT NULL` / `NULL` 部分
        modifiers: &'a str,
    },
}

type Matcher = for<'a> fn(&LinePatterns, &'a str) -> Option<Statement<'a>>;

/// 顶层状态下依次尝试的匹配器，顺序有意义
const TOP_LEVEL: &[Matcher] = &[
    LinePatterns::match_create_schema,
    LinePatterns::match_create_sequence,
    LinePatterns::match_create_table,
    LinePatterns::match_comment_on_column,
];

/// 表体状态下依次尝试的匹配器，列定义必须放在最后
const TABLE_BODY: &[Matcher] = &[
    LinePatterns::match_primary_key,
    LinePatterns::match_foreign_key,
    LinePatterns::match_create_index,
    LinePatterns::match_comment_on_column,
    LinePatterns::match_table_end,
    LinePatterns::match_column,
];

/// 预编译的行匹配正则
#[derive(Debug)]
pub(crate) struct LinePatterns {
    create_schema: Regex,
    create_sequence: Regex,
    create_table: Regex,
    comment_on_column: Regex,
    primary_key: Regex,
    foreign_key: Regex,
    create_index: Regex,
    table_end: Regex,
    column: Regex,
    statement_prefix: Regex,
    not_null: Regex,
    default_keyword: Regex,
    trailing_null: Regex,
}

impl LinePatterns {
    pub(crate) fn compile() -> Result<Self> {
        Ok(Self {
            create_schema: Regex::new(
                r#"(?i)^\s*CREATE\s+SCHEMA\s+(?:IF\s+NOT\s+EXISTS\s+)?("?[\w$]+"?)"#,
            )?,
            create_sequence: Regex::new(
                r#"(?i)^\s*CREATE\s+SEQUENCE\s+(?:IF\s+NOT\s+EXISTS\s+)?([\w$."]+)"#,
            )?,
            create_table: Regex::new(
                r#"(?i)^\s*CREATE\s+TABLE\s+(?:IF\s+NOT\s+EXISTS\s+)?([\w$."]+)"#,
            )?,
            comment_on_column: Regex::new(
                r#"(?i)^\s*COMMENT\s+ON\s+COLUMN\s+([\w$."]+)\s+IS\s+'(.*)'"#,
            )?,
            primary_key: Regex::new(
                r#"(?i)^\s*(?:CONSTRAINT\s+("?[\w$]+"?)\s+)?PRIMARY\s+KEY\s*\(([^)]*)\)"#,
            )?,
            foreign_key: Regex::new(
                r#"(?i)^\s*(?:CONSTRAINT\s+("?[\w$]+"?)\s+)?FOREIGN\s+KEY\s*\(([^)]*)\)\s*(.*?)\s*,?\s*$"#,
            )?,
            create_index: Regex::new(
                r#"(?i)^\s*CREATE\s+(UNIQUE\s+)?INDEX\s+(?:CONCURRENTLY\s+)?(?:IF\s+NOT\s+EXISTS\s+)?("?[\w$]+"?)\s+ON\s+(?:ONLY\s+)?([\w$."]+)"#,
            )?,
            table_end: Regex::new(r"^\s*\)\s*;")?,
            column: Regex::new(
                r#"(?i)^\s*("?[\w$]+"?)\s+(.+?)(?:\s+((?:DEFAULT|NOT\s+NULL|NULL)\b.*?))?\s*,?\s*$"#,
            )?,
            // 表体内未识别的语句行（如无名索引、表注释）不能当作列定义
            statement_prefix: Regex::new(
                r"(?i)^\s*(?:(?:CREATE|GRANT|SELECT|WITH)\b|COMMENT\s+ON\b|(?:ALTER|DROP)\s+(?:TABLE|SEQUENCE|INDEX|SCHEMA|VIEW|TYPE|FUNCTION)\b|INSERT\s+INTO\b|REVOKE\s+\w+.*\bON\b|SET\s+[\w.]+\s*(?:=|TO\b))",
            )?,
            not_null: Regex::new(r"(?i)\bNOT\s+NULL\b")?,
            default_keyword: Regex::new(r"(?i)\bDEFAULT\s+")?,
            trailing_null: Regex::new(r"(?i)\s+NULL$")?,
        })
    }

    /// 顶层状态（不在表定义内）识别一行
    pub(crate) fn classify_top_level<'a>(&self, line: &'a str) -> Option<Statement<'a>> {
        TOP_LEVEL.iter().find_map(|matcher| matcher(self, line))
    }

    /// 表定义内部识别一行
    pub(crate) fn classify_table_body<'a>(&self, line: &'a str) -> Option<Statement<'a>> {
        TABLE_BODY.iter().find_map(|matcher| matcher(self, line))
    }

    /// 修饰部分中是否出现 `NOT NULL`
    pub(crate) fn is_not_null(&self, modifiers: &str) -> bool {
        self.not_null.is_match(modifiers)
    }

    /// 从修饰部分中取出默认值表达式（去掉 `DEFAULT` 关键字和结尾的 `NULL`）
    pub(crate) fn default_expression(&self, modifiers: &str) -> Option<String> {
        let modifiers = modifiers.trim();
        let keyword = self.default_keyword.find(modifiers)?;
        let expr = &modifiers[keyword.end()..];
        let expr = match self.trailing_null.find(expr) {
            Some(null) => &expr[..null.start()],
            None => expr,
        };
        let expr = expr.trim();
        (!expr.is_empty()).then(|| expr.to_string())
    }

    fn match_create_schema<'a>(&self, line: &'a str) -> Option<Statement<'a>> {
        let caps = self.create_schema.captures(line)?;
        Some(Statement::CreateSchema {
            name: unquote(group(&caps, 1)),
        })
    }

    fn match_create_sequence<'a>(&self, line: &'a str) -> Option<Statement<'a>> {
        let caps = self.create_sequence.captures(line)?;
        Some(Statement::CreateSequence {
            name: group(&caps, 1),
        })
    }

    fn match_create_table<'a>(&self, line: &'a str) -> Option<Statement<'a>> {
        let caps = self.create_table.captures(line)?;
        Some(Statement::CreateTable {
            name: group(&caps, 1),
        })
    }

    fn match_comment_on_column<'a>(&self, line: &'a str) -> Option<Statement<'a>> {
        let caps = self.comment_on_column.captures(line)?;
        Some(Statement::CommentOnColumn {
            target: group(&caps, 1),
            text: group(&caps, 2).replace("''", "'"),
        })
    }

    fn match_primary_key<'a>(&self, line: &'a str) -> Option<Statement<'a>> {
        let caps = self.primary_key.captures(line)?;
        Some(Statement::PrimaryKey {
            index_name: unquote(group(&caps, 1)),
            columns: split_column_list(group(&caps, 2)),
        })
    }

    fn match_foreign_key<'a>(&self, line: &'a str) -> Option<Statement<'a>> {
        let caps = self.foreign_key.captures(line)?;
        Some(Statement::ForeignKey {
            index_name: unquote(group(&caps, 1)),
            columns: split_column_list(group(&caps, 2)),
            rule: group(&caps, 3),
        })
    }

    fn match_create_index<'a>(&self, line: &'a str) -> Option<Statement<'a>> {
        let caps = self.create_index.captures(line)?;
        Some(Statement::CreateIndex {
            unique: caps.get(1).is_some(),
            name: unquote(group(&caps, 2)),
            target: group(&caps, 3),
        })
    }

    fn match_table_end<'a>(&self, line: &'a str) -> Option<Statement<'a>> {
        self.table_end.is_match(line).then_some(Statement::TableEnd)
    }

    fn match_column<'a>(&self, line: &'a str) -> Option<Statement<'a>> {
        let caps = self.column.captures(line)?;
        let name = group(&caps, 1);
        if is_table_level_keyword(name) || self.statement_prefix.is_match(line) {
            return None;
        }
        Some(Statement::Column {
            name: unquote(name),
            data_type: group(&caps, 2),
            modifiers: group(&caps, 3),
        })
    }
}

/// 取捕获组，未参与匹配时为空字符串
fn group<'a>(caps: &Captures<'a>, index: usize) -> &'a str {
    caps.get(index).map_or("", |m| m.as_str())
}

/// `a, "b" , c` -> ["a", "b", "c"]
fn split_column_list(list: &str) -> Vec<String> {
    list.split(',')
        .map(unquote)
        .filter(|c| !c.is_empty())
        .collect()
}

fn is_table_level_keyword(word: &str) -> bool {
    TABLE_LEVEL_KEYWORDS
        .iter()
        .any(|keyword| keyword.eq_ignore_ascii_case(word))
}
