/// 点分名称的期望形状
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NameShape {
    /// `schema.table`
    SchemaTable,
    /// `schema.table.column`
    SchemaTableColumn,
}

impl NameShape {
    fn arity(self) -> usize {
        match self {
            NameShape::SchemaTable => 2,
            NameShape::SchemaTableColumn => 3,
        }
    }
}

/// 拆分后的名称，缺失的部分为空字符串
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QualifiedName {
    pub schema: String,
    pub table: String,
    pub column: String,
}

/// 按期望形状拆分点分名称
///
/// 组成部分不足时右对齐：`t` 按 `S.T` 拆分得到表 `t`，
/// `t.c` 按 `S.T.C` 拆分得到表 `t` 和列 `c`。
/// 三段名称无论期望形状如何都按 (schema, table, column) 返回，
/// 超过三段时只保留最后三段。双引号会被去掉。
pub fn split_qualified_name(name: &str, shape: NameShape) -> QualifiedName {
    let parts: Vec<String> = name.split('.').map(unquote).collect();

    let mut slots = [String::new(), String::new(), String::new()];
    if parts.len() >= 3 {
        slots.clone_from_slice(&parts[parts.len() - 3..]);
    } else {
        // 右对齐到形状的最后一个位置
        let last_slot = shape.arity() - 1;
        for (offset, part) in parts.into_iter().rev().enumerate() {
            if offset > last_slot {
                break;
            }
            slots[last_slot - offset] = part;
        }
    }

    let [schema, table, column] = slots;
    QualifiedName {
        schema,
        table,
        column,
    }
}

/// 去掉标识符两侧的双引号
pub(crate) fn unquote(ident: &str) -> String {
    let ident = ident.trim();
    ident
        .strip_prefix('"')
        .and_then(|s| s.strip_suffix('"'))
        .unwrap_or(ident)
        .to_string()
}
