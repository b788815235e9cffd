mod naming;
mod parser;
mod patterns;
mod types;

#[cfg(test)]
mod tests;

// 重新导出公共接口
pub use naming::{NameShape, QualifiedName, split_qualified_name};
pub use parser::{DdlParser, parse, parse_document};
pub use types::{
    ColumnDef, ConstraintDef, Diagnostic, DiagnosticKind, IndexDef, IndexKind, ParseOutput,
    SchemaObject, SequenceRecord, TableRecord,
};
