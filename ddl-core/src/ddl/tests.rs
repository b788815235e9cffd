use super::*;
use serde_json::json;

#[test]
fn test_parse_table_with_comment() {
    let sql = r#"
CREATE SCHEMA s;

CREATE TABLE s.t (
    id int8 NOT NULL,
    name text,
);

COMMENT ON COLUMN s.t.name IS 'the name';
    "#;

    let output = parse(sql).unwrap();
    assert!(output.diagnostics.is_empty());
    assert_eq!(output.objects.len(), 1);

    let table = output.table("t").unwrap();
    assert_eq!(table.schema, "s");
    assert_eq!(table.columns.len(), 2);

    let id = table.column("id").unwrap();
    assert_eq!(id.data_type, "int8");
    assert_eq!(id.constraints, vec!["NOT NULL".to_string()]);
    assert!(id.is_not_null());

    let name = table.column("name").unwrap();
    assert!(name.constraints.is_empty());
    assert_eq!(name.default_value, None);

    assert_eq!(table.comments.len(), 1);
    assert_eq!(table.comments.get("name").map(String::as_str), Some("the name"));
}

#[test]
fn test_parse_document_is_compacted() {
    let sql = r#"
CREATE SCHEMA s;
CREATE TABLE s.t (
    id int8 NOT NULL,
    name text,
);
COMMENT ON COLUMN s.t.name IS 'the name';
    "#;

    let document = parse_document(sql).unwrap().unwrap();
    assert_eq!(
        document,
        json!([{
            "type": "table",
            "schema": "s",
            "name": "t",
            "columns": [
                {"name": "id", "type": "int8", "constraints": ["NOT NULL"]},
                {"name": "name", "type": "text"}
            ],
            "comments": {"name": "the name"}
        }])
    );
}

#[test]
fn test_unresolved_comment() {
    let sql = r#"
COMMENT ON COLUMN s.early.id IS 'before the table';
CREATE SCHEMA s;
CREATE TABLE s.early (
    id int8 NOT NULL,
);
COMMENT ON COLUMN s.missing.id IS 'never declared';
    "#;

    let output = parse(sql).unwrap();
    let table = output.table("early").unwrap();
    assert!(table.comments.is_empty());

    assert_eq!(output.diagnostics.len(), 2);
    assert_eq!(output.diagnostics[0].line, 2);
    assert_eq!(
        output.diagnostics[0].kind,
        DiagnosticKind::UnresolvedComment {
            table: "early".to_string(),
            column: "id".to_string()
        }
    );
    assert_eq!(
        output.diagnostics[1].kind,
        DiagnosticKind::UnresolvedComment {
            table: "missing".to_string(),
            column: "id".to_string()
        }
    );
    assert!(output.diagnostics[1].to_string().contains("missing"));
}

#[test]
fn test_comment_inside_open_table() {
    let sql = r#"
CREATE TABLE s.t (
    id int8 NOT NULL,
COMMENT ON COLUMN t.id IS 'primary id';
);
    "#;

    let output = parse(sql).unwrap();
    let table = output.table("t").unwrap();
    assert_eq!(table.comments.get("id").map(String::as_str), Some("primary id"));
}

#[test]
fn test_primary_key_constraint() {
    let sql = r#"
CREATE SCHEMA s;
CREATE TABLE s.t (
    a int4 NOT NULL,
    b int4 NOT NULL,
    CONSTRAINT t_pkey PRIMARY KEY (a, b)
);
    "#;

    let output = parse(sql).unwrap();
    let table = output.table("t").unwrap();
    assert_eq!(
        table.constraints,
        vec![ConstraintDef::PrimaryKey {
            index_name: "t_pkey".to_string(),
            columns: vec!["a".to_string(), "b".to_string()],
        }]
    );

    let document = parse_document(sql).unwrap().unwrap();
    assert_eq!(
        document[0]["constraints"],
        json!([{"type": "primary_key", "indexName": "t_pkey", "columns": ["a", "b"]}])
    );
}

#[test]
fn test_foreign_key_rule_verbatim() {
    let sql = r#"
CREATE TABLE s.orders (
    owner_id int8 NOT NULL,
    CONSTRAINT orders_owner_fk FOREIGN KEY (owner_id) REFERENCES s.users(id) ON DELETE CASCADE,
);
    "#;

    let document = parse_document(sql).unwrap().unwrap();
    assert_eq!(
        document[0]["constraints"],
        json!([{
            "type": "foreign_key",
            "indexName": "orders_owner_fk",
            "columns": ["owner_id"],
            "rule": "REFERENCES s.users(id) ON DELETE CASCADE"
        }])
    );
}

#[test]
fn test_column_default_value() {
    let sql = r#"
CREATE TABLE s.t (
    amount numeric(10,2) DEFAULT 0,
    status varchar(16) DEFAULT 'new'::varchar NOT NULL,
    note text NULL,
    qty int4 NULL DEFAULT 0,
);
    "#;

    let output = parse(sql).unwrap();
    let table = output.table("t").unwrap();

    let amount = table.column("amount").unwrap();
    assert_eq!(amount.data_type, "numeric(10,2)");
    assert!(amount.constraints.is_empty());
    assert_eq!(amount.default_value.as_deref(), Some("0"));

    // 出现 NOT NULL 时不再取默认值
    let status = table.column("status").unwrap();
    assert_eq!(status.constraints, vec!["NOT NULL".to_string()]);
    assert_eq!(status.default_value, None);

    let note = table.column("note").unwrap();
    assert!(note.constraints.is_empty());
    assert_eq!(note.default_value, None);

    // NULL 写在 DEFAULT 之前
    let qty = table.column("qty").unwrap();
    assert_eq!(qty.data_type, "int4");
    assert!(qty.constraints.is_empty());
    assert_eq!(qty.default_value.as_deref(), Some("0"));
}

#[test]
fn test_line_comment_split_inside_literal() {
    // 行尾注释按第一个 `--` 拆分，不识别字符串字面量
    let sql = r#"
CREATE TABLE s.t (
    label text DEFAULT '--',
);
    "#;

    let output = parse(sql).unwrap();
    let label = output.table("t").unwrap().column("label").unwrap();
    assert_eq!(label.default_value.as_deref(), Some("'"));
    assert_eq!(label.trailing_comment.as_deref(), Some("',"));
}

#[test]
fn test_indexes_inside_table_body() {
    let sql = r#"
CREATE TABLE s.t (
    id int8 NOT NULL,
    CREATE UNIQUE INDEX t_id_key ON s.t USING btree (id);
    CREATE INDEX t_created_idx ON s.t (created);
);
CREATE INDEX ignored_idx ON s.t (id);
    "#;

    let output = parse(sql).unwrap();
    let table = output.table("t").unwrap();
    assert_eq!(
        table.indexes,
        vec![
            IndexDef {
                name: "t_id_key".to_string(),
                kind: IndexKind::Unique,
                columns: Vec::new(),
            },
            IndexDef {
                name: "t_created_idx".to_string(),
                kind: IndexKind::Btree,
                columns: Vec::new(),
            },
        ]
    );

    let document = parse_document(sql).unwrap().unwrap();
    assert_eq!(
        document[0]["indexes"],
        json!([
            {"name": "t_id_key", "kind": "unique"},
            {"name": "t_created_idx", "kind": "btree"}
        ])
    );
}

#[test]
fn test_sequences_and_order() {
    let sql = r#"
CREATE SCHEMA app; -- application schema
CREATE SEQUENCE app.user_id_seq -- ids for users
    START WITH 1
    INCREMENT BY 1
    CACHE 1;
CREATE TABLE app.users ( -- registered users
    id int8 NOT NULL, -- surrogate key
);
CREATE SEQUENCE app.order_id_seq
    "#;

    let output = parse(sql).unwrap();
    let names: Vec<&str> = output.objects.iter().map(SchemaObject::name).collect();
    assert_eq!(names, ["user_id_seq", "users", "order_id_seq"]);

    assert_eq!(
        output.objects[0],
        SchemaObject::Sequence(SequenceRecord {
            schema: "app".to_string(),
            name: "user_id_seq".to_string(),
            trailing_comment: Some("ids for users".to_string()),
        })
    );

    let users = output.table("users").unwrap();
    assert_eq!(users.trailing_comment.as_deref(), Some("registered users"));
    assert_eq!(
        users.column("id").unwrap().trailing_comment.as_deref(),
        Some("surrogate key")
    );

    let document = parse_document(sql).unwrap().unwrap();
    assert_eq!(
        document[0],
        json!({
            "type": "sequence",
            "schema": "app",
            "name": "user_id_seq",
            "trailingComment": "ids for users"
        })
    );
    assert_eq!(document[2], json!({"type": "sequence", "schema": "app", "name": "order_id_seq"}));
}

#[test]
fn test_colliding_table_names_last_write_wins() {
    let sql = r#"
CREATE TABLE a.t (
    id int8,
);
CREATE TABLE b.t (
    id int8,
);
COMMENT ON COLUMN a.t.id IS 'goes to the latest t';
    "#;

    let output = parse(sql).unwrap();
    let tables: Vec<&TableRecord> = output.tables().collect();
    assert_eq!(tables.len(), 2);
    assert!(tables[0].comments.is_empty());
    assert_eq!(
        tables[1].comments.get("id").map(String::as_str),
        Some("goes to the latest t")
    );
}

#[test]
fn test_unclosed_table_is_dropped() {
    let sql = "CREATE TABLE s.t (\n    id int8 NOT NULL,\n";

    let output = parse(sql).unwrap();
    assert!(output.objects.is_empty());
    assert_eq!(
        output.diagnostics,
        vec![Diagnostic {
            line: 2,
            kind: DiagnosticKind::UnclosedTable {
                name: "t".to_string()
            },
        }]
    );
}

#[test]
fn test_unrecognized_lines_are_ignored() {
    let sql = r#"
-- 只有注释的行

SET client_encoding = 'UTF8';
GRANT ALL ON SCHEMA s TO someone;
ALTER TABLE s.t OWNER TO someone;
CREATE TABLE s.t (
    CONSTRAINT t_check CHECK (id > 0),
    UNIQUE (id),
    )garbage(
    CREATE INDEX ON s.t (id);
    COMMENT ON TABLE s.t IS 'a table';
    COMMENT ON COLUMN s.t.id IS NULL;
    id int8 NOT NULL,
);
    "#;

    let output = parse(sql).unwrap();
    assert!(output.diagnostics.is_empty());
    let table = output.table("t").unwrap();
    assert_eq!(table.columns.len(), 1);
    assert_eq!(table.columns[0].name, "id");
    assert!(table.indexes.is_empty());
    assert!(table.comments.is_empty());
    assert!(table.constraints.is_empty());
}

#[test]
fn test_empty_document_is_absent() {
    assert_eq!(parse_document("").unwrap(), None);
    assert_eq!(parse_document("SELECT 1;\n-- nothing here\n").unwrap(), None);
    assert_eq!(parse_document("CREATE SCHEMA s;\n").unwrap(), None);
}

#[test]
fn test_quoted_names_and_if_not_exists() {
    let sql = r#"
CREATE SCHEMA IF NOT EXISTS "Sales";
CREATE TABLE IF NOT EXISTS "Sales"."Order" (
    "Id" int8 NOT NULL,
    CONSTRAINT "Order_pkey" PRIMARY KEY ("Id")
);
COMMENT ON COLUMN "Sales"."Order"."Id" IS 'order id';
    "#;

    let output = parse(sql).unwrap();
    let table = output.table("Order").unwrap();
    assert_eq!(table.schema, "Sales");
    assert_eq!(table.column("Id").unwrap().data_type, "int8");
    assert_eq!(
        table.constraints,
        vec![ConstraintDef::PrimaryKey {
            index_name: "Order_pkey".to_string(),
            columns: vec!["Id".to_string()],
        }]
    );
    assert_eq!(table.comments.get("Id").map(String::as_str), Some("order id"));
}

#[test]
fn test_schema_falls_back_to_qualified_name() {
    let sql = r#"
CREATE SEQUENCE billing.invoice_seq;
CREATE TABLE plain (
    id int8,
);
    "#;

    let output = parse(sql).unwrap();
    assert_eq!(
        output.objects[0],
        SchemaObject::Sequence(SequenceRecord {
            schema: "billing".to_string(),
            name: "invoice_seq".to_string(),
            trailing_comment: None,
        })
    );
    assert_eq!(output.table("plain").unwrap().schema, "");

    // 空的 schema 在文档中被删除
    let document = parse_document(sql).unwrap().unwrap();
    assert_eq!(
        document[1],
        json!({"type": "table", "name": "plain", "columns": [{"name": "id", "type": "int8"}]})
    );
}

#[test]
fn test_parser_is_reusable() {
    let parser = DdlParser::new().unwrap();
    let first = parser.parse("CREATE TABLE s.a (\n  id int8,\n);\n").unwrap();
    let second = parser
        .parse("COMMENT ON COLUMN s.a.id IS 'not visible here';\n")
        .unwrap();

    assert_eq!(first.objects.len(), 1);
    // 每次解析都有独立的查找表
    assert!(second.objects.is_empty());
    assert_eq!(second.diagnostics.len(), 1);
}
