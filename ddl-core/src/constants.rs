/// DDL 解析相关常量
pub mod ddl {
    /// 行注释分隔符
    pub const LINE_COMMENT: &str = "--";

    /// 非空约束在输出中的写法
    pub const NOT_NULL: &str = "NOT NULL";

    /// 表体内以这些关键字开头的行不是列定义
    pub const TABLE_LEVEL_KEYWORDS: &[&str] = &[
        "CONSTRAINT",
        "PRIMARY",
        "FOREIGN",
        "UNIQUE",
        "CHECK",
        "EXCLUDE",
        "LIKE",
    ];
}

/// 配置文件相关常量
pub mod config {
    /// 未指定配置文件时按顺序查找的文件名
    pub const CONFIG_FILE_NAMES: &[&str] = &["ddl-cli.toml", ".ddl-cli.toml"];

    /// 默认的 JSON 缩进宽度
    pub const DEFAULT_INDENT: usize = 2;
}

/// 版本信息
pub mod version_info {
    /// 核心库版本（自动从 Cargo.toml 同步）
    pub const CORE_VERSION: &str = env!("CARGO_PKG_VERSION");
}
