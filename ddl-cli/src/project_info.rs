/// DDL CLI 项目信息模块
///
/// ddl-cli 是面向用户的主程序，项目元数据统一在这里定义，
/// ddl-core 作为内部库，只提供技术性常量

/// 项目元数据（自动从 ddl-cli 的 Cargo.toml 同步）
pub mod metadata {
    /// 项目名称（自动从 Cargo.toml 同步）
    pub const PROJECT_NAME: &str = env!("CARGO_PKG_NAME");

    /// 项目描述（自动从 Cargo.toml 同步）
    pub const PROJECT_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");

    /// 项目作者（自动从 Cargo.toml 同步）
    pub const PROJECT_AUTHORS: &str = env!("CARGO_PKG_AUTHORS");

    /// 用户友好的显示名称（手动维护）
    pub mod display {
        /// 项目详细描述（比 Cargo.toml 中的描述更详细）
        pub const DESCRIPTION_LONG: &str = "按行读取 SQL DDL 脚本（CREATE SCHEMA / SEQUENCE / TABLE / INDEX、COMMENT ON COLUMN），输出描述模式、序列、表、列、约束、索引和注释的 JSON 文档。空字段会被自动删除。";
    }
}

/// 版本信息
pub mod version_info {
    /// CLI 版本（自动从 Cargo.toml 同步）
    pub const CLI_VERSION: &str = env!("CARGO_PKG_VERSION");

    /// 核心库版本（从 ddl-core 获取）
    pub const CORE_VERSION: &str = ddl_core::constants::version_info::CORE_VERSION;
}

/// 版本显示字符串，例如 `ddl-cli 0.1.0 (core 0.1.0)`
pub fn version_string() -> String {
    format!(
        "{} {} (core {})",
        metadata::PROJECT_NAME,
        version_info::CLI_VERSION,
        version_info::CORE_VERSION
    )
}
