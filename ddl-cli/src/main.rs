use clap::Parser;
use ddl_cli::{Cli, CliApp, setup_logging};
use tracing::error;

fn main() {
    // 解析命令行参数
    let cli = Cli::parse();

    // 设置日志记录
    setup_logging(cli.verbose);

    let app = match CliApp::new(&cli) {
        Ok(app) => app,
        Err(e) => {
            error!("❌ 初始化失败: {}", e);
            std::process::exit(e.exit_code());
        }
    };

    // 运行转换
    if let Err(e) = app.run(&cli) {
        error!("❌ 转换失败: {}", e);
        std::process::exit(e.exit_code());
    }
}
