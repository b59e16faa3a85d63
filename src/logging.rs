use env_logger::Builder;
use log::LevelFilter;
use std::io::Write;

/// 初始化日志。默认只显示警告 (例如容量不足)，`verbose` 时显示调试信息；
/// `RUST_LOG` 环境变量会覆盖默认级别。
pub fn init_logger(verbose: bool) {
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };

    // 重复初始化 (如在测试中) 时忽略错误。
    let _ = Builder::new()
        .format(|buf, record| writeln!(buf, "[{}] {}", record.level(), record.args()))
        .filter_level(level)
        .parse_default_env()
        .try_init();
}
