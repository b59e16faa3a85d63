use clap::Parser;
use colored::Colorize;

use lsb_tile::{
    cli::{Cli, Commands},
    error::StegoError,
    handler::{handle_decode, handle_encode},
    logging::init_logger,
};

/// 程序的主入口点
///
/// 负责解析命令行参数，并根据指定的子命令（`encode` 或 `decode`）
/// 将执行分派到相应的处理函数。
/// 缺少文本或找不到文件时只向用户打印提示，不以错误状态退出。
fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_logger(cli.verbose);

    let outcome = match cli.command {
        Commands::Encode(args) => handle_encode(args).map(|_| ()),
        Commands::Decode(args) => handle_decode(args).map(|_| ()),
    };

    match outcome {
        Err(err) => match err.downcast_ref::<StegoError>() {
            Some(user_error) if user_error.is_user_facing() => {
                println!("\n{}", user_error.to_string().red().bold());
                Ok(())
            }
            _ => Err(err),
        },
        ok => ok,
    }
}
