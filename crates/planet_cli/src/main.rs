use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use planet_diagnostics::Emitter;
use planet_driver::check_file;
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "planetc")]
#[command(about = "行星名检查器 - 提醒你把行星名首字母大写", version)]
struct Cli {
    /// 输出调试日志
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// 运行语言服务器（默认）
    Serve {
        /// 使用标准输入输出通信（默认方式，兼容编辑器传入的参数）
        #[arg(long, conflicts_with = "socket")]
        stdio: bool,

        /// 连接到客户端监听的端口
        #[arg(long, value_name = "PORT")]
        socket: Option<u16>,
    },

    /// 检查文件并输出诊断
    Check {
        /// 输入文件
        #[arg(required = true)]
        inputs: Vec<PathBuf>,

        /// 不使用颜色
        #[arg(long)]
        no_color: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command.unwrap_or(Commands::Serve {
        stdio: true,
        socket: None,
    }) {
        Commands::Serve { stdio, socket } => {
            tracing::debug!(stdio, ?socket, "starting language server");
            cmd_serve(socket)?
        }
        Commands::Check { inputs, no_color } => cmd_check(&inputs, no_color)?,
    }

    Ok(())
}

/// 日志写到 stderr，stdout 留给 LSP
fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("debug")
        } else {
            EnvFilter::new("info")
        }
    });

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_ansi(false)
        .with_target(false)
        .init();
}

/// 服务命令
fn cmd_serve(socket: Option<u16>) -> Result<()> {
    let runtime = tokio::runtime::Runtime::new().context("failed to start tokio runtime")?;

    runtime.block_on(async {
        match socket {
            Some(port) => planet_ls::run_socket(port)
                .await
                .with_context(|| format!("failed to connect to client on port {}", port)),
            None => {
                planet_ls::run_server().await;
                Ok(())
            }
        }
    })
}

/// 检查命令
fn cmd_check(inputs: &[PathBuf], no_color: bool) -> Result<()> {
    let emitter = if no_color {
        colored::control::set_override(false);
        Emitter::without_colors()
    } else {
        Emitter::new()
    };

    let mut total = 0;
    let mut failed = 0;
    for input in inputs {
        match check_one(&emitter, input) {
            Ok(count) => total += count,
            Err(e) => {
                eprintln!("{} {:#}", "error:".red().bold(), e);
                failed += 1;
            }
        }
    }

    if total == 0 {
        println!("{}", "✅ 没有发现小写的行星名".green());
    } else {
        println!("{}", format!("⚠️  共 {} 条警告", total).yellow().bold());
    }

    if failed > 0 {
        anyhow::bail!("{} 个文件无法读取", failed);
    }

    Ok(())
}

fn check_one(emitter: &Emitter, input: &Path) -> Result<usize> {
    let output = check_file(input)?;
    let name = input.display().to_string();

    for diagnostic in output.sink.diagnostics() {
        emitter
            .emit_with_source(diagnostic, &name, &output.source)
            .with_context(|| format!("failed to write report for {}", name))?;
    }

    Ok(output.sink.warning_count())
}
