//! Web 服务器主程序入口

use pagemirror::core::PagemirrorOptions;
use pagemirror::env::{self, EnvVar};
use pagemirror::web::{WebConfig, WebServer};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_tracing();

    // 从环境变量读取配置，再用命令行参数覆盖
    let mut config = WebConfig::from_env()?;

    let args: Vec<String> = std::env::args().collect();
    let mut i = 1;
    while i < args.len() {
        match args[i].as_str() {
            "--bind" | "-b" => {
                if i + 1 < args.len() {
                    config.bind_addr = args[i + 1].clone();
                    i += 2;
                } else {
                    eprintln!("Error: --bind requires an address");
                    std::process::exit(1);
                }
            }
            "--port" | "-p" => {
                if i + 1 < args.len() {
                    config.port = args[i + 1].parse().unwrap_or_else(|_| {
                        eprintln!("Error: Invalid port number");
                        std::process::exit(1);
                    });
                    i += 2;
                } else {
                    eprintln!("Error: --port requires a port number");
                    std::process::exit(1);
                }
            }
            "--help" | "-h" => {
                print_help();
                return Ok(());
            }
            _ => {
                eprintln!("Error: Unknown argument: {}", args[i]);
                print_help();
                std::process::exit(1);
            }
        }
    }

    config.validate()?;

    let server = WebServer::new(config, PagemirrorOptions::default());
    server.start().await?;

    Ok(())
}

fn init_tracing() {
    let level = env::core::LogLevel::get()
        .unwrap_or_else(|_| "info".to_string())
        .parse::<tracing::Level>()
        .unwrap_or(tracing::Level::INFO);

    tracing_subscriber::fmt().with_max_level(level).init();
}

fn print_help() {
    println!("Pagemirror Web Server");
    println!();
    println!("USAGE:");
    println!("    pagemirror-web [OPTIONS]");
    println!();
    println!("OPTIONS:");
    println!("    -b, --bind <ADDRESS>     Bind address [default: 0.0.0.0]");
    println!("    -p, --port <PORT>        Port number [default: 3000]");
    println!("    -h, --help               Print help information");
    println!();
    println!("EXAMPLES:");
    println!("    pagemirror-web");
    println!("    pagemirror-web --bind 127.0.0.1 --port 8080");
}
