use std::path::PathBuf;

use mini_webserve::config::{ServerConfig, load_config};
use mini_webserve::{Server, logging};

fn command() -> clap::Command {
    clap::Command::new("webserver")
        .about("Serves files from a resource directory, one connection at a time")
        .arg(
            clap::Arg::new("host")
                .long("host")
                .action(clap::ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .help("Interface to listen on (default: 0.0.0.0, all interfaces)"),
        )
        .arg(
            clap::Arg::new("port")
                .long("port")
                .action(clap::ArgAction::Set)
                .value_parser(clap::value_parser!(u16))
                .help("Port to listen on (default: 28333)"),
        )
        .arg(
            clap::Arg::new("root")
                .long("root")
                .action(clap::ArgAction::Set)
                .value_parser(clap::value_parser!(PathBuf))
                .help("Directory files are served from (default: resources)"),
        )
        .arg(
            clap::Arg::new("config")
                .long("config")
                .action(clap::ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .help("JSON config file; explicit flags take precedence over it"),
        )
        .arg(
            clap::Arg::new("verbose")
                .long("verbose")
                .action(clap::ArgAction::SetTrue)
                .help("Log at debug level"),
        )
}

// 单线程运行时，连接按顺序处理
#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = command().get_matches();
    logging::init(args.get_flag("verbose"))?;

    let mut config = match args.get_one::<String>("config") {
        Some(path) => load_config(path).await?,
        None => ServerConfig::default(),
    };
    if let Some(host) = args.get_one::<String>("host") {
        config.host = host.clone();
    }
    if let Some(port) = args.get_one::<u16>("port") {
        config.port = *port;
    }
    if let Some(root) = args.get_one::<PathBuf>("root") {
        config.resource_root = root.clone();
    }

    let server = Server::bind(&config)?;
    server.run().await?;
    Ok(())
}
