use mini_webserve::{ClientConfig, WebClient, logging};

fn command() -> clap::Command {
    clap::Command::new("webclient")
        .about("Issues one HTTP GET over a raw TCP connection and prints the response")
        .arg(
            clap::Arg::new("host")
                .long("host")
                .action(clap::ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .help("Desired host / website (e.g. 'example.com')")
                .default_value("example.com"),
        )
        .arg(
            clap::Arg::new("port")
                .long("port")
                .action(clap::ArgAction::Set)
                .value_parser(clap::value_parser!(u16))
                .help("Destination port, 80 is plain HTTP")
                .default_value("80"),
        )
        .arg(
            clap::Arg::new("resource")
                .long("resource")
                .action(clap::ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .help("Resource path requested from the server")
                .default_value("/"),
        )
        .arg(
            clap::Arg::new("encoding")
                .long("encoding")
                .action(clap::ArgAction::Set)
                .value_parser(clap::value_parser!(String))
                .help("Text encoding for the request and the decoded response")
                .default_value("ISO-8859-1"),
        )
        .arg(
            clap::Arg::new("verbose")
                .long("verbose")
                .action(clap::ArgAction::SetTrue)
                .help("Log at debug level"),
        )
}

fn client_config(args: &clap::ArgMatches) -> ClientConfig {
    let mut config = ClientConfig::default();
    if let Some(host) = args.get_one::<String>("host") {
        config.host = host.clone();
    }
    if let Some(port) = args.get_one::<u16>("port") {
        config.port = *port;
    }
    if let Some(resource) = args.get_one::<String>("resource") {
        config.resource = resource.clone();
    }
    if let Some(encoding) = args.get_one::<String>("encoding") {
        config.encoding = encoding.clone();
    }
    config
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = command().get_matches();
    logging::init(args.get_flag("verbose"))?;

    let client = WebClient::new(&client_config(&args))?;
    let response = client.issue_request().await?;
    println!("{response}");
    Ok(())
}
