use clap::Parser;
use std::path::PathBuf;
use todoz::config::TodozConfig;
use todoz::directory::{
    DirectorySession, DomainFilter, SortField, SortOrder, UsersClient, ViewOptions,
};
use todoz::error::{Result, TodozError};
use todoz::server;

mod cli;
use cli::args::{Cli, Commands};
use cli::render::render_directory;

#[tokio::main]
async fn main() {
    cli::logging::init_tracing();

    if let Err(e) = run().await {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

struct UsersRequest {
    page: u32,
    options: ViewOptions,
    browse: bool,
    api_url: Option<String>,
}

async fn run() -> Result<()> {
    let cli = Cli::parse();
    let config = TodozConfig::resolve(cli.config_dir.as_ref())?;

    match cli.command {
        Commands::Serve {
            port,
            host,
            data_file,
        } => handle_serve(config, port, host, data_file).await,
        Commands::Users {
            page,
            search,
            domain,
            sort,
            order,
            browse,
            api_url,
        } => {
            let request = UsersRequest {
                page,
                options: view_options(search, domain, sort, order),
                browse,
                api_url,
            };
            handle_users(config, request).await
        }
    }
}

fn view_options(
    search: String,
    domain: DomainFilter,
    sort_field: SortField,
    sort_order: SortOrder,
) -> ViewOptions {
    ViewOptions {
        search,
        domain,
        sort_field,
        sort_order,
    }
}

async fn handle_serve(
    mut config: TodozConfig,
    port: Option<u16>,
    host: Option<String>,
    data_file: Option<PathBuf>,
) -> Result<()> {
    if let Some(port) = port {
        config.port = port;
    }
    if let Some(host) = host {
        config.host = host;
    }
    if let Some(data_file) = data_file {
        config.data_file = data_file;
    }
    server::serve(&config).await
}

async fn handle_users(mut config: TodozConfig, request: UsersRequest) -> Result<()> {
    if let Some(url) = request.api_url {
        config.users_api_url = url;
    }
    let client = UsersClient::from_config(&config);
    let mut session = DirectorySession::new()
        .with_options(request.options)
        .with_page(request.page);

    if request.browse {
        return cli::browse::browse(&mut session, &client).await;
    }

    session.refresh(&client).await;
    print!("{}", render_directory(&session, client.api_url()));

    match session.error() {
        Some(message) => Err(TodozError::Fetch(message.to_string())),
        None => Ok(()),
    }
}
