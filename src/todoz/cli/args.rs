use clap::{Parser, Subcommand};
use std::path::PathBuf;
use todoz::directory::{DomainFilter, SortField, SortOrder};

#[derive(Parser, Debug)]
#[command(name = "todoz")]
#[command(about = "Todo store service and user directory client", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Directory holding config.json (defaults to the platform config dir)
    #[arg(long, global = true)]
    pub config_dir: Option<PathBuf>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the todo HTTP service
    #[command(alias = "s")]
    Serve {
        /// Port to listen on
        #[arg(short, long)]
        port: Option<u16>,

        /// Interface to bind
        #[arg(long)]
        host: Option<String>,

        /// JSON file holding the todos
        #[arg(long)]
        data_file: Option<PathBuf>,
    },

    /// List users from the remote directory
    #[command(alias = "u")]
    Users {
        /// Page to fetch
        #[arg(long, default_value_t = 1, value_parser = clap::value_parser!(u32).range(1..))]
        page: u32,

        /// Case-insensitive match on full name or email
        #[arg(short, long, default_value = "")]
        search: String,

        /// Only show emails ending with this domain ("all" for no filter)
        #[arg(short, long, default_value = "all")]
        domain: DomainFilter,

        /// Sort column (first_name or email)
        #[arg(long, default_value = "first_name")]
        sort: SortField,

        /// Sort direction (asc or desc)
        #[arg(long, default_value = "asc")]
        order: SortOrder,

        /// Interactive line-driven browser over stdin
        #[arg(short, long)]
        browse: bool,

        /// Override the user listing endpoint
        #[arg(long)]
        api_url: Option<String>,
    },
}
