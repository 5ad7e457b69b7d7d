//! Line-driven directory browser.
//!
//! Reads one command per line from stdin, applies it to the session and redraws.
//! Page changes and `r` refetch; everything else re-runs the local pipeline over the
//! page already loaded.

use super::render::render_directory;
use std::io::Write;
use todoz::directory::{DirectorySession, DomainFilter, SortField, UsersClient};
use todoz::error::Result;
use tokio::io::{AsyncBufReadExt, BufReader};

const HELP: &str = "commands: n next | p prev | g N jump | s first_name|email sort | /TERM search | d DOMAIN|all filter | r reload | q quit";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BrowseCommand {
    Next,
    Prev,
    Go(u32),
    Sort(SortField),
    Search(String),
    Domain(DomainFilter),
    Reload,
    Help,
    Quit,
}

/// What the loop should do after a command has been applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Step {
    Fetch,
    Redraw,
    Stay,
    Quit,
}

pub fn parse_command(line: &str) -> std::result::Result<BrowseCommand, String> {
    let line = line.trim_end_matches(['\r', '\n']);

    // The search term is taken verbatim, leading spaces included.
    if let Some(term) = line.strip_prefix('/') {
        return Ok(BrowseCommand::Search(term.to_string()));
    }

    let trimmed = line.trim();
    let (cmd, arg) = match trimmed.split_once(char::is_whitespace) {
        Some((cmd, arg)) => (cmd, arg.trim()),
        None => (trimmed, ""),
    };

    match (cmd, arg) {
        ("n", "") => Ok(BrowseCommand::Next),
        ("p", "") => Ok(BrowseCommand::Prev),
        ("r", "") => Ok(BrowseCommand::Reload),
        ("q", "") => Ok(BrowseCommand::Quit),
        ("h" | "?" | "", "") => Ok(BrowseCommand::Help),
        ("g", n) => n
            .parse()
            .map(BrowseCommand::Go)
            .map_err(|_| format!("not a page number: {:?}", n)),
        ("s", field) => field.parse().map(BrowseCommand::Sort),
        ("d", domain) => domain.parse().map(BrowseCommand::Domain),
        _ => Err(format!("unknown command: {:?}", trimmed)),
    }
}

pub fn apply(session: &mut DirectorySession, command: BrowseCommand) -> Step {
    match command {
        BrowseCommand::Next => changed(session.next_page()),
        BrowseCommand::Prev => changed(session.prev_page()),
        BrowseCommand::Go(page) => changed(session.go_to_page(page)),
        BrowseCommand::Sort(field) => {
            session.toggle_sort(field);
            Step::Redraw
        }
        BrowseCommand::Search(term) => {
            session.set_search(term);
            Step::Redraw
        }
        BrowseCommand::Domain(filter) => {
            session.set_domain_filter(filter);
            Step::Redraw
        }
        BrowseCommand::Reload => Step::Fetch,
        BrowseCommand::Help => Step::Stay,
        BrowseCommand::Quit => Step::Quit,
    }
}

fn changed(page_changed: bool) -> Step {
    if page_changed {
        Step::Fetch
    } else {
        Step::Stay
    }
}

pub async fn browse(session: &mut DirectorySession, client: &UsersClient) -> Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    session.refresh(client).await;
    print!("{}", render_directory(session, client.api_url()));
    println!("{}", HELP);

    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let Some(line) = lines.next_line().await? else {
            break;
        };

        let command = match parse_command(&line) {
            Ok(command) => command,
            Err(message) => {
                println!("{}", message);
                continue;
            }
        };
        if command == BrowseCommand::Help {
            println!("{}", HELP);
            continue;
        }

        match apply(session, command) {
            Step::Quit => break,
            Step::Stay => {}
            Step::Redraw => print!("{}", render_directory(session, client.api_url())),
            Step::Fetch => {
                session.refresh(client).await;
                print!("{}", render_directory(session, client.api_url()));
            }
        }
    }
    Ok(())
}
