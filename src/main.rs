use clap::{Args, CommandFactory, Parser, Subcommand};
use clap_complete::Shell;
use std::io;
use std::process::ExitCode;

use corkboard::commands::{cmd_board, cmd_ls};
use corkboard::config::Config;
use corkboard::error::{CorkboardError, Result};
use corkboard::types::{GroupBy, SortBy, VALID_GROUPINGS, VALID_ORDERINGS, ViewOptions};

#[derive(Parser)]
#[command(name = "corkboard")]
#[command(about = "Terminal kanban board for remote ticket APIs")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    #[command(flatten)]
    display: DisplayArgs,
}

/// Display options shared by the board and ls commands
#[derive(Args)]
struct DisplayArgs {
    /// Group tickets by: status, user, priority
    #[arg(short, long, global = true, value_parser = parse_group_by)]
    group_by: Option<GroupBy>,

    /// Order tickets within each group by: priority, title
    #[arg(short, long, global = true, value_parser = parse_sort_by)]
    sort_by: Option<SortBy>,

    /// Board API endpoint (overrides config file and environment)
    #[arg(long, global = true)]
    endpoint: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Launch the interactive board (the default command)
    #[command(visible_alias = "b")]
    Board,

    /// Print the grouped board to stdout
    Ls {
        /// Output as JSON (an ordered array of groups)
        #[arg(long)]
        json: bool,
    },

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for [possible values: bash, zsh, fish, powershell, elvish]
        shell: Shell,
    },
}

fn parse_group_by(s: &str) -> std::result::Result<GroupBy, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid grouping. Must be one of: {}",
            VALID_GROUPINGS.join(", ")
        )
    })
}

fn parse_sort_by(s: &str) -> std::result::Result<SortBy, String> {
    s.parse().map_err(|_| {
        format!(
            "Invalid ordering. Must be one of: {}",
            VALID_ORDERINGS.join(", ")
        )
    })
}

/// Resolve the endpoint and display options from flags, environment,
/// and config file.
fn resolve(display: &DisplayArgs) -> Result<(String, ViewOptions)> {
    let config = Config::load()?;

    let endpoint = match &display.endpoint {
        Some(endpoint) => url::Url::parse(endpoint)
            .map_err(|e| CorkboardError::InvalidEndpoint(endpoint.clone(), e.to_string()))?
            .to_string(),
        None => config.endpoint_url()?.to_string(),
    };

    let mut options = config.view_options();
    if let Some(group_by) = display.group_by {
        options.group_by = group_by;
    }
    if let Some(sort_by) = display.sort_by {
        options.sort_by = sort_by;
    }

    Ok((endpoint, options))
}

fn generate_completions(shell: Shell) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "corkboard", &mut io::stdout());
}

async fn run(cli: Cli) -> Result<()> {
    match cli.command.unwrap_or(Commands::Board) {
        Commands::Board => {
            let (endpoint, options) = resolve(&cli.display)?;
            cmd_board(endpoint, options).await
        }
        Commands::Ls { json } => {
            let (endpoint, options) = resolve(&cli.display)?;
            cmd_ls(endpoint, options, json).await
        }
        Commands::Completions { shell } => {
            generate_completions(shell);
            Ok(())
        }
    }
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{}", e);
            ExitCode::FAILURE
        }
    }
}
