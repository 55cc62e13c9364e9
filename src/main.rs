use std::path::PathBuf;

use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotlist::{cli, config, error};

fn styles() -> Styles {
    Styles::styled()
        .header(AnsiColor::White.on_default() | Effects::BOLD)
        .usage(AnsiColor::White.on_default() | Effects::BOLD)
        .literal(AnsiColor::BrightBlue.on_default())
        .placeholder(AnsiColor::BrightGreen.on_default())
}

#[derive(Parser, Debug, Clone)]
#[clap(
  version = env!("CARGO_PKG_VERSION"),
  name=env!("CARGO_PKG_NAME"),
  bin_name=env!("CARGO_PKG_NAME"),
  about=env!("CARGO_PKG_DESCRIPTION"),
  styles=styles(),
)]
struct Cli {
    #[clap(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug, Clone)]
pub enum Command {
    /// Resolve a track list and build a playlist from it
    Run(InputOptions),

    /// Resolve a track list and write the result files, without creating a playlist
    Resolve(InputOptions),

    /// Open the Spotify authorization page
    Authorize,

    /// Exchange an authorization code for a refresh token
    Exchange(ExchangeOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct InputOptions {
    /// Track list: JSON, or text with one `Artist - Track` per line
    input: PathBuf,

    /// Playlist title (defaults to the one in the input)
    #[clap(long)]
    title: Option<String>,
}

#[derive(Parser, Debug, Clone)]
pub struct ExchangeOptions {
    /// The `code` query parameter Spotify redirected to
    code: String,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    if let Command::Completions(opt) = &cli.command {
        let mut cmd = Cli::command();
        let name = cmd.get_name().to_string();
        generate(opt.shell, &mut cmd, name, &mut std::io::stdout());
        return;
    }

    if let Err(e) = config::load_env().await {
        error!("Cannot load environment. Err: {}", e);
    }
    let config = config::Config::from_env();

    match cli.command {
        Command::Run(opt) => cli::run(&config, &opt.input, opt.title).await,
        Command::Resolve(opt) => cli::resolve(&config, &opt.input, opt.title).await,
        Command::Authorize => cli::authorize(&config),
        Command::Exchange(opt) => cli::exchange(&config, &opt.code).await,
        Command::Completions(_) => {}
    }
}
