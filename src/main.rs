use clap::{
    CommandFactory, Parser, Subcommand,
    builder::{
        Styles,
        styling::{AnsiColor, Effects},
    },
};
use clap_complete::{Shell, generate};

use spotmeta::{
    cli::{self, ExportOptions, InputOptions},
    config, utils, warning,
};

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
    /// Export metadata of tracks
    Tracks(TracksOptions),

    /// Export the tracks of albums with UPC, label and ℗ line
    Albums(BatchOptions),

    /// Export the tracks of playlists
    Playlist(BatchOptions),

    /// Export an artist's top tracks in a market
    TopTracks(ArtistOptions),

    /// Export an artist's full discography
    Catalog(CatalogOptions),

    /// Get shell completions
    Completions(CompletionsOption),
}

#[derive(Parser, Debug, Clone)]
pub struct TracksOptions {
    #[command(flatten)]
    input: InputOptions,

    /// Process at most this many tracks
    #[clap(long)]
    max: Option<usize>,

    #[command(flatten)]
    export: ExportOptions,
}

#[derive(Parser, Debug, Clone)]
pub struct BatchOptions {
    #[command(flatten)]
    input: InputOptions,

    #[command(flatten)]
    export: ExportOptions,
}

#[derive(Parser, Debug, Clone)]
pub struct ArtistOptions {
    #[command(flatten)]
    input: InputOptions,

    /// Market (country code) the results are scoped to
    #[clap(long, value_parser = utils::parse_market)]
    market: Option<String>,

    #[command(flatten)]
    export: ExportOptions,
}

#[derive(Parser, Debug, Clone)]
pub struct CatalogOptions {
    #[command(flatten)]
    artist: ArtistOptions,

    /// Also write one spreadsheet per release
    #[clap(long)]
    per_album: bool,
}

#[derive(Parser, Debug, Clone)]
pub struct CompletionsOption {
    shell: Shell,
}

fn market_or_default(market: Option<String>) -> String {
    market.unwrap_or_else(|| match utils::parse_market(&config::default_market()) {
        Ok(code) => code,
        Err(e) => {
            warning!("{}, using {}", e, config::DEFAULT_MARKET);
            config::DEFAULT_MARKET.to_string()
        }
    })
}

#[tokio::main]
async fn main() {
    if let Err(e) = config::load_env().await {
        warning!("Cannot load environment. Err: {}", e);
    }

    let cli = Cli::parse();

    match cli.command {
        Command::Tracks(opt) => cli::tracks(opt.input, opt.max, opt.export).await,
        Command::Albums(opt) => cli::albums(opt.input, opt.export).await,
        Command::Playlist(opt) => cli::playlist(opt.input, opt.export).await,
        Command::TopTracks(opt) => {
            let market = market_or_default(opt.market);
            cli::top_tracks(opt.input, market, opt.export).await
        }
        Command::Catalog(opt) => {
            let market = market_or_default(opt.artist.market);
            cli::catalog(opt.artist.input, market, opt.per_album, opt.artist.export).await
        }
        Command::Completions(opt) => {
            let mut cmd = Cli::command_for_update();
            let name = cmd.get_name().to_string();
            generate(opt.shell, &mut cmd, name, &mut std::io::stdout())
        }
    }
}
