//! posio terminal client
//!
//! Joins a game over WebSocket, reads answers as `lat lng` lines on stdin
//! and prints the map, legend and leaderboard as they change.
//!
//! Other inputs: `t` toggles the leaderboard, `z <level>` zooms.

use clap::Parser;
use colored::Colorize;
use posio::*;
use tokio::io::AsyncBufReadExt;
use tokio::sync::mpsc::UnboundedSender;
use tokio::sync::mpsc::unbounded_channel;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Game master endpoint.
    #[arg(default_value = "ws://127.0.0.1:5000/ws")]
    url: String,
    /// Play under this name instead of the stored one.
    #[arg(long)]
    name: Option<String>,
    /// Where the chosen name is persisted.
    #[arg(long, default_value = ".posio.json")]
    store: std::path::PathBuf,
    /// Do not persist the chosen name.
    #[arg(long)]
    no_store: bool,
    /// Seconds given to answer each round.
    #[arg(long, default_value_t = MAX_RESPONSE_TIME)]
    max_response_time: u64,
    /// Keep answering after the first click of a round.
    #[arg(long, default_value_t = ALLOW_MULTIPLE_ANSWERS, action = clap::ArgAction::Set)]
    allow_multiple_answers: bool,
    /// Zoom levels allowed above the default.
    #[arg(long, default_value_t = ZOOM_LEVEL)]
    zoom_level: Zoom,
    /// Prefix of marker icons and map tiles.
    #[arg(long, default_value = CDN_URL)]
    cdn: String,
}

impl Args {
    fn rules(&self) -> Rules {
        Rules {
            max_response_time: std::time::Duration::from_secs(self.max_response_time),
            allow_multiple_answers: self.allow_multiple_answers,
            zoom_level: self.zoom_level,
        }
    }
    fn store(&self) -> Box<dyn NameStore> {
        match (self.name.as_deref(), self.no_store) {
            (Some(name), _) => Box::new(MemoryStore::with(name)),
            (None, true) => Box::new(MemoryStore::default()),
            (None, false) => Box::new(FileStore::new(&self.store)),
        }
    }
}

/// Forward stdin lines as inputs until stdin closes.
async fn read(inputs: UnboundedSender<Input>) -> anyhow::Result<()> {
    let mut lines = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }
        match Input::try_from(line.as_str()) {
            Ok(input) => {
                if inputs.send(input).is_err() {
                    break;
                }
            }
            Err(e) => eprintln!("{}", e.red()),
        }
    }
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    log();
    let args = Args::parse();
    let rules = args.rules();
    let mut store = args.store();
    let name = identity::obtain(&mut *store, &mut TerminalPrompt)?;
    let config = MapConfig::new(&args.cdn, rules.zoom_level);
    log::info!(
        "[map] centered on {}, zoom {}..={}, tiles {}",
        config.center(),
        config.min_zoom(),
        config.max_zoom(),
        config.tiles()
    );
    let round = Round::new(Canvas::new(&config), config, rules);
    let transport = WebSocket::connect(&args.url).await?;
    let session = Session::join(name, transport, round).await?;
    let (tx, rx) = unbounded_channel();
    tokio::spawn(async move {
        if let Err(e) = read(tx).await {
            log::warn!("[stdin] {}", e);
        }
    });
    session.run(rx, &mut Terminal::default()).await
}
