//! Native driver for the Scrawl session engine.
//!
//! Wires the sans-IO engine to a real WebSocket (tokio-tungstenite), a JSON
//! profile file on disk, and stdin/stdout. The binary owns everything the
//! engine deliberately does not: the socket lifecycle, the toast-expiry
//! timer, and the rendering of state snapshots as log lines. Connection loss
//! ends the process; re-entry means running the command again.

use std::collections::BTreeMap;
use std::fs;
use std::io::{self, BufRead, BufReader as StdBufReader};
use std::path::{Path, PathBuf};
use std::time::{SystemTime, UNIX_EPOCH};

use clap::{Args, Parser, Subcommand};
use engine::capture::CaptureConfig;
use engine::chat::ChatSession;
use engine::draw::DrawSession;
use engine::profile::{KvStore, ProfileStore};
use engine::session::{Effect, SessionState};
use futures_util::stream::SplitSink;
use futures_util::{SinkExt, StreamExt};
use messages::Point;
use serde::Deserialize;
use tokio::io::AsyncBufReadExt;
use tokio_tungstenite::tungstenite::Message;
use tokio_tungstenite::{MaybeTlsStream, WebSocketStream, connect_async};


type WsStream = WebSocketStream<MaybeTlsStream<tokio::net::TcpStream>>;
type WsSink = SplitSink<WsStream, Message>;

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("websocket connect failed: {0}")]
    WsConnect(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("websocket send failed: {0}")]
    WsSend(Box<tokio_tungstenite::tungstenite::Error>),
    #[error("connection lost")]
    ConnectionLost,
    #[error("io error: {0}")]
    Io(#[from] io::Error),
    #[error("invalid sample line: {0}")]
    InvalidSample(#[from] serde_json::Error),
    #[error("entry rejected; run again with a different identity")]
    Rejected,
}

#[derive(Parser, Debug)]
#[command(name = "scrawl-cli", about = "Scrawl shared-canvas and chat session CLI")]
struct Cli {
    /// WebSocket endpoint of the session server.
    #[arg(long, env = "SCRAWL_URL", default_value = "ws://127.0.0.1:1243/connect")]
    url: String,

    /// JSON file backing the durable profile store.
    #[arg(long, env = "SCRAWL_PROFILE", default_value = "scrawl-profile.json")]
    profile: PathBuf,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Join a token-gated chat session and exchange transcript lines.
    Chat(ChatArgs),
    /// Join a shared-canvas session.
    Draw(DrawCommand),
}

#[derive(Args, Debug)]
struct ChatArgs {
    #[arg(long)]
    name: String,

    #[arg(long)]
    email: String,
}

#[derive(Args, Debug)]
struct DrawCommand {
    /// Override the persisted display name.
    #[arg(long)]
    name: Option<String>,

    /// Override the persisted stroke color.
    #[arg(long)]
    color: Option<String>,

    #[command(subcommand)]
    command: DrawSubcommand,
}

#[derive(Subcommand, Debug)]
enum DrawSubcommand {
    /// Log roster, stroke, and clear events until the connection ends.
    Watch,
    /// Feed pointer samples through the capture pipeline and broadcast the
    /// committed strokes.
    Replay(ReplayArgs),
    /// Clear the shared canvas and exit.
    Clear,
}

#[derive(Args, Debug)]
struct ReplayArgs {
    /// Input file of JSONL pointer samples, or - for stdin.
    #[arg(long, default_value = "-")]
    input: String,
}

/// One pointer sample on a replay input line.
#[derive(Debug, PartialEq, Deserialize)]
#[serde(tag = "event", rename_all = "lowercase")]
enum Sample {
    Down {
        x: f64,
        y: f64,
        #[serde(default = "default_contacts")]
        contacts: u32,
    },
    Move {
        x: f64,
        y: f64,
    },
    Up,
}

fn default_contacts() -> u32 {
    1
}

#[tokio::main]
async fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    match cli.command {
        Command::Chat(args) => run_chat(&cli.url, args).await,
        Command::Draw(draw) => run_draw(&cli.url, &cli.profile, draw).await,
    }
}

// --- Chat profile ---

async fn run_chat(url: &str, args: ChatArgs) -> Result<(), CliError> {
    let mut session = ChatSession::new();
    session.connect(args.name, args.email);

    let (stream, _) = connect_async(url)
        .await
        .map_err(|error| CliError::WsConnect(Box::new(error)))?;
    let (mut write, mut read) = stream.split();

    let effects = session.socket_open();
    apply_chat(&mut write, &session, effects, &mut 0).await?;

    println!("enter the verification token, then chat lines; ctrl-d leaves");

    let mut stdin = tokio::io::BufReader::new(tokio::io::stdin()).lines();
    let mut token_sent = false;
    let mut announced = false;
    let mut printed = 0_usize;

    loop {
        tokio::select! {
            line = stdin.next_line() => {
                let Some(line) = line? else { break };
                let line = line.trim();
                if line.is_empty() {
                    continue;
                }

                let effects = if token_sent {
                    session.send_chat(line)
                } else {
                    token_sent = true;
                    session.verify(line)
                };
                apply_chat(&mut write, &session, effects, &mut printed).await?;
            }
            frame = read.next() => {
                let Some(frame) = frame else {
                    session.closed();
                    return Err(CliError::ConnectionLost);
                };
                match frame {
                    Ok(Message::Text(text)) => {
                        let effects = session.handle_frame(text.as_str());
                        apply_chat(&mut write, &session, effects, &mut printed).await?;

                        if session.state() == SessionState::Rejected {
                            return Err(CliError::Rejected);
                        }
                        if session.state() == SessionState::Authenticated && !announced {
                            announced = true;
                            println!("verified; session is live");
                        }
                    }
                    Ok(Message::Close(_)) => {
                        session.closed();
                        break;
                    }
                    Ok(_) => {}
                    Err(error) => {
                        session.transport_error(&error.to_string());
                        return Err(CliError::ConnectionLost);
                    }
                }
            }
        }
    }

    let _ = write.close().await;
    println!("session ended");
    Ok(())
}

/// Process chat-session effects: write frames out, surface notices, and
/// print transcript lines that arrived since the last render.
async fn apply_chat(
    write: &mut WsSink,
    session: &ChatSession,
    effects: Vec<Effect>,
    printed: &mut usize,
) -> Result<(), CliError> {
    for effect in effects {
        match effect {
            Effect::Send(frame) => send_frame(write, frame).await?,
            Effect::Notice(text) => eprintln!("! {text}"),
            Effect::Render => {
                let lines = session.transcript.lines();
                for line in &lines[*printed..] {
                    println!("@{}: {}", line.from, line.text);
                }
                *printed = lines.len();
            }
        }
    }
    Ok(())
}

// --- Drawing profile ---

async fn run_draw(url: &str, profile_path: &Path, draw: DrawCommand) -> Result<(), CliError> {
    let profile = ProfileStore::new(Box::new(FileStore::open(profile_path)));
    let mut session = DrawSession::new(profile, CaptureConfig::default());
    session.connect();

    let (stream, _) = connect_async(url)
        .await
        .map_err(|error| CliError::WsConnect(Box::new(error)))?;
    let (mut write, mut read) = stream.split();

    let effects = session.socket_open();
    send_all(&mut write, effects).await?;

    // An identity override behaves like editing the profile dialog right
    // after joining: announce the change and persist it.
    if draw.name.is_some() || draw.color.is_some() {
        let mut next = session.identity().clone();
        if let Some(name) = draw.name {
            next.name = name;
        }
        if let Some(color) = draw.color {
            next.color = color;
        }
        let effects = session.change_user(next);
        send_all(&mut write, effects).await?;
    }

    match draw.command {
        DrawSubcommand::Watch => run_draw_watch(&mut session, &mut write, &mut read).await,
        DrawSubcommand::Replay(args) => {
            run_draw_replay(&mut session, &mut write, &args.input).await
        }
        DrawSubcommand::Clear => {
            let effects = session.empty_canvas();
            send_all(&mut write, effects).await?;
            let _ = write.close().await;
            println!("canvas cleared");
            Ok(())
        }
    }
}

async fn run_draw_watch(
    session: &mut DrawSession,
    write: &mut WsSink,
    read: &mut futures_util::stream::SplitStream<WsStream>,
) -> Result<(), CliError> {
    let mut expiry = tokio::time::interval(std::time::Duration::from_millis(200));

    loop {
        tokio::select! {
            frame = read.next() => {
                let Some(frame) = frame else {
                    session.closed();
                    return Err(CliError::ConnectionLost);
                };
                match frame {
                    Ok(Message::Text(text)) => {
                        let toasts_before = session.toasts.len();
                        let effects = session.handle_frame(text.as_str(), now_ms());
                        send_all(write, effects).await?;

                        if session.toasts.len() > toasts_before {
                            if let Some(toast) = session.toasts.toasts().last() {
                                println!("* {}", toast.text);
                            }
                        }
                        print_status(session);
                    }
                    Ok(Message::Close(_)) => {
                        session.closed();
                        break;
                    }
                    Ok(_) => {}
                    Err(error) => {
                        session.transport_error(&error.to_string());
                        return Err(CliError::ConnectionLost);
                    }
                }
            }
            _ = expiry.tick() => {
                session.toasts.expire_at(now_ms());
            }
        }
    }

    println!("session ended");
    Ok(())
}

async fn run_draw_replay(
    session: &mut DrawSession,
    write: &mut WsSink,
    input: &str,
) -> Result<(), CliError> {
    let mut reader: Box<dyn BufRead> = if input == "-" {
        Box::new(StdBufReader::new(io::stdin()))
    } else {
        Box::new(StdBufReader::new(fs::File::open(input)?))
    };

    let mut broadcast = 0_usize;
    let mut line = String::new();
    loop {
        line.clear();
        if reader.read_line(&mut line)? == 0 {
            break;
        }
        let Some(sample) = parse_sample_line(&line)? else {
            continue;
        };

        let effects = match sample {
            Sample::Down { x, y, contacts } => session.pointer_down(Point::new(x, y), contacts),
            Sample::Move { x, y } => session.pointer_move(Point::new(x, y)),
            Sample::Up => session.pointer_up(),
        };
        broadcast += effects
            .iter()
            .filter(|e| matches!(e, Effect::Send(_)))
            .count();
        send_all(write, effects).await?;
    }

    let _ = write.close().await;
    println!("replay complete: {broadcast} strokes broadcast");
    Ok(())
}

fn print_status(session: &DrawSession) {
    let names: Vec<&str> = session
        .presence
        .users()
        .iter()
        .map(|u| u.name.as_str())
        .collect();
    println!(
        "[{} strokes] present: {}",
        session.strokes.len(),
        names.join(", ")
    );
}

// --- Shared plumbing ---

async fn send_frame(write: &mut WsSink, frame: String) -> Result<(), CliError> {
    write
        .send(Message::Text(frame.into()))
        .await
        .map_err(|error| CliError::WsSend(Box::new(error)))
}

/// Write every `Send` effect to the socket; other effects carry nothing for
/// the non-interactive driver.
async fn send_all(write: &mut WsSink, effects: Vec<Effect>) -> Result<(), CliError> {
    for effect in effects {
        match effect {
            Effect::Send(frame) => send_frame(write, frame).await?,
            Effect::Render => {}
            Effect::Notice(text) => eprintln!("! {text}"),
        }
    }
    Ok(())
}

fn parse_sample_line(line: &str) -> Result<Option<Sample>, CliError> {
    let trimmed = line.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    Ok(Some(serde_json::from_str(trimmed)?))
}

fn now_ms() -> i64 {
    let Ok(duration) = SystemTime::now().duration_since(UNIX_EPOCH) else {
        return 0;
    };
    i64::try_from(duration.as_millis()).unwrap_or(0)
}

/// JSON-file key-value store backing the durable profile record.
///
/// Reads the whole map at open; writes through on every set. A missing or
/// corrupt file opens as empty, and a failed write is logged and dropped —
/// persistence is best-effort, never fatal to the session.
struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    fn open(path: &Path) -> Self {
        let entries = fs::read_to_string(path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { path: path.to_owned(), entries }
    }
}

impl KvStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
        match serde_json::to_string_pretty(&self.entries) {
            Ok(json) => {
                if let Err(error) = fs::write(&self.path, json) {
                    tracing::warn!("failed to persist profile file: {error}");
                }
            }
            Err(error) => tracing::warn!("failed to serialize profile file: {error}"),
        }
    }
}
