//! Scorepad - terminal scorekeeping for multiplayer card games.
//!
//! Reads one command per line from stdin, routes it through a score session
//! and prints the grid. With `--file`, every published game snapshot is saved.

mod commands;
mod render;

use std::path::PathBuf;

use clap::Parser;
use commands::{Command, HELP};
use scorepad_core::persistence::{load_from_path, save_to_path};
use scorepad_core::{
    logging, Game, PlayerId, RandomIdentity, RemovalRequest, ScoreSession, ScorepadConfig,
};
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing::{info, warn};

#[derive(Parser)]
#[command(name = "scorepad")]
#[command(about = "Live score grid for multiplayer card games")]
struct Args {
    /// Game file to load on start and save after every change
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// Seed for icon selection (for reproducible sessions)
    #[arg(long)]
    seed: Option<u64>,

    /// Emit logs as JSON lines on stderr
    #[arg(long)]
    json_logs: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    logging::init(args.json_logs);

    let config = ScorepadConfig::from_env()?;
    let saved = match &args.file {
        Some(path) => load_from_path(path)?,
        None => None,
    };

    let mut session = ScoreSession::from_config(
        &config,
        saved,
        Box::new(RandomIdentity::new(args.seed)),
    );

    if let Some(path) = args.file.clone() {
        spawn_autosave(&session, path);
    }

    println!("{}", render::render(&session.snapshot()));
    let mut pending_delete: Option<PlayerId> = None;
    let mut lines = BufReader::new(tokio::io::stdin()).lines();

    while let Some(line) = lines.next_line().await? {
        let cmd = match commands::parse(&line) {
            Ok(cmd) => cmd,
            Err(msg) => {
                println!("{msg}");
                continue;
            }
        };

        // Anything other than an answer drops a pending delete prompt.
        let awaiting = pending_delete.take();
        match cmd {
            Command::Quit => break,
            Command::Help => println!("{HELP}"),
            Command::Show => {}
            Command::Add => {
                session.add_player();
            }
            Command::Score { player, round, raw } => {
                let Some(id) = player_at(&session.snapshot(), player) else {
                    println!("no player #{}", player + 1);
                    continue;
                };
                if !session.edit_score(&id, round, &raw) {
                    println!("score not changed");
                }
            }
            Command::Blur { round } => session.cell_blur(round),
            Command::Remove { player } => {
                let Some(id) = player_at(&session.snapshot(), player) else {
                    println!("no player #{}", player + 1);
                    continue;
                };
                match session.request_removal(&id) {
                    RemovalRequest::Removed(_) | RemovalRequest::NotFound => {}
                    RemovalRequest::NeedsConfirmation { id, name } => {
                        println!("{name} has scores. Delete anyway? (yes/no)");
                        pending_delete = Some(id);
                        continue;
                    }
                }
            }
            Command::Confirm(answer) => match (awaiting, answer) {
                (Some(id), true) => {
                    session.confirm_removal(&id);
                }
                (Some(_), false) => println!("kept"),
                (None, _) => println!("nothing to confirm"),
            },
            Command::Name { player, name } => {
                if let Some(id) = player_at(&session.snapshot(), player) {
                    session.rename_player(&id, &name);
                }
            }
            Command::Icon { player } => {
                if let Some(id) = player_at(&session.snapshot(), player) {
                    session.reroll_icon(&id);
                }
            }
            Command::Settings {
                target_score,
                reorder_enabled,
            } => session.save_settings(target_score, reorder_enabled),
        }

        // Give a deferred reorder the chance to land before redrawing.
        tokio::time::sleep(config.reorder_delay * 2).await;
        println!("{}", render::render(&session.snapshot()));
    }

    session.shutdown();
    info!(version = session.version(), "Session ended");
    Ok(())
}

fn player_at(game: &Game, position: usize) -> Option<PlayerId> {
    game.players().get(position).map(|p| p.id().clone())
}

/// Save every published snapshot, including ones produced by deferred reorders.
fn spawn_autosave(session: &ScoreSession, path: PathBuf) {
    let mut rx = session.subscribe();
    tokio::spawn(async move {
        while rx.changed().await.is_ok() {
            let game = rx.borrow_and_update().clone();
            if let Err(e) = save_to_path(&game, &path) {
                warn!(error = %e, path = %path.display(), "Failed to save game");
            }
        }
    });
}
