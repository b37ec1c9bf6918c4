use std::fmt::Write;

use scorepad_core::{Game, Standings};

const CELL: usize = 18;

/// Render the grid: one header block per player, then one line per round.
pub fn render(game: &Game) -> String {
    let standings = Standings::from_game(game);
    let mut out = String::new();

    if standings.players.is_empty() {
        out.push_str("(no players yet: type 'add')\n");
        return out;
    }

    let _ = write!(out, "{:>4} ", "#");
    for (i, s) in standings.players.iter().enumerate() {
        let marker = if s.is_leader { "*" } else { " " };
        let label = format!("{}{} {}", marker, s.icon, s.name);
        pad(&mut out, &clip(&format!("{}.{label}", i + 1)));
    }
    out.push('\n');

    let _ = write!(out, "{:>4} ", "tot");
    for s in &standings.players {
        pad(&mut out, &s.total.to_string());
    }
    out.push('\n');

    let _ = write!(out, "{:>4} ", "");
    for s in &standings.players {
        pad(&mut out, &clip(&s.progress_label()));
    }
    out.push('\n');

    for round in 0..standings.round_count {
        let _ = write!(out, "{:>4} ", round + 1);
        for p in game.players() {
            let cell = p
                .score(round)
                .map_or_else(|| "-".to_string(), |v| v.to_string());
            pad(&mut out, &cell);
        }
        out.push('\n');
    }

    let _ = writeln!(
        out,
        "target {} | auto-reorder {}",
        standings.target_score,
        if standings.reorder_enabled { "on" } else { "off" }
    );
    out
}

fn pad(out: &mut String, text: &str) {
    let _ = write!(out, "{text:<width$}", width = CELL);
}

fn clip(s: &str) -> String {
    s.chars().take(CELL - 1).collect()
}
