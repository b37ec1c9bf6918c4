//! Line commands understood by the terminal surface.

/// A parsed input line. Player and round numbers are 1-based on input and
/// converted to 0-based positions here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Add,
    Score {
        player: usize,
        round: usize,
        raw: String,
    },
    Blur {
        round: usize,
    },
    Remove {
        player: usize,
    },
    Confirm(bool),
    Name {
        player: usize,
        name: String,
    },
    Icon {
        player: usize,
    },
    Settings {
        target_score: i64,
        reorder_enabled: bool,
    },
    Show,
    Help,
    Quit,
}

pub const HELP: &str = "\
commands:
  add                          add a player
  score <player#> <round#> <value|->
                               enter a score ('-' clears the cell)
  blur <round#>                leave a cell in that round
  rm <player#>                 delete a player (asks if they have scores)
  yes | no                     answer a pending delete
  name <player#> <text>        rename a player
  icon <player#>               pick a new icon
  settings <target> <on|off>   set target score and auto-reorder
  show                         print the grid
  quit";

pub fn parse(line: &str) -> Result<Command, String> {
    let mut parts = line.split_whitespace();
    let Some(verb) = parts.next() else {
        return Ok(Command::Show);
    };
    let args: Vec<&str> = parts.collect();

    let cmd = match (verb.to_ascii_lowercase().as_str(), args.as_slice()) {
        ("add", []) => Command::Add,
        ("score", [player, round, value]) => Command::Score {
            player: position(player)?,
            round: position(round)?,
            raw: if *value == "-" {
                String::new()
            } else {
                value.to_string()
            },
        },
        ("blur", [round]) => Command::Blur {
            round: position(round)?,
        },
        ("rm", [player]) => Command::Remove {
            player: position(player)?,
        },
        ("yes" | "y", []) => Command::Confirm(true),
        ("no" | "n", []) => Command::Confirm(false),
        ("name", [player, rest @ ..]) if !rest.is_empty() => Command::Name {
            player: position(player)?,
            name: rest.join(" "),
        },
        ("icon", [player]) => Command::Icon {
            player: position(player)?,
        },
        ("settings", [target, toggle]) => Command::Settings {
            target_score: target
                .parse()
                .map_err(|_| format!("target score must be an integer, got '{target}'"))?,
            reorder_enabled: match *toggle {
                "on" => true,
                "off" => false,
                other => return Err(format!("expected on|off, got '{other}'")),
            },
        },
        ("show", []) => Command::Show,
        ("help" | "?", []) => Command::Help,
        ("quit" | "exit", []) => Command::Quit,
        _ => return Err(format!("unrecognised command: {line}")),
    };
    Ok(cmd)
}

fn position(raw: &str) -> Result<usize, String> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n - 1),
        _ => Err(format!("expected a number starting at 1, got '{raw}'")),
    }
}
