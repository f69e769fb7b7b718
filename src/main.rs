use std::io::{self, BufRead, Write};

use log::info;

use tictactoe::{Config, Console, DirectoryStore, GameLoop, LogStore, Marker, Mode, NullStore, Player};

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let config = Config::from_env();
    info!("{:?}", config);

    let stdin = io::stdin();
    let mut console = Console::new(stdin.lock(), io::stdout().lock());

    let first = console.prompt_name("Please enter Player 1 name: ")?;
    let second = console.prompt_name("Please enter Player 2 name: ")?;
    console.welcome(&first, &second)?;
    console.show_positions()?;

    // A player named "Computer" plays random moves.
    let players = [
        Player::new(first.as_str(), Marker::X, Mode::from_name(&first)),
        Player::new(second.as_str(), Marker::O, Mode::from_name(&second)),
    ];

    if config.move_log {
        play(players, console, DirectoryStore::new(config.log_dir))
    } else {
        play(players, console, NullStore::default())
    }
}

fn play<R: BufRead, W: Write, S: LogStore>(
    players: [Player; 2],
    console: Console<R, W>,
    store: S,
) -> anyhow::Result<()> {
    let outcomes = GameLoop::new(players, console, store).run()?;
    info!("played {} round(s)", outcomes.len());
    Ok(())
}
