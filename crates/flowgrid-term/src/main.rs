//! Interactive flow-field editor.
//!
//! Run: cargo run --bin flowgrid -- [WIDTH HEIGHT]
//!
//! Left click toggles a wall, right click toggles a destination.

use flowgrid_core::BoardConfig;
use flowgrid_term::Game;
use flowgrid_term::terminal::Terminal;
use rand::RngExt;

/// Board config from the optional `WIDTH HEIGHT` arguments.
fn config_from_args() -> Result<BoardConfig, Box<dyn std::error::Error>> {
    let args: Vec<String> = std::env::args().skip(1).collect();
    let mut config = BoardConfig::default();
    match args.as_slice() {
        [] => {}
        [w, h] => {
            config.width = w.parse()?;
            config.height = h.parse()?;
        }
        _ => return Err("usage: flowgrid [WIDTH HEIGHT]".into()),
    }
    Ok(config.validated())
}

fn run(game: &mut Game, term: &mut Terminal) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        term.draw(&game.render())?;
        if let Some(input) = term.poll(game)? {
            if !game.update(input) {
                return Ok(());
            }
        }
    }
}

fn main() {
    let result = config_from_args().and_then(|config| {
        let seed = rand::rng().random_range(0..u64::MAX);
        let mut game = Game::new(&config, seed)?;
        let mut term = Terminal::init()?;
        let result = run(&mut game, &mut term);
        term.close();
        result
    });

    if let Err(e) = result {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
