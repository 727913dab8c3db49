use serde_json::json;
use tictac::{init_logging, GameConfig, GameSession, ScriptedPlayer};

fn split_moves(list: &str) -> Vec<&str> {
    list.split(',')
        .map(str::trim)
        .filter(|m| !m.is_empty())
        .collect()
}

fn main() -> anyhow::Result<()> {
    init_logging();
    let args: Vec<String> = std::env::args().collect();
    if args.len() != 6 {
        eprintln!(
            "Usage: {} <rows> <columns> <win_length> <moves_a> <moves_b>",
            args[0]
        );
        eprintln!("Moves are comma separated, e.g. 1a,2b,3c");
        std::process::exit(1);
    }
    let rows: usize = args[1].parse()?;
    let columns: usize = args[2].parse()?;
    let win_length: usize = args[3].parse()?;

    let config = GameConfig::new(rows, columns, win_length)?;
    let player_a = ScriptedPlayer::new("A", split_moves(&args[4]));
    let player_b = ScriptedPlayer::new("B", split_moves(&args[5]));

    let mut session = GameSession::new(config, player_a, player_b)?;
    let outcome = session.run()?;

    let moves = session.moves();
    let board = session.engine().board();
    let rows: Vec<String> = board
        .iter_rows()
        .map(|row| row.iter().map(|c| c.symbol()).collect())
        .collect();
    let (player_a, player_b) = session.into_players();

    let result = json!({
        "config": config,
        "outcome": outcome,
        "moves": moves,
        "board": rows,
        "last_message": {
            "a": player_a.last_message(),
            "b": player_b.last_message(),
        },
    });

    println!("{}", serde_json::to_string(&result)?);
    Ok(())
}
