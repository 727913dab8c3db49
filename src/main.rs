#[cfg(not(feature = "std"))]
fn main() {}

#[cfg(feature = "std")]
use tictac::{
    init_logging, BoardStyle, ConsolePlayer, GameConfig, GameSession, DEFAULT_COLUMNS,
    DEFAULT_ROWS, DEFAULT_WIN_LENGTH,
};

#[cfg(feature = "std")]
use clap::Parser;

/// Two players take turns at one terminal; the first to line up
/// `win-length` marks in a row, column or diagonal wins.
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
#[cfg(feature = "std")]
struct Cli {
    /// Number of board rows.
    #[arg(short = 'n', long, default_value_t = DEFAULT_ROWS)]
    rows: usize,
    /// Number of board columns.
    #[arg(short = 'k', long, default_value_t = DEFAULT_COLUMNS)]
    columns: usize,
    /// Marks in a row needed to win.
    #[arg(short = 'p', long, default_value_t = DEFAULT_WIN_LENGTH)]
    win_length: usize,
    #[arg(long, default_value = "00")]
    name_a: String,
    #[arg(long, default_value = "01")]
    name_b: String,
    /// Draw the board with ASCII instead of box-drawing characters.
    #[arg(long)]
    ascii: bool,
    /// Do not colour the marks.
    #[arg(long)]
    no_color: bool,
}

#[cfg(feature = "std")]
fn main() -> anyhow::Result<()> {
    init_logging();
    let cli = Cli::parse();

    let config = GameConfig::new(cli.rows, cli.columns, cli.win_length)?;
    let style = if cli.ascii {
        BoardStyle::ascii()
    } else {
        BoardStyle::unicode()
    }
    .with_colors(!cli.no_color);

    let mut session = GameSession::new(
        config,
        ConsolePlayer::new(&cli.name_a),
        ConsolePlayer::new(&cli.name_b),
    )?
    .with_style(style);
    let outcome = session.run()?;
    log::debug!("final outcome {:?}", outcome);
    Ok(())
}
