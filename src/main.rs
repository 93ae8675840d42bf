use clap::Parser;
use flexi_logger::{AdaptiveFormat, Logger, LoggerHandle, WriteMode};
use hivemind::prelude::*;

fn main()
{
    // Read the dotenv file.
    dotenvy::dotenv().ok();

    // Parse the cli options.
    let cli = Cli::parse();

    let _logger = match init_logger(&cli)
    {
        | Ok(logger) => logger,
        | Err(e) =>
        {
            eprintln!("fatal error: could not start logger: {}", e);
            std::process::exit(1);
        }
    };

    print_header();

    match decide(&cli)
    {
        | Ok(mv) => println!("{}", mv),
        | Err(e) =>
        {
            log::error!("{}", e);
            std::process::exit(1);
        }
    }
}

/// Parses the CLI's three inputs, replays them onto a fresh board, and hands the
/// resulting position to the engine. The caller is responsible for printing the move
/// and mapping a returned error onto the process's exit status.
fn decide(cli: &Cli) -> Result<Move>
{
    let expansions = ExpansionOptions::parse(&cli.expansions)?;
    let options = Options { expansions };

    let time: movelist::TimeControls = cli.time.parse()?;
    log::debug!(
        "time controls: total={}ms white_used={}ms black_used={}ms (ignored by the fixed-depth core)",
        time.total_ms,
        time.white_used_ms,
        time.black_used_ms
    );

    let mut board = movelist::replay(&cli.moves, options)?;

    match board.winner()
    {
        | GameState::NotStarted | GameState::InProgress => {}
        | state =>
        {
            let msg = format!("The game has already ended ({}); there is no move to decide.", state);
            return Err(Error::new(Kind::InvalidState, msg));
        }
    }

    let mut engine = Engine::new();
    Ok(engine.decide(&mut board, Depth::new(cli.depth as i32)))
}

/// Starts the structured logger, writing diagnostics to stderr so stdout carries nothing
/// but the chosen move notation.
fn init_logger(cli: &Cli) -> Result<LoggerHandle>
{
    let log_format = if cfg!(debug_assertions)
    {
        AdaptiveFormat::WithThread
    }
    else
    {
        AdaptiveFormat::Default
    };

    Ok(Logger::try_with_env_or_str(cli.log_level.clone())?
        .write_mode(WriteMode::BufferAndFlush)
        .log_to_stderr()
        .adaptive_format_for_stderr(log_format)
        .set_palette("b196;208;195;111;67".to_owned())
        .start()?)
}

fn print_header()
{
    log::info!("🐝 {} v{} 🐝", env!("CARGO_PKG_NAME"), env!("CARGO_PKG_VERSION"));
    log::debug!("here be bugs 🐜 🪲  🦗 🐞 🦟 🦠 🕷️");
    log::trace!("... you poor soul.");
}
