mod config;
mod game;

use clap::Parser;
use common::logger;

#[derive(Parser)]
#[command(name = "tictactoe_cli")]
struct Args {
    /// Tag log lines with a fixed prefix.
    #[arg(long)]
    use_log_prefix: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    let config = config::get_config()?;

    let prefix = if args.use_log_prefix {
        Some("TicTacToe".to_string())
    } else {
        config.log_prefix.clone()
    };
    logger::init_logger(prefix);

    game::run(&config)?;

    Ok(())
}
