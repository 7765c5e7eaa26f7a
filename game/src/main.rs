use tictactoe::console::StdConsole;
use tictactoe::Game;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let mut game = Game::human_vs_computer(StdConsole::new())?;
    let rounds = game.run()?;
    info!(rounds, "session finished");
    Ok(())
}
