use clap::Parser;
use is_terminal::IsTerminal;
use miette::{IntoDiagnostic, Result};
use staffbook::application::manager::EmployeeManager;
use staffbook::domain::ports::RecordStoreBox;
use staffbook::infrastructure::in_memory::InMemoryRecordStore;
use staffbook::interfaces::console::menu::{Session, SessionOptions};
use staffbook::interfaces::console::prompt::Prompt;
use std::io;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Do not wait for ENTER or clear the screen after each command.
    #[arg(long)]
    no_pause: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Logs go to stderr so they never interleave with the menu on stdout.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let store: RecordStoreBox = Box::new(InMemoryRecordStore::new());
    let manager = EmployeeManager::new(store);

    let stdin = io::stdin();
    let stdout = io::stdout();
    // Piped input is read line by line so sessions can be scripted.
    let interactive = stdin.is_terminal();
    let prompt = Prompt::new(stdin.lock(), stdout.lock()).with_terminal(interactive);
    let options = SessionOptions {
        pause: !cli.no_pause,
    };

    let mut session = Session::new(manager, prompt, options);
    session.run().await.into_diagnostic()?;

    Ok(())
}
