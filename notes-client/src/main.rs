use clap::Parser;
use dotenv::dotenv;
use notes_client::config::{defaults, env_vars};
use notes_client::repl::Repl;
use notes_client::{HttpNoteService, NotesApp};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "notes", version, about = "Terminal client for the notes service")]
struct Cli {
    /// Base URL of the notes service
    #[arg(long, env = env_vars::API_URL, default_value = defaults::API_URL)]
    api_url: String,

    /// Disable colored note cards
    #[arg(long)]
    no_color: bool,
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();
    log::info!("Using notes service at {}", cli.api_url);

    let colorize = !cli.no_color && notes_client::render::should_colorize();
    let width = crossterm::terminal::size()
        .map(|(cols, _)| usize::from(cols))
        .unwrap_or(80);

    let app = NotesApp::new(HttpNoteService::new(&cli.api_url));
    let mut repl = Repl::new(app, colorize, width);

    let stdin = tokio::io::BufReader::new(tokio::io::stdin());
    let mut stdout = std::io::stdout();
    if let Err(e) = repl.run(stdin, &mut stdout).await {
        log::error!("{}", e);
        return ExitCode::FAILURE;
    }
    ExitCode::SUCCESS
}
