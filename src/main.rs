mod api;
mod app;
mod display;
mod fetch;
mod ui;

use api::MetClient;
use app::App;
use clap::{Parser, Subcommand};
use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use fetch::{FetchChannels, FetchEvent};
use std::sync::mpsc::Sender;

/// TUI explorer for random artworks from the Met Museum open-access collection
#[derive(Parser)]
#[command(version, about)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,

    /// Base URL of the collection API
    #[arg(long, default_value = api::DEFAULT_BASE_URL)]
    base_url: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Run the TUI gallery (default)
    Run,
    /// Fetch one object and print its description card to stdout
    Show {
        /// Object identifier; drawn at random when omitted
        #[arg(short, long)]
        id: Option<u64>,
    },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    // Normalize command
    let command = cli.command.unwrap_or(Commands::Run);

    let client = match MetClient::new(&cli.base_url) {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Error: {}", e.user_message());
            std::process::exit(1);
        }
    };

    match command {
        Commands::Show { id } => {
            if let Err(e) = show_object(&client, id).await {
                eprintln!("Error: {}", e.user_message());
                std::process::exit(1);
            }
        }
        Commands::Run => {
            let mut app = App::new(client);
            let channels = FetchChannels::new();

            // Init terminal
            let mut terminal = ratatui::init();

            // Main loop
            let result = run_app(&mut terminal, &mut app, &channels).await;

            // Restore terminal
            ratatui::restore();

            if let Err(e) = result {
                eprintln!("Error: {e}");
                std::process::exit(1);
            }
        }
    }

    Ok(())
}

/// One-shot path for scripts: resolve an identifier, fetch the record,
/// print the description card to stdout.
async fn show_object(client: &MetClient, id: Option<u64>) -> Result<(), api::ApiError> {
    let id = match id {
        Some(id) => id,
        None => {
            let index = client.list_objects().await?;
            let id = index.draw(&mut rand::thread_rng())?;
            eprintln!("Drew object {id} from a catalog of {}", index.total);
            id
        }
    };

    let record = client.get_object(id).await?;
    let frame = display::art_frame(&record);
    let card = display::description_card(&record);

    println!("{}", card.title_line);
    match &frame.image_url {
        Some(url) => println!("Image: {url}"),
        None => println!("Image: (none published)"),
    }
    for entry in &card.entries {
        println!("  {entry}");
    }
    Ok(())
}

async fn run_app(
    terminal: &mut ratatui::DefaultTerminal,
    app: &mut App,
    channels: &FetchChannels,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        // Results of background fetches land here between draws.
        while let Ok(fetched) = channels.rx.try_recv() {
            app.apply_fetch_event(fetched);
        }

        terminal.draw(|frame| ui::render(app, frame))?;

        if app.should_quit {
            return Ok(());
        }

        // Poll for events with a 250ms timeout
        if crossterm::event::poll(std::time::Duration::from_millis(250))? {
            match event::read()? {
                Event::Key(key) => {
                    if key.kind != KeyEventKind::Press {
                        continue;
                    }
                    handle_key(app, &channels.tx, key);
                }
                _ => {}
            }
        }
    }
}

fn handle_key(app: &mut App, tx: &Sender<FetchEvent>, key: KeyEvent) {
    // Help toggle (global)
    if key.code == KeyCode::Char('?') {
        app.show_help = !app.show_help;
        return;
    }

    // If help is showing, any key closes it
    if app.show_help {
        app.show_help = false;
        return;
    }

    // Ctrl+C always quits
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        app.should_quit = true;
        return;
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => {
            app.should_quit = true;
        }
        KeyCode::Char('s') => {
            let seq = app.begin_pick();
            fetch::spawn_pick(app.client.clone(), seq, tx.clone());
        }
        KeyCode::Char('r') => {
            if let Some((seq, id)) = app.begin_reveal() {
                fetch::spawn_reveal(app.client.clone(), seq, id, tx.clone());
            }
        }
        _ => {}
    }
}
