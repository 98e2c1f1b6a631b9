// courseplan: Course Catalog Planner with Prerequisite Tracking

use std::io;
use std::path::PathBuf;

use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};

use courseplan::catalog::Catalog;
use courseplan::loader::{self, DEFAULT_CATALOG_FILE};
use courseplan::menu::Menu;
use courseplan::ui::App;

#[derive(Parser)]
#[command(name = "courseplan")]
#[command(version)]
#[command(about = "Browse a course catalog and its prerequisites")]
struct Cli {
    /// Path to the catalog file (one `ID,Name[,Prereq...]` per line)
    #[arg(default_value = DEFAULT_CATALOG_FILE)]
    file: PathBuf,

    /// Use the numbered console menu instead of the terminal UI
    #[arg(long)]
    plain: bool,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();
    let cli = Cli::parse();

    if cli.plain {
        let stdin = io::stdin();
        let mut menu = Menu::new(stdin.lock(), io::stdout(), cli.file);
        menu.run()?;
        return Ok(());
    }

    // Preload so the TUI opens on a populated list
    eprintln!("Loading {}...", cli.file.display());
    let mut app = match loader::load_file(&cli.file) {
        Ok(catalog) => {
            eprintln!("Loaded {} course(s).", catalog.len());
            App::new(catalog, &cli.file)
        }
        Err(e) => {
            eprintln!("Warning: {}", e);
            let mut app = App::new(Catalog::new(), &cli.file);
            app.set_error(format!("{} (press r to retry)", e));
            app
        }
    };

    // Set up terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let res = app.run(&mut terminal);

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    if let Err(err) = res {
        eprintln!("Error: {:?}", err);
    }

    Ok(())
}
