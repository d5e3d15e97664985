use clap::Parser;
use colored::Colorize;
use jotfile::cli::{render_table, Cli, Commands};
use jotfile::config::JotConfig;
use jotfile::error::Result;
use jotfile::model::Note;
use jotfile::store::{open_store, DirLock, MemoryStore, NoteStore};

fn main() {
    let cli = Cli::parse();
    jotfile::logging::init(if cli.verbose { "debug" } else { "warn" });

    if let Err(err) = run(cli) {
        eprintln!("{} {err}", "error:".red());
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<()> {
    let _lock = if cli.lock {
        Some(DirLock::acquire(&cli.dir)?)
    } else {
        None
    };

    let config = JotConfig::load(&cli.dir)?;
    let kind = match &cli.storage {
        Some(raw) => raw.parse()?,
        None => config.storage_kind()?,
    };

    // The shell owns exactly one strategy instance. When the configured
    // file strategy cannot come up, fall back to memory and say so.
    let mut store: Box<dyn NoteStore> = match open_store(kind, &cli.dir, &config.file_ext()) {
        Ok(store) => store,
        Err(err) => {
            log::warn!("cannot open {kind} storage in {}: {err}", cli.dir.display());
            eprintln!(
                "{}",
                "WARNING - falling back to in-memory storage; nothing will be saved".yellow()
            );
            Box::new(MemoryStore::new())
        }
    };

    match cli.command {
        Commands::New { content } => {
            let id = store.create_with_content(content.as_deref().unwrap_or(""))?;
            println!("{id}");
        }
        Commands::List => {
            let notes = store.get_all()?;
            if notes.is_empty() {
                println!("no notes in {}", cli.dir.display());
            } else {
                print!("{}", render_table(&notes));
            }
        }
        Commands::Show { id } => {
            let note = store.get(&id)?;
            println!("{}", note.content());
        }
        Commands::Edit { id, content } => {
            let updated = store.update(&Note::adopt(id, content))?;
            println!("updated {}", updated.id());
        }
        Commands::Rm { id } => {
            if store.delete(&id)? {
                println!("deleted {id}");
            } else {
                eprintln!("{} note {id} could not be deleted", "warning:".yellow());
            }
        }
        Commands::Clear => {
            store.delete_all();
            println!("all notes deleted");
        }
        Commands::Count => {
            println!("{}", store.count());
        }
    }

    Ok(())
}
