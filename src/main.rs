use chrono::Local;
use clap::Parser;
use dayfold::application::{
    init, ConfigService, ListEntriesService, NavigateService, OpenEntryService, RenameEntryService,
};
use dayfold::cli::{format_entry_list, format_template_warnings, Cli, Commands};
use dayfold::domain::Direction;
use dayfold::error::DayfoldError;
use dayfold::infrastructure::{Editor, FileSystemVault};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            eprintln!("Error: {}", e.display_with_suggestions());
            std::process::exit(e.exit_code());
        }
    }
}

fn run(cli: Cli) -> Result<(), DayfoldError> {
    match cli.command {
        Commands::Init { path, format, root } => init::init(&path, &format, &root),
        Commands::Open { description, edit } => {
            let vault = FileSystemVault::discover()?;
            let service = OpenEntryService::new(vault);

            let outcome = service.execute(Local::now().date_naive(), description.as_deref())?;

            eprint!("{}", format_template_warnings(&outcome.issues));
            if outcome.created {
                eprintln!("Created new entry");
            }
            println!("{}", outcome.note_path.display());

            if edit {
                Editor::from_env().open(&outcome.note_path)?;
            }
            Ok(())
        }
        Commands::Next { entry, edit } => navigate(&entry, Direction::Forward, edit, "No newer entry"),
        Commands::Prev { entry, edit } => {
            navigate(&entry, Direction::Backward, edit, "No older entry")
        }
        Commands::Rename { entry, description } => {
            let vault = FileSystemVault::discover()?;
            let service = RenameEntryService::new(vault);

            let note_path = service.execute(&entry, &description)?;
            println!("Renamed to {}", note_path.display());
            Ok(())
        }
        Commands::List => {
            let vault = FileSystemVault::discover()?;
            let service = ListEntriesService::new(vault);

            let entries = service.execute()?;
            println!("{}", format_entry_list(&entries).trim_end());
            Ok(())
        }
        Commands::Config { key, value, list } => {
            let vault = FileSystemVault::discover()?;
            let service = ConfigService::new(vault);

            if list {
                let config = service.list()?;
                println!("format = {}", config.format);
                println!("description = {}", config.description);
                println!("root = {}", config.root);
                println!("use_template = {}", config.use_template);
                println!("template = {}", config.template);
                println!("date_format = {}", config.date_format);
                Ok(())
            } else if let Some(k) = key {
                if let Some(v) = value {
                    service.set(&k, &v)?;
                    println!("Set {} = {}", k, v);
                    Ok(())
                } else {
                    let val = service.get(&k)?;
                    println!("{}", val);
                    Ok(())
                }
            } else {
                println!("Usage: dayfold config [--list | <key> [<value>]]");
                println!(
                    "Valid keys: format, description, root, use_template, template, date_format"
                );
                Ok(())
            }
        }
    }
}

fn navigate(entry: &str, direction: Direction, edit: bool, empty_msg: &str) -> Result<(), DayfoldError> {
    let vault = FileSystemVault::discover()?;
    let service = NavigateService::new(vault);

    match service.execute(entry, direction)? {
        Some(note_path) => {
            println!("{}", note_path.display());
            if edit {
                Editor::from_env().open(&note_path)?;
            }
        }
        None => println!("{}", empty_msg),
    }
    Ok(())
}
