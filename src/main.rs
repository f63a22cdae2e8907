use clap::Parser;
use kahawat::application::{BrowseSession, ProverbRepository};
use kahawat::cli::{format_choice_list, format_detail, format_proverb_list, Cli, Commands};
use kahawat::domain::Proverb;
use kahawat::error::{KahawatError, Result};
use kahawat::infrastructure::{Config, JsonFileStore};
use std::path::Path;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn main() {
    let cli = Cli::parse();

    let result = run(cli);

    match result {
        Ok(_) => std::process::exit(0),
        Err(e) => {
            match e {
                KahawatError::Save { .. } => eprintln!("{}", e.display_with_suggestions()),
                _ => eprintln!("Error: {}", e.display_with_suggestions()),
            }
            std::process::exit(e.exit_code());
        }
    }
}

/// Log to stderr; RUST_LOG takes precedence over the configured level
fn init_tracing(level: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(format!("kahawat={}", level)));
    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .try_init();
}

fn open_repository(config: &Config, cwd: &Path, cli: &Cli) -> Result<ProverbRepository> {
    let path = config.resolve_data_file(cwd, cli.file.as_deref());
    let mut repo = ProverbRepository::load(JsonFileStore::new(path))?;

    // Seeding still succeeded in memory; report and carry on.
    if let Some(warning) = repo.take_load_warning() {
        eprintln!("{}", warning.display_with_suggestions());
    }

    Ok(repo)
}

fn run(cli: Cli) -> Result<()> {
    let cwd = std::env::current_dir()?;
    let config = Config::load_from_dir(&cwd)?;
    init_tracing(&config.log_level);

    let Some(command) = &cli.command else {
        println!("kahawat - Proverb collection manager");
        println!("Use --help for usage information");
        return Ok(());
    };

    match command {
        Commands::Config { key, value, list } => {
            let mut config = config;
            if *list {
                println!("data_file = {}", config.data_file.display());
                println!("log_level = {}", config.log_level);
            } else if let Some(k) = key {
                if let Some(v) = value {
                    config.set(k, v)?;
                    config.save_to_dir(&cwd)?;
                    println!("Set {} = {}", k, v);
                } else {
                    println!("{}", config.get(k)?);
                }
            } else {
                println!("Usage: kahawat config [--list | <key> [<value>]]");
                println!("Valid keys: data_file, log_level");
            }
            Ok(())
        }
        Commands::List { view } => {
            let repo = open_repository(&config, &cwd, &cli)?;
            let session = BrowseSession::with_filters(&repo, view.filters());
            println!("{}", format_proverb_list(&session.view(&repo)).trim_end());
            Ok(())
        }
        Commands::Show { index, view } => {
            let repo = open_repository(&config, &cwd, &cli)?;
            let mut session = BrowseSession::with_filters(&repo, view.filters());
            let detail = session.select(&repo, *index);
            if session.selection().index().is_some() {
                println!("{}", format_detail(&detail).trim_end());
            } else {
                println!("No proverb selected");
            }
            Ok(())
        }
        Commands::Add { fields } => {
            if fields.is_empty() {
                return Err(KahawatError::NoFields("add".to_string()));
            }
            let mut repo = open_repository(&config, &cwd, &cli)?;
            let mut session = BrowseSession::new(&repo);
            let proverb = fields.apply(Proverb::default());
            let text = proverb.text.clone();
            session.add(&mut repo, proverb)?;
            println!("Added: {}", text);
            Ok(())
        }
        Commands::Edit {
            index,
            view,
            fields,
        } => {
            if fields.is_empty() {
                return Err(KahawatError::NoFields("edit".to_string()));
            }
            let mut repo = open_repository(&config, &cwd, &cli)?;
            let mut session = BrowseSession::with_filters(&repo, view.filters());
            session.select(&repo, *index);
            let base = session
                .selected_entry(&repo)
                .map(|e| e.proverb.clone())
                .unwrap_or_default();
            let proverb = fields.apply(base);
            let text = proverb.text.clone();
            session.edit_selected(&mut repo, proverb)?;
            println!("Updated: {}", text);
            Ok(())
        }
        Commands::Delete { index, view } => {
            let mut repo = open_repository(&config, &cwd, &cli)?;
            let mut session = BrowseSession::with_filters(&repo, view.filters());
            session.select(&repo, *index);
            let text = session
                .selected_entry(&repo)
                .map(|e| e.proverb.text.clone())
                .unwrap_or_default();
            session.delete_selected(&mut repo)?;
            println!("Deleted: {}", text);
            Ok(())
        }
        Commands::Tags => {
            let repo = open_repository(&config, &cwd, &cli)?;
            let session = BrowseSession::new(&repo);
            print!("{}", format_choice_list(session.tag_choices()));
            Ok(())
        }
        Commands::Regions => {
            let repo = open_repository(&config, &cwd, &cli)?;
            let session = BrowseSession::new(&repo);
            print!("{}", format_choice_list(session.region_choices()));
            Ok(())
        }
    }
}
