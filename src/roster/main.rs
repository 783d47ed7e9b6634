use clap::Parser;
use colored::Colorize;
use directories::ProjectDirs;
use roster::config::RosterConfig;
use roster::error::{Result, RosterError};
use roster::model::RecordFields;
use roster::repo::Repository;
use roster::stats::Summary;
use roster::validate;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod args;
mod cli;

use args::{Cli, Commands};
use cli::print;

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);
    if let Err(e) = run(cli) {
        eprintln!("{} {}", "Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "roster=debug" } else { "roster=warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .without_time()
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let Cli { command, file, .. } = cli;

    match command {
        Commands::Add {
            name,
            email,
            age,
            gender,
            salary,
        } => handle_add(store_path(file)?, name, email, age, gender, salary),
        Commands::List => handle_list(store_path(file)?),
        Commands::Get { id } => handle_get(store_path(file)?, id),
        Commands::Update {
            id,
            name,
            email,
            age,
            salary,
            gender,
        } => handle_update(store_path(file)?, id, name, email, age, salary, gender),
        Commands::Delete { id } => handle_delete(store_path(file)?, id),
        Commands::Clear { force } => handle_clear(store_path(file)?, force),
        Commands::Stats => handle_stats(store_path(file)?),
        Commands::Config { key, value } => handle_config(key, value),
    }
}

/// The backing file is the `--file` flag when given, otherwise the
/// configured file name inside the platform data directory.
fn store_path(file: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(path) = file {
        return Ok(path);
    }
    let dir = data_dir()?;
    let config = RosterConfig::load(&dir).unwrap_or_default();
    Ok(dir.join(config.data_file))
}

fn data_dir() -> Result<PathBuf> {
    let proj_dirs = ProjectDirs::from("com", "roster", "roster")
        .ok_or_else(|| RosterError::Store("could not determine a data directory".to_string()))?;
    Ok(proj_dirs.data_dir().to_path_buf())
}

fn handle_add(
    path: PathBuf,
    name: String,
    email: String,
    age: u32,
    gender: String,
    salary: f64,
) -> Result<()> {
    let fields = RecordFields {
        name: validate::validate_name(&name)?,
        email: validate::validate_email(&email)?,
        age: validate::validate_age(age)?,
        salary: validate::validate_salary(salary)?,
        gender: validate::normalize_gender(&gender)?,
    };

    let mut repo = Repository::open(path)?;
    let record = repo.add(fields)?;
    println!(
        "{}",
        format!("Added record {} ({})", record.id, record.name).green()
    );
    Ok(())
}

fn handle_list(path: PathBuf) -> Result<()> {
    let repo = Repository::open(path)?;
    let records = repo.list();
    if records.is_empty() {
        println!("No records.");
        return Ok(());
    }
    print::print_table(&records);
    Ok(())
}

fn handle_get(path: PathBuf, id: u32) -> Result<()> {
    let repo = Repository::open(path)?;
    match repo.get(id) {
        Some(record) => print::print_table(&[record]),
        None => println!("No record with id {}.", id),
    }
    Ok(())
}

#[allow(clippy::too_many_arguments)]
fn handle_update(
    path: PathBuf,
    id: u32,
    name: Option<String>,
    email: Option<String>,
    age: Option<u32>,
    salary: Option<f64>,
    gender: Option<String>,
) -> Result<()> {
    let mut repo = Repository::open(path)?;
    let current = repo.get(id).ok_or(RosterError::RecordNotFound(id))?;

    let mut fields = current.fields();
    if let Some(name) = name {
        fields.name = validate::validate_name(&name)?;
    }
    if let Some(email) = email {
        fields.email = validate::validate_email(&email)?;
    }
    if let Some(age) = age {
        fields.age = validate::validate_age(age)?;
    }
    if let Some(salary) = salary {
        fields.salary = validate::validate_salary(salary)?;
    }
    if let Some(gender) = gender {
        fields.gender = validate::normalize_gender(&gender)?;
    }

    let record = repo.update(id, fields)?;
    println!(
        "{}",
        format!("Updated record {} ({})", record.id, record.name).green()
    );
    Ok(())
}

fn handle_delete(path: PathBuf, id: u32) -> Result<()> {
    let mut repo = Repository::open(path)?;
    let record = repo.delete(id)?;
    println!(
        "{}",
        format!("Deleted record {} ({})", record.id, record.name).green()
    );
    Ok(())
}

fn handle_clear(path: PathBuf, force: bool) -> Result<()> {
    if !force {
        println!(
            "{}",
            "This deletes every record and resets the id counter.".yellow()
        );
        println!("Re-run with --force to confirm.");
        return Ok(());
    }

    let mut repo = Repository::open(path)?;
    let removed = repo.len();
    repo.clear()?;
    println!("{}", format!("Cleared {} record(s).", removed).green());
    Ok(())
}

fn handle_stats(path: PathBuf) -> Result<()> {
    let repo = Repository::open(path)?;
    let records = repo.list();
    if records.is_empty() {
        println!("No records.");
        return Ok(());
    }
    print::print_summary(&Summary::from_records(&records));
    Ok(())
}

fn handle_config(key: Option<String>, value: Option<String>) -> Result<()> {
    let dir = data_dir()?;
    let mut config = RosterConfig::load(&dir).unwrap_or_default();

    match (key.as_deref(), value) {
        (None, _) => {
            println!("data-file = {}", config.data_file);
            println!("store     = {}", dir.join(&config.data_file).display());
        }
        (Some("data-file"), None) => println!("{}", config.data_file),
        (Some("data-file"), Some(value)) => {
            config.data_file = value;
            config.save(&dir)?;
            println!("{}", "Config saved.".green());
        }
        (Some(other), _) => {
            return Err(RosterError::Invalid(format!(
                "unknown config key `{other}`"
            )));
        }
    }
    Ok(())
}
