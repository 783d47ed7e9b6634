use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "roster")]
#[command(about = "File-backed personal record store", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to the store file (overrides the configured location)
    #[arg(short, long, global = true)]
    pub file: Option<PathBuf>,

    /// Verbose output
    #[arg(long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add a new record
    #[command(alias = "a")]
    Add {
        /// Full name
        name: String,

        /// Email address
        email: String,

        /// Age in years (0-120)
        #[arg(value_parser = clap::value_parser!(u32).range(0..=120))]
        age: u32,

        /// Gender code (M or F, case-insensitive)
        gender: String,

        /// Salary (non-negative)
        #[arg(default_value_t = 0.0)]
        salary: f64,
    },

    /// List all records
    #[command(alias = "ls")]
    List,

    /// Show a single record by id
    #[command(alias = "g")]
    Get {
        /// Id of the record
        id: u32,
    },

    /// Update a record; omitted flags keep the current values
    #[command(alias = "up")]
    Update {
        /// Id of the record
        id: u32,

        /// New name
        #[arg(long)]
        name: Option<String>,

        /// New email address
        #[arg(long)]
        email: Option<String>,

        /// New age (0-120)
        #[arg(long, value_parser = clap::value_parser!(u32).range(0..=120))]
        age: Option<u32>,

        /// New salary
        #[arg(long)]
        salary: Option<f64>,

        /// New gender code (M or F)
        #[arg(long)]
        gender: Option<String>,
    },

    /// Delete a record by id
    #[command(alias = "rm")]
    Delete {
        /// Id of the record
        id: u32,
    },

    /// Delete every record and reset the id counter
    Clear {
        /// Skip the safety check and really delete everything
        #[arg(long)]
        force: bool,
    },

    /// Show aggregate statistics over the whole store
    Stats,

    /// Show or change configuration
    Config {
        /// Config key (currently only `data-file`)
        key: Option<String>,

        /// New value for the key
        value: Option<String>,
    },
}
