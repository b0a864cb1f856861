use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod args;

#[cfg(test)]
mod tests;

pub use args::{
    CategoryArgs, CompareArgs, RandomArgs, SearchArgs, SubjectArgs, ThinkerArgs, WebArgs,
};

#[derive(Debug, Parser)]
#[command(name = "catalogue")]
#[command(about = "Read-only thinker catalogue", version)]
pub struct Cli {
    /// Record store root; overrides CATALOGUE_DATA_ROOT.
    #[arg(long, global = true)]
    pub root: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Serve the HTTP API.
    Web(WebArgs),
    Index,
    Categories,
    Category(CategoryArgs),
    Thinkers,
    Thinker(ThinkerArgs),
    Subject(SubjectArgs),
    Search(SearchArgs),
    Compare(CompareArgs),
    Random(RandomArgs),
    Stats,
    /// Check the record store for count drift and missing or stray files.
    Audit,
}
