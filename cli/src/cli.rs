use clap::{Parser, Subcommand, ValueEnum, ValueHint};
use kgquery_compiler::DEFAULT_PAGE_SIZE;
use std::path::PathBuf;

#[derive(Parser)]
#[command(about, version, name = "kgquery")]
/// Compiles KG entity and connection criteria into SPARQL queries
pub struct Args {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Compile JSON criteria into a SPARQL query and print it
    Compile {
        /// The kind of criteria to read
        #[arg(value_enum)]
        kind: CriteriaKind,
        /// File to read the criteria from
        ///
        /// If no file is given, stdin is read.
        #[arg(short, long, value_hint = ValueHint::FilePath)]
        file: Option<PathBuf>,
        /// IRI of the named graph to query
        #[arg(short, long, default_value = "urn:kgquery:default", value_hint = ValueHint::Url)]
        graph: String,
        /// Maximum number of solutions
        #[arg(long, default_value_t = DEFAULT_PAGE_SIZE)]
        page_size: usize,
        /// Number of solutions to skip
        #[arg(long, default_value_t = 0)]
        offset: usize,
        /// Compile a query that counts the solutions instead of listing them
        #[arg(long)]
        count: bool,
        /// JSON file with the compiler configuration
        #[arg(long, value_hint = ValueHint::FilePath)]
        config: Option<PathBuf>,
    },
}

#[derive(Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum CriteriaKind {
    /// Entity listing criteria
    Entities,
    /// Relation or frame connection criteria
    Connections,
}
