use crate::cli::{Args, Command, CriteriaKind};
use anyhow::Context;
use clap::Parser;
use kgquery_compiler::{CompiledQuery, CompilerConfig, Page, QueryCompiler};
use kgquery_model::{EntityQueryCriteria, KGQueryCriteria};
use std::fs;
use std::io::{stdin, stdout, Read, Write};
use std::path::Path;
use tracing_subscriber::EnvFilter;

mod cli;

pub fn main() -> anyhow::Result<()> {
    init_logging();
    let matches = Args::parse();
    match matches.command {
        Command::Compile {
            kind,
            file,
            graph,
            page_size,
            offset,
            count,
            config,
        } => {
            let config = match config {
                Some(path) => read_config(&path)?,
                None => CompilerConfig::default(),
            };
            let compiler = QueryCompiler::new(config).context("Invalid compiler configuration")?;
            let input = read_input(file.as_deref())?;
            let page = Page::new(page_size, offset);

            let query = match kind {
                CriteriaKind::Entities => {
                    let criteria: EntityQueryCriteria =
                        serde_json::from_str(&input).context("Invalid entity criteria")?;
                    compile_entities(&compiler, &graph, &criteria, page, count)?
                }
                CriteriaKind::Connections => {
                    let criteria: KGQueryCriteria =
                        serde_json::from_str(&input).context("Invalid connection criteria")?;
                    compile_connections(&compiler, &graph, &criteria, page, count)?
                }
            };
            tracing::info!(variables = query.variables.len(), "Query compiled");

            let mut stdout = stdout().lock();
            writeln!(stdout, "{}", query.text)?;
            stdout.flush()?;
            Ok(())
        }
    }
}

fn compile_entities(
    compiler: &QueryCompiler,
    graph: &str,
    criteria: &EntityQueryCriteria,
    page: Page,
    count: bool,
) -> anyhow::Result<CompiledQuery> {
    let query = if count {
        compiler.compile_entity_count(graph, criteria)
    } else {
        compiler.compile_entity_query(graph, criteria, page)
    };
    query.context("The entity criteria cannot be compiled")
}

fn compile_connections(
    compiler: &QueryCompiler,
    graph: &str,
    criteria: &KGQueryCriteria,
    page: Page,
    count: bool,
) -> anyhow::Result<CompiledQuery> {
    let query = if count {
        compiler.compile_kg_count(graph, criteria)
    } else {
        compiler.compile_kg_query(graph, criteria, page)
    };
    query.context("The connection criteria cannot be compiled")
}

fn read_config(path: &Path) -> anyhow::Result<CompilerConfig> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read the configuration file {}", path.display()))?;
    serde_json::from_str(&content)
        .with_context(|| format!("Invalid configuration file {}", path.display()))
}

fn read_input(file: Option<&Path>) -> anyhow::Result<String> {
    if let Some(file) = file {
        return fs::read_to_string(file)
            .with_context(|| format!("Failed to read the criteria file {}", file.display()));
    }
    let mut input = String::new();
    stdin()
        .lock()
        .read_to_string(&mut input)
        .context("Failed to read the criteria from stdin")?;
    Ok(input)
}

/// Logs to stderr so that stdout only carries the query. `RUST_LOG` overrides the default level.
fn init_logging() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .compact()
        .init();
}
