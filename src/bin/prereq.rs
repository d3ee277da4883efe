use clap::{Parser, ValueEnum};
use prereq::{EngineConfig, ExprNode, PrereqEngine, PrereqTree};
use std::{
    fmt::{self, Write},
    path::PathBuf,
};
use thiserror::Error;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum Format {
    /// Tagged JSON, `null` when there are no prerequisites
    Json,
    /// One node per line, indented by depth
    Tree,
    /// Canonical prerequisite-string syntax
    Canonical,
}

#[derive(Parser)]
#[command(author, version, about = "Parse course prerequisite expressions", long_about = None)]
struct Cli {
    /// Path to a JSON engine config file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, value_enum, default_value = "json")]
    format: Format,

    /// Prerequisite expressions to parse
    #[arg(required = true)]
    exprs: Vec<String>,
}

fn render_node(node: &ExprNode, indent: usize, out: &mut String) -> fmt::Result {
    let pad = "  ".repeat(indent);
    match node {
        ExprNode::Course { value } => writeln!(out, "{}{}", pad, value),
        ExprNode::And { children } | ExprNode::Or { children } => {
            let label = if matches!(node, ExprNode::And { .. }) {
                "and"
            } else {
                "or"
            };
            writeln!(out, "{}{}", pad, label)?;
            for child in children {
                render_node(child, indent + 1, out)?;
            }
            Ok(())
        }
    }
}

#[derive(Debug, Error)]
enum RenderError {
    #[error("JSON serialization failed: {0}")]
    Json(#[from] serde_json::Error),
    #[error("tree formatting failed")]
    Format(#[from] fmt::Error),
}

fn render_tree(node: &ExprNode) -> Result<String, RenderError> {
    let mut out = String::new();
    render_node(node, 0, &mut out)?;
    write!(
        out,
        "(depth {}, {} courses)",
        node.depth(),
        node.course_ids().len()
    )?;
    Ok(out)
}

fn render(tree: &PrereqTree, format: Format) -> Result<String, RenderError> {
    match format {
        Format::Json => Ok(serde_json::to_string(tree)?),
        Format::Canonical => Ok(tree.to_string()),
        Format::Tree => match tree.expr() {
            Some(node) => render_tree(node),
            None => Ok("(no prerequisites)".to_string()),
        },
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let config = match &cli.config {
        Some(path) => match EngineConfig::from_file(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => EngineConfig::default(),
    };
    info!("config loaded.");
    debug!("config: {:?}", config);

    let engine = PrereqEngine::new(config);
    let mut failed = false;
    for expr in &cli.exprs {
        let tree = match engine.parse(expr) {
            Ok(tree) => tree,
            Err(e) => {
                eprintln!("Error: {:?}: {}", expr, e);
                failed = true;
                continue;
            }
        };
        match render(&tree, cli.format) {
            Ok(output) => println!("{}", output),
            Err(e) => {
                eprintln!("Error: failed to render {:?}: {}", expr, e);
                failed = true;
            }
        }
    }

    if failed {
        std::process::exit(1);
    }
}
