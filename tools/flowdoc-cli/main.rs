use clap::{Parser, Subcommand};
use flowdoc::prelude::*;
use std::fs;
use std::time::Instant;

/// A CLI for inspecting, verifying, and exporting visual workflow documents
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// Path to the workflow document JSON file
    workflow_path: String,

    /// Path to the integration catalog JSON file
    #[arg(short, long)]
    catalog: Option<String>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print a node/edge/port summary of the document
    Inspect,
    /// Validate the document and verify round-trip fidelity
    Check,
    /// Write the canonical pretty-printed document
    Export {
        /// Output path; stdout when omitted
        #[arg(short, long)]
        output: Option<String>,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let load_start = Instant::now();
    let document = WorkflowDocument::from_file(&cli.workflow_path).unwrap_or_else(|e| {
        exit_with_error(&format!(
            "Failed to load workflow '{}': {}",
            &cli.workflow_path, e
        ))
    });
    let catalog = match &cli.catalog {
        Some(path) => Catalog::from_file(path)
            .unwrap_or_else(|e| exit_with_error(&format!("Failed to load catalog '{}': {}", path, e))),
        None => {
            println!("No catalog file provided. Using static port fallbacks only.");
            Catalog::default()
        }
    };
    let load_duration = load_start.elapsed();

    match cli.command {
        Command::Inspect => inspect(&document, &catalog),
        Command::Check => check(&document, &catalog),
        Command::Export { output } => export(&document, output),
    }

    println!("\nFile Loading: {:?}", load_duration);
}

/// Prints a summary of the document and its derived graph.
fn inspect(document: &WorkflowDocument, catalog: &Catalog) {
    println!(
        "Workflow '{}' (id: {}, version {})",
        document.name, document.id, document.version
    );
    println!("Variables: {}", document.variables.len());

    println!("\nNodes ({}):", document.nodes.len());
    for node in &document.nodes {
        let resolved = resolve_ports(&node.node_type, catalog);
        println!(
            "  {} [{}] '{}' in: {:?} out: {:?}",
            node.effective_key(),
            node.node_type,
            node.name,
            resolved.input_ports,
            resolved.output_ports
        );
    }

    let graph = to_graph(document, catalog);
    println!("\nEdges ({}):", graph.edges.len());
    for edge in &graph.edges {
        println!(
            "  {} --[{} -> {}]--> {}",
            edge.source,
            edge.source_port(),
            edge.target_port(),
            edge.target
        );
    }
}

/// Validates the document and verifies that a graph round-trip preserves
/// every node and the connection topology.
fn check(document: &WorkflowDocument, catalog: &Catalog) {
    let check_start = Instant::now();

    flowdoc::document::validate(document)
        .unwrap_or_else(|e| exit_with_error(&format!("Validation failed: {}", e)));
    println!("Validation passed.");

    let rebuilt = to_document(document, &to_graph(document, catalog));

    for (original, round_tripped) in document.nodes.iter().zip(&rebuilt.nodes) {
        if original.id != round_tripped.id
            || original.effective_key() != round_tripped.effective_key()
            || original.node_type != round_tripped.node_type
        {
            exit_with_error(&format!(
                "Round-trip mismatch on node '{}'",
                original.effective_key()
            ));
        }
    }

    let mut original_tuples = connection_tuples(document);
    let mut rebuilt_tuples = connection_tuples(&rebuilt);
    original_tuples.sort();
    rebuilt_tuples.sort();
    if original_tuples != rebuilt_tuples {
        exit_with_error("Round-trip mismatch in connection topology");
    }

    println!(
        "Round-trip verified: {} nodes, {} connections in {:?}",
        document.nodes.len(),
        original_tuples.len(),
        check_start.elapsed()
    );
}

fn export(document: &WorkflowDocument, output: Option<String>) {
    let json = document
        .to_json_pretty()
        .unwrap_or_else(|e| exit_with_error(&format!("Export failed: {}", e)));

    match output {
        Some(path) => {
            fs::write(&path, json)
                .unwrap_or_else(|e| exit_with_error(&format!("Could not write '{}': {}", path, e)));
            println!("Exported workflow to '{}'", path);
        }
        None => println!("{}", json),
    }
}

fn connection_tuples(document: &WorkflowDocument) -> Vec<(String, String, String, String)> {
    document
        .iter_targets()
        .map(|(from, port, t)| {
            (
                from.to_string(),
                port.to_string(),
                t.to.clone(),
                t.to_port.clone(),
            )
        })
        .collect()
}

fn exit_with_error(message: &str) -> ! {
    eprintln!("Error: {}", message);
    std::process::exit(1);
}
