use clap::Parser;
use flowdoc::convert::identity;
use flowdoc::prelude::*;
use rand::rngs::ThreadRng;
use rand::Rng;
use std::fs;

/// A CLI tool to generate random but valid workflow documents for testing
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// The path to write the generated JSON file to
    #[arg(short, long, default_value = "generated_workflow.json")]
    output: String,

    /// Optional catalog to draw node types from; falls back to a built-in set
    #[arg(short, long)]
    catalog: Option<String>,

    /// The number of nodes to generate
    #[arg(short, long, default_value_t = 8)]
    nodes: usize,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();
    let mut rng = rand::rng();

    let node_types = match &cli.catalog {
        Some(path) => {
            let catalog = Catalog::from_file(path)?;
            let types: Vec<String> = catalog
                .all_actions()
                .map(|(integration, action)| format!("{}.{}", integration.name, action.key))
                .collect();
            if types.is_empty() {
                eprintln!("Error: catalog '{}' declares no actions", path);
                std::process::exit(1);
            }
            types
        }
        None => builtin_node_types(),
    };

    println!("Generating workflow with {} node(s)...", cli.nodes);

    let document = generate_document(&mut rng, &node_types, cli.nodes);
    let json_output = document.to_json_pretty()?;
    fs::write(&cli.output, json_output)?;

    println!(
        "Successfully generated and saved workflow to '{}'",
        cli.output
    );

    Ok(())
}

/// Node types used when no catalog is supplied, mirroring the static
/// fallback table plus a few generic actions.
fn builtin_node_types() -> Vec<String> {
    [
        "manual.trigger",
        "logic.if_condition",
        "data.merge",
        "http.request",
        "email.send_email",
    ]
    .iter()
    .map(|s| s.to_string())
    .collect()
}

fn generate_document(rng: &mut ThreadRng, node_types: &[String], count: usize) -> WorkflowDocument {
    let mut document = WorkflowDocument {
        id: identity::node_id(),
        name: "Generated workflow".to_string(),
        ..Default::default()
    };

    for index in 0..count {
        let node_type = node_types[rng.random_range(0..node_types.len())].clone();
        let action = node_type.split('.').next_back().unwrap_or("node");
        document.nodes.push(NodeRecord {
            id: identity::node_id(),
            key: format!("{}_{}", action, index),
            name: action.to_string(),
            node_type,
            params: serde_json::Map::new(),
            x: rng.random_range(0.0..1200.0),
            y: rng.random_range(0.0..800.0),
        });
    }

    // Wire each node to one later node so the graph stays acyclic.
    for index in 0..count.saturating_sub(1) {
        if rng.random_range(0..10) < 8 {
            let from = document.nodes[index].key.clone();
            let to = document.nodes[rng.random_range(index + 1..count)].key.clone();
            document
                .connections
                .entry(from.clone())
                .or_default()
                .entry("main".to_string())
                .or_default()
                .push(ConnectionTarget {
                    to,
                    to_port: "main".to_string(),
                    from,
                    from_port: "main".to_string(),
                });
        }
    }

    document
}
