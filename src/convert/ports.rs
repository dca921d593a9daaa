use crate::catalog::Catalog;

/// Resolved ports and display label for a node type.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPorts {
    pub input_ports: Vec<String>,
    pub output_ports: Vec<String>,
    pub display_name: String,
}

/// Derive a node's effective ports and display label from its composite
/// `"<integration>.<action>"` type and the catalog.
///
/// Catalog hits use the action's declared ports, with `["main"]` in and
/// `["main", "error"]` out when the action omits a side. Misses fall back to
/// a static table of well-known types, then to the same defaults. Never
/// fails; an unresolvable type keeps the editor usable with generic ports.
pub fn resolve_ports(node_type: &str, catalog: &Catalog) -> ResolvedPorts {
    let (integration, action) = node_type.split_once('.').unwrap_or((node_type, node_type));

    if let Some(spec) = catalog.action(integration, action) {
        let display_name = if spec.display_name.is_empty() {
            action.to_string()
        } else {
            spec.display_name.clone()
        };
        return ResolvedPorts {
            input_ports: spec
                .input_ports
                .clone()
                .unwrap_or_else(default_input_ports),
            output_ports: spec
                .output_ports
                .clone()
                .unwrap_or_else(default_output_ports),
            display_name,
        };
    }

    let (input_ports, output_ports) = fallback_ports(node_type);
    ResolvedPorts {
        input_ports,
        output_ports,
        display_name: action.to_string(),
    }
}

/// Static port table for well-known action types with no catalog entry.
fn fallback_ports(node_type: &str) -> (Vec<String>, Vec<String>) {
    match node_type {
        "logic.if_condition" => (
            vec!["main".to_string()],
            vec!["true".to_string(), "false".to_string()],
        ),
        "data.merge" => (
            vec!["input_a".to_string(), "input_b".to_string()],
            default_output_ports(),
        ),
        "manual.trigger" => (vec![], vec!["main".to_string()]),
        _ => (default_input_ports(), default_output_ports()),
    }
}

fn default_input_ports() -> Vec<String> {
    vec!["main".to_string()]
}

fn default_output_ports() -> Vec<String> {
    vec!["main".to_string(), "error".to_string()]
}
