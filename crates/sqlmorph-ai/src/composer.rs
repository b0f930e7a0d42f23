//! Assembles the two role-tagged messages sent to the completion endpoint.
//!
//! Task messages follow a fixed block order: worked example (when the
//! template carries one), the literal source code, the numbered rules, and
//! the closing output directive. Source code is interpolated verbatim, with
//! no escaping and no size limit at this layer.

use crate::templates::{query_system_directive, ConversionTemplate};
use sqlmorph_core::SqlDialect;

const EXAMPLE_START: &str = "--------------------------- EXAMPLE START ---------------------------";
const EXAMPLE_END: &str = "--------------------------- EXAMPLE END -----------------------------";

/// A composed prompt: one system directive and one task message.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Prompt {
    pub system: String,
    pub task: String,
}

/// Build the prompt for a stored procedure/function conversion.
pub fn compose_routine(
    template: &ConversionTemplate,
    source_dialect: SqlDialect,
    source_code: &str,
) -> Prompt {
    let rules = template
        .rules
        .iter()
        .enumerate()
        .map(|(index, rule)| format!("{}. {rule}", index + 1))
        .collect::<Vec<_>>()
        .join("\n");

    let task = format!(
        "{intro}\n\n\
         Use this example {label} as a reference for structure and style:\n\n\
         {EXAMPLE_START}\n\
         {example}\n\
         {EXAMPLE_END}\n\n\
         Now convert the following {source_dialect} code:\n\n\
         {source_code}\n\n\
         {rules}\n\n\
         ### Output:\n\
         {output}",
        intro = template.intro,
        label = template.example.label,
        example = template.example.body.trim(),
        output = template.output,
    );

    Prompt {
        system: template.system.to_string(),
        task,
    }
}

/// Build the prompt for an ad-hoc query translation. The task message is the
/// query itself; the dialect pair lives in the system directive.
pub fn compose_query(source: SqlDialect, target: SqlDialect, source_code: &str) -> Prompt {
    Prompt {
        system: query_system_directive(source, target),
        task: source_code.to_string(),
    }
}
