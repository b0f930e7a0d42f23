use once_cell::sync::Lazy;
use regex::Regex;
use sqlmorph_core::RoutineKind;

static CREATE_FUNCTION_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^create\s+(or\s+replace\s+)?function").expect("valid regex literal")
});

const ROUTINE_PREFIXES: [&str; 5] = [
    "create procedure",
    "alter procedure",
    "create function",
    "alter function",
    "delimiter $$",
];

/// Decide whether the input is a stored procedure/function definition or an
/// ad-hoc query by inspecting the trimmed, lowercased prefix.
///
/// This is a syntactic heuristic, not a parser: a valid routine that does not
/// begin with one of the known keywords (e.g. one preceded by a comment
/// block) classifies as a plain query. Total over all inputs; the empty
/// string is a plain query.
pub fn classify(source: &str) -> RoutineKind {
    let normalized = source.trim().to_lowercase();
    let is_routine = ROUTINE_PREFIXES
        .iter()
        .any(|prefix| normalized.starts_with(prefix))
        || CREATE_FUNCTION_RE.is_match(&normalized);

    if is_routine {
        RoutineKind::ProcedureOrFunction
    } else {
        RoutineKind::PlainQuery
    }
}
