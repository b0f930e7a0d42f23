//! Dialect-specific tuning advice and the optimization prompt.

use crate::composer::Prompt;
use sqlmorph_core::SqlDialect;

const SQLSERVER_TIPS: [&str; 5] = [
    "Use SET NOCOUNT ON to reduce network overhead",
    "Use indexed views for frequently reused logic",
    "Use OPTION (RECOMPILE) for parameter sniffing issues",
    "Avoid calling sp_executesql repeatedly in loops",
    "Use TRY/CATCH for error handling",
];

const POSTGRES_TIPS: [&str; 5] = [
    "Use EXPLAIN (ANALYZE, BUFFERS) to inspect query plans",
    "Optimize JOIN order and use LATERAL joins",
    "Use CTEs to break down complex queries",
    "Set proper function volatility (IMMUTABLE, STABLE, VOLATILE)",
    "Use jsonb over json for better performance",
];

const MYSQL_TIPS: [&str; 5] = [
    "Use EXPLAIN FORMAT=JSON to analyze queries",
    "Optimize JSON operations and avoid repeated JSON_EXTRACT calls",
    "Use covering indexes on frequently filtered columns",
    "Consider using temporary tables for complex operations",
    "Use STRAIGHT_JOIN to enforce join order when needed",
];

/// The fixed tuning-tip list for a dialect.
pub fn optimization_tips(dialect: SqlDialect) -> &'static [&'static str] {
    match dialect {
        SqlDialect::SqlServer => &SQLSERVER_TIPS,
        SqlDialect::Postgres => &POSTGRES_TIPS,
        SqlDialect::MySql => &MYSQL_TIPS,
    }
}

/// Build the optimization prompt: the source code followed by the bulleted
/// dialect tips, asking for optimized code with brief inline comments.
pub fn compose_optimization(dialect: SqlDialect, sql_code: &str) -> Prompt {
    let tips = optimization_tips(dialect)
        .iter()
        .map(|tip| format!("- {tip}"))
        .collect::<Vec<_>>()
        .join("\n");

    let task = format!(
        "Optimize this {dialect} code for better performance:\n\n\
         {sql_code}\n\n\
         Focus on these {dialect}-specific optimizations:\n\
         {tips}\n\n\
         Return only the optimized code with brief inline comments explaining key optimizations.",
    );

    Prompt {
        system: format!(
            "You are an expert in {} optimization.",
            dialect.as_str().to_uppercase()
        ),
        task,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn each_dialect_has_exactly_five_tips() {
        for dialect in SqlDialect::ALL {
            assert_eq!(optimization_tips(dialect).len(), 5);
        }
    }

    #[test]
    fn postgres_prompt_embeds_all_tips_and_the_code_verbatim() {
        let sql = "SELECT *\nFROM big_table\nWHERE a = 1;";
        let prompt = compose_optimization(SqlDialect::Postgres, sql);

        assert_eq!(prompt.system, "You are an expert in POSTGRESQL optimization.");
        assert!(prompt.task.contains(sql));
        for tip in optimization_tips(SqlDialect::Postgres) {
            assert!(prompt.task.contains(tip), "missing tip: {tip}");
        }
    }

    #[test]
    fn tips_are_dialect_specific() {
        let prompt = compose_optimization(SqlDialect::MySql, "SELECT 1");
        assert!(prompt.task.contains("STRAIGHT_JOIN"));
        assert!(!prompt.task.contains("OPTION (RECOMPILE)"));
    }
}
