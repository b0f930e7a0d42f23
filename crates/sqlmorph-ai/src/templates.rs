//! Static conversion templates and the routing table that selects them.
//!
//! Each template is pure data: a system directive, an intro line, a worked
//! example for the target dialect, a numbered rule list, and a closing
//! output directive. Nothing here is derived at runtime; the composer owns
//! the interpolation.

use crate::reference::{
    MYSQL_PROCEDURE_EXAMPLE, POSTGRES_FUNCTION_EXAMPLE, SQLSERVER_PROCEDURE_EXAMPLE,
};
use sqlmorph_core::{Result, RoutineKind, SqlDialect, SqlMorphError};

/// A labeled reference routine embedded in a template.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceBlock {
    pub label: &'static str,
    pub body: &'static str,
}

/// A fixed instruction set steering the completion endpoint toward one
/// dialect conversion.
#[derive(Debug, Clone, Copy)]
pub struct ConversionTemplate {
    pub system: &'static str,
    pub intro: &'static str,
    pub example: ReferenceBlock,
    pub rules: &'static [&'static str],
    pub output: &'static str,
}

/// Outcome of routing a conversion request.
#[derive(Debug, Clone, Copy)]
pub enum TemplateSelection {
    /// Source and target dialect match: the input passes through unchanged
    /// and the completion endpoint is never called.
    Identity,
    /// Ad-hoc query translation, parameterized only by the dialect names.
    Query {
        source: SqlDialect,
        target: SqlDialect,
    },
    /// Stored procedure/function conversion with a dedicated template.
    Routine(&'static ConversionTemplate),
}

/// Select the template for an ordered dialect pair and input kind.
///
/// Identity conversions short-circuit before any template lookup; plain
/// queries use the generic query template regardless of the pair. Ordered
/// pairs without a routing rule fail with `UnsupportedConversion`.
pub fn resolve(
    source: SqlDialect,
    target: SqlDialect,
    kind: RoutineKind,
) -> Result<TemplateSelection> {
    if source == target {
        return Ok(TemplateSelection::Identity);
    }
    if kind == RoutineKind::PlainQuery {
        return Ok(TemplateSelection::Query { source, target });
    }

    let template = match (source, target) {
        (SqlDialect::SqlServer, SqlDialect::Postgres) => &SQLSERVER_TO_POSTGRES,
        (SqlDialect::Postgres, SqlDialect::SqlServer) => &POSTGRES_TO_SQLSERVER,
        (SqlDialect::SqlServer | SqlDialect::Postgres, SqlDialect::MySql) => &TO_MYSQL,
        (SqlDialect::MySql, SqlDialect::SqlServer) => &MYSQL_TO_SQLSERVER,
        (SqlDialect::MySql, SqlDialect::Postgres) => &MYSQL_TO_POSTGRES,
        (source_dialect, target_dialect) => {
            return Err(SqlMorphError::UnsupportedConversion {
                source_dialect,
                target_dialect,
            })
        }
    };
    Ok(TemplateSelection::Routine(template))
}

/// System directive for the generic query-translation path.
pub fn query_system_directive(source: SqlDialect, target: SqlDialect) -> String {
    format!(
        "You are an expert in SQL conversion. Convert the following {source} SQL query to \
         {target} SQL. Return only the converted query, do not wrap it in a procedure or function."
    )
}

pub static SQLSERVER_TO_POSTGRES: ConversionTemplate = ConversionTemplate {
    system: "You are an expert in SQL who specializes in converting SQL Server stored procedures \
             to PostgreSQL functions. Provide only the converted code without any explanations.",
    intro: "Convert the following SQL Server stored procedure into a PostgreSQL function using \
            the rules below.",
    example: ReferenceBlock {
        label: "PostgreSQL function",
        body: POSTGRES_FUNCTION_EXAMPLE,
    },
    rules: &[
        "Use `CREATE OR REPLACE FUNCTION` syntax.",
        "The PostgreSQL function **must define the same number of input parameters** as the SQL Server stored procedure.\n   - Each parameter from SQL Server (e.g., `@year`, `@store`) should have a corresponding parameter in the PostgreSQL function.\n   - If SQL Server uses multiple individual parameters, do **not** collapse them into a single JSON input — keep one parameter per input as in the original.",
        "Parse any array inputs (e.g., year, month) from JSON arrays using `json_array_elements_text(...)::INT` and aggregate them into PostgreSQL arrays using `ARRAY_AGG(...)`.",
        "Treat `\"all\"` values as special: if a JSON input contains `\"all\"`, set the corresponding array to `NULL` to disable filtering.",
        "If `fromdate` or `todate` is non-null, override `year` and `month` filters by setting those arrays to `NULL`.",
        "Return `SETOF refcursor`. For each result set:\n   - Declare a cursor variable (e.g., `cursor1`, `cursor2`, etc.).\n   - Use `OPEN cursorX FOR SELECT ...` to assign the result.\n   - Use `RETURN NEXT cursorX;` to yield each result.",
        "**Do NOT use `RETURN NEXT SELECT ...` — this is invalid syntax in PL/pgSQL. Always use `OPEN cursorX FOR ...` followed by `RETURN NEXT cursorX`.**",
        "CTE Scope in Cursor Blocks:\n   PostgreSQL CTEs (e.g., cte1, cte2, cte4, etc.) are scoped only to the query in which they are defined.\n   If a CTE is used in multiple cursors (e.g., cte2 in both cursor1 and cursor2), then:\n   - You must duplicate the full CTE definition in each OPEN cursorX FOR block where it's needed.\n   - Do not exclude or skip any OPEN cursorX FOR queries. All declared cursors must remain and execute.\n   - Each cursor query must be fully self-contained. Never refer to a CTE from a previous cursor block.\n   - You are allowed (and expected) to repeat CTE definitions if multiple cursor queries use the same logic.",
        "Replace SQL Server-specific syntax with PostgreSQL equivalents:\n   - Use `date_part('month', fs.\"OrderDate\")` instead of `MONTH(fs.OrderDate)`.\n   - Use `= ANY(array_variable)` instead of `IN (...)`.\n   - Remove all `WITH (NOLOCK)` or other T-SQL-only constructs.",
        "Do not use dynamic SQL (no `EXEC` or `sp_executesql`). Embed all logic inline.",
        "When selecting multiple values into variables, use a **single `SELECT ... INTO var1, var2, ...`** — do not use multiple `INTO` clauses.",
        "Add `LANGUAGE plpgsql VOLATILE COST 100 ROWS 1000` to the function signature.",
        "Remove or replace any `dbo.` schema references — PostgreSQL does not use this convention.",
        "All table names and column names in the PostgreSQL function must be in lowercase and do not use double quotes if the names are already lowercase and contain no special characters or reserved words.",
        "When converting JSON array parameters (e.g., month, year, etc.) into PostgreSQL arrays, use the simple := ARRAY(...) syntax with SELECT json_array_elements_text(...) instead of SELECT ARRAY_AGG(...) INTO ....",
    ],
    output: "Return only the converted PostgreSQL function in clean, fully formatted PL/pgSQL. \
             Ensure the function structure and behavior mirror the original procedure exactly.",
};

pub static POSTGRES_TO_SQLSERVER: ConversionTemplate = ConversionTemplate {
    system: "You are an expert in SQL who specializes in converting PostgreSQL functions to SQL \
             Server stored procedures. Provide only the converted code without any explanations.",
    intro: "Convert the following PostgreSQL function to a SQL Server stored procedure using \
            these conversion rules:",
    example: ReferenceBlock {
        label: "SQL Server stored procedure",
        body: SQLSERVER_PROCEDURE_EXAMPLE,
    },
    rules: &[
        "Function to Procedure:\n   - Convert `CREATE OR REPLACE FUNCTION` to `CREATE PROCEDURE`.\n   - Replace `RETURNS SETOF refcursor` (used for returning multiple result sets) with dynamic scripting using `sp_executesql` in SQL Server.\n   - Do not use cursors in SQL Server — return the final result set via dynamic SELECT inside the procedure.",
        "Parameter Conversion:\n   - Convert PostgreSQL `json` parameters to `nvarchar(max)` in SQL Server.\n   - Replace `json_array_elements_text(...)` with `REPLACE()`-based logic to clean the array-like JSON strings (remove brackets and quotes).\n   - Treat `\"all\"` as `'0'`, and use it to skip filtering (e.g., use `1=1`).",
        "Array Handling:\n   - Convert `= ANY(array)` in PostgreSQL to `IN (...)` clause in SQL Server dynamic SQL.\n   - Use cleaned string lists (e.g., `'101','102'`) inside `IN (...)`.",
        "Conditional Logic:\n   - Use `CASE WHEN ... THEN '1=1' ELSE actual condition` to simulate PostgreSQL's null and \"all\" checks.\n   - For dates:\n      - If `@fromdate` or `@todate` is NULL or empty, skip filtering.\n      - Otherwise, apply `OrderDate BETWEEN @fromdate AND @todate`.",
        "Dynamic SQL:\n   - Construct the full SQL inside an `@sql` variable using string concatenation.\n   - Use `sp_executesql` with proper parameter declarations and values to execute the query securely.",
        "Currency Formatting:\n   - Replace `currency_convert(sum(...))` in PostgreSQL with:\n      ```\n      CASE\n      WHEN SUM(...) < 99999 THEN '$' + FORMAT(SUM(...)/1000, 'N2') + 'K'\n      ELSE FORMAT(SUM(...), '$0,,.00M')\n      END\n      ```",
        "Output Handling:\n   - PostgreSQL refcursors (`OPEN query1 FOR ...; RETURN NEXT query1;`) should be replaced with just one dynamic query result in SQL Server.\n   - Do not declare or use cursors in SQL Server for this — all data should be returned as the result of the `sp_executesql` execution.",
        "Boilerplate:\n   - Include `SET ANSI_NULLS ON`, `SET QUOTED_IDENTIFIER ON`, and `SET NOCOUNT ON`.\n   - Declare all variables at the top.",
    ],
    output: "Return only the converted SQL Server stored procedure in clean, fully formatted \
             T-SQL. Ensure the procedure structure and behavior mirror the original function \
             exactly.",
};

pub static TO_MYSQL: ConversionTemplate = ConversionTemplate {
    system: "You are an expert in SQL who specializes in converting SQL Server and PostgreSQL \
             stored procedures into MySQL stored procedures. Provide only the converted code \
             without any explanations.",
    intro: "Convert the following code into a MySQL stored procedure using the rules below.",
    example: ReferenceBlock {
        label: "MySQL stored procedure",
        body: MYSQL_PROCEDURE_EXAMPLE,
    },
    rules: &[
        "Always include `DROP PROCEDURE IF EXISTS procedure_name;` before `CREATE PROCEDURE`.",
        "Use `DELIMITER $$` to wrap the procedure definition, and reset to `DELIMITER ;` at the end.",
        "Procedure parameters:\n   - Convert SQL Server `@param` or PostgreSQL `param` to MySQL `IN p_param`\n   - Use MySQL data types: `INT`, `DECIMAL`, `DATE`, `JSON`, etc.",
        "Variable declarations:\n   - Use `DECLARE var_name TYPE DEFAULT value;`\n   - All `DECLARE` statements (variables, cursors, handlers) must be placed at the **top of the BEGIN block**, before any logic.",
        "Avoid `SELECT ... INTO var` if the query may return multiple rows.\n   - Use `LIMIT 1` if one row is expected, or use a `CURSOR` only if row-by-row logic is truly needed.\n   - For multiple rows, use `SELECT` directly to return the result set.",
        "JSON Handling:\n   - Use `JSON_EXTRACT(json_column, '$.key')` or `JSON_UNQUOTE()` for accessing values.",
        "Arrays:\n   - Simulate arrays using JSON parameters and `IN (SELECT ...)` pattern.",
        "Date logic:\n   - Use MySQL-compatible functions: `YEAR()`, `MONTH()`, `CURDATE()`, `DATE_SUB()`, `BETWEEN ... AND ...`",
        "String formatting:\n   - Use `FORMAT(number, 2)` and `CONCAT()` for percentages, currencies, etc.",
        "Error handling:\n   - If needed, use `DECLARE EXIT HANDLER FOR SQLEXCEPTION` for basic exception capture.",
        "Replace unsupported syntax:\n   - Remove `RETURN`, `RETURN QUERY`, `LANGUAGE plpgsql`, `refcursor`, `PERFORM`, etc.\n   - Replace `RAISE NOTICE` with `SELECT 'message';`",
        "Multiple result sets:\n   - Use multiple `SELECT` statements in sequence to simulate multiple cursors or result sets.",
        "Use MySQL conventions:\n   - Use PascalCase or camelCase for procedure names and identifiers.",
        "End the procedure with:\n   ```sql\n   END$$\n   DELIMITER ;\n   ```",
        "Final Requirements:\n   - Return a complete, syntactically correct MySQL stored procedure compatible with MySQL 8+.\n   - The output must be **clean, executable, and reflect the intent of the original procedure.**\n   - Avoid session-level variables like `@var`. Prefer local variables with `DECLARE`.",
    ],
    output: "Return only the fully formatted, converted MySQL stored procedure. No comments, \
             explanations, or mixed formatting.",
};

pub static MYSQL_TO_SQLSERVER: ConversionTemplate = ConversionTemplate {
    system: "You are an expert in SQL who specializes in converting MySQL stored procedures to \
             SQL Server stored procedures. Provide only the converted code without any \
             explanations.",
    intro: "Convert the following MySQL stored procedure to SQL Server using these key \
            conversion rules:",
    example: ReferenceBlock {
        label: "SQL Server stored procedure",
        body: SQLSERVER_PROCEDURE_EXAMPLE,
    },
    rules: &[
        "Remove DELIMITER syntax",
        "Convert IN/OUT parameters to @parameters",
        "Replace JSON functions with string manipulation",
        "Use dynamic SQL with sp_executesql",
        "Add SET NOCOUNT ON",
        "Use PascalCase naming",
        "Replace MySQL date functions with SQL Server equivalents",
    ],
    output: "Return only the converted SQL Server stored procedure.",
};

pub static MYSQL_TO_POSTGRES: ConversionTemplate = ConversionTemplate {
    system: "You are an expert in SQL who specializes in converting MySQL stored procedures to \
             PostgreSQL functions. Provide only the converted code without any explanations.",
    intro: "Convert the following MySQL stored procedure to a PostgreSQL function using these \
            key conversion rules:",
    example: ReferenceBlock {
        label: "PostgreSQL function",
        body: POSTGRES_FUNCTION_EXAMPLE,
    },
    rules: &[
        "Use CREATE OR REPLACE FUNCTION",
        "Convert IN/OUT parameters to function parameters",
        "Replace JSON functions with json_array_elements_text()",
        "Use = ANY(array) for array operations",
        "Replace MySQL date functions with PostgreSQL equivalents",
        "Add LANGUAGE plpgsql VOLATILE COST 100 ROWS 1000",
        "Use lowercase naming",
    ],
    output: "Return only the converted PostgreSQL function.",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn identity_short_circuits_for_every_dialect_and_kind() {
        for dialect in SqlDialect::ALL {
            for kind in [RoutineKind::PlainQuery, RoutineKind::ProcedureOrFunction] {
                let selection = resolve(dialect, dialect, kind).unwrap();
                assert!(matches!(selection, TemplateSelection::Identity));
            }
        }
    }

    #[test]
    fn plain_queries_use_the_generic_template() {
        let selection = resolve(
            SqlDialect::MySql,
            SqlDialect::Postgres,
            RoutineKind::PlainQuery,
        )
        .unwrap();
        match selection {
            TemplateSelection::Query { source, target } => {
                assert_eq!(source, SqlDialect::MySql);
                assert_eq!(target, SqlDialect::Postgres);
            }
            other => panic!("expected query selection, got {other:?}"),
        }
    }

    #[test]
    fn routine_pairs_select_their_dedicated_template() {
        let cases = [
            (SqlDialect::SqlServer, SqlDialect::Postgres, "PostgreSQL function"),
            (SqlDialect::Postgres, SqlDialect::SqlServer, "SQL Server stored procedure"),
            (SqlDialect::SqlServer, SqlDialect::MySql, "MySQL stored procedure"),
            (SqlDialect::Postgres, SqlDialect::MySql, "MySQL stored procedure"),
            (SqlDialect::MySql, SqlDialect::SqlServer, "SQL Server stored procedure"),
            (SqlDialect::MySql, SqlDialect::Postgres, "PostgreSQL function"),
        ];
        for (source, target, example_label) in cases {
            let selection = resolve(source, target, RoutineKind::ProcedureOrFunction).unwrap();
            match selection {
                TemplateSelection::Routine(template) => {
                    assert_eq!(template.example.label, example_label);
                    assert!(!template.rules.is_empty());
                }
                other => panic!("expected routine template for {source}->{target}, got {other:?}"),
            }
        }
    }

    #[test]
    fn routing_is_deterministic() {
        let first = resolve(
            SqlDialect::Postgres,
            SqlDialect::MySql,
            RoutineKind::ProcedureOrFunction,
        )
        .unwrap();
        let second = resolve(
            SqlDialect::Postgres,
            SqlDialect::MySql,
            RoutineKind::ProcedureOrFunction,
        )
        .unwrap();
        match (first, second) {
            (TemplateSelection::Routine(a), TemplateSelection::Routine(b)) => {
                assert!(std::ptr::eq(a, b));
            }
            other => panic!("expected routine templates, got {other:?}"),
        }
    }

    #[test]
    fn both_sqlserver_and_postgres_share_the_mysql_target_template() {
        let from_sqlserver = resolve(
            SqlDialect::SqlServer,
            SqlDialect::MySql,
            RoutineKind::ProcedureOrFunction,
        )
        .unwrap();
        let from_postgres = resolve(
            SqlDialect::Postgres,
            SqlDialect::MySql,
            RoutineKind::ProcedureOrFunction,
        )
        .unwrap();
        match (from_sqlserver, from_postgres) {
            (TemplateSelection::Routine(a), TemplateSelection::Routine(b)) => {
                assert!(std::ptr::eq(a, b));
            }
            other => panic!("expected routine templates, got {other:?}"),
        }
    }
}
