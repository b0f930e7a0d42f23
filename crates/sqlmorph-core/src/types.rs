use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A supported SQL dialect. The serde representation matches the wire
/// strings accepted by the HTTP API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SqlDialect {
    #[serde(rename = "sqlserver")]
    SqlServer,
    #[serde(rename = "postgresql")]
    Postgres,
    #[serde(rename = "mysql")]
    MySql,
}

impl SqlDialect {
    pub const ALL: [SqlDialect; 3] = [SqlDialect::SqlServer, SqlDialect::Postgres, SqlDialect::MySql];

    /// Wire name, as used in requests, responses, and prompts.
    pub fn as_str(&self) -> &'static str {
        match self {
            SqlDialect::SqlServer => "sqlserver",
            SqlDialect::Postgres => "postgresql",
            SqlDialect::MySql => "mysql",
        }
    }
}

impl fmt::Display for SqlDialect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SqlDialect {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "sqlserver" => Ok(SqlDialect::SqlServer),
            "postgresql" => Ok(SqlDialect::Postgres),
            "mysql" => Ok(SqlDialect::MySql),
            other => Err(format!("unknown SQL dialect: {other}")),
        }
    }
}

/// Shape of an input SQL text as seen by the classifier: either an ad-hoc
/// query or a stored procedure/function definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoutineKind {
    PlainQuery,
    ProcedureOrFunction,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dialect_wire_names_round_trip() {
        for dialect in SqlDialect::ALL {
            assert_eq!(dialect.as_str().parse::<SqlDialect>().unwrap(), dialect);
        }
    }

    #[test]
    fn dialect_serde_uses_wire_names() {
        let json = serde_json::to_string(&SqlDialect::Postgres).unwrap();
        assert_eq!(json, "\"postgresql\"");
        let back: SqlDialect = serde_json::from_str("\"sqlserver\"").unwrap();
        assert_eq!(back, SqlDialect::SqlServer);
    }

    #[test]
    fn unknown_dialect_is_rejected() {
        assert!(serde_json::from_str::<SqlDialect>("\"oracle\"").is_err());
        assert!("oracle".parse::<SqlDialect>().is_err());
    }
}
