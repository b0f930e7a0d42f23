use std::sync::Arc;

use crate::classify::classify;
use crate::client::CompletionClient;
use crate::composer::{compose_query, compose_routine};
use crate::optimizer::compose_optimization;
use crate::templates::{resolve, TemplateSelection};
use sqlmorph_core::{Result, SqlDialect};

/// Stateless orchestration of classify → resolve → compose → complete.
/// Cheap to clone behind `Arc`; holds no per-request state and no lock is
/// held across the completion call.
pub struct ConversionService {
    client: Arc<dyn CompletionClient>,
}

impl ConversionService {
    pub fn new(client: Arc<dyn CompletionClient>) -> Self {
        Self { client }
    }

    /// Convert SQL between dialects. Identity conversions return the input
    /// unchanged without calling the completion endpoint.
    pub async fn convert(
        &self,
        source_code: &str,
        source: SqlDialect,
        target: SqlDialect,
    ) -> Result<String> {
        let kind = classify(source_code);
        let prompt = match resolve(source, target, kind)? {
            TemplateSelection::Identity => {
                tracing::debug!(%source, %target, "identity conversion, input returned unchanged");
                return Ok(source_code.to_string());
            }
            TemplateSelection::Query { source, target } => {
                tracing::debug!(%source, %target, "plain query translation");
                compose_query(source, target, source_code)
            }
            TemplateSelection::Routine(template) => {
                tracing::debug!(%source, %target, "routine conversion");
                compose_routine(template, source, source_code)
            }
        };

        let converted = self.client.complete(&prompt).await?;
        tracing::info!(%source, %target, output_bytes = converted.len(), "conversion complete");
        Ok(converted)
    }

    /// Optimize SQL for one dialect using its fixed tip list.
    pub async fn optimize(&self, sql_code: &str, dialect: SqlDialect) -> Result<String> {
        let prompt = compose_optimization(dialect, sql_code);
        let optimized = self.client.complete(&prompt).await?;
        tracing::info!(%dialect, output_bytes = optimized.len(), "optimization complete");
        Ok(optimized)
    }
}
