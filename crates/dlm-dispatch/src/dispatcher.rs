//! Validate, classify and append events.

use dlm_config::DispatchConfig;
use dlm_schema::TemplateCatalog;
use dlm_walk::merge_validate_normalize;
use serde::Serialize;
use serde_json::Value;

use crate::error::DispatchError;
use crate::section::SectionResolver;
use crate::sink::EventSink;

/// What was appended for a successful push.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Receipt {
    pub event: String,
    pub payload: Value,
}

/// Pushes caller parameters through a template into a sink.
///
/// Holds no mutable state of its own; concurrent pushes only share the
/// sink.
#[derive(Debug)]
pub struct Dispatcher<S> {
    catalog: TemplateCatalog,
    sink: S,
    resolver: SectionResolver,
    classification_field: String,
}

impl<S: EventSink> Dispatcher<S> {
    #[must_use]
    pub fn new(catalog: TemplateCatalog, sink: S, config: &DispatchConfig) -> Self {
        Self {
            catalog,
            sink,
            resolver: SectionResolver::new(config),
            classification_field: config.classification_field.clone(),
        }
    }

    pub const fn catalog(&self) -> &TemplateCatalog {
        &self.catalog
    }

    pub const fn sink(&self) -> &S {
        &self.sink
    }

    /// Build the payload for `event_key` from `params` and append it.
    ///
    /// When the payload leaves the classification field missing, `null` or
    /// empty, it is stamped with the section resolved from `page_path`.
    ///
    /// # Errors
    ///
    /// - [`DispatchError::UnknownEvent`] if no template has that key
    /// - [`DispatchError::Validation`] if `params` fail the template; the
    ///   sink is not touched
    /// - [`DispatchError::Sink`] if appending fails
    pub fn push(
        &self,
        event_key: &str,
        params: &Value,
        page_path: &str,
    ) -> Result<Receipt, DispatchError> {
        let Some(template) = self.catalog.get(event_key) else {
            tracing::warn!(event = event_key, "event not found in templates");
            return Err(DispatchError::UnknownEvent(event_key.to_string()));
        };
        let event = template.event_name();

        let mut payload = merge_validate_normalize(template.schema(), params, event)
            .inspect_err(|error| tracing::error!(%event, %error, "event rejected"))?;

        if let Value::Object(map) = &mut payload {
            let unset = map.get(&self.classification_field).is_none_or(is_falsy);
            if unset {
                let section = self.resolver.resolve(page_path);
                map.insert(self.classification_field.clone(), Value::String(section));
            }
        }

        self.sink.append(&payload)?;
        tracing::debug!(%event, "event appended");

        Ok(Receipt {
            event: event.to_string(),
            payload,
        })
    }
}

/// `null`, `false`, zero and `""` leave the classification field unset.
fn is_falsy(value: &Value) -> bool {
    match value {
        Value::Null => true,
        Value::Bool(flag) => !flag,
        Value::Number(number) => number.as_f64() == Some(0.0),
        Value::String(text) => text.is_empty(),
        Value::Array(_) | Value::Object(_) => false,
    }
}
