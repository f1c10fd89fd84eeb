use serde_json::Value;
use thiserror::Error;
use tracing::{debug, trace};

use optres_core::{InvalidAccess, Optional};

#[derive(Debug, Error)]
pub enum CliError {
  #[error("Parsing JSON failed: {0}")]
  Json(#[from] serde_json::Error),
  #[error("Reading value failed: {0}")]
  InvalidAccess(#[from] InvalidAccess),
}

/// How the evaluated value is written out.
#[derive(Clone, PartialEq, Debug)]
pub enum Output {
  /// `Some(<json>)` or `None`.
  Matched,
  /// The value, or the given default if there is none.
  Default(Value),
  /// The value; no value is an error.
  Strict,
}

/// Evaluation of a possibly-absent JSON input through a chain of JSON pointer lookups.
#[derive(Clone, PartialEq, Debug)]
pub struct Evaluation {
  pub pointers: Vec<String>,
  pub output: Output,
}

impl Evaluation {
  #[inline]
  pub fn new(pointers: Vec<String>, output: Output) -> Self {
    Self { pointers, output }
  }

  /// Wraps `input` into an [`Optional`] and applies each pointer lookup in order. A lookup that misses, or lands on
  /// `null`, turns the value into `None`.
  pub fn optional(&self, input: Option<Value>) -> Optional<Value> {
    let mut value = input.map_or(Optional::NONE, Optional::to_option);
    for pointer in &self.pointers {
      value = value.map(Some(|v: Value| v.pointer(pointer).cloned().unwrap_or(Value::Null)));
      trace!(%pointer, ?value, "applied pointer");
    }
    value
  }

  /// Evaluates `input` and renders the result according to [`Output`].
  pub fn render(&self, input: Option<Value>) -> Result<String, CliError> {
    let value = self.optional(input);
    debug!(?value, output = ?self.output, "evaluated input");
    let rendered = match &self.output {
      Output::Matched => value
        .match_with(Some(|v: Value| format!("Some({})", v)), Some(|| "None".to_string()))
        .into_value()?,
      Output::Default(default) => value.default_value(default.clone()).to_string(),
      Output::Strict => value.into_value()?.to_string(),
    };
    Ok(rendered)
  }
}

/// Parses a JSON command-line argument. An omitted argument is absent, not `null`.
pub fn parse_input(input: Option<&str>) -> Result<Option<Value>, CliError> {
  Ok(input.map(serde_json::from_str::<Value>).transpose()?)
}


#[cfg(test)]
mod tests {
  use serde_json::json;

  use super::*;

  fn eval(pointers: &[&str], output: Output) -> Evaluation {
    Evaluation::new(pointers.iter().map(|p| p.to_string()).collect(), output)
  }

  #[test]
  fn absent_and_null_input_are_none() {
    let evaluation = eval(&[], Output::Matched);
    assert_eq!(evaluation.optional(None), Optional::NONE);
    assert_eq!(evaluation.optional(Some(Value::Null)), Optional::NONE);
    assert_eq!(evaluation.render(None).unwrap(), "None");
  }

  #[test]
  fn present_input_is_some() {
    let evaluation = eval(&[], Output::Matched);
    assert_eq!(evaluation.render(Some(json!("Hello World"))).unwrap(), "Some(\"Hello World\")");
    assert_eq!(evaluation.render(Some(json!(false))).unwrap(), "Some(false)");
  }

  #[test]
  fn pointers_are_applied_in_order() {
    let evaluation = eval(&["/a", "/b/0"], Output::Matched);
    let input = json!({ "a": { "b": [123, 456] } });
    assert_eq!(evaluation.optional(Some(input)), Optional::Some(json!(123)));
  }

  #[test]
  fn missing_or_null_target_collapses_to_none() {
    let input = json!({ "a": null, "b": 1 });
    assert_eq!(eval(&["/a"], Output::Matched).optional(Some(input.clone())), Optional::NONE);
    assert_eq!(eval(&["/c"], Output::Matched).optional(Some(input.clone())), Optional::NONE);
    assert_eq!(eval(&["/c", "/b"], Output::Matched).optional(Some(input)), Optional::NONE);
  }

  #[test]
  fn default_output() {
    let evaluation = eval(&["/name"], Output::Default(json!("Scooby")));
    assert_eq!(evaluation.render(Some(json!({ "name": "Shaggy" }))).unwrap(), "\"Shaggy\"");
    assert_eq!(evaluation.render(Some(json!({}))).unwrap(), "\"Scooby\"");
    assert_eq!(evaluation.render(None).unwrap(), "\"Scooby\"");
  }

  #[test]
  fn strict_output_fails_on_none() {
    let evaluation = eval(&[], Output::Strict);
    assert_eq!(evaluation.render(Some(json!(1))).unwrap(), "1");
    assert!(matches!(evaluation.render(None), Err(CliError::InvalidAccess(InvalidAccess))));
  }

  #[test]
  fn parse_input_keeps_absent_and_null_apart() {
    assert_eq!(parse_input(None).unwrap(), None);
    assert_eq!(parse_input(Some("null")).unwrap(), Some(Value::Null));
    assert_eq!(parse_input(Some("{\"a\":1}")).unwrap(), Some(json!({ "a": 1 })));
    assert!(matches!(parse_input(Some("{")), Err(CliError::Json(_))));
  }
}
