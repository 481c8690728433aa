//! JSON operation scripts for driving a [`Session`] outside a scripting host.
//!
//! A script is a JSON array of steps:
//!
//! ```json
//! [
//!   { "op": "Gfx_Init", "args": [320, 200, "demo"] },
//!   { "op": "Gfx_SetColour", "args": [255, 0, 0] },
//!   { "op": "Gfx_FillRectangle", "args": [10, 10, 100, 50] },
//!   { "op": "Gfx_Paint" }
//! ]
//! ```

use crate::host::Session;
use crate::surface::SurfaceBackend;
use crate::value::Value;
use anyhow::{Context, Result, bail};
use log::{debug, info};
use serde::Deserialize;
use std::fs;
use std::path::Path;

/// One operation call in a script.
#[derive(Debug, Clone, Deserialize)]
pub struct Step {
    /// Host operation name, e.g. `Gfx_DrawLine`
    pub op: String,
    #[serde(default)]
    pub args: Vec<serde_json::Value>,
}

impl Step {
    /// Converts the JSON arguments into host values.
    pub fn values(&self) -> Result<Vec<Value>> {
        self.args.iter().map(json_to_value).collect()
    }
}

/// Ordered list of steps loaded from a JSON file.
#[derive(Debug, Clone, Deserialize)]
#[serde(transparent)]
pub struct Script {
    pub steps: Vec<Step>,
}

impl Script {
    pub fn parse(source: &str) -> Result<Self> {
        serde_json::from_str(source).context("Failed to parse script")
    }

    pub fn load(path: &Path) -> Result<Self> {
        let source = fs::read_to_string(path)
            .with_context(|| format!("Failed to read script from {}", path.display()))?;
        let script = Self::parse(&source)
            .with_context(|| format!("Invalid script {}", path.display()))?;
        info!("Loaded {} steps from {}", script.steps.len(), path.display());
        Ok(script)
    }

    /// Invokes every step in order and returns their results.
    ///
    /// # Errors
    /// Stops at the first step whose arguments cannot be converted or whose
    /// operation reports an error; the error names the step.
    pub fn run<B: SurfaceBackend>(&self, session: &mut Session<B>) -> Result<Vec<Value>> {
        let mut results = Vec::with_capacity(self.steps.len());
        for (index, step) in self.steps.iter().enumerate() {
            let args = step
                .values()
                .with_context(|| format!("Step {} ({}): bad arguments", index, step.op))?;
            let result = session
                .invoke(&step.op, &args)
                .with_context(|| format!("Step {} ({}) failed", index, step.op))?;
            debug!("Step {} {} -> {}", index, step.op, result);
            results.push(result);
        }
        Ok(results)
    }
}

/// Maps a JSON value onto the host value model.
///
/// Integral numbers that fit in `i32` become [`Value::Int`], other numbers
/// [`Value::Float`]. Objects have no host equivalent.
pub fn json_to_value(json: &serde_json::Value) -> Result<Value> {
    Ok(match json {
        serde_json::Value::Null => Value::Nil,
        serde_json::Value::Bool(b) => Value::Bool(*b),
        serde_json::Value::Number(n) => match n.as_i64().and_then(|i| i32::try_from(i).ok()) {
            Some(i) => Value::Int(i),
            None => match n.as_f64() {
                Some(f) => Value::Float(f),
                None => bail!("number {} is out of range", n),
            },
        },
        serde_json::Value::String(s) => Value::Str(s.clone()),
        serde_json::Value::Array(items) => {
            Value::List(items.iter().map(json_to_value).collect::<Result<_>>()?)
        }
        serde_json::Value::Object(_) => bail!("objects are not valid operation arguments"),
    })
}
