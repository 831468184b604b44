use std::fs;
use std::path::Path;

use crate::game::model::Model;
use crate::Result;

/// Load a previously saved game. Missing or corrupt files are recoverable
/// errors, not panics: the caller decides whether to start fresh.
pub fn load_model<P: AsRef<Path>>(path: P) -> Result<Model> {
    let json = fs::read_to_string(path)?;
    let model = serde_json::from_str(&json)?;
    Ok(model)
}
