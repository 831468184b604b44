use std::fs;
use std::path::Path;

use crate::game::model::Model;
use crate::Result;

/// Save a game in progress as pretty-printed JSON.
pub fn save_model<P: AsRef<Path>>(path: P, model: &Model) -> Result<()> {
    if let Some(parent) = path.as_ref().parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)?;
        }
    }
    let json = serde_json::to_string_pretty(model)?;
    fs::write(path, json)?;
    log::info!("Game saved");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_save_creates_the_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("saves/game.json");
        let model = Model::from_raw_values(&[&[2, 0], &[0, 4]], 12, 40);
        save_model(&path, &model).expect("save should succeed");
        assert!(path.exists(), "The save file should exist on disk.");
    }
}
