use std::fs;
use std::path::Path;

use tarot_core::Catalog;

use crate::error::{PromptError, PromptResult};
use crate::prompt::{CardPrompt, build_prompts};

/// Write one prompt file per card into `dir`, creating it if needed.
///
/// Existing files with the same names are overwritten. Returns the prompts
/// in the order they were written.
pub fn write_prompts(catalog: &Catalog, dir: &Path) -> PromptResult<Vec<CardPrompt>> {
    fs::create_dir_all(dir).map_err(|source| PromptError::CreateDir {
        path: dir.to_path_buf(),
        source,
    })?;

    let prompts = build_prompts(catalog);
    for prompt in &prompts {
        let path = dir.join(&prompt.filename);
        fs::write(&path, format!("{}\n", prompt.text))
            .map_err(|source| PromptError::Write { path: path.clone(), source })?;
        tracing::debug!(file = %path.display(), card = %prompt.card_name, "wrote prompt");
    }

    tracing::info!(count = prompts.len(), dir = %dir.display(), "prompt files written");
    Ok(prompts)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tarot_core::DeckKind;
    use tempfile::TempDir;

    #[test]
    fn writes_every_card() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("resources").join("prompts");
        let catalog = Catalog::load(DeckKind::Systems).unwrap();

        let written = write_prompts(&catalog, &out).unwrap();
        assert_eq!(written.len(), 78);
        assert_eq!(fs::read_dir(&out).unwrap().count(), 78);

        let body = fs::read_to_string(out.join("major_01_the_cascade.txt")).unwrap();
        assert!(body.contains("Card title at bottom: \"The Cascade\""));
        assert!(body.ends_with(".\n"));
    }

    #[test]
    fn rewriting_overwrites_in_place() {
        let tmp = TempDir::new().unwrap();
        let catalog = Catalog::load(DeckKind::Systems).unwrap();
        write_prompts(&catalog, tmp.path()).unwrap();
        write_prompts(&catalog, tmp.path()).unwrap();
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 78);
    }

    #[test]
    fn unwritable_target_is_reported() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("not-a-dir");
        fs::write(&blocker, "x").unwrap();
        let catalog = Catalog::load(DeckKind::Systems).unwrap();
        let err = write_prompts(&catalog, &blocker).unwrap_err();
        assert!(matches!(err, PromptError::CreateDir { .. }));
        assert!(err.to_string().contains("not-a-dir"));
    }
}
