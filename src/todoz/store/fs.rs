use super::TodoStore;
use crate::error::{Result, TodozError};
use crate::model::Todo;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tracing::{debug, warn};
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TodozError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .and_then(|n| n.to_str())
            .unwrap_or("todos.json");
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl TodoStore for FileStore {
    fn load(&self) -> Result<Vec<Todo>> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "data file missing, starting empty");
                return Ok(Vec::new());
            }
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "data file unreadable, treating as empty");
                return Ok(Vec::new());
            }
        };

        match serde_json::from_str::<Vec<Todo>>(&content) {
            Ok(todos) => Ok(todos),
            Err(e) => {
                warn!(path = %self.path.display(), error = %e, "data file corrupt, treating as empty");
                Ok(Vec::new())
            }
        }
    }

    fn save(&mut self, todos: &[Todo]) -> Result<()> {
        self.ensure_parent_dir()?;
        let content = serde_json::to_string_pretty(todos).map_err(TodozError::Serialization)?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(TodozError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(TodozError::Io(e));
        }

        debug!(path = %self.path.display(), count = todos.len(), "saved todos");
        Ok(())
    }
}
