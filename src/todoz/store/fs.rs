use super::DataStore;
use crate::error::{Result, TodoError};
use crate::model::Todo;
use std::fs;
use std::path::PathBuf;
use uuid::Uuid;

pub struct FileStore {
    path: PathBuf,
    pretty: bool,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            pretty: false,
        }
    }

    pub fn with_pretty(mut self, pretty: bool) -> Self {
        self.pretty = pretty;
        self
    }

    fn ensure_parent(&self) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                fs::create_dir_all(parent).map_err(TodoError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = self
            .path
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "data.json".to_string());
        self.path
            .with_file_name(format!(".{}-{}.tmp", name, Uuid::new_v4()))
    }
}

impl DataStore for FileStore {
    fn read(&self) -> Result<Vec<Todo>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(TodoError::Io)?;
        let todos: Vec<Todo> =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        Ok(todos)
    }

    fn write(&mut self, todos: &[Todo]) -> Result<()> {
        self.ensure_parent()?;

        let content = if self.pretty {
            serde_json::to_string_pretty(todos)
        } else {
            serde_json::to_string(todos)
        }
        .map_err(TodoError::Serialization)?;

        // Write beside the target, then swap it in whole
        let tmp_file = self.tmp_path();
        fs::write(&tmp_file, content).map_err(TodoError::Io)?;
        if let Err(e) = fs::rename(&tmp_file, &self.path) {
            let _ = fs::remove_file(&tmp_file);
            return Err(TodoError::Io(e));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn setup() -> (TempDir, FileStore) {
        let dir = TempDir::new().unwrap();
        let store = FileStore::new(dir.path().join("data.json"));
        (dir, store)
    }

    #[test]
    fn missing_document_reads_as_empty() {
        let (_dir, store) = setup();
        assert!(store.read().unwrap().is_empty());
        assert!(store.load().is_empty());
    }

    #[test]
    fn writes_compact_json_array() {
        let (dir, mut store) = setup();
        store.save(&[Todo::new(0, "buy milk")]).unwrap();

        let on_disk = fs::read_to_string(dir.path().join("data.json")).unwrap();
        assert_eq!(on_disk, r#"[{"id":0,"todo":"buy milk","complete":false}]"#);
    }

    #[test]
    fn pretty_output_still_loads() {
        let (dir, store) = setup();
        let mut store = store.with_pretty(true);
        store
            .save(&[Todo::new(0, "a"), Todo::new(1, "b")])
            .unwrap();

        let on_disk = fs::read_to_string(dir.path().join("data.json")).unwrap();
        assert!(on_disk.contains('\n'));
        assert_eq!(store.load().len(), 2);
    }

    #[test]
    fn save_replaces_whole_document() {
        let (_dir, mut store) = setup();
        store
            .save(&[Todo::new(0, "a"), Todo::new(1, "b")])
            .unwrap();
        store.save(&[Todo::new(7, "c")]).unwrap();

        assert_eq!(store.read().unwrap(), vec![Todo::new(7, "c")]);
    }

    #[test]
    fn leaves_no_tmp_files_behind() {
        let (dir, mut store) = setup();
        store.save(&[Todo::new(0, "a")]).unwrap();

        for entry in fs::read_dir(dir.path()).unwrap() {
            let path = entry.unwrap().path();
            let name = path.file_name().unwrap().to_str().unwrap();
            assert!(!name.ends_with(".tmp"), "Found leftover tmp file: {}", name);
        }
    }

    #[test]
    fn creates_missing_parent_directories() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("nested").join("todos.json");
        let mut store = FileStore::new(&path);

        store.save(&[Todo::new(0, "a")]).unwrap();
        assert!(path.exists());
    }

    #[test]
    fn corrupt_document_fails_read_but_loads_empty() {
        let (dir, store) = setup();
        fs::write(dir.path().join("data.json"), "{not json").unwrap();

        assert!(matches!(store.read(), Err(TodoError::Serialization(_))));
        assert!(store.load().is_empty());
    }

    #[test]
    fn round_trip_keeps_the_same_todos() {
        let (dir, mut store) = setup();
        fs::write(
            dir.path().join("data.json"),
            "[\n  {\"id\": 0, \"todo\": \"a\", \"complete\": true},\n  {\"id\": 3, \"todo\": \"b\", \"complete\": false}\n]",
        )
        .unwrap();

        let before = store.load();
        store.save(&before).unwrap();
        assert_eq!(store.load(), before);
    }
}
