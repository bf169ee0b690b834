//! High score persistence
//!
//! Stores never fail loudly: a broken or unwritable save file is logged
//! and the game carries on with what it has in memory.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::error::SaveError;

pub trait ScoreStore {
    fn load_high_score(&mut self) -> u32;

    fn save_high_score(&mut self, score: u32);

    fn load_muted(&mut self) -> bool {
        false
    }

    fn save_muted(&mut self, _muted: bool) {}
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SaveData {
    pub best_score: u32,
    pub muted: bool,
}

/// Save data kept as pretty JSON on disk
pub struct JsonSaveFile {
    path: PathBuf,
    data: SaveData,
}

impl JsonSaveFile {
    /// Open the save file, falling back to empty data if it is missing or unreadable
    pub fn open(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let data = match read_save(&path) {
            Ok(data) => data,
            Err(e) => {
                warn!("Could not read save file {}: {}", path.display(), e);
                SaveData::default()
            }
        };
        Self { path, data }
    }

    pub fn data(&self) -> &SaveData {
        &self.data
    }

    fn persist(&self) {
        if let Err(e) = write_save(&self.path, &self.data) {
            warn!("Could not write save file {}: {}", self.path.display(), e);
        }
    }
}

impl ScoreStore for JsonSaveFile {
    fn load_high_score(&mut self) -> u32 {
        self.data.best_score
    }

    fn save_high_score(&mut self, score: u32) {
        self.data.best_score = score;
        self.persist();
    }

    fn load_muted(&mut self) -> bool {
        self.data.muted
    }

    fn save_muted(&mut self, muted: bool) {
        self.data.muted = muted;
        self.persist();
    }
}

fn read_save(path: &Path) -> Result<SaveData, SaveError> {
    if !path.exists() {
        debug!("No save file at {}", path.display());
        return Ok(SaveData::default());
    }
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

fn write_save(path: &Path, data: &SaveData) -> Result<(), SaveError> {
    let text = serde_json::to_string_pretty(data)?;
    fs::write(path, text)?;
    Ok(())
}

/// Key the save data is kept under in browser local storage
pub const STORAGE_KEY: &str = "snake_save";

/// Save data kept as JSON in local storage (the browser's `localStorage` on
/// wasm, a data file next to the binary elsewhere)
pub struct LocalStorageStore {
    key: String,
    data: SaveData,
}

impl LocalStorageStore {
    pub fn open(key: impl Into<String>) -> Self {
        let key = key.into();
        let raw = match quad_storage::STORAGE.lock() {
            Ok(storage) => storage.get(&key),
            Err(e) => {
                warn!("Local storage unavailable: {}", e);
                None
            }
        };
        let data = parse_stored(&key, raw.as_deref());
        Self { key, data }
    }

    pub fn data(&self) -> &SaveData {
        &self.data
    }

    fn persist(&self) {
        let text = match serde_json::to_string(&self.data) {
            Ok(text) => text,
            Err(e) => {
                warn!("Could not encode save data: {}", e);
                return;
            }
        };
        match quad_storage::STORAGE.lock() {
            Ok(mut storage) => storage.set(&self.key, &text),
            Err(e) => warn!("Could not write {} to local storage: {}", self.key, e),
        }
    }
}

impl ScoreStore for LocalStorageStore {
    fn load_high_score(&mut self) -> u32 {
        self.data.best_score
    }

    fn save_high_score(&mut self, score: u32) {
        self.data.best_score = score;
        self.persist();
    }

    fn load_muted(&mut self) -> bool {
        self.data.muted
    }

    fn save_muted(&mut self, muted: bool) {
        self.data.muted = muted;
        self.persist();
    }
}

/// Decode a stored value; a missing or unreadable one yields empty data
fn parse_stored(key: &str, raw: Option<&str>) -> SaveData {
    let Some(text) = raw else {
        debug!("Nothing stored under {}", key);
        return SaveData::default();
    };
    match serde_json::from_str(text) {
        Ok(data) => data,
        Err(e) => {
            warn!("Ignoring stored {}: {}", key, e);
            SaveData::default()
        }
    }
}

/// Keeps everything in memory
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    pub data: SaveData,
}

impl MemoryStore {
    pub fn with_high_score(best_score: u32) -> Self {
        Self { data: SaveData { best_score, muted: false } }
    }
}

impl ScoreStore for MemoryStore {
    fn load_high_score(&mut self) -> u32 {
        self.data.best_score
    }

    fn save_high_score(&mut self, score: u32) {
        self.data.best_score = score;
    }

    fn load_muted(&mut self) -> bool {
        self.data.muted
    }

    fn save_muted(&mut self, muted: bool) {
        self.data.muted = muted;
    }
}
