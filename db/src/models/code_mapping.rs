//! Virtual file mapping exchanged with the in-browser editor.
//!
//! A [`CodeMapping`] maps a virtual path (`/App.js`, `/index.html`, ...) to a
//! [`CodeFile`]. It serializes as a plain JSON object keyed by path, which is the
//! exact shape the editor widget consumes and emits, and is stored as a JSON
//! column on both `assignments.default_code` and `submissions.code`.
//!
//! At most one file carries `active = true`. Every mutating method on
//! [`CodeMapping`] keeps that true; mappings that arrive from the outside are
//! checked with [`CodeMapping::validate`].

use sea_orm::FromJsonQueryResult;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use thiserror::Error;

/// One virtual file.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CodeFile {
    pub code: String,
    #[serde(default)]
    pub hidden: bool,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub read_only: bool,
}

impl CodeFile {
    pub fn new(code: impl Into<String>) -> Self {
        Self {
            code: code.into(),
            ..Default::default()
        }
    }

    pub fn active(mut self) -> Self {
        self.active = true;
        self
    }

    pub fn hidden(mut self) -> Self {
        self.hidden = true;
        self
    }

    pub fn read_only(mut self) -> Self {
        self.read_only = true;
        self
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum CodeMappingError {
    #[error("File '{0}' does not exist")]
    UnknownPath(String),
    #[error("Invalid file path '{0}': paths must start with '/'")]
    InvalidPath(String),
    #[error("At most one file may be active, found: {}", .0.join(", "))]
    MultipleActive(Vec<String>),
    #[error("At least one file is required")]
    Empty,
}

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize, FromJsonQueryResult)]
#[serde(transparent)]
pub struct CodeMapping(BTreeMap<String, CodeFile>);

fn check_path(path: &str) -> Result<(), CodeMappingError> {
    if path.len() < 2 || !path.starts_with('/') {
        return Err(CodeMappingError::InvalidPath(path.to_string()));
    }
    Ok(())
}

impl CodeMapping {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn get(&self, path: &str) -> Option<&CodeFile> {
        self.0.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.0.contains_key(path)
    }

    /// Files in path order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &CodeFile)> {
        self.0.iter()
    }

    /// Adds or replaces a file. Inserting an active file deactivates every other file.
    pub fn insert(
        &mut self,
        path: impl Into<String>,
        file: CodeFile,
    ) -> Result<Option<CodeFile>, CodeMappingError> {
        let path = path.into();
        check_path(&path)?;
        if file.active {
            self.clear_active();
        }
        Ok(self.0.insert(path, file))
    }

    /// Builder form of [`CodeMapping::insert`] for static file sets.
    pub fn with_file(mut self, path: &str, file: CodeFile) -> Result<Self, CodeMappingError> {
        self.insert(path, file)?;
        Ok(self)
    }

    pub fn remove(&mut self, path: &str) -> Option<CodeFile> {
        self.0.remove(path)
    }

    /// Makes `path` the single active file.
    pub fn set_active(&mut self, path: &str) -> Result<(), CodeMappingError> {
        if !self.0.contains_key(path) {
            return Err(CodeMappingError::UnknownPath(path.to_string()));
        }
        for (p, file) in self.0.iter_mut() {
            file.active = p == path;
        }
        Ok(())
    }

    /// Replaces the text of an existing file, leaving its flags alone.
    pub fn update_code(
        &mut self,
        path: &str,
        code: impl Into<String>,
    ) -> Result<(), CodeMappingError> {
        let file = self
            .0
            .get_mut(path)
            .ok_or_else(|| CodeMappingError::UnknownPath(path.to_string()))?;
        file.code = code.into();
        Ok(())
    }

    pub fn active_path(&self) -> Option<&str> {
        self.0
            .iter()
            .find(|(_, f)| f.active)
            .map(|(p, _)| p.as_str())
    }

    /// Non-hidden files in path order.
    pub fn visible_files(&self) -> Vec<(&str, &CodeFile)> {
        self.0
            .iter()
            .filter(|(_, f)| !f.hidden)
            .map(|(p, f)| (p.as_str(), f))
            .collect()
    }

    /// Checks a mapping that was built outside this type, e.g. deserialized from a request.
    pub fn validate(&self) -> Result<(), CodeMappingError> {
        for path in self.0.keys() {
            check_path(path)?;
        }
        let active: Vec<String> = self
            .0
            .iter()
            .filter(|(_, f)| f.active)
            .map(|(p, _)| p.clone())
            .collect();
        if active.len() > 1 {
            return Err(CodeMappingError::MultipleActive(active));
        }
        Ok(())
    }

    /// [`CodeMapping::validate`] plus a non-empty check, for submissions.
    pub fn validate_non_empty(&self) -> Result<(), CodeMappingError> {
        if self.0.is_empty() {
            return Err(CodeMappingError::Empty);
        }
        self.validate()
    }

    fn clear_active(&mut self) {
        for file in self.0.values_mut() {
            file.active = false;
        }
    }
}
