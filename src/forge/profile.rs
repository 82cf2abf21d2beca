use serde::{Deserialize, Serialize};
use std::io::{Read, Write};
use thiserror::Error as ThisError;

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Profile {
    pub handle: Option<String>,
}

#[derive(Debug, ThisError)]
#[error("Error process profile: {0}")]
pub struct StorageError(#[from] serde_yaml::Error);

impl Profile {
    pub fn handle(&self) -> &str {
        self.handle.as_deref().unwrap_or("")
    }
    /// An empty handle signs the user out.
    pub fn set_handle(&mut self, handle: &str) {
        let handle = handle.trim();
        self.handle = if handle.is_empty() {
            None
        } else {
            Some(handle.to_string())
        };
    }
    pub fn from_reader<R: Read>(rdr: R) -> Result<Self, StorageError> {
        serde_yaml::from_reader(rdr).map_err(StorageError)
    }
    pub fn to_writer<W: Write>(&self, wr: W) -> Result<(), StorageError> {
        serde_yaml::to_writer(wr, self).map_err(StorageError)
    }
}
