//! The site's own configuration file (`_config.yml`).
//!
//! Only the navigation list is interpreted; the raw text is kept so the
//! rest of the file can be written back byte for byte.

use serde_yaml::Value;
use std::{
    fs, io,
    path::{Path, PathBuf},
};

use super::ConfigError;
use crate::nav::NavEntry;

/// A loaded `_config.yml`.
#[derive(Debug, Clone)]
pub struct SiteFile {
    pub path: PathBuf,
    /// File content as read from disk.
    pub raw: String,
    /// Entries under the navigation key (empty if absent or null).
    pub navigation: Vec<NavEntry>,
}

impl SiteFile {
    /// Load the site config at `path`.
    ///
    /// Returns `Ok(None)` if the file does not exist or its document is
    /// empty, `null` or `false`.
    pub fn load(path: &Path, nav_key: &str) -> Result<Option<Self>, ConfigError> {
        let raw = match fs::read_to_string(path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(ConfigError::Io(path.to_path_buf(), err)),
        };

        let Some(navigation) = Self::parse_navigation(&raw, nav_key, path)? else {
            return Ok(None);
        };

        Ok(Some(Self {
            path: path.to_path_buf(),
            raw,
            navigation,
        }))
    }

    /// Parse `raw` and extract the list under `nav_key`.
    ///
    /// `None` means the document is empty or falsy.
    pub fn parse_navigation(
        raw: &str,
        nav_key: &str,
        path: &Path,
    ) -> Result<Option<Vec<NavEntry>>, ConfigError> {
        let document: Value =
            serde_yaml::from_str(raw).map_err(|err| ConfigError::Yaml(path.to_path_buf(), err))?;

        let fields = match document {
            Value::Null | Value::Bool(false) => return Ok(None),
            Value::Mapping(fields) => fields,
            _ => {
                return Err(ConfigError::Validation(format!(
                    "`{}` must contain a mapping at the top level",
                    path.display()
                )));
            }
        };

        match fields.get(nav_key) {
            None | Some(Value::Null) => Ok(Some(Vec::new())),
            Some(list) => serde_yaml::from_value(list.clone())
                .map(Some)
                .map_err(|err| ConfigError::Yaml(path.to_path_buf(), err)),
        }
    }
}
