//! INI file configuration adapter.
//!
//! Values are trimmed; a key present with an empty value reads as absent.

use crate::domain::error::TickbenchError;
use crate::ports::config_port::ConfigPort;
use configparser::ini::Ini;
use std::path::Path;

pub struct FileConfigAdapter {
    ini: Ini,
    origin: String,
}

impl FileConfigAdapter {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, TickbenchError> {
        let origin = path.as_ref().display().to_string();
        let mut ini = Ini::new();
        ini.load(path.as_ref())
            .map_err(|reason| TickbenchError::ConfigParse {
                file: origin.clone(),
                reason,
            })?;
        Ok(Self { ini, origin })
    }

    pub fn from_string(content: &str) -> Result<Self, TickbenchError> {
        let origin = "<string>".to_string();
        let mut ini = Ini::new();
        ini.read(content.to_string())
            .map_err(|reason| TickbenchError::ConfigParse {
                file: origin.clone(),
                reason,
            })?;
        Ok(Self { ini, origin })
    }

    /// Where the configuration was read from, for log and error messages.
    pub fn origin(&self) -> &str {
        &self.origin
    }
}

impl ConfigPort for FileConfigAdapter {
    fn get_string(&self, section: &str, key: &str) -> Option<String> {
        self.ini
            .get(section, key)
            .map(|v| v.trim().to_string())
            .filter(|v| !v.is_empty())
    }
}
