//! Persisted module options — the modprobe config that survives a reboot.
//!
//! The file must always yield a `brightness=` and a `color=` assignment.
//! [`ModprobeConfig::ensure_valid`] repairs it when it does not: a file that
//! already existed is copied to `<path>.old`, then the canonical line (with
//! defaults filling the gaps) replaces it. The replacement is staged in a
//! temp file first, so a failed write leaves the original in place.

use std::ffi::OsString;
use std::fs::OpenOptions;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use crate::error::{Result, TuxlightError};
use crate::options::{KEY_COLOR, OptionsRecord, parse_assignments};
use crate::settings::Settings;

pub struct ModprobeConfig {
    path: PathBuf,
    module: String,
}

impl ModprobeConfig {
    pub fn new(settings: &Settings) -> Self {
        ModprobeConfig {
            path: settings.config_file.clone(),
            module: settings.module.clone(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path the original file is copied to before a repair.
    pub fn backup_path(&self) -> PathBuf {
        let mut name = OsString::from(self.path.as_os_str());
        name.push(".old");
        PathBuf::from(name)
    }

    /// Make sure the file holds both options, repairing it if needed.
    ///
    /// Returns `true` if the file was already valid (left untouched) and
    /// `false` if it was created or rewritten.
    pub fn ensure_valid(&self) -> Result<bool> {
        let just_created = self.create_if_missing()?;
        let contents = std::fs::read_to_string(&self.path)?;
        let (record, missing) = OptionsRecord::from_content(&contents);

        if !missing.any() {
            return Ok(true);
        }

        log::debug!(
            "{} is missing options (brightness: {}, color: {})",
            self.path.display(),
            missing.brightness,
            missing.color
        );
        let staged = self.stage(&record)?;
        if !just_created {
            let backup = self.backup_path();
            log::debug!("copying {} to {}", self.path.display(), backup.display());
            if let Err(e) = std::fs::copy(&self.path, &backup) {
                let _ = std::fs::remove_file(&staged.tmp);
                return Err(e.into());
            }
        }
        self.commit(staged)?;
        Ok(false)
    }

    /// Create an empty file if none exists. Returns whether it was created.
    fn create_if_missing(&self) -> Result<bool> {
        match OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(&self.path)
        {
            Ok(_) => {
                log::debug!("created empty {}", self.path.display());
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::AlreadyExists => Ok(false),
            Err(e) => Err(e.into()),
        }
    }

    /// Read the persisted options, with defaults for any that are absent.
    pub fn read_record(&self) -> Result<OptionsRecord> {
        let contents = std::fs::read_to_string(&self.path)?;
        Ok(OptionsRecord::from_content(&contents).0)
    }

    /// Color token of the persisted options, trimmed.
    ///
    /// Unlike [`read_record`](Self::read_record) this does not fall back to
    /// a default: a file without `color=` is an error.
    pub fn current_color(&self) -> Result<String> {
        let contents = std::fs::read_to_string(&self.path)?;
        parse_assignments(&contents)
            .get(KEY_COLOR)
            .map(|c| c.trim().to_string())
            .ok_or_else(|| {
                TuxlightError::Config(format!(
                    "no {KEY_COLOR}= option in {}",
                    self.path.display()
                ))
            })
    }

    /// Replace the whole file with the canonical options line.
    ///
    /// Writes a hidden sibling temp file and renames it over the target;
    /// falls back to a direct write when the rename fails. A crash can leave
    /// the dot-prefixed temp file behind, which modprobe ignores since it
    /// lacks the `.conf` suffix.
    pub fn write_record(&self, record: &OptionsRecord) -> Result<()> {
        let staged = self.stage(record)?;
        self.commit(staged)
    }

    /// Temp file next to the config: `<dir>/.<name>.tmp`.
    fn temp_path(&self) -> PathBuf {
        let mut name = OsString::from(".");
        name.push(self.path.file_name().unwrap_or_default());
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    /// Write the rendered record to the temp file. The config is not touched.
    fn stage(&self, record: &OptionsRecord) -> Result<Staged> {
        let contents = record.render(&self.module);
        let tmp = self.temp_path();
        log::debug!("writing {:?} to {}", contents.trim_end(), tmp.display());
        std::fs::write(&tmp, &contents)?;
        Ok(Staged { tmp, contents })
    }

    /// Move a staged record over the config file.
    fn commit(&self, staged: Staged) -> Result<()> {
        match std::fs::rename(&staged.tmp, &self.path) {
            Ok(()) => Ok(()),
            Err(_) => {
                let result = std::fs::write(&self.path, &staged.contents);
                let _ = std::fs::remove_file(&staged.tmp);
                result.map_err(Into::into)
            }
        }
    }
}

struct Staged {
    tmp: PathBuf,
    contents: String,
}
