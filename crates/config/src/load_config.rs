// SPDX-License-Identifier: LGPL-3.0-only
//
// This file is provided WITHOUT ANY WARRANTY;
// without even the implied warranty of MERCHANTABILITY
// or FITNESS FOR A PARTICULAR PURPOSE.

use std::path::{Path, PathBuf};

use path_clean::clean;

pub type FindInParent = fn(&Path, &str) -> Option<PathBuf>;

/// Where the configuration file should be read from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfigFile {
    /// Given on the command line. Reading it must succeed.
    Required(PathBuf),
    /// Discovered or defaulted. Skipped when it does not exist.
    Optional(PathBuf),
    /// No candidate at all; only defaults, environment and flags apply.
    None,
}

impl ConfigFile {
    pub fn path(&self) -> Option<&Path> {
        match self {
            ConfigFile::Required(path) | ConfigFile::Optional(path) => Some(path),
            ConfigFile::None => None,
        }
    }
}

pub fn find_in_parent(path: &Path, filename: &str) -> Option<PathBuf> {
    path.ancestors()
        .map(|dir| dir.join(filename))
        .find(|file_path| file_path.exists())
}

pub fn resolve_config_path(
    find_in_parent: FindInParent,
    cwd: &Path,
    default_config_dir: Option<&Path>,
    default_filename: &str,
    cli_file: Option<&Path>,
) -> ConfigFile {
    if let Some(cli_file) = cli_file {
        if cli_file.is_absolute() {
            return ConfigFile::Required(cli_file.to_path_buf());
        }

        return ConfigFile::Required(clean(cwd.join(cli_file)));
    }

    if let Some(found) = find_in_parent(cwd, default_filename) {
        return ConfigFile::Optional(found);
    }

    match default_config_dir {
        Some(dir) => ConfigFile::Optional(clean(dir.join(default_filename))),
        None => ConfigFile::None,
    }
}
