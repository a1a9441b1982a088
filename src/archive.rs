//! Archive extraction and membership filtering.
//!
//! The provisioning artifact arrives as a gzip-compressed tar stream whose
//! contents are arbitrary: root-module configuration files mixed with
//! subdirectories, OS-generated sidecar metadata, and unrelated files.
//! [`ArchiveFilter`] walks the tar entries and keeps only the files that
//! qualify as root-module configuration, returning a map from the literal
//! entry name to decoded text content.
//!
//! Entries that fail a membership rule are skipped without aborting the
//! walk; malformed bundles commonly carry sidecar files and nested example
//! directories, and those must not prevent extraction of the valid
//! top-level files. Format errors from the gzip/tar layer itself do abort,
//! since they indicate the artifact is broken.

use crate::config::{Config, FilterOptions};
use crate::error::Result;
use crate::types::FileMap;

use flate2::read::GzDecoder;
use std::io::Read;
use tar::Archive;

/// Selects root-module configuration files from a `.tar.gz` byte stream.
pub struct ArchiveFilter {
    filter: FilterOptions,
}

impl ArchiveFilter {
    /// Create a new archive filter with the given configuration.
    #[must_use]
    pub fn new(config: &Config) -> Self {
        Self {
            filter: config.filter.clone(),
        }
    }

    /// Decompress the archive and extract the qualifying entries.
    ///
    /// Entry names are preserved verbatim as map keys, including any `./`
    /// prefix; two naming conventions for "the same" file are not
    /// deduplicated.
    ///
    /// An archive with zero qualifying entries yields an empty map, not an
    /// error; the "nothing to parse" condition is reported one layer up.
    ///
    /// # Errors
    ///
    /// Returns `ArchiveFormat` if the bytes are not a valid gzip stream or
    /// not a valid tar stream once decompressed.
    pub fn extract(&self, archive: &[u8]) -> Result<FileMap> {
        let decoder = GzDecoder::new(archive);
        let mut tar = Archive::new(decoder);

        let mut files = FileMap::new();

        let entries = tar
            .entries()
            .map_err(|e| crate::err!(ArchiveFormat {
                message: e.to_string(),
            }))?;

        for entry in entries {
            // Both gzip and tar corruption surface here, mid-walk.
            let mut entry = entry.map_err(|e| crate::err!(ArchiveFormat {
                message: e.to_string(),
            }))?;

            let name = String::from_utf8_lossy(&entry.path_bytes()).into_owned();

            if !entry.header().entry_type().is_file() {
                tracing::debug!(entry = %name, "Skipping non-regular entry");
                continue;
            }

            if !self.is_root_configuration_file(&name) {
                continue;
            }

            tracing::debug!(entry = %name, "Found configuration file");

            let mut raw = Vec::new();
            entry
                .read_to_end(&mut raw)
                .map_err(|e| crate::err!(ArchiveFormat {
                    message: e.to_string(),
                }))?;

            files.insert(name, String::from_utf8_lossy(&raw).into_owned());
        }

        tracing::info!(files = files.len(), "Archive extraction complete");

        Ok(files)
    }

    /// Apply the membership rules to an entry name.
    ///
    /// An entry qualifies only if it survives every rule: it carries the
    /// configuration suffix (with at least one base character), it is not
    /// an archiver metadata sidecar, and it lives directly in the
    /// archive's logical root under either naming convention (`main.tf`
    /// or `./main.tf`, never inside a subdirectory).
    fn is_root_configuration_file(&self, name: &str) -> bool {
        let filter = &self.filter;

        if name.len() < filter.min_name_len()
            || !name.ends_with(&filter.configuration_suffix)
        {
            tracing::debug!(entry = %name, "Skipping non-configuration entry");
            return false;
        }

        if filter
            .metadata_prefixes
            .iter()
            .any(|prefix| name.starts_with(prefix.as_str()))
        {
            tracing::debug!(entry = %name, "Skipping potential metadata entry");
            return false;
        }

        let separators = name.matches(filter.path_separator).count();
        if name.starts_with(&filter.root_prefix) {
            // A root-prefixed name spends one separator on the marker.
            if separators > 1 {
                tracing::debug!(entry = %name, "Skipping entry in subdirectory");
                return false;
            }
        } else if separators > 0 {
            tracing::debug!(entry = %name, "Skipping entry in subdirectory");
            return false;
        }

        true
    }
}
