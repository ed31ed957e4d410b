use std::{fs::Metadata, io, time::SystemTime};

use chrono::{DateTime, SecondsFormat, SubsecRound, Utc};
use serde::{Serialize, Serializer};

/// One matched entry. Field names on the wire follow what downstream
/// pipeline steps read from `FILES_INFO`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FileRecord {
    /// Final path segment
    pub name: String,
    /// Relative to the walk root, or absolute for anchored include patterns
    pub path: String,
    #[serde(rename = "isDirectory")]
    pub is_directory: bool,
    /// `lstat` size; for directories this is the directory entry size
    #[serde(rename = "length")]
    pub size: u64,
    #[serde(rename = "lastModified", serialize_with = "serialize_rfc3339")]
    pub modified_at: DateTime<Utc>,
}

impl FileRecord {
    pub fn from_metadata(name: String, path: String, metadata: &Metadata) -> io::Result<Self> {
        Ok(FileRecord {
            name,
            path,
            is_directory: metadata.is_dir(),
            size: metadata.len(),
            modified_at: to_utc_secs(metadata.modified()?),
        })
    }
}

fn to_utc_secs(t: SystemTime) -> DateTime<Utc> {
    DateTime::<Utc>::from(t).trunc_subsecs(0)
}

fn serialize_rfc3339<S: Serializer>(t: &DateTime<Utc>, s: S) -> Result<S::Ok, S::Error> {
    s.serialize_str(&t.to_rfc3339_opts(SecondsFormat::Secs, true))
}

#[cfg(test)]
#[path = "record_tests.rs"]
mod tests;
