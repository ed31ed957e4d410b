use std::{
    borrow::Cow,
    ffi::OsString,
    fs::{self, Metadata, read_dir},
    path::{Path, PathBuf},
};

use log::{debug, info};

use crate::{
    config::FilterConfig,
    error::{FilterError, TraversalStep},
    pattern::{Anchoring, Pattern, SEPARATOR},
    record::FileRecord,
};

/// Relative path reported for the walk root itself.
const ROOT_REL: &str = ".";

/// Walk `config.target_dir()` depth-first and collect a record for every
/// entry that matches the include pattern and not the exclude pattern.
///
/// Filtering is per entry: directories are always descended, whether or not
/// they matched. Any filesystem error aborts the walk and no records are
/// returned.
pub fn filter(config: &FilterConfig) -> Result<Vec<FileRecord>, FilterError> {
    config.validate()?;

    let include = Pattern::new(&config.include, config.options);
    let exclude = Pattern::new(&config.exclude, config.options);
    let root = config.target_dir();

    let mut walker = FilterWalker::new(root, &include, &exclude)?;
    walker.walk()?;

    info!(
        "[walk] {} matches under {} (glob={:?}, excludes={:?})",
        walker.records.len(),
        root.display(),
        include.as_str(),
        exclude.as_str(),
    );

    Ok(walker.records)
}

struct FilterWalker<'a> {
    root: &'a Path,
    /// Root in absolute form without a trailing separator (empty for `/`).
    absolute_root: String,
    include: &'a Pattern,
    exclude: &'a Pattern,
    records: Vec<FileRecord>,
}

/// A directory entry read ahead of recursion so the listing handle is
/// released before descending.
struct Child {
    os_name: OsString,
    name: String,
    path: PathBuf,
    is_dir: bool,
}

impl<'a> FilterWalker<'a> {
    fn new(
        root: &'a Path,
        include: &'a Pattern,
        exclude: &'a Pattern,
    ) -> Result<Self, FilterError> {
        let absolute = std::path::absolute(root)
            .map_err(FilterError::traversal(TraversalStep::ResolveRoot, root))?;
        let absolute_root = absolute
            .to_string_lossy()
            .trim_end_matches(SEPARATOR)
            .to_owned();

        Ok(FilterWalker {
            root,
            absolute_root,
            include,
            exclude,
            records: Vec::new(),
        })
    }

    fn walk(&mut self) -> Result<(), FilterError> {
        let root = self.root;
        let metadata =
            fs::metadata(root).map_err(FilterError::traversal(TraversalStep::ResolveRoot, root))?;

        let name = root_name(root)?;

        let is_dir = metadata.is_dir();
        self.consider(&name, "", root, Some(metadata))?;

        if is_dir {
            self.visit_dir(root, "")?;
        }
        Ok(())
    }

    fn visit_dir(&mut self, dir: &Path, rel: &str) -> Result<(), FilterError> {
        debug!("[walk] descending into {}", dir.display());

        for child in read_children(dir)? {
            let child_rel = join_rel(rel, &child.name);
            self.consider(&child.name, &child_rel, &child.path, None)?;

            // Symlinked directories report as links here and are not followed.
            if child.is_dir {
                self.visit_dir(&child.path, &child_rel)?;
            }
        }
        Ok(())
    }

    /// Apply include then exclude to one entry and record it if it survives.
    /// `rel` is empty for the root.
    fn consider(
        &mut self,
        name: &str,
        rel: &str,
        fs_path: &Path,
        metadata: Option<Metadata>,
    ) -> Result<(), FilterError> {
        let include_path = self.comparison_path(self.include.anchoring(), rel);
        if !self.include.matches(&include_path) {
            return Ok(());
        }

        if !self.exclude.is_empty() {
            let exclude_path = self.comparison_path(self.exclude.anchoring(), rel);
            if self.exclude.matches(&exclude_path) {
                debug!(
                    "[walk] path {} matches exclude criteria {}",
                    include_path,
                    self.exclude.as_str()
                );
                return Ok(());
            }
        }

        let metadata = match metadata {
            Some(m) => m,
            None => fs::symlink_metadata(fs_path)
                .map_err(FilterError::traversal(TraversalStep::ReadMetadata, fs_path))?,
        };

        let path = include_path.into_owned();
        let record = FileRecord::from_metadata(name.to_owned(), path, &metadata)
            .map_err(FilterError::traversal(TraversalStep::ReadMetadata, fs_path))?;
        self.records.push(record);
        Ok(())
    }

    fn comparison_path<'r>(&self, anchoring: Anchoring, rel: &'r str) -> Cow<'r, str> {
        match (anchoring, rel.is_empty()) {
            (Anchoring::Relative, true) => Cow::Borrowed(ROOT_REL),
            (Anchoring::Relative, false) => Cow::Borrowed(rel),
            (Anchoring::Absolute, true) if self.absolute_root.is_empty() => {
                Cow::Owned(SEPARATOR.to_string())
            }
            (Anchoring::Absolute, true) => Cow::Owned(self.absolute_root.clone()),
            (Anchoring::Absolute, false) => {
                Cow::Owned(format!("{}{SEPARATOR}{rel}", self.absolute_root))
            }
        }
    }
}

/// List `dir` in lexical name order. The listing handle is dropped on return.
fn read_children(dir: &Path) -> Result<Vec<Child>, FilterError> {
    let rd = read_dir(dir).map_err(FilterError::traversal(TraversalStep::ReadDir, dir))?;

    let mut children = Vec::new();
    for entry_res in rd {
        let entry = entry_res.map_err(FilterError::traversal(TraversalStep::ReadEntry, dir))?;
        let file_type = entry
            .file_type()
            .map_err(FilterError::traversal(TraversalStep::ReadEntry, &entry.path()))?;

        let os_name = entry.file_name();
        let name = os_name.to_string_lossy().into_owned();

        children.push(Child {
            name,
            os_name,
            path: entry.path(),
            is_dir: file_type.is_dir(),
        });
    }

    children.sort_by(|a, b| a.os_name.cmp(&b.os_name));
    Ok(children)
}

/// Final segment of the root. Roots without one (`.`, `a/..`) are resolved
/// first; the filesystem root itself is named `/`.
fn root_name(root: &Path) -> Result<String, FilterError> {
    if let Some(name) = root.file_name() {
        return Ok(name.to_string_lossy().into_owned());
    }

    let resolved =
        fs::canonicalize(root).map_err(FilterError::traversal(TraversalStep::ResolveRoot, root))?;
    Ok(resolved
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| SEPARATOR.to_string()))
}

fn join_rel(parent: &str, name: &str) -> String {
    if parent.is_empty() {
        name.to_owned()
    } else {
        format!("{parent}{SEPARATOR}{name}")
    }
}

#[cfg(test)]
#[path = "walker_tests.rs"]
mod tests;
