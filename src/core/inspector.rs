use crate::core::encoding::{entry_name_to_utf8, hex_encode, quoted_repr};
use crate::core::render::{self, OutputFormat};
use crate::domain::model::{EntryReport, InspectOutcome};
use crate::domain::ports::DirectoryLister;
use crate::utils::error::Result;
use std::io::Write;
use std::path::{Path, PathBuf};

pub struct Inspector<L: DirectoryLister> {
    lister: L,
    target: PathBuf,
    format: OutputFormat,
}

impl<L: DirectoryLister> Inspector<L> {
    pub fn new(lister: L, target: impl Into<PathBuf>, format: OutputFormat) -> Self {
        Self {
            lister,
            target: target.into(),
            format,
        }
    }

    pub fn target(&self) -> &Path {
        &self.target
    }

    /// Writes one report per directory entry to `out`.
    ///
    /// A missing target is reported and counts as success. Listing failures
    /// happen before anything is written; an entry whose name is not UTF-8
    /// stops the run after the entries preceding it have been written.
    pub fn run<W: Write>(&self, out: &mut W) -> Result<InspectOutcome> {
        if !self.lister.exists(&self.target) {
            tracing::debug!("Target path does not exist: {}", self.target.display());
            render::write_path_not_found(out, self.format, &self.target)?;
            return Ok(InspectOutcome::PathNotFound(self.target.clone()));
        }

        tracing::debug!("Listing {}", self.target.display());
        let names = self.lister.list_names(&self.target)?;
        tracing::debug!("Found {} entries", names.len());

        let entries = names.len();
        for raw in names {
            let name = entry_name_to_utf8(raw)?;
            let entry = describe(name);
            tracing::trace!("{} -> {}", entry.repr, entry.hex);
            render::write_entry(out, self.format, &entry)?;
        }
        out.flush()?;

        Ok(InspectOutcome::Inspected { entries })
    }
}

pub fn describe(name: String) -> EntryReport {
    EntryReport {
        repr: quoted_repr(&name),
        hex: hex_encode(name.as_bytes()),
        name,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::InspectError;
    use std::ffi::OsString;

    struct FakeDirectory {
        exists: bool,
        names: Vec<OsString>,
    }

    impl FakeDirectory {
        fn with(names: &[&str]) -> Self {
            Self {
                exists: true,
                names: names.iter().map(OsString::from).collect(),
            }
        }
    }

    impl DirectoryLister for FakeDirectory {
        fn exists(&self, _path: &Path) -> bool {
            self.exists
        }

        fn list_names(&self, path: &Path) -> Result<Vec<OsString>> {
            if path.extension().is_some_and(|ext| ext == "sql") {
                return Err(InspectError::ListDirectory {
                    path: path.to_path_buf(),
                    source: std::io::Error::other("Not a directory"),
                });
            }
            Ok(self.names.clone())
        }
    }

    fn run_text(lister: FakeDirectory, target: &str) -> (Result<InspectOutcome>, String) {
        let inspector = Inspector::new(lister, target, OutputFormat::Text);
        let mut out = Vec::new();
        let result = inspector.run(&mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_missing_path_reports_and_succeeds() {
        let lister = FakeDirectory {
            exists: false,
            names: vec![],
        };
        let (result, output) = run_text(lister, "db/migration");

        assert_eq!(
            result.unwrap(),
            InspectOutcome::PathNotFound(PathBuf::from("db/migration"))
        );
        assert_eq!(output, "Path not found: db/migration\n");
    }

    #[test]
    fn test_empty_directory_prints_nothing() {
        let (result, output) = run_text(FakeDirectory::with(&[]), "db/migration");

        assert_eq!(result.unwrap(), InspectOutcome::Inspected { entries: 0 });
        assert!(output.is_empty());
    }

    #[test]
    fn test_entries_keep_listing_order() {
        let lister = FakeDirectory::with(&["z.sql", "caf\u{e9}.txt", "a.txt"]);
        let (result, output) = run_text(lister, "db/migration");

        assert_eq!(result.unwrap(), InspectOutcome::Inspected { entries: 3 });
        assert_eq!(
            output,
            "File: 'z.sql'\n  Hex: 7a2e73716c\n\
             File: 'caf\u{e9}.txt'\n  Hex: 636166c3a92e747874\n\
             File: 'a.txt'\n  Hex: 612e747874\n"
        );
    }

    #[test]
    fn test_listing_failure_writes_nothing() {
        let (result, output) = run_text(FakeDirectory::with(&["a.txt"]), "file.sql");

        assert!(matches!(result, Err(InspectError::ListDirectory { .. })));
        assert!(output.is_empty());
    }

    #[cfg(unix)]
    #[test]
    fn test_undecodable_name_stops_after_earlier_entries() {
        use std::os::unix::ffi::OsStringExt;

        let lister = FakeDirectory {
            exists: true,
            names: vec![
                OsString::from("a.txt"),
                OsString::from_vec(vec![0x63, 0x61, 0x66, 0xe9]),
                OsString::from("b.txt"),
            ],
        };
        let (result, output) = run_text(lister, "db/migration");

        assert!(matches!(result, Err(InspectError::Encoding { .. })));
        assert_eq!(output, "File: 'a.txt'\n  Hex: 612e747874\n");
    }

    #[test]
    fn test_describe() {
        let entry = describe("a.txt".to_string());
        assert_eq!(entry.name, "a.txt");
        assert_eq!(entry.repr, "'a.txt'");
        assert_eq!(entry.hex, "612e747874");
    }
}
