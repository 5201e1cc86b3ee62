use std::{
    fs,
    path::{Path, PathBuf},
};

use anyhow::Context;
use common_utils::dump_eprintln;
use libc::c_int;

use crate::sysconf::SysconfSource;

pub const SYSCONF_DIR: &str = "sysconf";

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct DumpSummary {
    pub written: usize,
    pub skipped: usize,
}

pub fn sysconf_dir(dest: impl AsRef<Path>) -> PathBuf {
    dest.as_ref().join(SYSCONF_DIR)
}

/// Writes `value` as bare decimal digits to `<dir>/<id>`, replacing any
/// previous content. `dir` has to exist already.
pub fn write_value(dir: &Path, id: c_int, value: i64) -> anyhow::Result<PathBuf> {
    let path = dir.join(id.to_string());
    fs::write(&path, value.to_string())
        .with_context(|| format!("Failed to write '{}'", path.display()))?;
    Ok(path)
}

/// Queries every identifier of `source` and writes one file per value under
/// `<dest>/sysconf/`. Identifiers the OS rejects as unsupported are skipped;
/// any other query failure or a failed write aborts the dump.
pub fn dump_all(
    source: &impl SysconfSource,
    dest: impl AsRef<Path>,
) -> anyhow::Result<DumpSummary> {
    let dir = sysconf_dir(dest);
    let mut summary = DumpSummary::default();

    for id in source.identifiers() {
        let value = match source.query(id) {
            Ok(value) => value,
            Err(e) if e.is_unsupported() => {
                dump_eprintln!("skipping {} ({})", display_names(source, id), id);
                summary.skipped += 1;
                continue;
            }
            Err(e) => {
                return Err(e).context(format!("Failed to query {}", display_names(source, id)));
            }
        };

        write_value(&dir, id, value)?;
        dump_eprintln!("{} ({}) = {}", display_names(source, id), id, value);
        summary.written += 1;
    }

    dump_eprintln!("written {}, skipped {}", summary.written, summary.skipped);
    Ok(summary)
}

fn display_names(source: &impl SysconfSource, id: c_int) -> String {
    let names = source.names(id);
    if names.is_empty() {
        format!("sysconf {}", id)
    } else {
        names.join("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sysconf::QueryError;
    use nix::errno::Errno;
    use std::{cell::RefCell, collections::BTreeMap, collections::BTreeSet};

    struct FakeSource {
        values: BTreeMap<c_int, Result<i64, QueryError>>,
        queried: RefCell<Vec<c_int>>,
    }

    impl FakeSource {
        fn new(values: impl IntoIterator<Item = (c_int, Result<i64, QueryError>)>) -> Self {
            Self {
                values: values.into_iter().collect(),
                queried: RefCell::new(Vec::new()),
            }
        }
    }

    impl SysconfSource for FakeSource {
        fn identifiers(&self) -> BTreeSet<c_int> {
            self.values.keys().copied().collect()
        }

        fn query(&self, id: c_int) -> Result<i64, QueryError> {
            self.queried.borrow_mut().push(id);
            self.values[&id]
        }

        fn names(&self, id: c_int) -> Vec<&'static str> {
            match id {
                30 => vec!["SC_PAGESIZE", "SC_PAGE_SIZE"],
                _ => Vec::new(),
            }
        }
    }

    fn dest_with_sysconf_dir() -> tempfile::TempDir {
        let dest = tempfile::tempdir().unwrap();
        fs::create_dir(sysconf_dir(dest.path())).unwrap();
        dest
    }

    fn read(dest: &Path, id: c_int) -> String {
        fs::read_to_string(sysconf_dir(dest).join(id.to_string())).unwrap()
    }

    #[test]
    fn test_dump_writes_decimal_without_newline() {
        let dest = dest_with_sysconf_dir();
        let source = FakeSource::new([(30, Ok(4096)), (2, Ok(100))]);

        let summary = dump_all(&source, dest.path()).unwrap();

        assert_eq!(summary, DumpSummary { written: 2, skipped: 0 });
        assert_eq!(read(dest.path(), 30), "4096");
        assert_eq!(read(dest.path(), 2), "100");
    }

    #[test]
    fn test_dump_writes_negative_values() {
        let dest = dest_with_sysconf_dir();
        let source = FakeSource::new([(6, Ok(-1))]);

        dump_all(&source, dest.path()).unwrap();

        assert_eq!(read(dest.path(), 6), "-1");
    }

    #[test]
    fn test_dump_skips_unsupported() {
        let dest = dest_with_sysconf_dir();
        let source = FakeSource::new([
            (30, Ok(4096)),
            (23, Err(QueryError::Unsupported(23))),
        ]);

        let summary = dump_all(&source, dest.path()).unwrap();

        assert_eq!(summary, DumpSummary { written: 1, skipped: 1 });
        assert!(!sysconf_dir(dest.path()).join("23").exists());
        assert_eq!(read(dest.path(), 30), "4096");
    }

    #[test]
    fn test_dump_propagates_unexpected_query_failure() {
        let dest = dest_with_sysconf_dir();
        let source = FakeSource::new([(
            5,
            Err(QueryError::Os {
                id: 5,
                errno: Errno::EIO,
            }),
        )]);

        let err = dump_all(&source, dest.path()).unwrap_err();

        assert_eq!(
            err.downcast_ref::<QueryError>(),
            Some(&QueryError::Os {
                id: 5,
                errno: Errno::EIO
            })
        );
    }

    #[test]
    fn test_dump_fails_without_sysconf_dir() {
        let dest = tempfile::tempdir().unwrap();
        let source = FakeSource::new([(30, Ok(4096))]);

        let err = dump_all(&source, dest.path()).unwrap_err();

        assert!(format!("{:#}", err).contains("Failed to write"));
        assert!(!sysconf_dir(dest.path()).exists());
    }

    #[test]
    fn test_dump_queries_each_identifier_once() {
        let dest = dest_with_sysconf_dir();
        let source = FakeSource::new([(30, Ok(4096)), (4, Ok(1024)), (1, Ok(63))]);

        dump_all(&source, dest.path()).unwrap();

        assert_eq!(*source.queried.borrow(), vec![1, 4, 30]);
    }

    #[test]
    fn test_dump_truncates_previous_content() {
        let dest = dest_with_sysconf_dir();
        fs::write(sysconf_dir(dest.path()).join("30"), "1234567890\n").unwrap();
        let source = FakeSource::new([(30, Ok(4096))]);

        dump_all(&source, dest.path()).unwrap();

        assert_eq!(read(dest.path(), 30), "4096");
    }

    #[test]
    fn test_display_names() {
        let source = FakeSource::new([]);
        assert_eq!(display_names(&source, 30), "SC_PAGESIZE/SC_PAGE_SIZE");
        assert_eq!(display_names(&source, 2), "sysconf 2");
    }
}
