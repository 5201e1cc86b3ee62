use std::{collections::BTreeSet, error::Error};

use libc::c_int;
use nix::errno::Errno;

use crate::names;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryError {
    /// The OS does not know the identifier or it does not apply here.
    Unsupported(c_int),
    /// Any other failure reported through errno.
    Os { id: c_int, errno: Errno },
}

impl QueryError {
    pub fn is_unsupported(&self) -> bool {
        matches!(self, QueryError::Unsupported(_))
    }
}

impl Error for QueryError {}

impl std::fmt::Display for QueryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            QueryError::Unsupported(id) => write!(f, "sysconf({}) is not supported", id),
            QueryError::Os { id, errno } => {
                write!(f, "sysconf({}) failed: {}", id, errno.desc())
            }
        }
    }
}

/// Where the dump gets its parameters from.
pub trait SysconfSource {
    /// Distinct identifiers to query.
    fn identifiers(&self) -> BTreeSet<c_int>;
    fn query(&self, id: c_int) -> Result<i64, QueryError>;
    /// Human readable names of `id`, only used for diagnostics.
    fn names(&self, _id: c_int) -> Vec<&'static str> {
        Vec::new()
    }
}

/// The running host, queried through `sysconf(3)`.
#[derive(Debug, Default, Clone, Copy)]
pub struct HostSysconf;

impl SysconfSource for HostSysconf {
    fn identifiers(&self) -> BTreeSet<c_int> {
        names::identifiers()
    }

    fn query(&self, id: c_int) -> Result<i64, QueryError> {
        query(id)
    }

    fn names(&self, id: c_int) -> Vec<&'static str> {
        names::names_for(id)
    }
}

pub fn query(id: c_int) -> Result<i64, QueryError> {
    // -1 is also a valid answer ("no limit"), only errno tells them apart
    Errno::clear();
    let value = unsafe { libc::sysconf(id) };
    if value == -1 {
        match Errno::last_raw() {
            0 => {}
            libc::EINVAL => return Err(QueryError::Unsupported(id)),
            raw => {
                return Err(QueryError::Os {
                    id,
                    errno: Errno::from_raw(raw),
                });
            }
        }
    }
    Ok(i64::from(value))
}
