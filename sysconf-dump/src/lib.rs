pub mod dump;
pub mod names;
pub mod sysconf;
