//! Small browser-facing utilities.

pub mod storage;
