//! Scaffold workspace locations

mod temp;

pub use temp::TempWorkspace;
