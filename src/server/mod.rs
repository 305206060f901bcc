//! Process-level plumbing: startup bootstrap and the accept loop.

pub mod bootstrap;
pub mod listener;
