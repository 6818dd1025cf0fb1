//! JSON configuration of the demo tools.

pub mod bundle;
