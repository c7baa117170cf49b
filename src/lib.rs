pub mod color;
pub mod config;
pub mod distribution;
pub mod error;
pub mod export;
pub mod grid;
pub mod layout;
pub mod lookup;
pub mod pitches;
pub mod session;
// cmd and reports are binary modules, declared in main.rs.
