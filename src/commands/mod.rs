//! Command implementations for the Reazy bootstrap

pub mod add;
pub mod generate;
pub mod help;
pub mod init;
pub mod version;
