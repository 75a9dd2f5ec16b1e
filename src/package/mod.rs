//! Deciding what to install and which package manager installs it

pub mod manager;
pub mod specifier;

pub use manager::{ManagerKind, PackageManager};
pub use specifier::PackageSpecifier;
