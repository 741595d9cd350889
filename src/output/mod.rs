// src/output/mod.rs
mod options;
mod envi;
mod product;

pub use options::OutputOptions;
pub use envi::EnviHeader;
pub use product::{LifecycleState, OutputProduct};
