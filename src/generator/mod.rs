//! Component generation for numu
//!
//! This module contains the core generation components:
//! - `params`: Invocation parameters and the paths derived from them
//! - `operation`: File-system changes planned by the generator
//! - `processor`: Precondition checks, planning and execution

pub mod operation;
pub mod params;
pub mod processor;

pub use operation::GenerateOperation;
pub use params::{ComponentParams, TargetPaths};
pub use processor::ComponentGenerator;
