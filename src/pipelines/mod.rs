//! Pipelines.
//!
//! The module provides a light [pipeline::Pipeline] trait
//! and the [CorpusPipeline] that builds a Guarani corpus from seeds.
pub mod corpus;
#[allow(clippy::module_inception)]
pub mod pipeline;

pub use corpus::{CorpusPipeline, RunSummary};
pub use pipeline::Pipeline;
