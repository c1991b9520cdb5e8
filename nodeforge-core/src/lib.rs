//! Nodeforge core library.
//!
//! Generates randomized fixtures for stress-testing parsers of a node-graph
//! description language. A fixture declares `node_count` indexed nodes
//! (`Node0`, `Node1`, ...), one root node `Noderoot`, and a fixed
//! phase/pass trailer. Every node owns four child references labeled
//! `a`..`d`, each pointing at a uniformly sampled indexed node and tagged
//! `construct`.
//!
//! Sampling and rendering are separate steps: [`FixtureGenerator::sample`]
//! returns typed [`Block`] records and [`Fixture::render`] turns them into
//! text. Supplying a seed through [`FixtureGeneratorBuilder::with_seed`] makes
//! the output byte-for-byte reproducible.
//!
//! ```
//! use nodeforge_core::FixtureGeneratorBuilder;
//!
//! let generator = FixtureGeneratorBuilder::new().with_seed(7).build()?;
//! let fixture = generator.sample()?;
//! assert_eq!(fixture.nodes().count(), 300);
//! assert_eq!(fixture.to_string(), generator.generate()?);
//! # Ok::<(), nodeforge_core::FixtureError>(())
//! ```

mod builder;
mod error;
mod generator;
mod model;
mod render;

pub use crate::{
    builder::{DEFAULT_NODE_COUNT, FixtureGeneratorBuilder},
    error::{FixtureError, FixtureErrorCode, Result},
    generator::{Fixture, FixtureGenerator},
    model::{
        Action, Block, ControlTrailer, Label, NodeBlock, NodeName, REFERENCES_PER_NODE, Reference,
    },
    render::{Layout, render_blocks, write_block},
};
