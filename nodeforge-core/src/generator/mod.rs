//! Fixture sampling.
//!
//! [`FixtureGenerator`] draws every reference target independently and
//! uniformly from `[0, node_count)`, with replacement. Self-loops and
//! duplicate targets within one node are kept: the downstream consumer is
//! expected to cope with arbitrary graphs.
//!
//! Sampling order is fixed (node 0 slots `a..d`, node 1 slots `a..d`, ...,
//! then the root), so a given seed always yields the same fixture.

use std::{fmt, num::NonZeroUsize};

use rand::{Rng, RngCore, SeedableRng, rngs::OsRng, rngs::SmallRng};
use tracing::{Span, debug, field, info, instrument};

use crate::{
    Result,
    error::FixtureError,
    model::{Block, ControlTrailer, Label, NodeBlock, NodeName, Reference},
    render::{Layout, render_blocks, write_blocks},
};

/// Produces randomized node-graph fixtures of a fixed shape.
///
/// Instances are immutable; the random source is either created per call from
/// the configured seed or supplied by the caller, so one generator can be
/// shared across threads.
///
/// # Examples
/// ```
/// use nodeforge_core::FixtureGeneratorBuilder;
///
/// let generator = FixtureGeneratorBuilder::new()
///     .with_node_count(3)
///     .with_seed(9)
///     .build()?;
/// let text = generator.generate()?;
/// assert!(text.starts_with("node Node0 { children { "));
/// assert!(text.ends_with("pass B;\n"));
/// # Ok::<(), nodeforge_core::FixtureError>(())
/// ```
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FixtureGenerator {
    node_count: NonZeroUsize,
    seed: Option<u64>,
}

impl FixtureGenerator {
    pub(crate) const fn new(node_count: NonZeroUsize, seed: Option<u64>) -> Self {
        Self { node_count, seed }
    }

    /// Returns the number of indexed nodes per fixture.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> NonZeroUsize { self.node_count }

    /// Returns the configured seed, if any.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> Option<u64> { self.seed }

    /// Samples a fixture using the configured seed, or a seed drawn from
    /// operating-system entropy when none was configured.
    ///
    /// The seed actually used is stored in the returned [`Fixture`] and
    /// logged, so an unseeded run can be replayed.
    ///
    /// # Errors
    /// Returns [`FixtureError::EntropyUnavailable`] when no seed was configured
    /// and the operating system cannot provide one.
    #[instrument(
        name = "fixture.sample",
        err,
        skip(self),
        fields(node_count = self.node_count.get(), seed = field::Empty),
    )]
    pub fn sample(&self) -> Result<Fixture> {
        let seed = match self.seed {
            Some(seed) => seed,
            None => {
                let drawn = draw_entropy_seed()?;
                info!(seed = drawn, "drew fixture seed from operating-system entropy");
                drawn
            }
        };
        Span::current().record("seed", seed);

        let mut rng = SmallRng::seed_from_u64(seed);
        let fixture = self.build_fixture(&mut rng, Some(seed));
        debug!(blocks = fixture.blocks().len(), "fixture sampled");
        Ok(fixture)
    }

    /// Samples a fixture from a caller-supplied random source.
    ///
    /// The returned fixture carries no seed. Any random source works,
    /// including a `&mut dyn RngCore` handle.
    ///
    /// # Examples
    /// ```
    /// use nodeforge_core::FixtureGeneratorBuilder;
    /// use rand::{SeedableRng, rngs::SmallRng};
    ///
    /// let generator = FixtureGeneratorBuilder::new().with_node_count(5).build()?;
    /// let mut rng = SmallRng::seed_from_u64(1);
    /// let fixture = generator.sample_with(&mut rng);
    /// assert_eq!(fixture.nodes().count(), 5);
    /// assert!(fixture.seed().is_none());
    /// # Ok::<(), nodeforge_core::FixtureError>(())
    /// ```
    pub fn sample_with<R: Rng + ?Sized>(&self, rng: &mut R) -> Fixture {
        self.build_fixture(rng, None)
    }

    /// Generates the fixture text in the compact layout.
    ///
    /// # Errors
    /// Returns [`FixtureError::EntropyUnavailable`] under the same conditions
    /// as [`FixtureGenerator::sample`].
    pub fn generate(&self) -> Result<String> {
        Ok(self.sample()?.to_string())
    }

    /// Generates the fixture text in the compact layout from a caller-supplied
    /// random source.
    pub fn generate_with<R: Rng + ?Sized>(&self, rng: &mut R) -> String {
        self.sample_with(rng).to_string()
    }

    fn build_fixture<R: Rng + ?Sized>(&self, rng: &mut R, seed: Option<u64>) -> Fixture {
        let node_count = self.node_count.get();
        let mut blocks = Vec::with_capacity(node_count.saturating_add(2));
        for index in 0..node_count {
            blocks.push(Block::Node(self.sample_node(NodeName::Indexed(index), rng)));
        }
        blocks.push(Block::Root(self.sample_node(NodeName::Root, rng)));
        blocks.push(Block::Trailer(ControlTrailer));

        Fixture {
            blocks,
            node_count: self.node_count,
            seed,
        }
    }

    fn sample_node<R: Rng + ?Sized>(&self, name: NodeName, rng: &mut R) -> NodeBlock {
        let bound = self.node_count.get();
        let references = Label::ALL.map(|label| Reference::new(label, rng.gen_range(0..bound)));
        NodeBlock::new(name, references)
    }
}

fn draw_entropy_seed() -> Result<u64> {
    let mut entropy =
        SmallRng::from_rng(OsRng).map_err(|source| FixtureError::EntropyUnavailable { source })?;
    Ok(entropy.next_u64())
}

/// A sampled fixture: indexed node blocks, the root block and the trailer, in
/// emission order.
///
/// [`fmt::Display`] renders the compact layout.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Fixture {
    blocks: Vec<Block>,
    node_count: NonZeroUsize,
    seed: Option<u64>,
}

impl Fixture {
    /// Returns all blocks in emission order.
    #[must_use]
    pub fn blocks(&self) -> &[Block] {
        &self.blocks
    }

    /// Returns the number of indexed nodes the fixture was sampled for.
    #[must_use]
    #[rustfmt::skip]
    pub const fn node_count(&self) -> usize { self.node_count.get() }

    /// Returns the seed that produced this fixture, when known.
    #[must_use]
    #[rustfmt::skip]
    pub const fn seed(&self) -> Option<u64> { self.seed }

    /// Iterates over the indexed node blocks in index order.
    pub fn nodes(&self) -> impl Iterator<Item = &NodeBlock> + '_ {
        self.blocks.iter().filter_map(|block| match block {
            Block::Node(node) => Some(node),
            Block::Root(_) | Block::Trailer(_) => None,
        })
    }

    /// Returns the root block.
    #[must_use]
    pub fn root(&self) -> Option<&NodeBlock> {
        self.blocks.iter().find_map(|block| match block {
            Block::Root(node) => Some(node),
            Block::Node(_) | Block::Trailer(_) => None,
        })
    }

    /// Renders the fixture with the requested layout.
    #[must_use]
    pub fn render(&self, layout: Layout) -> String {
        render_blocks(&self.blocks, layout)
    }
}

impl fmt::Display for Fixture {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_blocks(f, &self.blocks, Layout::Compact)
    }
}
