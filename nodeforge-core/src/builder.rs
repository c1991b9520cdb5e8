//! Builder utilities for configuring fixture generation.
//!
//! Validation happens once in [`FixtureGeneratorBuilder::build`], so a built
//! [`FixtureGenerator`] can always produce a fixture.

use std::num::NonZeroUsize;

use crate::{Result, error::FixtureError, generator::FixtureGenerator};

/// Number of indexed nodes emitted when no count is configured.
pub const DEFAULT_NODE_COUNT: usize = 300;

/// Configures and constructs [`FixtureGenerator`] instances.
///
/// # Examples
/// ```
/// use nodeforge_core::FixtureGeneratorBuilder;
///
/// let generator = FixtureGeneratorBuilder::new()
///     .with_node_count(3)
///     .with_seed(42)
///     .build()
///     .expect("builder configuration is valid");
/// assert_eq!(generator.node_count().get(), 3);
/// assert_eq!(generator.seed(), Some(42));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FixtureGeneratorBuilder {
    node_count: usize,
    seed: Option<u64>,
}

impl Default for FixtureGeneratorBuilder {
    fn default() -> Self {
        Self {
            node_count: DEFAULT_NODE_COUNT,
            seed: None,
        }
    }
}

impl FixtureGeneratorBuilder {
    /// Creates a builder populated with default parameters.
    ///
    /// # Examples
    /// ```
    /// use nodeforge_core::{DEFAULT_NODE_COUNT, FixtureGeneratorBuilder};
    ///
    /// let builder = FixtureGeneratorBuilder::new();
    /// assert_eq!(builder.node_count(), DEFAULT_NODE_COUNT);
    /// assert_eq!(builder.seed(), None);
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides the number of indexed nodes.
    #[must_use]
    pub const fn with_node_count(mut self, node_count: usize) -> Self {
        self.node_count = node_count;
        self
    }

    /// Returns the configured node count.
    #[must_use]
    pub const fn node_count(&self) -> usize {
        self.node_count
    }

    /// Fixes the seed so generation is reproducible.
    ///
    /// Without a seed every call to [`FixtureGenerator::sample`] draws a fresh
    /// one from operating-system entropy.
    #[must_use]
    pub const fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Returns the configured seed, if any.
    #[must_use]
    pub const fn seed(&self) -> Option<u64> {
        self.seed
    }

    /// Validates the configuration and constructs a [`FixtureGenerator`].
    ///
    /// # Errors
    /// Returns [`FixtureError::InvalidNodeCount`] when the node count is zero.
    ///
    /// # Examples
    /// ```
    /// use nodeforge_core::{FixtureError, FixtureGeneratorBuilder};
    ///
    /// let err = FixtureGeneratorBuilder::new()
    ///     .with_node_count(0)
    ///     .build()
    ///     .expect_err("zero nodes are rejected");
    /// assert!(matches!(err, FixtureError::InvalidNodeCount { got: 0 }));
    /// ```
    pub fn build(self) -> Result<FixtureGenerator> {
        let node_count = NonZeroUsize::new(self.node_count).ok_or(
            FixtureError::InvalidNodeCount {
                got: self.node_count,
            },
        )?;
        Ok(FixtureGenerator::new(node_count, self.seed))
    }
}
