//! Typed records for the blocks of a generated fixture.
//!
//! Generation produces these records first and rendering turns them into
//! text afterwards, so sampling can be inspected without parsing output.

use std::fmt;

/// Number of outgoing references owned by every node and by the root.
pub const REFERENCES_PER_NODE: usize = 4;

const NODE_PREFIX: &str = "Node";
const ROOT_SUFFIX: &str = "root";

/// Label attached to one of the four child slots of a node.
///
/// # Examples
/// ```
/// use nodeforge_core::Label;
///
/// let rendered: Vec<&str> = Label::ALL.iter().map(|label| label.as_str()).collect();
/// assert_eq!(rendered, ["a", "b", "c", "d"]);
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum Label {
    /// First child slot.
    A,
    /// Second child slot.
    B,
    /// Third child slot.
    C,
    /// Fourth child slot.
    D,
}

impl Label {
    /// All labels in emission order.
    pub const ALL: [Self; REFERENCES_PER_NODE] = [Self::A, Self::B, Self::C, Self::D];

    /// Returns the identifier written into the fixture.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::A => "a",
            Self::B => "b",
            Self::C => "c",
            Self::D => "d",
        }
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Action tag carried by a reference.
///
/// Only `construct` is ever produced.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Action {
    /// Construct the referenced child.
    #[default]
    Construct,
}

impl Action {
    /// Returns the keyword written into the fixture.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Construct => "construct",
        }
    }
}

impl fmt::Display for Action {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Name of a declared node.
///
/// # Examples
/// ```
/// use nodeforge_core::NodeName;
///
/// assert_eq!(NodeName::Indexed(42).to_string(), "Node42");
/// assert_eq!(NodeName::Root.to_string(), "Noderoot");
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum NodeName {
    /// A regular node identified by its index.
    Indexed(usize),
    /// The single root node outside the index space.
    Root,
}

impl NodeName {
    /// Returns the index of a regular node, or `None` for the root.
    #[must_use]
    pub const fn index(self) -> Option<usize> {
        match self {
            Self::Indexed(index) => Some(index),
            Self::Root => None,
        }
    }
}

impl fmt::Display for NodeName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Indexed(index) => write!(f, "{NODE_PREFIX}{index}"),
            Self::Root => write!(f, "{NODE_PREFIX}{ROOT_SUFFIX}"),
        }
    }
}

/// A labeled pointer from one node to a regular node.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Reference {
    label: Label,
    target: usize,
    action: Action,
}

impl Reference {
    /// Creates a `construct` reference from `label` to the node at `target`.
    ///
    /// # Examples
    /// ```
    /// use nodeforge_core::{Action, Label, Reference};
    ///
    /// let reference = Reference::new(Label::C, 7);
    /// assert_eq!(reference.target(), 7);
    /// assert_eq!(reference.action(), Action::Construct);
    /// ```
    #[must_use]
    pub const fn new(label: Label, target: usize) -> Self {
        Self {
            label,
            target,
            action: Action::Construct,
        }
    }

    /// Returns the slot label.
    #[must_use]
    #[rustfmt::skip]
    pub const fn label(&self) -> Label { self.label }

    /// Returns the index of the referenced node.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the action tag.
    #[must_use]
    #[rustfmt::skip]
    pub const fn action(&self) -> Action { self.action }
}

/// A node declaration with its four child references.
///
/// The fixed-size array keeps the reference count exact.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NodeBlock {
    name: NodeName,
    references: [Reference; REFERENCES_PER_NODE],
}

impl NodeBlock {
    /// Creates a node declaration.
    #[must_use]
    pub const fn new(name: NodeName, references: [Reference; REFERENCES_PER_NODE]) -> Self {
        Self { name, references }
    }

    /// Returns the declared name.
    #[must_use]
    #[rustfmt::skip]
    pub const fn name(&self) -> NodeName { self.name }

    /// Returns the references in label order.
    #[must_use]
    #[rustfmt::skip]
    pub const fn references(&self) -> &[Reference; REFERENCES_PER_NODE] { &self.references }

    /// Iterates over the referenced node indices in label order.
    pub fn targets(&self) -> impl Iterator<Item = usize> + '_ {
        self.references.iter().map(Reference::target)
    }
}

/// The fixed phase/pass pair closing every fixture.
///
/// Root phase `A` lists pass `B`; pass `B` is declared with no body.
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub struct ControlTrailer;

impl ControlTrailer {
    /// Name of the root phase.
    pub const PHASE: &'static str = "A";
    /// Name of the pass scheduled by the phase.
    pub const PASS: &'static str = "B";
}

/// One top-level declaration of a fixture.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Block {
    /// A regular indexed node.
    Node(NodeBlock),
    /// The root node.
    Root(NodeBlock),
    /// The closing phase/pass declarations.
    Trailer(ControlTrailer),
}

impl Block {
    /// Returns the node declaration for node and root blocks.
    #[must_use]
    pub const fn as_node(&self) -> Option<&NodeBlock> {
        match self {
            Self::Node(node) | Self::Root(node) => Some(node),
            Self::Trailer(_) => None,
        }
    }
}
