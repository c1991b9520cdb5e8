//! Text serialization of fixture blocks.
//!
//! Rendering is pure: it never touches the random source. Both layouts emit
//! the same token stream and differ only in whitespace.

use std::fmt::{self, Write};

use crate::model::{Block, ControlTrailer, NodeBlock, NodeName, Reference};

const INDENT: &str = "    ";

/// Whitespace layout used when rendering blocks.
///
/// # Examples
/// ```
/// use nodeforge_core::Layout;
///
/// assert_eq!(Layout::default(), Layout::Compact);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum Layout {
    /// One line per declaration.
    #[default]
    Compact,
    /// One line per reference with four-space indentation.
    Expanded,
}

/// Writes a single block followed by a newline.
///
/// # Errors
/// Returns [`fmt::Error`] if the underlying writer fails.
///
/// # Examples
/// ```
/// use nodeforge_core::{Block, ControlTrailer, Layout, write_block};
///
/// let mut out = String::new();
/// write_block(&mut out, &Block::Trailer(ControlTrailer), Layout::Compact)?;
/// assert_eq!(out, "root phase A { passes { B } };\n\npass B;\n");
/// # Ok::<(), std::fmt::Error>(())
/// ```
pub fn write_block<W: Write + ?Sized>(out: &mut W, block: &Block, layout: Layout) -> fmt::Result {
    match block {
        Block::Node(node) => write_node(out, "", node, layout),
        Block::Root(node) => write_node(out, "root ", node, layout),
        Block::Trailer(_) => write_trailer(out, layout),
    }
}

/// Renders `blocks` in order, separating consecutive blocks by a blank line.
///
/// # Examples
/// ```
/// use nodeforge_core::{Block, ControlTrailer, Layout, render_blocks};
///
/// let text = render_blocks(&[Block::Trailer(ControlTrailer)], Layout::Expanded);
/// assert!(text.ends_with("pass B;\n"));
/// ```
#[must_use]
pub fn render_blocks(blocks: &[Block], layout: Layout) -> String {
    Rendered { blocks, layout }.to_string()
}

pub(crate) fn write_blocks<W: Write + ?Sized>(
    out: &mut W,
    blocks: &[Block],
    layout: Layout,
) -> fmt::Result {
    for (position, block) in blocks.iter().enumerate() {
        if position > 0 {
            out.write_char('\n')?;
        }
        write_block(out, block, layout)?;
    }
    Ok(())
}

struct Rendered<'a> {
    blocks: &'a [Block],
    layout: Layout,
}

impl fmt::Display for Rendered<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_blocks(f, self.blocks, self.layout)
    }
}

fn write_node<W: Write + ?Sized>(
    out: &mut W,
    qualifier: &str,
    node: &NodeBlock,
    layout: Layout,
) -> fmt::Result {
    let name = node.name();
    let last = node.references().len().saturating_sub(1);
    match layout {
        Layout::Compact => {
            write!(out, "{qualifier}node {name} {{ children {{ ")?;
            for (position, reference) in node.references().iter().enumerate() {
                write_reference(out, reference)?;
                if position < last {
                    out.write_str(", ")?;
                }
            }
            out.write_str(" } };\n")
        }
        Layout::Expanded => {
            writeln!(out, "{qualifier}node {name} {{")?;
            writeln!(out, "{INDENT}children {{")?;
            for (position, reference) in node.references().iter().enumerate() {
                write!(out, "{INDENT}{INDENT}")?;
                write_reference(out, reference)?;
                if position < last {
                    out.write_char(',')?;
                }
                out.write_char('\n')?;
            }
            writeln!(out, "{INDENT}}}")?;
            out.write_str("};\n")
        }
    }
}

fn write_reference<W: Write + ?Sized>(out: &mut W, reference: &Reference) -> fmt::Result {
    write!(
        out,
        "{} {} {{ {} }}",
        NodeName::Indexed(reference.target()),
        reference.label(),
        reference.action(),
    )
}

fn write_trailer<W: Write + ?Sized>(out: &mut W, layout: Layout) -> fmt::Result {
    let phase = ControlTrailer::PHASE;
    let pass = ControlTrailer::PASS;
    match layout {
        Layout::Compact => writeln!(out, "root phase {phase} {{ passes {{ {pass} }} }};")?,
        Layout::Expanded => {
            writeln!(out, "root phase {phase} {{")?;
            writeln!(out, "{INDENT}passes {{")?;
            writeln!(out, "{INDENT}{INDENT}{pass}")?;
            writeln!(out, "{INDENT}}}")?;
            out.write_str("};\n")?;
        }
    }
    write!(out, "\npass {pass};\n")
}
