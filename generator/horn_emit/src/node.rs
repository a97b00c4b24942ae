//! Printable node trees.

use std::io::{self, Write};

use crate::ColumnWriter;

/// Clause bodies start this far right of the clause head's offset.
const CLAUSE_BODY_INDENT: usize = 8;
/// Conditional arms (`-> `, `;  `) sit one column inside the opening
/// parenthesis; their bodies a further three columns right, past the arrow.
const ARM_BODY_INDENT: usize = 3;

/// A tree of printable shapes, with no semantics beyond rendering.
///
/// Built per surface target and consumed by one emission pass. The offsets
/// used while rendering are what give the output its syntax-significant
/// indentation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PrintNode {
    /// Verbatim text, indented to the current offset.
    Literal(String),
    /// `head :-` followed by an indented body and a closing period.
    Clause { head: String, body: Box<PrintNode> },
    /// `(cond -> then ; else)` with aligned arms.
    If {
        cond: Box<PrintNode>,
        then_branch: Box<PrintNode>,
        else_branch: Box<PrintNode>,
    },
}

impl PrintNode {
    pub fn literal(text: impl Into<String>) -> Self {
        PrintNode::Literal(text.into())
    }

    /// Render this node at the given column offset.
    pub fn render<W: Write>(&self, out: &mut ColumnWriter<W>, offset: usize) -> io::Result<()> {
        match self {
            PrintNode::Literal(text) => {
                out.indent_to(offset)?;
                out.write(text)
            }
            PrintNode::Clause { head, body } => {
                out.indent_to(offset)?;
                out.write(head)?;
                out.writeln(" :-")?;
                body.render(out, offset + CLAUSE_BODY_INDENT)?;
                out.writeln(".")?;
                out.newline()
            }
            PrintNode::If {
                cond,
                then_branch,
                else_branch,
            } => {
                out.indent_to(offset)?;
                out.write("(")?;
                let inner = offset + 1;
                cond.render(out, inner)?;
                out.newline()?;
                out.indent_to(inner)?;
                out.write("-> ")?;
                then_branch.render(out, inner + ARM_BODY_INDENT)?;
                out.newline()?;
                out.indent_to(inner)?;
                out.write(";  ")?;
                else_branch.render(out, inner + ARM_BODY_INDENT)?;
                out.write(")")
            }
        }
    }
}
