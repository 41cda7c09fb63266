//! Schema-less structural view of a document.
//!
//! The format itself cannot tell a nested block from a multi-line text
//! value — only the schema the caller drives the reader with can. This
//! module reads a document as pure structure instead: every key becomes a
//! node with its inline value and nested nodes. Multi-line text therefore
//! shows up as oddly-keyed children; the view is meant for inspection and
//! dumping, not for faithful value decoding.

use std::io::Read;

use serde::Serialize;

use crate::error::Result;
use crate::read::Reader;

/// One key of a document, with its inline value and nested entries.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Node {
    pub key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<String>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<Node>,
}

/// Read every remaining entry of the current block into nodes, in
/// document order. Called on a fresh reader this captures the whole
/// document body (the version preamble is already consumed).
pub fn read_tree<R: Read>(reader: &mut Reader<R>) -> Result<Vec<Node>> {
    let mut nodes = Vec::new();
    while reader.enter_any_block()? {
        let key = reader.key().to_owned();
        let value = if reader.inline_value().is_empty() {
            None
        } else {
            Some(reader.read_value()?)
        };
        let children = read_tree(reader)?;
        reader.exit_block()?;
        nodes.push(Node {
            key,
            value,
            children,
        });
    }
    Ok(nodes)
}
