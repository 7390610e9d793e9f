use crate::ast::{AttrList, Node};
use ammonia::Builder;
use std::collections::{HashMap, HashSet};
use std::fmt;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum EmitError {
    TagMissing,
    ChildrenMissing,
}

impl fmt::Display for EmitError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            EmitError::TagMissing => write!(f, "container node has no tag"),
            EmitError::ChildrenMissing => write!(f, "container node has no children"),
        }
    }
}

impl std::error::Error for EmitError {}

impl Node {
    /// Serializes this node to HTML. See [`emit_html`].
    pub fn to_html(&self) -> Result<String, EmitError> {
        emit_html(self)
    }
}

/// Emits raw HTML for a node tree.
///
/// An untagged leaf passes its value through literally; a tagged leaf wraps
/// its value. Containers require a tag and at least one child. Literal
/// content is not escaped.
pub fn emit_html(node: &Node) -> Result<String, EmitError> {
    match node {
        Node::Leaf {
            tag: None, value, ..
        } => Ok(value.clone()),
        Node::Leaf {
            tag: Some(tag),
            value,
            attrs,
        } => Ok(format!(
            "<{}{}>{}</{}>",
            tag,
            attrs_html(attrs),
            value,
            tag
        )),
        Node::Container { tag: None, .. } => Err(EmitError::TagMissing),
        Node::Container { children, .. } if children.is_empty() => Err(EmitError::ChildrenMissing),
        Node::Container {
            tag: Some(tag),
            children,
            attrs,
        } => {
            let mut out = format!("<{}{}>", tag, attrs_html(attrs));
            for child in children {
                out.push_str(&emit_html(child)?);
            }
            out.push_str("</");
            out.push_str(tag);
            out.push('>');
            Ok(out)
        }
    }
}

/// Emits HTML for a node tree and sanitizes it against an allow-list of the
/// tags the compiler can produce.
pub fn emit_html_sanitized(node: &Node) -> Result<String, EmitError> {
    let raw_html = emit_html(node)?;

    let tags: HashSet<&'static str> = [
        "a",
        "b",
        "blockquote",
        "code",
        "div",
        "h1",
        "h2",
        "h3",
        "h4",
        "h5",
        "h6",
        "i",
        "img",
        "li",
        "ol",
        "p",
        "pre",
        "ul",
    ]
    .iter()
    .copied()
    .collect();

    let mut tag_attributes = HashMap::new();
    tag_attributes.insert("a", ["href"].iter().copied().collect());
    tag_attributes.insert("img", ["src", "alt"].iter().copied().collect());

    Ok(Builder::new()
        .tags(tags)
        .generic_attributes(HashSet::new())
        .tag_attributes(tag_attributes)
        .clean(&raw_html)
        .to_string())
}

fn attrs_html(attrs: &AttrList) -> String {
    attrs
        .items
        .iter()
        .map(|attr| format!(" {}=\"{}\"", attr.key, attr.value))
        .collect()
}
