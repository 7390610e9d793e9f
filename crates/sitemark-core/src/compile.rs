use crate::ast::{Attr, AttrList, BlockType, Inline, Node};
use crate::block::{classify_block, split_blocks};
use crate::inline::tokenize_inline;

/// Compiles a whole document into a single `div` root whose children are the
/// compiled blocks in source order. Pure; holds no state across calls.
pub fn compile_document(document: &str) -> Node {
    let children = split_blocks(document)
        .into_iter()
        .map(|block| compile_block(block, classify_block(block)))
        .collect();
    Node::container("div", children)
}

/// Compiles one block into a node. `kind` must come from classifying the same
/// block; the marker stripping below relies on the prefixes the classifier
/// verified.
pub fn compile_block(block: &str, kind: BlockType) -> Node {
    match kind {
        BlockType::Heading(level) => {
            let text = block.trim_start_matches('#').trim();
            Node::container(format!("h{}", level), inline_children(text))
        }
        BlockType::Code => {
            // Fenced content is kept raw; it never reaches the tokenizer.
            let inner = &block[3..block.len() - 3];
            let text = inner
                .lines()
                .map(str::trim_end)
                .filter(|line| !line.is_empty())
                .collect::<Vec<_>>()
                .join("\n");
            Node::container("pre", vec![Node::leaf("code", text)])
        }
        BlockType::Quote => {
            // Only the first line's marker is stripped; continuation lines
            // keep theirs.
            Node::container("blockquote", inline_children(block[2..].trim()))
        }
        BlockType::UnorderedList => {
            let items = block
                .lines()
                .map(|line| Node::leaf("li", line[2..].trim()))
                .collect();
            Node::container("ul", items)
        }
        BlockType::OrderedList => {
            let items = block
                .lines()
                .enumerate()
                .map(|(idx, line)| {
                    let marker = format!("{}. ", idx + 1);
                    Node::leaf("li", line[marker.len()..].trim())
                })
                .collect();
            Node::container("ol", items)
        }
        BlockType::Paragraph => Node::container("p", inline_children(block)),
    }
}

// List items stay verbatim; every other tokenized block funnels through here.
fn inline_children(text: &str) -> Vec<Node> {
    tokenize_inline(text).into_iter().map(to_leaf).collect()
}

fn to_leaf(span: Inline) -> Node {
    match span {
        Inline::Text(text) => Node::text(text),
        Inline::Strong(text) => Node::leaf("b", text),
        Inline::Emph(text) => Node::leaf("i", text),
        Inline::CodeSpan(text) => Node::leaf("code", text),
        Inline::Link { text, url } => {
            Node::leaf_with_attrs("a", text, AttrList::from_iter([Attr::new("href", url)]))
        }
        Inline::Image { alt, url } => Node::leaf_with_attrs(
            "img",
            "",
            AttrList::from_iter([Attr::new("src", url), Attr::new("alt", alt)]),
        ),
    }
}
