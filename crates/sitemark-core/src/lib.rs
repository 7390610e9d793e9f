mod ast;
mod block;
mod compile;
mod emit;
mod inline;

pub use ast::{Attr, AttrList, BlockType, Inline, InlineSeq, Node};
pub use block::{classify_block, split_blocks};
pub use compile::{compile_block, compile_document};
pub use emit::{EmitError, emit_html, emit_html_sanitized};
pub use inline::tokenize_inline;
