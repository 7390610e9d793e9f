use crate::ast::BlockType;

/// Splits a document into blocks on blank lines. Each block is trimmed;
/// segments that are empty after trimming are dropped.
pub fn split_blocks(document: &str) -> Vec<&str> {
    document
        .split("\n\n")
        .map(str::trim)
        .filter(|block| !block.is_empty())
        .collect()
}

/// Classifies one trimmed block. First match wins; anything unrecognized is a
/// paragraph, so classification never fails.
pub fn classify_block(block: &str) -> BlockType {
    let hashes = block.bytes().take_while(|byte| *byte == b'#').count();
    if (1..=6).contains(&hashes) && block.as_bytes().get(hashes) == Some(&b' ') {
        return BlockType::Heading(hashes as u8);
    }
    // The fences must not overlap, so a lone "```" is not a code block.
    if block.len() >= 6 && block.starts_with("```") && block.ends_with("```") {
        return BlockType::Code;
    }
    // Only the first line is inspected for the quote marker.
    if block.starts_with("> ") {
        return BlockType::Quote;
    }
    if !block.is_empty() && block.lines().all(|line| line.starts_with("- ")) {
        return BlockType::UnorderedList;
    }
    if is_ordered_list(block) {
        return BlockType::OrderedList;
    }
    BlockType::Paragraph
}

fn is_ordered_list(block: &str) -> bool {
    !block.is_empty()
        && block
            .lines()
            .enumerate()
            .all(|(idx, line)| line.starts_with(&format!("{}. ", idx + 1)))
}
