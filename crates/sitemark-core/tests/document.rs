use sitemark_core::{BlockType, classify_block, compile_block, compile_document, emit_html};

fn html(document: &str) -> String {
    emit_html(&compile_document(document)).expect("emit")
}

#[test]
fn title_and_paragraph() {
    assert_eq!(
        html("# Title\n\nBody text"),
        "<div><h1>Title</h1><p>Body text</p></div>"
    );
}

#[test]
fn heading_levels_map_to_tags() {
    assert_eq!(
        html("## Second\n\n###### Sixth"),
        "<div><h2>Second</h2><h6>Sixth</h6></div>"
    );
}

#[test]
fn paragraph_spans_become_leaves() {
    assert_eq!(
        html("mix of **bold**, _italic_ and `code`"),
        "<div><p>mix of <b>bold</b>, <i>italic</i> and <code>code</code></p></div>"
    );
}

#[test]
fn links_and_images_render_attributes() {
    assert_eq!(
        html("see [docs](https://example.com) and ![logo](logo.png)"),
        "<div><p>see <a href=\"https://example.com\">docs</a> and <img src=\"logo.png\" alt=\"logo\"></img></p></div>"
    );
}

#[test]
fn code_block_stays_raw() {
    // Internal blank lines drop, remaining lines rejoin, and markdown
    // delimiters inside the fence stay literal.
    let block = "```\nlet a = **1**;\n\nlet b = _2_;\n```";
    assert_eq!(classify_block(block), BlockType::Code);
    let node = compile_block(block, BlockType::Code);
    assert_eq!(
        emit_html(&node).expect("emit"),
        "<pre><code>let a = **1**;\nlet b = _2_;</code></pre>"
    );
}

#[test]
fn code_block_lines_are_right_trimmed() {
    let document = "```\nkeep  indent   \n   \nlast\n```";
    assert_eq!(
        html(document),
        "<div><pre><code>keep  indent\nlast</code></pre></div>"
    );
}

#[test]
fn quote_strips_first_marker_only() {
    // Continuation markers survive; this heuristic is intentional.
    assert_eq!(
        html("> quoted **text**\n> more"),
        "<div><blockquote>quoted <b>text</b> > more</blockquote></div>"
    );
}

#[test]
fn unordered_list_items_stay_verbatim() {
    // List items are never inline-tokenized, unlike every other block kind.
    assert_eq!(
        html("- plain\n- has **bold**"),
        "<div><ul><li>plain</li><li>has **bold**</li></ul></div>"
    );
}

#[test]
fn ordered_list_strips_full_marker_past_ten_items() {
    let document = (1..=10)
        .map(|idx| format!("{}. item{}", idx, idx))
        .collect::<Vec<_>>()
        .join("\n");
    let expected = format!(
        "<div><ol>{}</ol></div>",
        (1..=10)
            .map(|idx| format!("<li>item{}</li>", idx))
            .collect::<String>()
    );
    assert_eq!(html(&document), expected);
}

#[test]
fn blocks_keep_source_order() {
    let document = "# Top\n\nfirst\n\n- a\n\nsecond";
    assert_eq!(
        html(document),
        "<div><h1>Top</h1><p>first</p><ul><li>a</li></ul><p>second</p></div>"
    );
}

#[test]
fn compile_block_heading_strips_hash_run() {
    let node = compile_block("### Deep dive", BlockType::Heading(3));
    assert_eq!(emit_html(&node).expect("emit"), "<h3>Deep dive</h3>");
}

#[test]
fn serialization_is_repeatable() {
    let node = compile_document("# Once\n\nand **again**");
    let first = emit_html(&node).expect("emit");
    let second = emit_html(&node).expect("emit");
    assert_eq!(first, second);
}

#[test]
fn structure_of_emitted_tree() {
    let document = "# Head\n\npara with [a link](u)\n\n```\ncode\n```";
    let emitted = html(document);
    let parsed = roxmltree::Document::parse(&emitted).expect("well-formed tree");
    let root = parsed.root_element();
    assert_eq!(root.tag_name().name(), "div");
    let tags: Vec<&str> = root
        .children()
        .filter(|node| node.is_element())
        .map(|node| node.tag_name().name())
        .collect();
    assert_eq!(tags, vec!["h1", "p", "pre"]);
    let pre = root
        .children()
        .find(|node| node.has_tag_name("pre"))
        .expect("pre element");
    let code = pre
        .first_element_child()
        .expect("code element");
    assert_eq!(code.tag_name().name(), "code");
    assert_eq!(code.text(), Some("code"));
}
