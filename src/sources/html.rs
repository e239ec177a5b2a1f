//! Text node extraction.
use scraper::{Html, Node};

/// Elements whose text is never content.
const SKIPPED: [&str; 3] = ["script", "style", "noscript"];

/// Whether a `div` class attribute marks a navigation region.
fn is_nav(class: Option<&str>) -> bool {
    class.map_or(false, |c| c.contains("nav"))
}

/// Text nodes that are inside a `<p>`, or inside a `<div>` that is not a navigation block.
///
/// Nodes are returned untrimmed, in document order, each one once.
pub fn text_nodes(body: &str) -> Vec<String> {
    let document = Html::parse_document(body);

    document
        .tree
        .root()
        .descendants()
        .filter_map(|node| {
            let text: &str = node.value().as_text()?;
            let mut in_content = false;
            for ancestor in node.ancestors() {
                if let Node::Element(element) = ancestor.value() {
                    match element.name() {
                        name if SKIPPED.contains(&name) => return None,
                        "p" => in_content = true,
                        "div" if !is_nav(element.attr("class")) => in_content = true,
                        _ => (),
                    }
                }
            }
            in_content.then(|| text.to_string())
        })
        .collect()
}
