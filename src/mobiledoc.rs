//! Minimal Mobiledoc documents for post content.
//!
//! Ghost's editor stores posts as Mobiledoc. The simplest valid document
//! wraps the whole body in one markdown card, which Ghost renders itself.

use serde_json::{json, Value};

pub const MOBILEDOC_VERSION: &str = "0.3.1";

// Section type 10 is a card section; the second element indexes `cards`.
const CARD_SECTION: u8 = 10;

/// Builds a document holding `markdown` in a single markdown card.
pub fn from_markdown(markdown: &str) -> Value {
    json!({
        "version": MOBILEDOC_VERSION,
        "markups": [],
        "atoms": [],
        "cards": [["markdown", { "cardName": "markdown", "markdown": markdown }]],
        "sections": [[CARD_SECTION, 0]],
    })
}

/// [`from_markdown`] encoded as the string Ghost expects in `Post::mobiledoc`.
pub fn to_post_field(markdown: &str) -> serde_json::Result<String> {
    serde_json::to_string(&from_markdown(markdown))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markdown_card() {
        let doc = from_markdown("This is a **test post**.");
        assert_eq!(doc["version"], "0.3.1");
        assert_eq!(doc["cards"][0][0], "markdown");
        assert_eq!(doc["cards"][0][1]["markdown"], "This is a **test post**.");
        assert_eq!(doc["sections"], json!([[10, 0]]));
    }

    #[test]
    fn test_post_field_is_json_string() {
        let field = to_post_field("# Title").unwrap();
        let parsed: Value = serde_json::from_str(&field).unwrap();
        assert_eq!(parsed, from_markdown("# Title"));
    }
}
