//! Minimal Atlassian Document Format (ADF) encoding

use serde::{Deserialize, Serialize};

pub const ADF_VERSION: u32 = 1;

/// Root `doc` node of an ADF rich-text field
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AdfDocument {
    #[serde(rename = "type")]
    pub doc_type: String,
    pub version: u32,
    pub content: Vec<AdfNode>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum AdfNode {
    Paragraph { content: Vec<AdfNode> },
    Text { text: String },
}

impl AdfDocument {
    /// Wrap plain text in a single paragraph holding one text node
    pub fn from_text(text: impl Into<String>) -> Self {
        Self {
            doc_type: "doc".to_string(),
            version: ADF_VERSION,
            content: vec![AdfNode::Paragraph {
                content: vec![AdfNode::Text { text: text.into() }],
            }],
        }
    }

    /// Concatenated text of every text node, depth first
    pub fn plain_text(&self) -> String {
        let mut out = String::new();
        for node in &self.content {
            node.collect_text(&mut out);
        }
        out
    }
}

impl AdfNode {
    fn collect_text(&self, out: &mut String) {
        match self {
            AdfNode::Paragraph { content } => {
                for node in content {
                    node.collect_text(out);
                }
            }
            AdfNode::Text { text } => out.push_str(text),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_wire_shape() {
        let doc = AdfDocument::from_text("Implement auth");
        assert_eq!(
            serde_json::to_value(&doc).unwrap(),
            json!({
                "type": "doc",
                "version": 1,
                "content": [{
                    "type": "paragraph",
                    "content": [{"type": "text", "text": "Implement auth"}]
                }]
            })
        );
    }

    #[test]
    fn test_empty_text_still_has_text_node() {
        let doc = AdfDocument::from_text("");
        let value = serde_json::to_value(&doc).unwrap();
        assert_eq!(value["content"][0]["content"][0]["text"], "");
        assert_eq!(doc.plain_text(), "");
    }

    #[test]
    fn test_plain_text_keeps_newlines() {
        let doc = AdfDocument::from_text("a\n\n- b: c");
        assert_eq!(doc.plain_text(), "a\n\n- b: c");
    }
}
