use crate::bulk::{NodeId, TextFragment, TextSurface};
use serde::{Deserialize, Serialize};
use std::sync::{PoisonError, RwLock};

/// Tags whose text is shown to the user and is worth translating.
pub const TEXT_TAGS: &[&str] = &[
    "h1", "h2", "h3", "h4", "h5", "h6", "p", "span", "div", "button", "label", "a",
];

#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentNode {
    pub tag: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub text: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub children: Vec<ContentNode>,
}

impl ContentNode {
    pub fn element(tag: &str, children: Vec<ContentNode>) -> Self {
        Self {
            tag: tag.to_owned(),
            text: None,
            children,
        }
    }

    pub fn text(tag: &str, text: &str) -> Self {
        Self {
            tag: tag.to_owned(),
            text: Some(text.to_owned()),
            children: Vec::new(),
        }
    }

    fn is_text_bearing(&self) -> bool {
        self.text.is_some() && TEXT_TAGS.contains(&self.tag.to_ascii_lowercase().as_str())
    }
}

/// In-memory page snapshot. Node ids are pre-order positions, so they stay
/// valid as long as the shape of the tree does not change.
#[derive(Debug, Default)]
pub struct ContentTree {
    root: RwLock<ContentNode>,
}

impl ContentTree {
    pub fn new(root: ContentNode) -> Self {
        Self {
            root: RwLock::new(root),
        }
    }

    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        Ok(Self::new(serde_json::from_str(json)?))
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(&*self.root.read().unwrap_or_else(PoisonError::into_inner))
    }

    pub fn root(&self) -> ContentNode {
        self.root
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// Current text of every text-bearing node, in document order.
    pub fn texts(&self) -> Vec<String> {
        self.snapshot().into_iter().map(|f| f.text).collect()
    }
}

fn collect(node: &ContentNode, next_id: &mut usize, out: &mut Vec<TextFragment>) {
    let id = NodeId(*next_id);
    *next_id += 1;
    if node.is_text_bearing() {
        if let Some(text) = &node.text {
            out.push(TextFragment {
                id,
                text: text.clone(),
            });
        }
    }
    for child in &node.children {
        collect(child, next_id, out);
    }
}

fn find_mut<'a>(node: &'a mut ContentNode, target: usize, next_id: &mut usize) -> Option<&'a mut ContentNode> {
    if *next_id == target {
        return Some(node);
    }
    *next_id += 1;
    for child in node.children.iter_mut() {
        if let Some(found) = find_mut(child, target, next_id) {
            return Some(found);
        }
    }
    None
}

impl TextSurface for ContentTree {
    fn snapshot(&self) -> Vec<TextFragment> {
        let root = self.root.read().unwrap_or_else(PoisonError::into_inner);
        let mut out = Vec::new();
        let mut next_id = 0;
        collect(&root, &mut next_id, &mut out);
        out
    }

    fn replace(&self, id: NodeId, text: String) {
        let mut root = self.root.write().unwrap_or_else(PoisonError::into_inner);
        let mut next_id = 0;
        match find_mut(&mut root, id.0, &mut next_id) {
            Some(node) => node.text = Some(text),
            None => tracing::debug!(target: "content", node = id.0, "node vanished before write"),
        }
    }
}
