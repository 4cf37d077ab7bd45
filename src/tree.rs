use crate::Match;
use log::warn;
use serde::{Deserialize, Serialize};

/// One node of the reconstructed bracket tree, for recursive rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BracketNode {
    #[serde(rename = "match")]
    pub entry: Match,
    /// Depth from the root: 0 at the final.
    pub level: u32,
    pub position: u32,
    /// Feeder nodes in `dependsOn` order. `None` for first-round leaves; a
    /// `None` slot inside means the referenced match was absent from the
    /// input (partially loaded data).
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub children: Option<Box<[Option<BracketNode>; 2]>>,
}

impl BracketNode {
    /// Number of levels below and including this node. A full bracket of
    /// `2^k` teams has depth `k`.
    pub fn depth(&self) -> u32 {
        let below = self
            .children
            .as_deref()
            .into_iter()
            .flatten()
            .flatten()
            .map(BracketNode::depth)
            .max()
            .unwrap_or(0);
        1 + below
    }

    /// Leaf nodes (matches with no dependencies), left to right.
    pub fn leaves(&self) -> Vec<&BracketNode> {
        match self.children.as_deref() {
            None => vec![self],
            Some(slots) => slots.iter().flatten().flat_map(BracketNode::leaves).collect(),
        }
    }
}

/// Rebuild the binary bracket tree rooted at the final.
///
/// Returns `None` when the list holds no round-1 match. A `dependsOn` id
/// with no match in the input yields a `None` child slot instead of an
/// error, so partially loaded brackets still render.
pub fn build_tree(matches: &[Match]) -> Option<BracketNode> {
    let root = matches.iter().find(|m| m.round == 1)?;
    Some(build_node(root, 0, matches))
}

fn build_node(m: &Match, level: u32, all: &[Match]) -> BracketNode {
    let children = if m.depends_on.is_empty() {
        None
    } else {
        let mut slots: [Option<BracketNode>; 2] = [None, None];
        for (slot, dep_id) in m.depends_on.iter().take(2).enumerate() {
            match all.iter().find(|c| &c.id == dep_id) {
                Some(dep) => slots[slot] = Some(build_node(dep, level + 1, all)),
                None => warn!("match {} depends on {dep_id}, which is not loaded", m.id),
            }
        }
        Some(Box::new(slots))
    };

    BracketNode { entry: m.clone(), level, position: m.position, children }
}
