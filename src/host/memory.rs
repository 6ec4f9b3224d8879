use std::collections::BTreeSet;

use crate::{
    binder::style::StyleRecord,
    foundation::core::{CssPosition, DomRect, Rect, Vec2},
    foundation::error::{PlacementError, PlacementResult},
    host::tree::LayoutHost,
};

/// Handle into a [`MemoryDocument`].
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
#[serde(transparent)]
pub struct NodeId(pub usize);

/// Declarative description of an element subtree.
#[derive(Clone, Debug, Default, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct NodeSpec {
    /// Tag name, matched by bare selectors.
    pub tag: String,
    /// Element id, matched by `#id` selectors. Unique per document.
    pub id: Option<String>,
    /// Class names, matched by `.class` selectors.
    pub classes: Vec<String>,
    /// Border box; `None` for elements that are not laid out.
    pub rect: Option<DomRect>,
    /// Computed `position`.
    pub position: Option<CssPosition>,
    /// Inline `position` declaration.
    pub inline_position: Option<CssPosition>,
    /// `(clientLeft, clientTop)` border widths.
    pub border: [f64; 2],
    /// Child elements in document order.
    pub children: Vec<NodeSpec>,
}

impl NodeSpec {
    /// A laid-out element with the given tag and rect.
    pub fn new(tag: impl Into<String>, rect: Rect) -> Self {
        Self {
            tag: tag.into(),
            rect: Some(DomRect::from(rect)),
            ..Self::default()
        }
    }

    /// Set the element id.
    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Add a class name.
    pub fn with_class(mut self, class: impl Into<String>) -> Self {
        self.classes.push(class.into());
        self
    }

    /// Set the computed `position`.
    pub fn with_position(mut self, position: CssPosition) -> Self {
        self.position = Some(position);
        self
    }

    /// Set the `(clientLeft, clientTop)` border widths.
    pub fn with_border(mut self, left: f64, top: f64) -> Self {
        self.border = [left, top];
        self
    }

    /// Append a child subtree.
    pub fn with_child(mut self, child: NodeSpec) -> Self {
        self.children.push(child);
        self
    }
}

#[derive(Clone, Debug)]
struct Node {
    parent: Option<NodeId>,
    children: Vec<NodeId>,
    tag: String,
    id: Option<String>,
    classes: Vec<String>,
    rect: Option<Rect>,
    computed: Option<CssPosition>,
    inline: Option<CssPosition>,
    client: Vec2,
    style: Option<StyleRecord>,
}

/// In-memory element tree implementing [`LayoutHost`].
///
/// Node 0 is always the body. Rects are stored as given; nothing is laid out.
#[derive(Clone, Debug)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    ids: BTreeSet<String>,
}

impl MemoryDocument {
    /// Document with a bare `body` covering `body_rect`.
    pub fn new(body_rect: Rect) -> PlacementResult<Self> {
        DomRect::try_from_rect(body_rect)?;
        Ok(Self {
            nodes: vec![Node {
                parent: None,
                children: Vec::new(),
                tag: "body".to_string(),
                id: None,
                classes: Vec::new(),
                rect: Some(body_rect),
                computed: None,
                inline: None,
                client: Vec2::ZERO,
                style: None,
            }],
            ids: BTreeSet::new(),
        })
    }

    /// Build a document whose body is described by `body`.
    ///
    /// The body's tag is forced to `body`.
    pub fn from_spec(body: &NodeSpec) -> PlacementResult<Self> {
        let rect = match body.rect {
            Some(r) => {
                r.validate()?;
                r.to_rect()
            }
            None => return Err(PlacementError::validation("body must have a rect")),
        };
        let mut doc = Self::new(rect)?;
        let root = doc.body_id();
        doc.nodes[root.0].computed = body.position;
        doc.nodes[root.0].inline = body.inline_position;
        doc.nodes[root.0].client = Vec2::new(body.border[0], body.border[1]);
        doc.nodes[root.0].classes = body.classes.clone();
        if let Some(id) = &body.id {
            doc.claim_id(id)?;
            doc.nodes[root.0].id = Some(id.clone());
        }
        for child in &body.children {
            doc.append(root, child)?;
        }
        Ok(doc)
    }

    /// Handle of the body element.
    pub fn body_id(&self) -> NodeId {
        NodeId(0)
    }

    /// Append `spec` (and its children) under `parent`, returning the new node.
    ///
    /// The whole subtree is checked first; on error the document is unchanged.
    pub fn append(&mut self, parent: NodeId, spec: &NodeSpec) -> PlacementResult<NodeId> {
        self.node(parent)?;
        self.check_subtree(spec, &mut BTreeSet::new())?;
        Ok(self.insert(parent, spec))
    }

    fn check_subtree<'a>(
        &self,
        spec: &'a NodeSpec,
        seen: &mut BTreeSet<&'a str>,
    ) -> PlacementResult<()> {
        if let Some(r) = &spec.rect {
            r.validate()?;
        }
        if let Some(id) = &spec.id
            && (self.ids.contains(id) || !seen.insert(id.as_str()))
        {
            return Err(PlacementError::validation(format!("duplicate element id '{id}'")));
        }
        spec.children
            .iter()
            .try_for_each(|child| self.check_subtree(child, seen))
    }

    fn insert(&mut self, parent: NodeId, spec: &NodeSpec) -> NodeId {
        if let Some(id) = &spec.id {
            self.ids.insert(id.clone());
        }
        let node = NodeId(self.nodes.len());
        self.nodes.push(Node {
            parent: Some(parent),
            children: Vec::new(),
            tag: spec.tag.clone(),
            id: spec.id.clone(),
            classes: spec.classes.clone(),
            rect: spec.rect.map(DomRect::to_rect),
            computed: spec.position,
            inline: spec.inline_position,
            client: Vec2::new(spec.border[0], spec.border[1]),
            style: None,
        });
        self.nodes[parent.0].children.push(node);

        for child in &spec.children {
            self.insert(node, child);
        }
        node
    }

    /// Node carrying `#id`.
    pub fn get_by_id(&self, id: &str) -> Option<NodeId> {
        self.nodes
            .iter()
            .position(|n| n.id.as_deref() == Some(id))
            .map(NodeId)
    }

    /// Re-measure a node; `None` marks it as not laid out.
    pub fn set_rect(&mut self, node: NodeId, rect: Option<Rect>) -> PlacementResult<()> {
        if let Some(r) = rect {
            DomRect::try_from_rect(r)?;
        }
        self.node_mut(node)?.rect = rect;
        Ok(())
    }

    /// Change the computed `position` of a node.
    pub fn set_position(
        &mut self,
        node: NodeId,
        position: Option<CssPosition>,
    ) -> PlacementResult<()> {
        self.node_mut(node)?.computed = position;
        Ok(())
    }

    /// Change the inline `position` of a node.
    pub fn set_inline_position(
        &mut self,
        node: NodeId,
        position: Option<CssPosition>,
    ) -> PlacementResult<()> {
        self.node_mut(node)?.inline = position;
        Ok(())
    }

    /// Last style written by a binder.
    pub fn style(&self, node: NodeId) -> Option<&StyleRecord> {
        self.nodes.get(node.0).and_then(|n| n.style.as_ref())
    }

    fn claim_id(&mut self, id: &str) -> PlacementResult<()> {
        if !self.ids.insert(id.to_string()) {
            return Err(PlacementError::validation(format!("duplicate element id '{id}'")));
        }
        Ok(())
    }

    fn node(&self, node: NodeId) -> PlacementResult<&Node> {
        self.nodes
            .get(node.0)
            .ok_or_else(|| PlacementError::validation(format!("unknown node {}", node.0)))
    }

    fn node_mut(&mut self, node: NodeId) -> PlacementResult<&mut Node> {
        self.nodes
            .get_mut(node.0)
            .ok_or_else(|| PlacementError::validation(format!("unknown node {}", node.0)))
    }

    fn matches(node: &Node, selector: &str) -> bool {
        if let Some(id) = selector.strip_prefix('#') {
            node.id.as_deref() == Some(id)
        } else if let Some(class) = selector.strip_prefix('.') {
            node.classes.iter().any(|c| c == class)
        } else {
            node.tag.eq_ignore_ascii_case(selector)
        }
    }
}

impl LayoutHost for MemoryDocument {
    type Element = NodeId;

    fn body(&self) -> Option<NodeId> {
        Some(self.body_id())
    }

    fn parent(&self, el: NodeId) -> Option<NodeId> {
        self.nodes.get(el.0).and_then(|n| n.parent)
    }

    fn query_selector(&self, selector: &str) -> Option<NodeId> {
        let selector = selector.trim();
        if selector.is_empty() {
            return None;
        }
        // Depth-first, document order.
        let mut stack = vec![self.body_id()];
        while let Some(id) = stack.pop() {
            let node = &self.nodes[id.0];
            if Self::matches(node, selector) {
                return Some(id);
            }
            stack.extend(node.children.iter().rev().copied());
        }
        None
    }

    fn bounding_rect(&self, el: NodeId) -> Option<Rect> {
        self.nodes.get(el.0).and_then(|n| n.rect)
    }

    fn client_offset(&self, el: NodeId) -> Vec2 {
        self.nodes.get(el.0).map(|n| n.client).unwrap_or(Vec2::ZERO)
    }

    fn computed_position(&self, el: NodeId) -> Option<CssPosition> {
        self.nodes.get(el.0).and_then(|n| n.computed)
    }

    fn inline_position(&self, el: NodeId) -> Option<CssPosition> {
        self.nodes.get(el.0).and_then(|n| n.inline)
    }

    fn apply_style(&mut self, el: NodeId, style: &StyleRecord) {
        if let Some(n) = self.nodes.get_mut(el.0) {
            n.style = Some(*style);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/host/memory.rs"]
mod tests;
