// SPDX-FileCopyrightText: 2026 Bruno Meilick
// SPDX-License-Identifier: LicenseRef-Linkquote-FreeUse-NoCopy-NoDerivatives
//
// All rights reserved.
//
// This file is part of Linkquote and is proprietary software.
// Unauthorized copying, modification, or distribution is prohibited.

//! Arena-backed in-memory [`Document`].
//!
//! Elements live in a flat arena; attachment is expressed through
//! parent/children indices, so a detached subtree (a fresh clone, or a removed
//! preview) simply stops being reachable from the root. Queries walk the
//! attached tree in depth-first preorder, which is document order.

use std::collections::BTreeMap;

use smol_str::SmolStr;

use super::{Document, NodeHandle, Rect, Viewport};
use crate::model::class_list::attr_contains_token;
use crate::model::markers::{CLASS_ATTR, ID_ATTR};

#[derive(Debug, Clone)]
struct Node {
    parent: Option<usize>,
    children: Vec<usize>,
    attrs: BTreeMap<SmolStr, String>,
    rect: Rect,
}

impl Node {
    fn detached() -> Self {
        Self {
            parent: None,
            children: Vec::new(),
            attrs: BTreeMap::new(),
            rect: Rect::default(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct MemoryDocument {
    nodes: Vec<Node>,
    root: usize,
    viewport: Viewport,
}

impl MemoryDocument {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            nodes: vec![Node::detached()],
            root: 0,
            viewport,
        }
    }

    pub fn root(&self) -> NodeHandle {
        NodeHandle(self.root)
    }

    /// Creates a new element as the last child of `parent`.
    pub fn append_element(&mut self, parent: NodeHandle) -> NodeHandle {
        let index = self.nodes.len();
        let mut node = Node::detached();
        node.parent = Some(parent.0);
        self.nodes.push(node);
        self.nodes[parent.0].children.push(index);
        NodeHandle(index)
    }

    pub fn set_rect(&mut self, node: NodeHandle, rect: Rect) {
        self.nodes[node.0].rect = rect;
    }

    /// Replaces the viewport dimensions (a resize, from the engine's point of
    /// view; scrolling is expressed by moving element rects).
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    /// Number of attached elements, root included.
    pub fn attached_len(&self) -> usize {
        self.preorder(self.root).len()
    }

    /// Depth-first preorder of the attached subtree under `from`, `from`
    /// included.
    fn preorder(&self, from: usize) -> Vec<usize> {
        let mut out = Vec::new();
        let mut stack = vec![from];
        while let Some(index) = stack.pop() {
            out.push(index);
            for &child in self.nodes[index].children.iter().rev() {
                stack.push(child);
            }
        }
        out
    }

    fn collect_by_class(&self, from: usize, class: &str, include_from: bool) -> Vec<NodeHandle> {
        self.preorder(from)
            .into_iter()
            .filter(|&index| include_from || index != from)
            .filter(|&index| {
                self.nodes[index]
                    .attrs
                    .get(CLASS_ATTR)
                    .is_some_and(|attr| attr_contains_token(attr, class))
            })
            .map(NodeHandle)
            .collect()
    }
}

impl Document for MemoryDocument {
    fn element_by_id(&self, id: &str) -> Option<NodeHandle> {
        self.preorder(self.root)
            .into_iter()
            .find(|&index| {
                self.nodes[index]
                    .attrs
                    .get(ID_ATTR)
                    .is_some_and(|value| value == id)
            })
            .map(NodeHandle)
    }

    fn elements_by_class(&self, class: &str) -> Vec<NodeHandle> {
        self.collect_by_class(self.root, class, true)
    }

    fn descendants_by_class(&self, scope: NodeHandle, class: &str) -> Vec<NodeHandle> {
        self.collect_by_class(scope.0, class, false)
    }

    fn attribute(&self, node: NodeHandle, name: &str) -> Option<String> {
        self.nodes[node.0].attrs.get(name).cloned()
    }

    fn set_attribute(&mut self, node: NodeHandle, name: &str, value: &str) {
        self.nodes[node.0]
            .attrs
            .insert(SmolStr::new(name), value.to_owned());
    }

    fn remove_attribute(&mut self, node: NodeHandle, name: &str) {
        self.nodes[node.0].attrs.remove(name);
    }

    fn clone_subtree(&mut self, node: NodeHandle) -> NodeHandle {
        let copy_root = self.nodes.len();
        // (source, copied parent) pairs; the copy root keeps parent = None
        // until it is inserted.
        let mut stack = vec![(node.0, None::<usize>)];
        while let Some((source, copy_parent)) = stack.pop() {
            let index = self.nodes.len();
            let mut copy = Node::detached();
            copy.parent = copy_parent;
            copy.attrs = self.nodes[source].attrs.clone();
            copy.rect = self.nodes[source].rect;
            self.nodes.push(copy);
            if let Some(parent) = copy_parent {
                self.nodes[parent].children.push(index);
            }
            for &child in self.nodes[source].children.clone().iter().rev() {
                stack.push((child, Some(index)));
            }
        }
        NodeHandle(copy_root)
    }

    fn insert_after(&mut self, anchor: NodeHandle, node: NodeHandle) {
        let Some(parent) = self.nodes[anchor.0].parent else {
            return;
        };
        let position = self.nodes[parent]
            .children
            .iter()
            .position(|&child| child == anchor.0);
        let Some(position) = position else {
            return;
        };
        self.nodes[parent].children.insert(position + 1, node.0);
        self.nodes[node.0].parent = Some(parent);
    }

    fn remove(&mut self, node: NodeHandle) {
        let Some(parent) = self.nodes[node.0].parent else {
            return;
        };
        self.nodes[parent].children.retain(|&child| child != node.0);
        self.nodes[node.0].parent = None;
    }

    fn bounding_rect(&self, node: NodeHandle) -> Rect {
        self.nodes[node.0].rect
    }

    fn viewport(&self) -> Viewport {
        self.viewport
    }
}
