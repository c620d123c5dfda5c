//! Widget arena.
//!
//! Nodes live in a dense vector addressed through a sparse slot table. A
//! [`WidgetId`] carries the slot's generation, so once a widget is removed
//! every id the session still holds for it stops resolving, even after the
//! slot is handed to a new widget.

use crate::interaction::Interactable;
use crate::widgets::{Rect, WidgetState};

/// Handle to a widget node.
///
/// Ids are cheap to copy and never dangle: after the node is removed the
/// id simply stops resolving, even if its slot is reused.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug)]
pub struct WidgetId {
    /// Slot in the sparse table, reused after removal
    index: u32,
    /// Bumped every time the slot is handed to a new node
    generation: u32,
}

impl WidgetId {
    fn new(index: u32, generation: u32) -> Self {
        Self { index, generation }
    }
}

/// Entry in the sparse table.
///
/// `dense_index == usize::MAX` marks a free slot that remembers its generation.
struct SparseEntry {
    /// Position of the node in the dense vector
    dense_index: usize,
    /// Generation of the node currently (or last) stored in this slot
    generation: u32,
}

/// A widget node: geometry, flags, links and the optional interaction record.
pub struct Node {
    /// Invisible nodes and their subtrees are skipped by hit testing
    pub(crate) visible: bool,
    /// Disabled nodes and their subtrees are skipped by hit testing
    pub(crate) enabled: bool,
    /// Screen-space hit rectangle
    pub(crate) bounds: Rect,
    /// Parent node, `None` for the root and for detached nodes
    pub(crate) parent: Option<WidgetId>,
    /// Children in insertion order, which is also hit-test order
    pub(crate) children: Vec<WidgetId>,
    /// Handlers; only nodes with a record can be hovered
    pub(crate) interactable: Option<Interactable>,
    /// Presentation state written by widget hooks
    pub(crate) state: WidgetState,
    /// Owning slot, patched after a swap-remove
    sparse_index: u32,
}

impl Node {
    /// Whether the node is shown.
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Whether the node accepts interaction.
    pub fn is_enabled(&self) -> bool {
        self.enabled
    }

    /// Screen-space hit rectangle.
    pub fn bounds(&self) -> Rect {
        self.bounds
    }

    /// Parent node, `None` for the root.
    pub fn parent(&self) -> Option<WidgetId> {
        self.parent
    }

    /// Children in hit-test order.
    pub fn children(&self) -> &[WidgetId] {
        &self.children
    }

    /// The node's interaction record, if one was created.
    pub fn interactable(&self) -> Option<&Interactable> {
        self.interactable.as_ref()
    }

    /// Presentation state written by widget hooks.
    pub fn state(&self) -> &WidgetState {
        &self.state
    }
}

/// Every widget the interaction layer knows about.
pub struct Tree {
    /// Live nodes, packed
    dense: Vec<Node>,
    /// Slot table indexed by `WidgetId::index`
    sparse: Vec<Option<SparseEntry>>,
    /// Slots available for reuse
    free_indices: Vec<u32>,
}

impl Tree {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            dense: Vec::new(),
            sparse: Vec::new(),
            free_indices: Vec::new(),
        }
    }

    /// Register a visible, enabled, parentless node.
    pub fn register(&mut self, bounds: Rect) -> WidgetId {
        let (sparse_index, generation) = match self.free_indices.pop() {
            Some(slot) => {
                let previous = self.sparse[slot as usize]
                    .as_ref()
                    .map_or(0, |entry| entry.generation);
                (slot, previous.wrapping_add(1))
            }
            None => {
                self.sparse.push(None);
                ((self.sparse.len() - 1) as u32, 0)
            }
        };

        let dense_index = self.dense.len();
        self.dense.push(Node {
            visible: true,
            enabled: true,
            bounds,
            parent: None,
            children: Vec::new(),
            interactable: None,
            state: WidgetState::default(),
            sparse_index,
        });

        self.sparse[sparse_index as usize] = Some(SparseEntry {
            dense_index,
            generation,
        });

        WidgetId::new(sparse_index, generation)
    }

    /// Remove a widget and its whole subtree.
    ///
    /// Returns every id that was removed (the widget first, then its
    /// descendants in depth-first order). Stale ids remove nothing.
    pub fn unregister(&mut self, id: WidgetId) -> Vec<WidgetId> {
        let Some(dense_index) = self.get_dense_index(id) else {
            return Vec::new();
        };

        if let Some(parent_id) = self.dense[dense_index].parent
            && let Some(parent_dense) = self.get_dense_index(parent_id)
        {
            self.dense[parent_dense].children.retain(|&c| c != id);
        }

        let removed = self.descendants_inclusive(id);
        for &removed_id in &removed {
            self.remove_node(removed_id);
        }
        removed
    }

    fn descendants_inclusive(&self, id: WidgetId) -> Vec<WidgetId> {
        let mut out = Vec::new();
        let mut stack = vec![id];
        while let Some(current) = stack.pop() {
            if let Some(node) = self.node(current) {
                out.push(current);
                stack.extend(node.children.iter().rev().copied());
            }
        }
        out
    }

    fn remove_node(&mut self, id: WidgetId) {
        let Some(dense_index) = self.get_dense_index(id) else {
            return;
        };
        self.dense.swap_remove(dense_index);
        if let Some(moved) = self.dense.get(dense_index)
            && let Some(entry) = self.sparse[moved.sparse_index as usize].as_mut()
        {
            entry.dense_index = dense_index;
        }

        self.sparse[id.index as usize] = Some(SparseEntry {
            dense_index: usize::MAX,
            generation: id.generation,
        });
        self.free_indices.push(id.index);
    }

    fn get_dense_index(&self, id: WidgetId) -> Option<usize> {
        self.sparse
            .get(id.index as usize)
            .and_then(|e| e.as_ref())
            .filter(|e| e.generation == id.generation && e.dense_index != usize::MAX)
            .map(|e| e.dense_index)
    }

    /// Look up a node. Stale ids return `None`.
    pub fn node(&self, id: WidgetId) -> Option<&Node> {
        self.get_dense_index(id).map(|idx| &self.dense[idx])
    }

    /// Mutable node lookup. Stale ids return `None`.
    pub fn node_mut(&mut self, id: WidgetId) -> Option<&mut Node> {
        self.get_dense_index(id).map(|idx| &mut self.dense[idx])
    }

    /// Whether `id` still refers to a live node.
    pub fn contains(&self, id: WidgetId) -> bool {
        self.get_dense_index(id).is_some()
    }

    /// Set the parent of a widget and append it to the parent's children.
    ///
    /// Detaches the widget from its previous parent. Does nothing if either
    /// id is stale or if `parent_id` lies inside `child_id`'s subtree.
    pub fn set_parent(&mut self, child_id: WidgetId, parent_id: WidgetId) {
        if !self.contains(parent_id) {
            return;
        }
        if self.is_ancestor_or_self(child_id, parent_id) {
            log::debug!(
                "Refusing to parent {:?} under its own descendant {:?}",
                child_id,
                parent_id
            );
            return;
        }
        let previous = match self.node_mut(child_id) {
            Some(child) => child.parent.replace(parent_id),
            None => return,
        };

        if let Some(old_parent) = previous
            && old_parent != parent_id
            && let Some(node) = self.node_mut(old_parent)
        {
            node.children.retain(|&c| c != child_id);
        }

        if let Some(parent) = self.node_mut(parent_id)
            && !parent.children.contains(&child_id)
        {
            parent.children.push(child_id);
        }
    }

    fn is_ancestor_or_self(&self, ancestor: WidgetId, id: WidgetId) -> bool {
        let mut current = Some(id);
        while let Some(node_id) = current {
            if node_id == ancestor {
                return true;
            }
            current = self.get_parent(node_id);
        }
        false
    }

    /// Parent of a node, `None` for the root, detached nodes and stale ids.
    pub fn get_parent(&self, id: WidgetId) -> Option<WidgetId> {
        self.node(id).and_then(|node| node.parent)
    }

    /// Copy of the child list, empty for stale ids.
    pub fn get_children(&self, id: WidgetId) -> Vec<WidgetId> {
        self.node(id)
            .map(|node| node.children.clone())
            .unwrap_or_default()
    }

    /// Hit rectangle of a node.
    pub fn bounds(&self, id: WidgetId) -> Option<Rect> {
        self.node(id).map(|node| node.bounds)
    }

    /// Move or resize a node. Children keep their own bounds.
    pub fn set_bounds(&mut self, id: WidgetId, bounds: Rect) {
        if let Some(node) = self.node_mut(id) {
            node.bounds = bounds;
        }
    }

    /// `false` for stale ids.
    pub fn is_visible(&self, id: WidgetId) -> bool {
        self.node(id).is_some_and(|node| node.visible)
    }

    /// Show or hide a node and, for hit testing, its subtree.
    pub fn set_visible(&mut self, id: WidgetId, visible: bool) {
        if let Some(node) = self.node_mut(id) {
            node.visible = visible;
        }
    }

    /// `false` for stale ids.
    pub fn is_enabled(&self, id: WidgetId) -> bool {
        self.node(id).is_some_and(|node| node.enabled)
    }

    /// Returns the previous value, or `None` for an unknown widget.
    pub(crate) fn replace_enabled(&mut self, id: WidgetId, enabled: bool) -> Option<bool> {
        self.node_mut(id)
            .map(|node| std::mem::replace(&mut node.enabled, enabled))
    }

    /// Interaction record of a node, `None` if it has none.
    pub fn interactable(&self, id: WidgetId) -> Option<&Interactable> {
        self.node(id).and_then(|node| node.interactable.as_ref())
    }

    /// Mutable access to the interaction record, used by the hook setters.
    pub fn interactable_mut(&mut self, id: WidgetId) -> Option<&mut Interactable> {
        self.node_mut(id).and_then(|node| node.interactable.as_mut())
    }

    /// Install an interaction record, returning the one it replaced.
    pub(crate) fn replace_interactable(
        &mut self,
        id: WidgetId,
        interactable: Interactable,
    ) -> Option<Interactable> {
        self.node_mut(id)
            .and_then(|node| node.interactable.replace(interactable))
    }

    /// Presentation state of a node.
    pub fn state(&self, id: WidgetId) -> Option<&WidgetState> {
        self.node(id).map(|node| &node.state)
    }

    /// Mutable presentation state, for widgets updating their looks.
    pub fn state_mut(&mut self, id: WidgetId) -> Option<&mut WidgetState> {
        self.node_mut(id).map(|node| &mut node.state)
    }

    /// Number of live widgets.
    pub fn widget_count(&self) -> usize {
        self.dense.len()
    }
}

impl Default for Tree {
    fn default() -> Self {
        Self::new()
    }
}
