//! In-memory document host
//!
//! An arena-backed element tree with browser-like focus behavior: focusing a
//! detached or non-focusable element is a silent no-op, every effective focus
//! change fires a focus-in event to the registered listeners, and settle-wait
//! tasks queue up until [`MemoryDom::flush`] runs them. Used for headless hosts
//! and for exercising the focus logic without a browser.

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, VecDeque};
use std::fmt;
use std::rc::Rc;

use crate::focusable::{self, resolve_focusable};
use crate::host::{
    Disposer, FocusChange, FocusEvents, FocusHandler, FocusHost, FocusOptions, Settle,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct NodeId(usize);

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// One programmatic focus call that took effect.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FocusRecord {
    pub target: NodeId,
    pub options: FocusOptions,
}

#[derive(Debug, Clone)]
struct Node {
    tag: String,
    attributes: BTreeMap<String, String>,
    parent: Option<NodeId>,
    children: Vec<NodeId>,
}

impl Node {
    fn new(tag: &str) -> Self {
        Self {
            tag: tag.to_ascii_lowercase(),
            attributes: BTreeMap::new(),
            parent: None,
            children: Vec::new(),
        }
    }
}

type ListenerList = Rc<RefCell<Vec<(u64, FocusHandler<NodeId>)>>>;

pub struct MemoryDom {
    nodes: RefCell<Vec<Node>>,
    active: Cell<Option<NodeId>>,
    listeners: ListenerList,
    next_listener: Cell<u64>,
    settle_queue: RefCell<VecDeque<Box<dyn FnOnce()>>>,
    focus_log: RefCell<Vec<FocusRecord>>,
}

const DOCUMENT: NodeId = NodeId(0);
const BODY: NodeId = NodeId(1);

impl Default for MemoryDom {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for MemoryDom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryDom")
            .field("nodes", &self.nodes.borrow().len())
            .field("active", &self.active.get())
            .field("listeners", &self.listener_count())
            .field("pending_tasks", &self.pending_tasks())
            .finish()
    }
}

impl MemoryDom {
    /// A document containing an empty `<body>`.
    #[must_use]
    pub fn new() -> Self {
        let mut document = Node::new("#document");
        let mut body = Node::new("body");
        body.parent = Some(DOCUMENT);
        document.children.push(BODY);
        Self {
            nodes: RefCell::new(vec![document, body]),
            active: Cell::new(None),
            listeners: Rc::new(RefCell::new(Vec::new())),
            next_listener: Cell::new(0),
            settle_queue: RefCell::new(VecDeque::new()),
            focus_log: RefCell::new(Vec::new()),
        }
    }

    #[must_use]
    pub const fn document(&self) -> NodeId {
        DOCUMENT
    }

    #[must_use]
    pub const fn body(&self) -> NodeId {
        BODY
    }

    /// Create an element appended to `parent`.
    pub fn create_element(&self, parent: NodeId, tag: &str) -> NodeId {
        let id = self.create_detached(tag);
        self.append_child(parent, id);
        id
    }

    /// Create an element that is not yet part of the document.
    pub fn create_detached(&self, tag: &str) -> NodeId {
        let mut nodes = self.nodes.borrow_mut();
        nodes.push(Node::new(tag));
        NodeId(nodes.len() - 1)
    }

    /// Append `child` to `parent`, moving it if it already had a parent.
    pub fn append_child(&self, parent: NodeId, child: NodeId) {
        self.detach(child);
        let mut nodes = self.nodes.borrow_mut();
        nodes[child.0].parent = Some(parent);
        nodes[parent.0].children.push(child);
    }

    /// Remove `node` (and its subtree) from its parent. Focus inside it is lost.
    pub fn detach(&self, node: NodeId) {
        let parent = {
            let mut nodes = self.nodes.borrow_mut();
            let Some(parent) = nodes[node.0].parent.take() else {
                return;
            };
            nodes[parent.0].children.retain(|c| *c != node);
            parent
        };
        log::trace!("detached {node} from {parent}");
        if self.active.get().is_some_and(|a| self.is_inclusive_ancestor(node, a)) {
            self.active.set(None);
        }
    }

    pub fn set_attribute(&self, node: NodeId, name: &str, value: &str) {
        self.nodes.borrow_mut()[node.0]
            .attributes
            .insert(name.to_ascii_lowercase(), value.to_string());
    }

    pub fn remove_attribute(&self, node: NodeId, name: &str) {
        self.nodes.borrow_mut()[node.0]
            .attributes
            .remove(&name.to_ascii_lowercase());
    }

    #[must_use]
    pub fn is_connected(&self, node: NodeId) -> bool {
        self.is_inclusive_ancestor(DOCUMENT, node)
    }

    /// Simulate the platform moving focus to `target` regardless of focusability,
    /// e.g. a click or the browser handing focus back from its own UI.
    pub fn move_focus(&self, target: NodeId) {
        self.set_active_and_dispatch(target);
    }

    /// Drop focus without firing an event, as when focus leaves for browser chrome.
    pub fn blur(&self) {
        self.active.set(None);
    }

    /// Sequential forward navigation over the whole document, wrapping at the end.
    pub fn tab(&self) -> Option<NodeId> {
        self.step(true)
    }

    /// Sequential backward navigation over the whole document, wrapping at the start.
    pub fn shift_tab(&self) -> Option<NodeId> {
        self.step(false)
    }

    #[must_use]
    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }

    #[must_use]
    pub fn pending_tasks(&self) -> usize {
        self.settle_queue.borrow().len()
    }

    /// Run queued settle-wait tasks, including any they queue, until none remain.
    /// Returns how many ran.
    pub fn flush(&self) -> usize {
        let mut ran = 0;
        loop {
            let next = self.settle_queue.borrow_mut().pop_front();
            let Some(task) = next else {
                break;
            };
            task();
            ran += 1;
        }
        ran
    }

    #[must_use]
    pub fn focus_calls(&self) -> Vec<FocusRecord> {
        self.focus_log.borrow().clone()
    }

    fn step(&self, forward: bool) -> Option<NodeId> {
        let stops = resolve_focusable(self, &DOCUMENT);
        if stops.is_empty() {
            return None;
        }
        let len = stops.len();
        let current = self
            .active
            .get()
            .and_then(|a| stops.iter().position(|s| *s == a));
        let index = match (current, forward) {
            (None, true) => 0,
            (None, false) => len - 1,
            (Some(i), true) => (i + 1) % len,
            (Some(i), false) => (i + len - 1) % len,
        };
        let target = stops[index];
        self.set_active_and_dispatch(target);
        Some(target)
    }

    fn set_active_and_dispatch(&self, target: NodeId) {
        let previous = self.active.get();
        if previous == Some(target) {
            return;
        }
        self.active.set(Some(target));
        self.dispatch(&FocusChange::new(previous, Some(target)));
    }

    fn dispatch(&self, change: &FocusChange<NodeId>) {
        let handlers: Vec<FocusHandler<NodeId>> = self
            .listeners
            .borrow()
            .iter()
            .map(|(_, handler)| handler.clone())
            .collect();
        for handler in handlers {
            handler(change);
        }
    }

    fn can_take_focus(&self, node: NodeId) -> bool {
        if node == DOCUMENT || !self.is_connected(node) {
            return false;
        }
        if self.has_attribute(&node, "disabled") {
            return false;
        }
        focusable::matches_selector(self, &node) || self.has_attribute(&node, "tabindex")
    }

    fn is_inclusive_ancestor(&self, ancestor: NodeId, node: NodeId) -> bool {
        let nodes = self.nodes.borrow();
        let mut cursor = Some(node);
        while let Some(current) = cursor {
            if current == ancestor {
                return true;
            }
            cursor = nodes[current.0].parent;
        }
        false
    }

    fn collect_descendants(&self, node: NodeId, out: &mut Vec<NodeId>) {
        let children = self.nodes.borrow()[node.0].children.clone();
        for child in children {
            out.push(child);
            self.collect_descendants(child, out);
        }
    }
}

impl FocusHost for MemoryDom {
    type Element = NodeId;

    fn descendants(&self, container: &NodeId) -> Vec<NodeId> {
        let mut out = Vec::new();
        self.collect_descendants(*container, &mut out);
        out
    }

    fn tag_name(&self, element: &NodeId) -> String {
        self.nodes.borrow()[element.0].tag.clone()
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes.borrow()[element.0]
            .attributes
            .get(&name.to_ascii_lowercase())
            .cloned()
    }

    fn contains(&self, container: &NodeId, element: &NodeId) -> bool {
        self.is_inclusive_ancestor(*container, *element)
    }

    fn is_document_root(&self, element: &NodeId) -> bool {
        *element == DOCUMENT
    }

    fn active_element(&self) -> Option<NodeId> {
        self.active.get()
    }

    fn focus(&self, element: &NodeId, options: FocusOptions) {
        if !self.can_take_focus(*element) {
            log::trace!("focus on {element} ignored");
            return;
        }
        self.focus_log.borrow_mut().push(FocusRecord {
            target: *element,
            options,
        });
        self.set_active_and_dispatch(*element);
    }
}

impl FocusEvents for MemoryDom {
    fn subscribe(&self, handler: FocusHandler<NodeId>) -> Disposer {
        let id = self.next_listener.get();
        self.next_listener.set(id + 1);
        self.listeners.borrow_mut().push((id, handler));
        let listeners = Rc::downgrade(&self.listeners);
        Disposer::new(move || {
            if let Some(listeners) = listeners.upgrade() {
                listeners.borrow_mut().retain(|(entry, _)| *entry != id);
            }
        })
    }
}

impl Settle for MemoryDom {
    fn after_settle(&self, task: Box<dyn FnOnce()>) {
        self.settle_queue.borrow_mut().push_back(task);
    }
}
