use std::collections::{HashMap, VecDeque};

pub type TabId = u32;

pub const DEFAULT_CAPACITY: usize = 64;

/// Per-tab panel open/closed state, bounded so a long browser session cannot
/// accrete entries without limit. Tabs the registry has never seen (or has
/// evicted) read as closed. When tracking a new tab would exceed capacity,
/// the oldest-tracked tab is forgotten first.
#[derive(Debug, Clone)]
pub struct PanelRegistry {
    capacity: usize,
    open: HashMap<TabId, bool>,
    order: VecDeque<TabId>,
}

impl PanelRegistry {
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_CAPACITY)
    }

    pub fn with_capacity(capacity: usize) -> Self {
        let capacity = capacity.max(1);
        Self {
            capacity,
            open: HashMap::with_capacity(capacity),
            order: VecDeque::with_capacity(capacity),
        }
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn len(&self) -> usize {
        self.open.len()
    }

    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    pub fn is_open(&self, tab: TabId) -> bool {
        self.open.get(&tab).copied().unwrap_or(false)
    }

    /// Flip the panel state for a tab and return the new state.
    pub fn toggle(&mut self, tab: TabId) -> bool {
        let next = !self.is_open(tab);
        self.set_open(tab, next);
        next
    }

    pub fn set_open(&mut self, tab: TabId, open: bool) {
        if !self.open.contains_key(&tab) {
            if self.open.len() == self.capacity {
                if let Some(oldest) = self.order.pop_front() {
                    self.open.remove(&oldest);
                }
            }
            self.order.push_back(tab);
        }
        self.open.insert(tab, open);
    }

    /// Drop all state for a tab, e.g. on a tab-close notification.
    pub fn remove(&mut self, tab: TabId) {
        if self.open.remove(&tab).is_some() {
            self.order.retain(|tracked| *tracked != tab);
        }
    }
}

impl Default for PanelRegistry {
    fn default() -> Self {
        Self::new()
    }
}
