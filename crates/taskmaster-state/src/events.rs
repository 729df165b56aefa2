/// What changed after a successful store mutation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreEvent {
    TasksChanged,
    CategoriesChanged,
    SettingsChanged,
    /// Task and category data was wiped; dependent stores must reload
    DataCleared,
}

/// Callback invoked after each successful mutation.
///
/// Views subscribe one of these and redraw from the store when it fires.
pub type ChangeListener = Box<dyn Fn(&StoreEvent) + Send + Sync>;

/// Fan-out of store events to subscribed listeners, in subscription order
#[derive(Default)]
pub struct Notifier {
    listeners: Vec<ChangeListener>,
}

impl Notifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, listener: ChangeListener) {
        self.listeners.push(listener);
    }

    pub fn notify(&self, event: StoreEvent) {
        tracing::trace!("Notifying {} listeners of {:?}", self.listeners.len(), event);
        for listener in &self.listeners {
            listener(&event);
        }
    }
}

impl std::fmt::Debug for Notifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Notifier")
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
