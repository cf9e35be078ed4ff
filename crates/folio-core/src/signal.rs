//! Minimal subscription hooks used to connect components without global state.
//!
//! Everything runs on the browser's single event loop, so subscribers are plain
//! `FnMut` boxes with no `Send` bound.

type Subscriber<T> = Box<dyn FnMut(&T)>;

/// Multi-subscriber hook. Every `emit` reaches every subscriber in
/// subscription order.
pub struct Signal<T> {
    subscribers: Vec<Subscriber<T>>,
}

impl<T> Default for Signal<T> {
    fn default() -> Self {
        Self {
            subscribers: Vec::new(),
        }
    }
}

impl<T> Signal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, f: impl FnMut(&T) + 'static) {
        self.subscribers.push(Box::new(f));
    }

    pub fn emit(&mut self, value: &T) {
        for s in self.subscribers.iter_mut() {
            s(value);
        }
    }

    pub fn len(&self) -> usize {
        self.subscribers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.subscribers.is_empty()
    }
}

/// Hook that fires at most once. Subscribers added after the fire are dropped
/// without being called; the event they waited for already happened.
pub struct OnceSignal<T> {
    inner: Signal<T>,
    fired: bool,
}

impl<T> Default for OnceSignal<T> {
    fn default() -> Self {
        Self {
            inner: Signal::default(),
            fired: false,
        }
    }
}

impl<T> OnceSignal<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&mut self, f: impl FnMut(&T) + 'static) {
        if !self.fired {
            self.inner.subscribe(f);
        }
    }

    /// Returns `true` when this call delivered the event.
    pub fn emit(&mut self, value: &T) -> bool {
        if self.fired {
            return false;
        }
        self.fired = true;
        self.inner.emit(value);
        // Subscribers are one-shot; release their captures.
        self.inner.subscribers.clear();
        true
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }
}
