use {
    rooting::{
        scope_any,
        ScopeValue,
    },
    std::{
        cell::{
            Cell,
            RefCell,
        },
        rc::{
            Rc,
            Weak,
        },
    },
};

#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct ListenerId(u64);

struct Listener {
    // Cleared on removal so in-flight dispatches skip it.
    live: Cell<bool>,
    cb: Box<dyn Fn()>,
}

#[derive(Default)]
struct Signal_ {
    next_id: u64,
    // Always sorted by id, which is subscription order.
    listeners: Vec<(ListenerId, Rc<Listener>)>,
}

/// Payload-less multicast notification. Listeners run synchronously, in the
/// order they were added, on every `dispatch`.
#[derive(Clone, Default)]
pub struct Signal(Rc<RefCell<Signal_>>);

impl Signal {
    pub fn new() -> Self {
        return Self::default();
    }

    /// The listener stays registered until the returned `Subscription` is
    /// dropped or `remove` is called with its id.
    pub fn add(&self, cb: impl Fn() + 'static) -> Subscription {
        let mut s = self.0.borrow_mut();
        let id = ListenerId(s.next_id);
        s.next_id += 1;
        s.listeners.push((id, Rc::new(Listener {
            live: Cell::new(true),
            cb: Box::new(cb),
        })));
        return Subscription {
            signal: Rc::downgrade(&self.0),
            id,
        };
    }

    /// Returns false if the listener was already gone.
    pub fn remove(&self, id: ListenerId) -> bool {
        return remove_listener(&self.0, id);
    }

    pub fn contains(&self, id: ListenerId) -> bool {
        return self.0.borrow().listeners.binary_search_by_key(&id, |(i, _)| *i).is_ok();
    }

    pub fn len(&self) -> usize {
        return self.0.borrow().listeners.len();
    }

    pub fn is_empty(&self) -> bool {
        return self.0.borrow().listeners.is_empty();
    }

    /// Listeners may add, remove or dispatch again while this runs. Listeners
    /// added during dispatch wait for the next one; listeners removed during
    /// dispatch are skipped if they haven't run yet.
    pub fn dispatch(&self) {
        let snapshot = self.0.borrow().listeners.clone();
        tracing::trace!(listeners = snapshot.len(), "Dispatching signal");
        for (_, l) in snapshot {
            if !l.live.get() {
                continue;
            }
            (l.cb)();
        }
    }
}

fn remove_listener(signal: &RefCell<Signal_>, id: ListenerId) -> bool {
    let removed;
    {
        let mut s = signal.borrow_mut();
        let Ok(index) = s.listeners.binary_search_by_key(&id, |(i, _)| *i) else {
            return false;
        };
        removed = s.listeners.remove(index);
    }
    removed.1.live.set(false);
    // Dropped after the borrow ends, the listener may own other subscriptions to this signal.
    drop(removed);
    return true;
}

/// Handle for a registered listener; dropping it unsubscribes.
#[must_use]
pub struct Subscription {
    signal: Weak<RefCell<Signal_>>,
    id: ListenerId,
}

impl Subscription {
    pub fn id(&self) -> ListenerId {
        return self.id;
    }

    pub fn into_scope(self) -> ScopeValue {
        return scope_any(self);
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let Some(signal) = self.signal.upgrade() else {
            return;
        };
        remove_listener(&signal, self.id);
    }
}
