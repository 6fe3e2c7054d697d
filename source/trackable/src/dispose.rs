use {
    rooting::ScopeValue,
    std::{
        cell::{
            Cell,
            RefCell,
        },
        mem::take,
    },
};

enum Resource {
    Scope(ScopeValue),
    Cleanup(Box<dyn FnOnce()>),
}

impl Resource {
    fn release(self) {
        match self {
            Resource::Scope(v) => drop(v),
            Resource::Cleanup(f) => f(),
        }
    }
}

/// Resources owned by one object, released in registration order exactly once,
/// on the first `dispose` or on drop.
#[derive(Default)]
pub struct Disposer {
    resources: RefCell<Vec<Resource>>,
    disposed: Cell<bool>,
}

impl Disposer {
    pub fn new() -> Self {
        return Self::default();
    }

    /// Registering after disposal releases the value immediately.
    pub fn own(&self, v: ScopeValue) {
        self.push(Resource::Scope(v));
    }

    pub fn on_dispose(&self, f: impl FnOnce() + 'static) {
        self.push(Resource::Cleanup(Box::new(f)));
    }

    fn push(&self, r: Resource) {
        if self.disposed.get() {
            r.release();
            return;
        }
        self.resources.borrow_mut().push(r);
    }

    pub fn is_disposed(&self) -> bool {
        return self.disposed.get();
    }

    /// Returns true if this call did the release, false if already disposed.
    pub fn dispose(&self) -> bool {
        if self.disposed.replace(true) {
            return false;
        }
        // Released outside the borrow so cleanups can touch this disposer.
        let resources = take(&mut *self.resources.borrow_mut());
        tracing::trace!(resources = resources.len(), "Disposing");
        for r in resources {
            r.release();
        }
        return true;
    }
}

impl Drop for Disposer {
    fn drop(&mut self) {
        self.dispose();
    }
}
