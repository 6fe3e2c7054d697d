use {
    rooting::ScopeValue,
    std::rc::Rc,
};

/// A checkbox-like control a binding can create and own.
pub trait CheckboxControl: 'static {
    fn create() -> Self
    where
        Self: Sized;
    fn checked(&self) -> bool;
    fn set_checked(&self, checked: bool);

    /// `cb` runs after the user changes the checked state, until the returned
    /// value is dropped.
    fn on_change(&self, cb: Box<dyn Fn()>) -> ScopeValue;
    fn has_parent(&self) -> bool;
    fn detach(&self);
}

/// An element whose visibility can be switched. Implementations are handles;
/// the element itself is owned elsewhere.
pub trait VisibilityTarget: 'static {
    fn set_visible(&self, visible: bool);
    fn is_visible(&self) -> bool;
}

impl<T: VisibilityTarget> VisibilityTarget for Rc<T> {
    fn set_visible(&self, visible: bool) {
        self.as_ref().set_visible(visible);
    }

    fn is_visible(&self) -> bool {
        return self.as_ref().is_visible();
    }
}

#[cfg(test)]
pub(crate) mod fake {
    use {
        super::{
            CheckboxControl,
            VisibilityTarget,
        },
        crate::signal::Signal,
        rooting::ScopeValue,
        std::{
            cell::Cell,
            rc::Rc,
        },
    };

    #[derive(Default)]
    struct FakeCheckbox_ {
        checked: Cell<bool>,
        attached: Cell<bool>,
        writes: Cell<usize>,
        change: Signal,
    }

    #[derive(Clone, Default)]
    pub(crate) struct FakeCheckbox(Rc<FakeCheckbox_>);

    impl FakeCheckbox {
        /// What a user click does: flip the state, then fire the change event.
        pub(crate) fn click(&self) {
            self.0.checked.set(!self.0.checked.get());
            self.0.change.dispatch();
        }

        pub(crate) fn attach(&self) {
            self.0.attached.set(true);
        }

        /// Number of `set_checked` calls from outside.
        pub(crate) fn writes(&self) -> usize {
            return self.0.writes.get();
        }

        pub(crate) fn change_listeners(&self) -> usize {
            return self.0.change.len();
        }
    }

    impl CheckboxControl for FakeCheckbox {
        fn create() -> Self {
            return Self::default();
        }

        fn checked(&self) -> bool {
            return self.0.checked.get();
        }

        fn set_checked(&self, checked: bool) {
            self.0.writes.set(self.0.writes.get() + 1);
            self.0.checked.set(checked);
        }

        fn on_change(&self, cb: Box<dyn Fn()>) -> ScopeValue {
            return self.0.change.add(cb).into_scope();
        }

        fn has_parent(&self) -> bool {
            return self.0.attached.get();
        }

        fn detach(&self) {
            self.0.attached.set(false);
        }
    }

    #[derive(Clone, Default)]
    pub(crate) struct FakeElement(Rc<Cell<bool>>);

    impl VisibilityTarget for FakeElement {
        fn set_visible(&self, visible: bool) {
            self.0.set(visible);
        }

        fn is_visible(&self) -> bool {
            return self.0.get();
        }
    }
}
