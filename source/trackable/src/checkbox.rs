use {
    crate::{
        dispose::Disposer,
        obs::TrackableBoolean,
        port::CheckboxControl,
        trackable::Trackable,
    },
    std::rc::Rc,
};

/// Owns a checkbox control and keeps it in sync with a `TrackableBoolean` in
/// both directions. Disposing (or dropping) detaches the control.
pub struct CheckboxBinding<C: CheckboxControl> {
    model: TrackableBoolean,
    control: Rc<C>,
    disposer: Disposer,
}

impl<C: CheckboxControl> CheckboxBinding<C> {
    pub fn new(model: &TrackableBoolean) -> Self {
        return Self::with_control(model, C::create());
    }

    /// `control` should be freshly created; the binding takes it over.
    pub fn with_control(model: &TrackableBoolean, control: C) -> Self {
        let control = Rc::new(control);
        let disposer = Disposer::new();
        disposer.own(model.changed().add({
            let model = model.weak();
            let control = Rc::downgrade(&control);
            move || {
                let Some(model) = model.upgrade() else {
                    return;
                };
                let Some(control) = control.upgrade() else {
                    return;
                };
                control.set_checked(model.get());
            }
        }).into_scope());
        control.set_checked(model.get());
        disposer.own(control.on_change(Box::new({
            let model = model.weak();
            let control = Rc::downgrade(&control);
            move || {
                let Some(model) = model.upgrade() else {
                    return;
                };
                let Some(control) = control.upgrade() else {
                    return;
                };
                model.set(control.checked());
            }
        })));
        disposer.on_dispose({
            let control = control.clone();
            move || {
                if control.has_parent() {
                    control.detach();
                }
            }
        });
        return Self {
            model: model.clone(),
            control,
            disposer,
        };
    }

    pub fn model(&self) -> &TrackableBoolean {
        return &self.model;
    }

    pub fn control(&self) -> &C {
        return &self.control;
    }

    pub fn update_checkbox(&self) {
        self.control.set_checked(self.model.get());
    }

    pub fn is_disposed(&self) -> bool {
        return self.disposer.is_disposed();
    }

    pub fn dispose(&self) {
        self.disposer.dispose();
    }
}
