use {
    crate::{
        dispose::Disposer,
        obs::TrackableBoolean,
        port::VisibilityTarget,
        trackable::Trackable,
    },
};

/// Shows `element` while the model is true. The element isn't owned, disposal
/// only stops tracking.
pub struct VisibilityBinding<E: VisibilityTarget + Clone> {
    model: TrackableBoolean,
    element: E,
    disposer: Disposer,
}

impl<E: VisibilityTarget + Clone> VisibilityBinding<E> {
    pub fn new(model: &TrackableBoolean, element: E) -> Self {
        let out = Self {
            model: model.clone(),
            element,
            disposer: Disposer::new(),
        };
        out.update_visibility();
        out.disposer.own(model.changed().add({
            let model = model.weak();
            let element = out.element.clone();
            move || {
                let Some(model) = model.upgrade() else {
                    return;
                };
                element.set_visible(model.get());
            }
        }).into_scope());
        return out;
    }

    pub fn model(&self) -> &TrackableBoolean {
        return &self.model;
    }

    pub fn element(&self) -> &E {
        return &self.element;
    }

    pub fn update_visibility(&self) {
        self.element.set_visible(self.model.get());
    }

    pub fn is_disposed(&self) -> bool {
        return self.disposer.is_disposed();
    }

    pub fn dispose(&self) {
        self.disposer.dispose();
    }
}

#[cfg(test)]
mod tests {
    use {
        super::VisibilityBinding,
        crate::{
            obs::TrackableBoolean,
            port::{
                fake::FakeElement,
                VisibilityTarget,
            },
            trackable::Trackable,
        },
        std::rc::Rc,
    };

    #[test]
    fn follows_model_until_disposed() {
        let model = TrackableBoolean::new(true, None);
        let element = FakeElement::default();
        let binding = VisibilityBinding::new(&model, element.clone());
        assert!(element.is_visible());
        model.set(false);
        assert!(!element.is_visible());
        binding.dispose();
        assert!(binding.is_disposed());
        model.set(true);
        assert!(!element.is_visible());
        binding.dispose();
    }

    #[test]
    fn initially_hidden() {
        let model = TrackableBoolean::new(false, None);
        let element = FakeElement::default();
        element.set_visible(true);
        let _binding = VisibilityBinding::new(&model, element.clone());
        assert!(!element.is_visible());
        model.toggle();
        assert!(element.is_visible());
    }

    #[test]
    fn drop_releases_subscription() {
        let model = TrackableBoolean::new(true, None);
        let element = Rc::new(FakeElement::default());
        drop(VisibilityBinding::new(&model, element.clone()));
        assert!(model.changed().is_empty());
        assert!(element.is_visible());
        model.set(false);
        assert!(element.is_visible());
    }

    #[test]
    fn listener_holds_model_weakly() {
        let model = TrackableBoolean::new(true, None);
        let element = FakeElement::default();
        let _binding = VisibilityBinding::new(&model, element.clone());
        assert_eq!(model.handle_count(), 2);
        model.set(false);
        assert!(!element.is_visible());
    }

    #[test]
    fn several_elements_one_model() {
        let model = TrackableBoolean::new(false, None);
        let a = FakeElement::default();
        let b = FakeElement::default();
        let _ba = VisibilityBinding::new(&model, a.clone());
        let _bb = VisibilityBinding::new(&model, b.clone());
        model.set(true);
        assert!(a.is_visible());
        assert!(b.is_visible());
    }
}
