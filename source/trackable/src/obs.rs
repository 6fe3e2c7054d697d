use {
    crate::{
        signal::Signal,
        trackable::Trackable,
    },
    rooting::ScopeValue,
    serde::{
        Deserialize,
        Serialize,
    },
    std::{
        cell::Cell,
        fmt,
        rc::{
            Rc,
            Weak,
        },
    },
};

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum RestoreError {
    #[error("Expected a boolean, got {0}")]
    NotBoolean(serde_json::Value),
    #[error("No state to restore and no default value")]
    NoDefault,
}

#[derive(Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Default, Debug)]
#[serde(rename_all = "snake_case")]
pub struct BooleanConfig {
    pub value: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<bool>,
}

struct TrackableBoolean_ {
    value: Cell<bool>,
    default_value: Cell<Option<bool>>,
    changed: Signal,
}

/// Shared boolean with change notification. Clones refer to the same value.
#[derive(Clone)]
pub struct TrackableBoolean(Rc<TrackableBoolean_>);

impl TrackableBoolean {
    pub fn new(initial: bool, default_value: Option<bool>) -> Self {
        return Self(Rc::new(TrackableBoolean_ {
            value: Cell::new(initial),
            default_value: Cell::new(default_value),
            changed: Signal::new(),
        }));
    }

    pub fn from_config(config: &BooleanConfig) -> Self {
        return Self::new(config.value, config.default);
    }

    pub fn config(&self) -> BooleanConfig {
        return BooleanConfig {
            value: self.get(),
            default: self.default_value(),
        };
    }

    pub fn weak(&self) -> WeakTrackableBoolean {
        return WeakTrackableBoolean(Rc::downgrade(&self.0));
    }

    #[cfg(test)]
    pub(crate) fn handle_count(&self) -> usize {
        return Rc::strong_count(&self.0);
    }

    pub fn get(&self) -> bool {
        return self.0.value.get();
    }

    /// Notifies only if the value actually changes. No borrow is held while
    /// listeners run, so they may set the value again.
    pub fn set(&self, v: bool) {
        if self.0.value.replace(v) == v {
            return;
        }
        self.0.changed.dispatch();
    }

    pub fn toggle(&self) {
        self.set(!self.get());
    }

    pub fn default_value(&self) -> Option<bool> {
        return self.0.default_value.get();
    }

    pub fn set_default_value(&self, default_value: Option<bool>) {
        self.0.default_value.set(default_value);
    }

    /// Calls `cb` with the current value now and with the new value after each
    /// change, until the returned value is dropped.
    pub fn listen(&self, cb: impl Fn(bool) + 'static) -> ScopeValue {
        cb(self.get());
        let weak = Rc::downgrade(&self.0);
        return self.0.changed.add(move || {
            let Some(s) = weak.upgrade() else {
                return;
            };
            cb(s.value.get());
        }).into_scope();
    }

    /// Strict form of `restore_state`.
    pub fn try_restore_state(&self, x: Option<&serde_json::Value>) -> Result<(), RestoreError> {
        let v = match x {
            Some(serde_json::Value::Bool(v)) => *v,
            Some(x) => return Err(RestoreError::NotBoolean(x.clone())),
            None => self.default_value().ok_or(RestoreError::NoDefault)?,
        };
        self.set(v);
        return Ok(());
    }
}

/// Doesn't keep the value alive. Listeners stored in the value's own signal
/// hold this.
#[derive(Clone)]
pub struct WeakTrackableBoolean(Weak<TrackableBoolean_>);

impl WeakTrackableBoolean {
    pub fn upgrade(&self) -> Option<TrackableBoolean> {
        return self.0.upgrade().map(TrackableBoolean);
    }
}

impl Trackable for TrackableBoolean {
    fn changed(&self) -> &Signal {
        return &self.0.changed;
    }

    fn to_json(&self) -> Option<serde_json::Value> {
        let value = self.get();
        if Some(value) == self.default_value() {
            return None;
        }
        return Some(serde_json::Value::Bool(value));
    }

    fn restore_state(&self, x: Option<&serde_json::Value>) {
        if let Err(e) = self.try_restore_state(x) {
            tracing::debug!(error = %e, "Ignoring boolean state");
        }
    }
}

impl fmt::Debug for TrackableBoolean {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        return f
            .debug_struct("TrackableBoolean")
            .field("value", &self.get())
            .field("default_value", &self.default_value())
            .finish();
    }
}
