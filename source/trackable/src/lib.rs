pub mod signal;
pub mod dispose;
pub mod trackable;
pub mod obs;
pub mod port;
pub mod checkbox;
pub mod visibility;
pub mod dom;

pub use {
    checkbox::CheckboxBinding,
    obs::{
        BooleanConfig,
        RestoreError,
        TrackableBoolean,
        WeakTrackableBoolean,
    },
    trackable::Trackable,
    visibility::VisibilityBinding,
};
