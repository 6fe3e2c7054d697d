use crate::signal::Signal;

/// State that can be saved to and restored from JSON, e.g. by a url-hash or
/// session persistence layer. `changed` fires whenever the saved form may
/// have changed.
pub trait Trackable {
    fn changed(&self) -> &Signal;

    /// `None` means nothing needs saving (the state is at its default).
    fn to_json(&self) -> Option<serde_json::Value>;

    /// Unusable input is ignored.
    fn restore_state(&self, x: Option<&serde_json::Value>);
}
