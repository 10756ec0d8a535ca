///
/// The lifecycle state of a script
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ScriptState {
    /// The module has not been loaded yet
    Unloaded,

    /// The module is being fetched and compiled
    Instantiating,

    /// The module is ready to receive events. `started` is set once the entry point and `on_start` have been called.
    Initialized { started: bool },

    /// The module could not be loaded: the script will never run
    Failed,
}

///
/// The events that the host dispatches to a script
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub enum ScriptEvent {
    /// Sent once per frame
    Update,

    /// Sent when the element that owns the script is selected
    Select,
}

impl ScriptState {
    ///
    /// True if the script has loaded and can receive events
    ///
    pub fn is_initialized(&self) -> bool {
        matches!(self, ScriptState::Initialized { .. })
    }

    ///
    /// True if the entry point and `on_start` have been called
    ///
    pub fn has_started(&self) -> bool {
        matches!(self, ScriptState::Initialized { started: true })
    }
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn started_implies_initialized() {
        assert!(!ScriptState::Unloaded.is_initialized());
        assert!(!ScriptState::Failed.has_started());
        assert!(ScriptState::Initialized { started: false }.is_initialized());
        assert!(!ScriptState::Initialized { started: false }.has_started());
        assert!(ScriptState::Initialized { started: true }.has_started());
    }
}
