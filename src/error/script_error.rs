use std::error::{Error};
use std::fmt;

///
/// Errors that can occur on the host side while loading or running a script
///
#[derive(Clone, PartialEq, Eq, Hash, Debug)]
pub enum ScriptError {
    /// The module bytes could not be retrieved from their source
    FetchFailed(String),

    /// The module bytes are not a valid WASM module
    CompileFailed(String),

    /// The module could not be linked against the host imports or its start function failed
    InstantiationFailed(String),

    /// The module does not export its linear memory as `memory`
    MissingMemory,

    /// `instantiate()` was called on a script that has already been loaded (or has already failed to load)
    AlreadyInstantiated,

    /// A call was made to a script that has not finished instantiating
    NotInitialized,

    /// The guest trapped while running one of its exports
    GuestTrap(String),

    /// The host configuration could not be read
    Config(String),
}

impl fmt::Display for ScriptError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        use ScriptError::*;

        match self {
            FetchFailed(msg)            => write!(f, "could not fetch module: {}", msg),
            CompileFailed(msg)          => write!(f, "could not compile module: {}", msg),
            InstantiationFailed(msg)    => write!(f, "could not instantiate module: {}", msg),
            MissingMemory               => write!(f, "module does not export 'memory'"),
            AlreadyInstantiated         => write!(f, "script has already been instantiated"),
            NotInitialized              => write!(f, "script is not initialized"),
            GuestTrap(msg)              => write!(f, "guest trapped: {}", msg),
            Config(msg)                 => write!(f, "invalid script configuration: {}", msg),
        }
    }
}

impl Error for ScriptError { }

impl From<wasmer::CompileError> for ScriptError {
    fn from(err: wasmer::CompileError) -> ScriptError {
        ScriptError::CompileFailed(err.to_string())
    }
}

impl From<wasmer::InstantiationError> for ScriptError {
    fn from(err: wasmer::InstantiationError) -> ScriptError {
        ScriptError::InstantiationFailed(err.to_string())
    }
}

impl From<wasmer::RuntimeError> for ScriptError {
    fn from(err: wasmer::RuntimeError) -> ScriptError {
        ScriptError::GuestTrap(err.message())
    }
}

impl From<wasmer::ExportError> for ScriptError {
    fn from(_: wasmer::ExportError) -> ScriptError {
        ScriptError::MissingMemory
    }
}

impl From<ron::error::SpannedError> for ScriptError {
    fn from(err: ron::error::SpannedError) -> ScriptError {
        ScriptError::Config(err.to_string())
    }
}

impl From<std::io::Error> for ScriptError {
    fn from(err: std::io::Error) -> ScriptError {
        ScriptError::FetchFailed(err.to_string())
    }
}
