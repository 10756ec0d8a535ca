use crate::abi::*;
use crate::scene::*;
use crate::session::*;
use crate::syscalls::*;

use wasmer::{Memory};

use std::collections::{HashSet};

///
/// The state shared by every function imported into a script instance
///
pub struct HostEnv<TScene: 'static + Send + SceneGraph> {
    /// The instance's linear memory (not available until the instance has been created)
    pub (crate) memory: Option<Memory>,

    /// The session this script belongs to
    pub (crate) session: SharedSession<TScene>,

    /// The implemented system calls
    pub (crate) system_calls: SystemCalls,

    /// Where events for this script are sent
    pub (crate) events: ElementEventSender,

    /// The unsupported system calls that the guest has tried to use (each one is logged only the first time it's called)
    pub (crate) reported_calls: HashSet<&'static str>,
}

impl<TScene: 'static + Send + SceneGraph> HostEnv<TScene> {
    ///
    /// Creates the environment for a new script instance
    ///
    pub fn new(session: SharedSession<TScene>, system_calls: SystemCalls, events: ElementEventSender) -> HostEnv<TScene> {
        HostEnv {
            memory:         None,
            session,
            system_calls,
            events,
            reported_calls: HashSet::new(),
        }
    }

    ///
    /// Sets the memory that the imported functions read and write (must be called once the instance has been created)
    ///
    pub fn bind_memory(&mut self, memory: Memory) {
        self.memory = Some(memory);
    }
}
