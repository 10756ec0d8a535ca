use super::module_source::*;
use super::script_exports::*;
use super::script_state::*;
use crate::abi::*;
use crate::config::*;
use crate::error::*;
use crate::host::*;
use crate::memory::*;
use crate::scene::*;
use crate::session::*;
use crate::syscalls::*;

use log::*;
use wasmer::{FunctionEnv, Instance, Memory, Module, Store, TypedFunction};

use std::sync::*;

///
/// A loaded module and the store that runs it
///
struct ScriptRuntime {
    store:      Store,
    memory:     Memory,
    exports:    ScriptExports,

    // Kept so the instance lives as long as the component
    _instance:  Instance,
}

///
/// A script attached to a scene element: loads a WASM module and drives its lifecycle exports
///
/// Scripts are loaded by `instantiate()` and then receive events through `dispatch()`. The first update calls the
/// entry point and `on_start` before `on_update`: selection events are ignored until this has happened. Events that
/// the script registered for through the scene ABI are queued and sent to it by `deliver_events()`.
///
pub struct ScriptComponent<TScene: 'static + Send + SceneGraph> {
    session:    SharedSession<TScene>,
    source:     Box<dyn ModuleSource>,
    config:     ScriptConfig,
    state:      ScriptState,
    runtime:    Option<ScriptRuntime>,

    /// Sender for events raised by the scene (cloned into the host environment for each instance)
    event_sender: ElementEventSender,

    /// Events waiting to be delivered to the guest
    events:     ElementEventReceiver,
}

impl ScriptRuntime {
    ///
    /// Calls one of the lifecycle exports, if the guest supplies it
    ///
    fn call(store: &mut Store, function: Option<&TypedFunction<(), ()>>, name: &str) -> Result<(), ScriptError> {
        let Some(function) = function else { return Ok(()); };

        function.call(store).map_err(|err| {
            let err = ScriptError::from(err);
            error!("Script trapped in '{}': {}", name, err);
            err
        })
    }
}

impl<TScene: 'static + Send + SceneGraph> ScriptComponent<TScene> {
    ///
    /// Creates a script that will load its module from the specified source
    ///
    pub fn new(session: SharedSession<TScene>, source: impl 'static + ModuleSource, config: ScriptConfig) -> ScriptComponent<TScene> {
        let (event_sender, events) = element_event_queue();

        ScriptComponent {
            session,
            source:     Box::new(source),
            config,
            state:      ScriptState::Unloaded,
            runtime:    None,
            event_sender,
            events,
        }
    }

    ///
    /// The current lifecycle state of this script
    ///
    pub fn state(&self) -> ScriptState {
        self.state
    }

    ///
    /// The session this script reads and updates
    ///
    pub fn session(&self) -> &SharedSession<TScene> {
        &self.session
    }

    ///
    /// Fetches, compiles and instantiates the module
    ///
    /// A script can only be instantiated once. If this fails, the script stays in the `Failed` state and will
    /// never run.
    ///
    pub async fn instantiate(&mut self) -> Result<(), ScriptError> {
        match self.state {
            ScriptState::Unloaded   => { }
            ScriptState::Failed     => { return Err(ScriptError::InstantiationFailed("the script has already failed to load".to_string())); }
            _                       => { return Err(ScriptError::AlreadyInstantiated); }
        }

        self.state = ScriptState::Instantiating;

        let fetch   = self.source.fetch();
        let runtime = match fetch.await {
            Ok(bytes)   => self.load_module(&bytes),
            Err(err)    => Err(err),
        };

        match runtime {
            Ok(runtime) => {
                debug!("Script instantiated");

                self.runtime    = Some(runtime);
                self.state      = ScriptState::Initialized { started: false };
                Ok(())
            }

            Err(err) => {
                error!("Script failed to load: {}", err);

                self.state = ScriptState::Failed;
                Err(err)
            }
        }
    }

    ///
    /// Compiles a module and links it to the scene ABI and system calls
    ///
    fn load_module(&self, bytes: &[u8]) -> Result<ScriptRuntime, ScriptError> {
        let mut store   = Store::default();
        let module      = Module::new(&store, bytes)?;

        let host_env    = HostEnv::new(Arc::clone(&self.session), SystemCalls::from_config(&self.config), self.event_sender.clone());
        let env         = FunctionEnv::new(&mut store, host_env);
        let imports     = script_imports(&mut store, &env, &self.config.abi_namespace);
        let instance    = Instance::new(&mut store, &module, &imports)?;

        let memory      = instance.exports.get_memory("memory")?.clone();
        env.as_mut(&mut store).bind_memory(memory.clone());

        let exports     = ScriptExports::bind(&instance, &store, &self.config.exports);

        Ok(ScriptRuntime { store, memory, exports, _instance: instance })
    }

    ///
    /// Sends an event to the script
    ///
    /// Does nothing if the script is not initialized. The first update starts the script.
    ///
    pub fn dispatch(&mut self, event: ScriptEvent) -> Result<(), ScriptError> {
        let ScriptState::Initialized { started } = self.state else { return Ok(()); };
        let Some(runtime) = self.runtime.as_mut() else { return Ok(()); };
        let names = &self.config.exports;

        match (event, started) {
            (ScriptEvent::Update, false) => {
                // on_start runs even if the entry point traps, and the first trap is the one reported
                let entry_point = ScriptRuntime::call(&mut runtime.store, runtime.exports.entry_point.as_ref(), &names.entry_point);
                let on_start    = ScriptRuntime::call(&mut runtime.store, runtime.exports.on_start.as_ref(), &names.on_start);

                self.state = ScriptState::Initialized { started: true };
                entry_point.and(on_start)?;

                ScriptRuntime::call(&mut runtime.store, runtime.exports.on_update.as_ref(), &names.on_update)
            }

            (ScriptEvent::Update, true) => ScriptRuntime::call(&mut runtime.store, runtime.exports.on_update.as_ref(), &names.on_update),
            (ScriptEvent::Select, false) => Ok(()),
            (ScriptEvent::Select, true) => ScriptRuntime::call(&mut runtime.store, runtime.exports.on_select.as_ref(), &names.on_select),
        }
    }

    ///
    /// Sends any events raised since the last call to the guest's event export, returning how many were delivered
    ///
    /// If the guest traps, the remaining events are left in the queue.
    ///
    pub fn deliver_events(&mut self) -> Result<usize, ScriptError> {
        let Some(runtime) = self.runtime.as_mut() else { return Ok(0); };
        let mut delivered = 0;

        while let Ok(event) = self.events.try_recv() {
            let Some(on_event) = runtime.exports.on_event.as_ref() else {
                trace!("Dropping {:?}: script has no '{}' export", event, self.config.exports.on_event);
                continue;
            };

            on_event.call(&mut runtime.store, event.descriptor, event.element_kind, event.event_kind, event.user_data)
                .map_err(|err| {
                    let err = ScriptError::from(err);
                    error!("Script trapped in '{}': {}", self.config.exports.on_event, err);
                    err
                })?;

            delivered += 1;
        }

        Ok(delivered)
    }

    ///
    /// Reads a range of the guest's linear memory (None if the script is not loaded or the range is out of bounds)
    ///
    pub fn read_guest_memory(&self, offset: u32, len: usize) -> Option<Vec<u8>> {
        let runtime = self.runtime.as_ref()?;
        let view    = runtime.memory.view(&runtime.store);

        read_bytes(&view, offset, len).ok()
    }
}
