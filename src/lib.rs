//!
//! # Welcome to flo_scene_script
//!
//! `flo_scene_script` hosts sandboxed WebAssembly scripts that are attached to the elements of a scene. A script
//! can find the elements in its scene, read and change their attributes, play animations on models and ask to be
//! told when things happen to an element. The host drives each script through a small lifecycle: it is loaded,
//! started on its first update, then receives update and select events.
//!
//! # Examples
//!
//! Create a scene with a text element and give a script access to it:
//!
//! ```
//! # use flo_scene_script::*;
//! let mut scene   = MemoryScene::new();
//! let label       = scene.add_element(SceneElement::new(Some("label"), ElementData::Text(TextState::default())));
//!
//! let session     = ScriptSession::shared(scene);
//! let descriptor  = session.lock().unwrap().register_node(label);
//! assert!(descriptor == Some(Descriptor(FIRST_DESCRIPTOR)));
//! ```
//!
//! Load a script and send it its first update:
//!
//! ```
//! # use flo_scene_script::*;
//! # let session = ScriptSession::shared(MemoryScene::new());
//! use futures::executor;
//!
//! let wat         = r#"(module (memory (export "memory") 1) (func (export "on_update")))"#;
//! let mut script  = ScriptComponent::new(session, BytesModuleSource::new(wat), ScriptConfig::default());
//!
//! executor::block_on(async { script.instantiate().await.unwrap() });
//! script.dispatch(ScriptEvent::Update).unwrap();
//!
//! assert!(script.state() == ScriptState::Initialized { started: true });
//! ```
//!
//! # Concepts
//!
//! Scripts never see the scene graph directly. Elements are handed to them as small integer *descriptors*, which
//! are allocated by a `DescriptorTable` when the host registers an element. Every ABI function takes a descriptor
//! and pointers into the guest's linear memory, and returns an `AbiStatus` code. Values such as positions and
//! colours are passed as fixed-layout little-endian records.
//!
//! Guests built for `wasm32-wasi` also need the WASI system calls to link. A small subset of these is implemented
//! (arguments, environment, clocks, random numbers and writes to stdout/stderr, which go to the `log` crate) and
//! the rest are defined to return `ENOSYS`.
//!
//! The scene itself is supplied by the host by implementing the `SceneGraph` trait. `MemoryScene` is a simple
//! implementation that is useful for tests and tools.
//!

mod error;
mod memory;
mod codec;
mod scene;
mod descriptor_table;
mod session;
mod config;
mod syscalls;
mod abi;
mod host;
mod lifecycle;

pub use self::error::*;
pub use self::memory::*;
pub use self::codec::*;
pub use self::scene::*;
pub use self::descriptor_table::*;
pub use self::session::*;
pub use self::config::*;
pub use self::syscalls::*;
pub use self::abi::*;
pub use self::host::*;
pub use self::lifecycle::*;
