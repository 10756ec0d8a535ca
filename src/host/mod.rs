//!
//! Links the scene ABI and the system call shim into a wasmer instance
//!
//! The imported functions share a `HostEnv`, which holds the instance's memory once it exists. Calls made before
//! the memory is bound (from a module's start section, for example) fail with `UnknownError` or `EFAULT`.
//!

mod host_env;
mod abi_imports;
mod wasi_imports;

pub use self::host_env::*;
pub use self::abi_imports::*;
pub use self::wasi_imports::*;

use crate::scene::*;

use wasmer::{FunctionEnv, Imports, Store};

///
/// Creates the full set of imports for a script: the scene ABI in `abi_namespace` and the WASI system calls
///
pub fn script_imports<TScene: 'static + Send + SceneGraph>(store: &mut Store, env: &FunctionEnv<HostEnv<TScene>>, abi_namespace: &str) -> Imports {
    let mut imports = Imports::new();

    define_system_calls(&mut imports, store, env);
    define_scene_abi(&mut imports, store, env, abi_namespace);

    imports
}
