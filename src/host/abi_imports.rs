use super::host_env::*;
use crate::abi::*;
use crate::error::*;
use crate::scene::*;

use wasmer::{Function, FunctionEnv, FunctionEnvMut, Imports, Store};

///
/// Runs a scene ABI call against the memory and session of the calling instance
///
fn with_abi<TScene: 'static + Send + SceneGraph>(env: &mut FunctionEnvMut<HostEnv<TScene>>, call: impl FnOnce(&mut dyn SceneAbi) -> AbiStatus) -> i32 {
    let (host, store)   = env.data_and_store_mut();
    let Some(memory)    = host.memory.as_ref() else { return AbiStatus::UnknownError.into(); };
    let Ok(mut session) = host.session.lock() else { return AbiStatus::UnknownError.into(); };
    let mut view        = memory.view(&store);
    let mut adapter     = SceneAbiAdapter::new(&mut view, &mut *session, &host.events);

    call(&mut adapter).into()
}

///
/// Defines an ABI import that forwards to the `SceneAbi` method of the same name
///
/// Every parameter arrives from the guest as an `i32`, and is converted to the type the method expects
///
macro_rules! abi_import {
    ($imports:expr, $store:expr, $env:expr, $namespace:expr, $name:ident($($arg:ident: $arg_type:ty),*)) => {
        $imports.define($namespace, stringify!($name), Function::new_typed_with_env($store, $env, |mut env: FunctionEnvMut<HostEnv<TScene>>, $($arg: i32),*| -> i32 {
            with_abi(&mut env, |abi| abi.$name($($arg as $arg_type),*))
        }))
    };
}

///
/// Defines the scene ABI functions in the specified namespace
///
pub fn define_scene_abi<TScene: 'static + Send + SceneGraph>(imports: &mut Imports, store: &mut Store, env: &FunctionEnv<HostEnv<TScene>>, namespace: &str) {
    abi_import!(imports, store, env, namespace, get_id_len(descriptor: i32, out_len_ptr: u32));
    abi_import!(imports, store, env, namespace, get_id(descriptor: i32, out_ptr: u32, out_len: i32));

    abi_import!(imports, store, env, namespace, get_display(descriptor: i32, out_ptr: u32));
    abi_import!(imports, store, env, namespace, set_display(descriptor: i32, display: i32));
    abi_import!(imports, store, env, namespace, get_position(descriptor: i32, out_ptr: u32));
    abi_import!(imports, store, env, namespace, set_position(descriptor: i32, in_ptr: u32));
    abi_import!(imports, store, env, namespace, get_rotation(descriptor: i32, out_ptr: u32));
    abi_import!(imports, store, env, namespace, set_rotation(descriptor: i32, in_ptr: u32));
    abi_import!(imports, store, env, namespace, get_scale(descriptor: i32, out_ptr: u32));
    abi_import!(imports, store, env, namespace, set_scale(descriptor: i32, in_ptr: u32));

    abi_import!(imports, store, env, namespace, get_text_len(descriptor: i32, out_len_ptr: u32));
    abi_import!(imports, store, env, namespace, get_text(descriptor: i32, out_ptr: u32, out_len: i32));
    abi_import!(imports, store, env, namespace, set_text(descriptor: i32, in_ptr: u32, in_len: i32));
    abi_import!(imports, store, env, namespace, get_background_color(descriptor: i32, out_ptr: u32));
    abi_import!(imports, store, env, namespace, set_background_color(descriptor: i32, in_ptr: u32));

    abi_import!(imports, store, env, namespace, change_anim(descriptor: i32, index: i32, play_state: i32, wrap: i32));
    abi_import!(imports, store, env, namespace, change_anim_by_name(descriptor: i32, name_ptr: u32, name_len: i32, play_state: i32, wrap: i32));
    abi_import!(imports, store, env, namespace, get_anim_play_state(descriptor: i32, out_ptr: u32));
    abi_import!(imports, store, env, namespace, set_anim_play_state(descriptor: i32, play_state: i32));
    abi_import!(imports, store, env, namespace, get_current_anim(descriptor: i32, out_ptr: u32));

    abi_import!(imports, store, env, namespace, get_element_count(out_ptr: u32));
    abi_import!(imports, store, env, namespace, get_elements(array_ptr: u32, array_len: i32, count_ptr: u32));
    abi_import!(imports, store, env, namespace, get_element_by_id(id_ptr: u32, id_len: i32, out_ptr: u32));

    abi_import!(imports, store, env, namespace, register_event(descriptor: i32, event_kind: i32, user_data: i32));
}
