use super::host_env::*;
use crate::error::*;
use crate::scene::*;
use crate::syscalls::*;

use log::*;
use wasmer::{Function, FunctionEnv, FunctionEnvMut, FunctionType, Imports, MemoryView, RuntimeError, Store, Type, Value};

///
/// Runs a system call against the memory of the calling instance
///
fn with_system_calls<TScene: 'static + Send + SceneGraph>(env: &mut FunctionEnvMut<HostEnv<TScene>>, call: impl FnOnce(&SystemCalls, &mut MemoryView<'_>) -> Errno) -> i32 {
    let (host, store)   = env.data_and_store_mut();
    let Some(memory)    = host.memory.as_ref() else { return Errno::Fault.into(); };
    let mut view        = memory.view(&store);

    call(&host.system_calls, &mut view).into()
}

///
/// Defines the `wasi_snapshot_preview1` functions in a set of imports
///
pub fn define_system_calls<TScene: 'static + Send + SceneGraph>(imports: &mut Imports, store: &mut Store, env: &FunctionEnv<HostEnv<TScene>>) {
    imports.define(WASI_NAMESPACE, "args_sizes_get", Function::new_typed_with_env(store, env, |mut env: FunctionEnvMut<HostEnv<TScene>>, argc_ptr: i32, argv_buf_size_ptr: i32| -> i32 {
        with_system_calls(&mut env, |calls, memory| calls.args_sizes_get(memory, argc_ptr as u32, argv_buf_size_ptr as u32))
    }));

    imports.define(WASI_NAMESPACE, "args_get", Function::new_typed_with_env(store, env, |mut env: FunctionEnvMut<HostEnv<TScene>>, argv_ptr: i32, argv_buf_ptr: i32| -> i32 {
        with_system_calls(&mut env, |calls, memory| calls.args_get(memory, argv_ptr as u32, argv_buf_ptr as u32))
    }));

    imports.define(WASI_NAMESPACE, "environ_sizes_get", Function::new_typed_with_env(store, env, |mut env: FunctionEnvMut<HostEnv<TScene>>, count_ptr: i32, buf_size_ptr: i32| -> i32 {
        with_system_calls(&mut env, |calls, memory| calls.environ_sizes_get(memory, count_ptr as u32, buf_size_ptr as u32))
    }));

    imports.define(WASI_NAMESPACE, "environ_get", Function::new_typed_with_env(store, env, |mut env: FunctionEnvMut<HostEnv<TScene>>, environ_ptr: i32, environ_buf_ptr: i32| -> i32 {
        with_system_calls(&mut env, |calls, memory| calls.environ_get(memory, environ_ptr as u32, environ_buf_ptr as u32))
    }));

    imports.define(WASI_NAMESPACE, "clock_res_get", Function::new_typed_with_env(store, env, |mut env: FunctionEnvMut<HostEnv<TScene>>, clock_id: i32, resolution_ptr: i32| -> i32 {
        with_system_calls(&mut env, |calls, memory| calls.clock_res_get(memory, clock_id, resolution_ptr as u32))
    }));

    imports.define(WASI_NAMESPACE, "clock_time_get", Function::new_typed_with_env(store, env, |mut env: FunctionEnvMut<HostEnv<TScene>>, clock_id: i32, precision: i64, time_ptr: i32| -> i32 {
        with_system_calls(&mut env, |calls, memory| calls.clock_time_get(memory, clock_id, precision, time_ptr as u32))
    }));

    imports.define(WASI_NAMESPACE, "random_get", Function::new_typed_with_env(store, env, |mut env: FunctionEnvMut<HostEnv<TScene>>, buf_ptr: i32, buf_len: i32| -> i32 {
        with_system_calls(&mut env, |calls, memory| calls.random_get(memory, buf_ptr as u32, buf_len as u32))
    }));

    imports.define(WASI_NAMESPACE, "fd_write", Function::new_typed_with_env(store, env, |mut env: FunctionEnvMut<HostEnv<TScene>>, fd: i32, iovs_ptr: i32, iovs_len: i32, nwritten_ptr: i32| -> i32 {
        with_system_calls(&mut env, |calls, memory| calls.fd_write(memory, fd, iovs_ptr as u32, iovs_len as u32, nwritten_ptr as u32))
    }));

    // Everything else is declared with its real signature so the guest links, but does nothing
    for (name, params) in UNSUPPORTED_CALLS.iter() {
        let name                = *name;
        let results: &[Type]    = if call_has_no_result(name) { &[] } else { &[Type::I32] };
        let signature           = FunctionType::new(params.to_vec(), results.to_vec());

        let stub = Function::new_with_env(store, env, signature, move |mut env: FunctionEnvMut<HostEnv<TScene>>, args: &[Value]| -> Result<Vec<Value>, RuntimeError> {
            let first_call = env.data_mut().reported_calls.insert(name);

            if call_has_no_result(name) {
                let exit_code = args.first().and_then(|arg| arg.i32()).unwrap_or(0);
                if first_call { warn!("Guest called {}({}): stopping the current call", name, exit_code); }

                Err(RuntimeError::new(format!("guest called {}({})", name, exit_code)))
            } else {
                if first_call { warn!("Guest called unsupported system call '{}'", name); }

                Ok(vec![Value::I32(Errno::Nosys.into())])
            }
        });

        imports.define(WASI_NAMESPACE, name, stub);
    }
}
