use crate::config::*;

use log::*;
use wasmer::{AsStoreRef, ExportError, Instance, TypedFunction, WasmTypeList};

///
/// The lifecycle functions exported by a guest module (any of which may be missing)
///
pub (crate) struct ScriptExports {
    pub (crate) entry_point:    Option<TypedFunction<(), ()>>,
    pub (crate) on_start:       Option<TypedFunction<(), ()>>,
    pub (crate) on_update:      Option<TypedFunction<(), ()>>,
    pub (crate) on_select:      Option<TypedFunction<(), ()>>,
    pub (crate) on_event:       Option<TypedFunction<(i32, i32, i32, i32), ()>>,
}

///
/// Looks up an export that the guest doesn't have to provide
///
fn optional_export<Args: WasmTypeList, Rets: WasmTypeList>(instance: &Instance, store: &impl AsStoreRef, name: &str) -> Option<TypedFunction<Args, Rets>> {
    match instance.exports.get_typed_function::<Args, Rets>(store, name) {
        Ok(function)                => Some(function),
        Err(ExportError::Missing(_)) => None,
        Err(err)                    => {
            warn!("Ignoring script export '{}': {}", name, err);
            None
        }
    }
}

impl ScriptExports {
    ///
    /// Binds the lifecycle exports of an instance
    ///
    pub (crate) fn bind(instance: &Instance, store: &impl AsStoreRef, names: &ScriptExportNames) -> ScriptExports {
        ScriptExports {
            entry_point:    optional_export(instance, store, &names.entry_point),
            on_start:       optional_export(instance, store, &names.on_start),
            on_update:      optional_export(instance, store, &names.on_update),
            on_select:      optional_export(instance, store, &names.on_select),
            on_event:       optional_export(instance, store, &names.on_event),
        }
    }
}
