use wasmer::{Type};
use wasmer::Type::{I32, I64};

/// The namespace that WASI preview 1 system calls are imported from
pub const WASI_NAMESPACE: &str = "wasi_snapshot_preview1";

///
/// The system calls that are implemented by `SystemCalls`
///
pub const IMPLEMENTED_CALLS: &[&str] = &[
    "args_get",
    "args_sizes_get",
    "environ_get",
    "environ_sizes_get",
    "clock_res_get",
    "clock_time_get",
    "fd_write",
    "random_get",
];

///
/// The system calls that are declared but not implemented, with their parameter types
///
/// These are all linked so that a guest that imports them can still be instantiated. Every one of them except
/// `proc_exit` returns an errno (`proc_exit` has no return value and traps instead).
///
pub const UNSUPPORTED_CALLS: &[(&str, &[Type])] = &[
    ("fd_advise",               &[I32, I64, I64, I32]),
    ("fd_allocate",             &[I32, I64, I64]),
    ("fd_close",                &[I32]),
    ("fd_datasync",             &[I32]),
    ("fd_fdstat_get",           &[I32, I32]),
    ("fd_fdstat_set_flags",     &[I32, I32]),
    ("fd_fdstat_set_rights",    &[I32, I64, I64]),
    ("fd_filestat_get",         &[I32, I32]),
    ("fd_filestat_set_size",    &[I32, I64]),
    ("fd_filestat_set_times",   &[I32, I64, I64, I32]),
    ("fd_pread",                &[I32, I32, I32, I64, I32]),
    ("fd_prestat_get",          &[I32, I32]),
    ("fd_prestat_dir_name",     &[I32, I32, I32]),
    ("fd_pwrite",               &[I32, I32, I32, I64, I32]),
    ("fd_read",                 &[I32, I32, I32, I32]),
    ("fd_readdir",              &[I32, I32, I32, I64, I32]),
    ("fd_renumber",             &[I32, I32]),
    ("fd_seek",                 &[I32, I64, I32, I32]),
    ("fd_sync",                 &[I32]),
    ("fd_tell",                 &[I32, I32]),
    ("path_create_directory",   &[I32, I32, I32]),
    ("path_filestat_get",       &[I32, I32, I32, I32, I32]),
    ("path_filestat_set_times", &[I32, I32, I32, I32, I64, I64, I32]),
    ("path_link",               &[I32, I32, I32, I32, I32, I32, I32]),
    ("path_open",               &[I32, I32, I32, I32, I32, I64, I64, I32, I32]),
    ("path_readlink",           &[I32, I32, I32, I32, I32, I32]),
    ("path_remove_directory",   &[I32, I32, I32]),
    ("path_rename",             &[I32, I32, I32, I32, I32, I32]),
    ("path_symlink",            &[I32, I32, I32, I32, I32]),
    ("path_unlink_file",        &[I32, I32, I32]),
    ("poll_oneoff",             &[I32, I32, I32, I32]),
    ("proc_exit",               &[I32]),
    ("proc_raise",              &[I32]),
    ("sched_yield",             &[]),
    ("sock_accept",             &[I32, I32, I32]),
    ("sock_recv",               &[I32, I32, I32, I32, I32, I32]),
    ("sock_send",               &[I32, I32, I32, I32, I32]),
    ("sock_shutdown",           &[I32, I32]),
];

///
/// True if a call returns nothing (rather than an errno)
///
#[inline]
pub fn call_has_no_result(name: &str) -> bool {
    name == "proc_exit"
}
