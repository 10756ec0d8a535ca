use super::clock::*;
use super::string_list::*;
use crate::config::*;
use crate::error::*;
use crate::memory::*;

use log::*;

use std::time::{Instant};

/// Log target for text a guest writes to its standard output
pub const STDOUT_TARGET: &str = "flo_scene_script::stdout";

/// Log target for text a guest writes to its standard error
pub const STDERR_TARGET: &str = "flo_scene_script::stderr";

///
/// The implemented part of the `wasi_snapshot_preview1` system call surface
///
/// This is the minimum needed for a guest's runtime to start up and produce diagnostic output: argument and
/// environment lists, clocks, random numbers and writes to stdout/stderr. Everything else is a stub (see
/// `UNSUPPORTED_CALLS`).
///
pub struct SystemCalls {
    /// The argument vector (usually empty)
    args: Vec<String>,

    /// The environment, as `KEY=VALUE` strings sorted by key
    environment: Vec<String>,

    /// The time that the monotonic clock counts from
    start_time: Instant,
}

impl SystemCalls {
    ///
    /// Creates the system calls for a guest with the specified arguments and environment
    ///
    pub fn new(args: Vec<String>, environment: impl IntoIterator<Item=(String, String)>) -> SystemCalls {
        let mut environment = environment.into_iter().collect::<Vec<_>>();
        environment.sort();

        SystemCalls {
            args,
            environment:    environment.into_iter().map(|(key, value)| format!("{}={}", key, value)).collect(),
            start_time:     Instant::now(),
        }
    }

    ///
    /// Creates the system calls described by a script configuration
    ///
    pub fn from_config(config: &ScriptConfig) -> SystemCalls {
        Self::new(config.args.clone(), config.env.clone())
    }

    pub fn args_sizes_get(&self, memory: &mut (impl ?Sized + GuestMemory), argc_ptr: u32, argv_buf_size_ptr: u32) -> Errno {
        write_string_list_sizes(memory, &self.args, argc_ptr, argv_buf_size_ptr).map_err(Errno::from).into()
    }

    pub fn args_get(&self, memory: &mut (impl ?Sized + GuestMemory), argv_ptr: u32, argv_buf_ptr: u32) -> Errno {
        write_string_list(memory, &self.args, argv_ptr, argv_buf_ptr).map_err(Errno::from).into()
    }

    pub fn environ_sizes_get(&self, memory: &mut (impl ?Sized + GuestMemory), count_ptr: u32, buf_size_ptr: u32) -> Errno {
        write_string_list_sizes(memory, &self.environment, count_ptr, buf_size_ptr).map_err(Errno::from).into()
    }

    pub fn environ_get(&self, memory: &mut (impl ?Sized + GuestMemory), environ_ptr: u32, environ_buf_ptr: u32) -> Errno {
        write_string_list(memory, &self.environment, environ_ptr, environ_buf_ptr).map_err(Errno::from).into()
    }

    pub fn clock_res_get(&self, memory: &mut (impl ?Sized + GuestMemory), clock_id: i32, resolution_ptr: u32) -> Errno {
        if ClockId::from_raw(clock_id).is_none() {
            return Errno::Inval;
        }

        write_u64(memory, resolution_ptr, CLOCK_RESOLUTION_NANOS).map_err(Errno::from).into()
    }

    ///
    /// Reads one of the clocks. The precision hint is ignored.
    ///
    pub fn clock_time_get(&self, memory: &mut (impl ?Sized + GuestMemory), clock_id: i32, _precision: i64, time_ptr: u32) -> Errno {
        let Some(clock) = ClockId::from_raw(clock_id) else { return Errno::Inval; };

        write_u64(memory, time_ptr, read_clock(clock, self.start_time)).map_err(Errno::from).into()
    }

    ///
    /// Fills a guest buffer with bytes from the operating system's secure random number source
    ///
    pub fn random_get(&self, memory: &mut (impl ?Sized + GuestMemory), buf_ptr: u32, buf_len: u32) -> Errno {
        if check_bounds(memory.size(), buf_ptr, buf_len as usize).is_err() {
            return Errno::Fault;
        }

        let mut bytes = vec![0u8; buf_len as usize];
        if let Err(err) = getrandom::getrandom(&mut bytes) {
            error!("Could not generate random bytes for guest: {}", err);
            return Errno::Io;
        }

        write_bytes(memory, buf_ptr, &bytes).map_err(Errno::from).into()
    }

    ///
    /// Writes to stdout (1) or stderr (2), which are sent to the log. Other file descriptors are not supported.
    ///
    pub fn fd_write(&self, memory: &mut (impl ?Sized + GuestMemory), fd: i32, iovs_ptr: u32, iovs_len: u32, nwritten_ptr: u32) -> Errno {
        let target = match fd {
            1 => STDOUT_TARGET,
            2 => STDERR_TARGET,
            _ => { return Errno::Badf; }
        };

        if check_bounds(memory.size(), nwritten_ptr, 4).is_err() {
            return Errno::Fault;
        }

        let (text, num_bytes) = match read_iovecs(memory, iovs_ptr, iovs_len) {
            Ok(result)  => result,
            Err(err)    => { return err.into(); }
        };

        let text = text.trim_end_matches('\n');
        if fd == 1 {
            info!(target: target, "{}", text);
        } else {
            warn!(target: target, "{}", text);
        }

        write_u32(memory, nwritten_ptr, num_bytes as u32).map_err(Errno::from).into()
    }
}
