#![allow(clippy::missing_safety_doc)]
//! Genesis FFI - native bridge
//!
//! C-compatible bindings for the managed runtime, plus the JNI entry points
//! the Android app binds to. The global `genesis_*` functions share one
//! process-wide core; `genesis_core_*` handles give callers their own.

pub mod bridge;
pub mod error;
pub mod handle;
#[cfg(target_os = "android")]
pub mod android;
pub mod logger;
pub mod types;

use std::ffi::{c_char, c_int, CString};
use std::sync::OnceLock;

use genesis_core::{GenesisCore, TracingSink};

pub use error::*;
pub use handle::*;
pub use types::*;

static GLOBAL: OnceLock<GenesisCore<TracingSink>> = OnceLock::new();

/// The process-wide core. Starts `Uninitialized` on every load.
///
/// On Android the first call also routes diagnostics to logcat.
pub fn global_core() -> &'static GenesisCore<TracingSink> {
    GLOBAL.get_or_init(|| {
        install_platform_logging();
        GenesisCore::with_defaults()
    })
}

#[cfg(target_os = "android")]
fn install_platform_logging() {
    if let Err(e) = logger::init_logcat(logger::DEFAULT_LEVEL) {
        // The host may already own the global subscriber
        tracing::debug!(target: "genesis", "logcat subscriber not installed: {e}");
    }
}

#[cfg(not(target_os = "android"))]
fn install_platform_logging() {}

/// Library version
/// The returned string is static and must not be freed
#[no_mangle]
pub extern "C" fn genesis_version() -> *const c_char {
    static VERSION: OnceLock<CString> = OnceLock::new();
    let version = global_core().version();
    VERSION
        .get_or_init(|| CString::new(version).unwrap_or_default())
        .as_ptr()
}

/// Initialize the global core
/// Returns 0 on success, negative on error
#[no_mangle]
pub extern "C" fn genesis_init() -> c_int {
    bridge::initialize(global_core())
}

/// Initialize logging to stderr
/// `filter` takes EnvFilter directives (e.g. "warn,genesis=debug") and may be
/// NULL for "info"; RUST_LOG takes precedence when set
#[no_mangle]
pub unsafe extern "C" fn genesis_init_logging(filter: *const c_char) -> c_int {
    let filter = if filter.is_null() {
        logger::DEFAULT_LEVEL
    } else {
        match std::ffi::CStr::from_ptr(filter).to_str() {
            Ok(filter) => filter,
            Err(_) => {
                set_last_error("Log filter is not valid UTF-8");
                return GenesisErrorCode::InvalidEncoding as c_int;
            }
        }
    };

    match logger::init(filter) {
        Ok(()) => GenesisErrorCode::Ok as c_int,
        Err(e) => {
            set_last_error(&e.to_string());
            GenesisErrorCode::LoggerError as c_int
        }
    }
}

/// Current state of the global core
#[no_mangle]
pub extern "C" fn genesis_state() -> GenesisCoreState {
    global_core().state().into()
}

/// Process a NUL-terminated UTF-8 request with the global core
/// Returns a JSON string that must be freed with genesis_free_string,
/// or NULL on error (see genesis_get_last_error)
#[no_mangle]
pub unsafe extern "C" fn genesis_process(request: *const c_char) -> *mut c_char {
    bridge::process_c_str(global_core(), request)
}

/// Process a request given as raw bytes with the global core
#[no_mangle]
pub unsafe extern "C" fn genesis_process_bytes(data: *const u8, len: usize) -> *mut c_char {
    if data.is_null() && len != 0 {
        set_last_error("Null pointer");
        return std::ptr::null_mut();
    }

    let bytes = if len == 0 {
        &[][..]
    } else {
        std::slice::from_raw_parts(data, len)
    };
    bridge::into_c_string(global_core().process_bytes(bytes))
}

/// Run a memory optimization pass on the global core
/// Returns 0 on success, negative on error
#[no_mangle]
pub extern "C" fn genesis_optimize_memory() -> c_int {
    bridge::optimize(global_core())
}

/// Enable native hooks
#[no_mangle]
pub extern "C" fn genesis_enable_hooks() {
    global_core().enable_hooks();
}

/// Free a string allocated by Genesis
#[no_mangle]
pub unsafe extern "C" fn genesis_free_string(s: *mut c_char) {
    if !s.is_null() {
        drop(CString::from_raw(s));
    }
}
