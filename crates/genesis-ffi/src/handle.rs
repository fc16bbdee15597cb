#![allow(clippy::missing_safety_doc)]
//! FFI core handle functions

use std::ffi::{c_char, c_int, CStr};
use std::ptr;

use genesis_core::{CoreConfig, GenesisCore, GenesisError, TracingSink};

use crate::bridge;
use crate::error::*;
use crate::types::*;

/// Opaque handle to a Genesis core
pub struct GenesisCoreHandle {
    pub(crate) core: GenesisCore<TracingSink>,
}

/// Create a new core
/// `config_json` may be NULL for the default configuration
/// Returns a handle that must be freed with genesis_core_free, or NULL on error
#[no_mangle]
pub unsafe extern "C" fn genesis_core_create(config_json: *const c_char) -> *mut GenesisCoreHandle {
    let config = if config_json.is_null() {
        CoreConfig::default()
    } else {
        let parsed = CStr::from_ptr(config_json)
            .to_str()
            .map_err(|e| GenesisError::InvalidEncoding {
                valid_up_to: e.valid_up_to(),
            })
            .and_then(CoreConfig::from_json);
        match parsed {
            Ok(config) => config,
            Err(err) => {
                report_error(&err);
                return ptr::null_mut();
            }
        }
    };

    match GenesisCore::new(config, TracingSink) {
        Ok(core) => Box::into_raw(Box::new(GenesisCoreHandle { core })),
        Err(err) => {
            report_error(&err);
            ptr::null_mut()
        }
    }
}

/// Free a core handle
#[no_mangle]
pub unsafe extern "C" fn genesis_core_free(handle: *mut GenesisCoreHandle) {
    if !handle.is_null() {
        drop(Box::from_raw(handle));
    }
}

/// Initialize a core
/// Returns 0 on success, negative on error
#[no_mangle]
pub unsafe extern "C" fn genesis_core_initialize(handle: *const GenesisCoreHandle) -> c_int {
    if handle.is_null() {
        set_last_error("Null handle");
        return GenesisErrorCode::NullPointer as c_int;
    }

    bridge::initialize(&(*handle).core)
}

/// Get the lifecycle state of a core
#[no_mangle]
pub unsafe extern "C" fn genesis_core_state(handle: *const GenesisCoreHandle) -> GenesisCoreState {
    if handle.is_null() {
        set_last_error("Null handle");
        return GenesisCoreState::Uninitialized;
    }

    (*handle).core.state().into()
}

/// Process a request on a core
/// Returns a JSON string that must be freed with genesis_free_string, or NULL on error
#[no_mangle]
pub unsafe extern "C" fn genesis_core_process(
    handle: *const GenesisCoreHandle,
    request: *const c_char,
) -> *mut c_char {
    if handle.is_null() {
        set_last_error("Null handle");
        return ptr::null_mut();
    }

    bridge::process_c_str(&(*handle).core, request)
}

/// Run a memory optimization pass on a core
/// Returns 0 on success, negative on error
#[no_mangle]
pub unsafe extern "C" fn genesis_core_optimize(handle: *const GenesisCoreHandle) -> c_int {
    if handle.is_null() {
        set_last_error("Null handle");
        return GenesisErrorCode::NullPointer as c_int;
    }

    bridge::optimize(&(*handle).core)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::CString;

    #[test]
    fn test_core_create_free() {
        let handle = unsafe { genesis_core_create(ptr::null()) };
        assert!(!handle.is_null());

        let state = unsafe { genesis_core_state(handle) };
        assert_eq!(state, GenesisCoreState::Uninitialized);

        unsafe { genesis_core_free(handle) };
    }

    #[test]
    fn test_core_initialize() {
        let handle = unsafe { genesis_core_create(ptr::null()) };

        assert_eq!(unsafe { genesis_core_initialize(handle) }, 0);
        assert_eq!(unsafe { genesis_core_state(handle) }, GenesisCoreState::Ready);
        assert_eq!(unsafe { genesis_core_optimize(handle) }, 0);

        unsafe { genesis_core_free(handle) };
    }

    #[test]
    fn test_core_create_with_config() {
        let config = CString::new(r#"{"neural_pathways_active": 12}"#).unwrap();
        let handle = unsafe { genesis_core_create(config.as_ptr()) };
        assert!(!handle.is_null());
        assert_eq!((unsafe { &*handle }).core.config().neural_pathways_active, 12);
        unsafe { genesis_core_free(handle) };
    }

    #[test]
    fn test_core_create_bad_config() {
        let config = CString::new(r#"{"memory_efficiency": -1}"#).unwrap();
        let handle = unsafe { genesis_core_create(config.as_ptr()) };
        assert!(handle.is_null());
        assert!(!genesis_get_last_error().is_null());
    }

    #[test]
    fn test_null_handle() {
        assert_eq!(
            unsafe { genesis_core_initialize(ptr::null()) },
            GenesisErrorCode::NullPointer as c_int
        );
        assert_eq!(
            unsafe { genesis_core_optimize(ptr::null()) },
            GenesisErrorCode::NullPointer as c_int
        );
        assert!(unsafe { genesis_core_process(ptr::null(), ptr::null()) }.is_null());
    }

    #[test]
    fn test_null_handle_state_sets_last_error() {
        genesis_clear_error();
        assert_eq!(
            unsafe { genesis_core_state(ptr::null()) },
            GenesisCoreState::Uninitialized
        );

        let msg = unsafe { CStr::from_ptr(genesis_get_last_error()) };
        assert_eq!(msg.to_str().unwrap(), "Null handle");
    }
}
