//! FFI Error handling

use std::ffi::{c_char, c_int, CString};

use genesis_core::GenesisError;

/// Error codes for FFI functions
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GenesisErrorCode {
    /// Success
    Ok = 0,
    /// Invalid argument
    InvalidArgument = -1,
    /// Not initialized
    NotInitialized = -2,
    /// Initialization failed earlier
    InitializationFailed = -3,
    /// Out of memory
    OutOfMemory = -4,
    /// Text is not UTF-8
    InvalidEncoding = -5,
    /// Configuration rejected
    InvalidConfig = -6,
    /// Logging could not be set up
    LoggerError = -7,
    /// NULL handle or buffer
    NullPointer = -8,
}

impl From<GenesisErrorCode> for c_int {
    fn from(code: GenesisErrorCode) -> Self {
        code as c_int
    }
}

impl From<&GenesisError> for GenesisErrorCode {
    fn from(err: &GenesisError) -> Self {
        match err {
            GenesisError::NotInitialized => GenesisErrorCode::NotInitialized,
            GenesisError::InitializationFailed => GenesisErrorCode::InitializationFailed,
            GenesisError::AllocationFailure { .. } => GenesisErrorCode::OutOfMemory,
            GenesisError::InvalidEncoding { .. } => GenesisErrorCode::InvalidEncoding,
            GenesisError::InvalidInput(_) => GenesisErrorCode::InvalidArgument,
            GenesisError::InvalidConfig(_) => GenesisErrorCode::InvalidConfig,
        }
    }
}

thread_local! {
    static LAST_ERROR: std::cell::RefCell<Option<CString>> =
        const { std::cell::RefCell::new(None) };
}

/// Set the last error message
pub fn set_last_error(msg: &str) {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = CString::new(msg).ok();
    });
}

/// Record `err` as the last error and return its code
pub fn report_error(err: &GenesisError) -> c_int {
    set_last_error(&err.to_string());
    GenesisErrorCode::from(err).into()
}

/// Get the last error message
/// Returns NULL if no error
#[no_mangle]
pub extern "C" fn genesis_get_last_error() -> *const c_char {
    LAST_ERROR.with(|e| match e.borrow().as_ref() {
        Some(s) => s.as_ptr(),
        None => std::ptr::null(),
    })
}

/// Clear the last error
#[no_mangle]
pub extern "C" fn genesis_clear_error() {
    LAST_ERROR.with(|e| {
        *e.borrow_mut() = None;
    });
}

/// Result type for FFI functions
pub type FfiResult<T> = Result<T, GenesisError>;

/// Convert an FfiResult to a C int, setting the error message on failure
pub fn result_to_int<T>(result: FfiResult<T>) -> c_int {
    match result {
        Ok(_) => GenesisErrorCode::Ok as c_int,
        Err(err) => report_error(&err),
    }
}
