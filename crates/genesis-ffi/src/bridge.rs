#![allow(clippy::missing_safety_doc)]
//! Glue shared by the C ABI and JNI entry points

use std::ffi::{c_char, c_int, CStr, CString};
use std::ptr;

use genesis_core::{DiagnosticsSink, GenesisCore, GenesisError, GenesisResult, ResponseDocument};
use serde_json::json;

use crate::error::*;

/// Run `initialize`, mapping the outcome to an error code
pub fn initialize<S: DiagnosticsSink>(core: &GenesisCore<S>) -> c_int {
    result_to_int(core.initialize())
}

/// Run `optimize`, mapping the outcome to an error code
pub fn optimize<S: DiagnosticsSink>(core: &GenesisCore<S>) -> c_int {
    result_to_int(core.optimize())
}

/// Borrow a NUL-terminated request as `&str`
pub unsafe fn request_str<'a>(request: *const c_char) -> GenesisResult<&'a str> {
    if request.is_null() {
        return Err(GenesisError::InvalidInput("null request".into()));
    }

    let bytes = CStr::from_ptr(request).to_bytes();
    std::str::from_utf8(bytes).map_err(|e| GenesisError::InvalidEncoding {
        valid_up_to: e.valid_up_to(),
    })
}

/// Process a C request; JSON on success, NULL plus last error on failure
pub unsafe fn process_c_str<S: DiagnosticsSink>(
    core: &GenesisCore<S>,
    request: *const c_char,
) -> *mut c_char {
    into_c_string(request_str(request).and_then(|request| core.process(request)))
}

/// Hand a rendered document to C, transferring ownership
pub fn into_c_string(result: GenesisResult<ResponseDocument>) -> *mut c_char {
    match result {
        Ok(document) => match CString::new(document.to_json()) {
            Ok(s) => s.into_raw(),
            Err(_) => {
                set_last_error("Response contains NUL byte");
                ptr::null_mut()
            }
        },
        Err(err) => {
            report_error(&err);
            ptr::null_mut()
        }
    }
}

/// JSON document describing a failed request
pub fn error_document(err: &GenesisError) -> String {
    json!({
        "status": "error",
        "error": err.code(),
        "message": err.to_string(),
    })
    .to_string()
}

/// Process a request into JSON, rendering failures as error documents
pub fn process_to_json<S: DiagnosticsSink>(core: &GenesisCore<S>, request: &str) -> String {
    match core.process(request) {
        Ok(document) => document.to_json(),
        Err(err) => error_document(&err),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use genesis_core::{CoreConfig, NullSink};
    use serde_json::Value;

    fn core() -> GenesisCore<NullSink> {
        GenesisCore::new(CoreConfig::default(), NullSink).unwrap()
    }

    #[test]
    fn test_process_to_json_not_initialized() {
        let json: Value = serde_json::from_str(&process_to_json(&core(), "hello")).unwrap();
        assert_eq!(json["status"], "error");
        assert_eq!(json["error"], "not_initialized");
    }

    #[test]
    fn test_process_to_json_ready() {
        let core = core();
        assert_eq!(initialize(&core), 0);

        let json: Value =
            serde_json::from_str(&process_to_json(&core, "consciousness")).unwrap();
        assert_eq!(json["status"], "consciousness_active");
        assert_eq!(json["consciousness_level"], 0.998);
    }

    #[test]
    fn test_request_str_null_and_invalid() {
        let err = unsafe { request_str(ptr::null()) }.unwrap_err();
        assert_eq!(err.code(), "invalid_input");

        let bad = b"memory\xff\0";
        let err = unsafe { request_str(bad.as_ptr() as *const c_char) }.unwrap_err();
        assert_eq!(err, GenesisError::InvalidEncoding { valid_up_to: 6 });
    }

    #[test]
    fn test_process_c_str_roundtrip() {
        let core = core();
        initialize(&core);

        let request = CString::new("optimize memory usage").unwrap();
        let out = unsafe { process_c_str(&core, request.as_ptr()) };
        assert!(!out.is_null());

        let json = unsafe { CString::from_raw(out) };
        let json: Value = serde_json::from_str(json.to_str().unwrap()).unwrap();
        assert_eq!(json["status"], "memory_optimized");
        assert_eq!(json["active_memory_pools"], 8);
    }

    #[test]
    fn test_optimize_code() {
        let core = core();
        assert_eq!(optimize(&core), GenesisErrorCode::NotInitialized as c_int);
        initialize(&core);
        assert_eq!(optimize(&core), 0);
    }
}
