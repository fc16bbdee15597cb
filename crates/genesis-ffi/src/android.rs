//! JNI entry points for the Android app
//!
//! Symbol names are fixed by the Kotlin classes that declare the `external`
//! functions. All of them use the process-wide core.

use ::jni::objects::{JObject, JString};
use ::jni::sys::{jboolean, jstring, JNI_FALSE, JNI_TRUE};
use ::jni::JNIEnv;

use genesis_core::GenesisError;

use crate::{bridge, global_core};

fn new_jstring(env: &mut JNIEnv, value: &str) -> jstring {
    match env.new_string(value) {
        Ok(s) => s.into_raw(),
        Err(_) => std::ptr::null_mut(),
    }
}

fn to_jboolean(ok: bool) -> jboolean {
    if ok {
        JNI_TRUE
    } else {
        JNI_FALSE
    }
}

/// `NativeLib.getVersion(): String`
#[no_mangle]
pub extern "system" fn Java_dev_aurakai_auraframefx_core_NativeLib_getVersion<'local>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jstring {
    new_jstring(&mut env, global_core().version())
}

/// `NativeLib.initializeAICore(): Boolean`
#[no_mangle]
pub extern "system" fn Java_dev_aurakai_auraframefx_core_NativeLib_initializeAICore<'local>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jboolean {
    to_jboolean(global_core().initialize().is_ok())
}

/// `AuraController.processNeuralRequest(request: String): String`
///
/// Failures come back as an error document rather than a Java exception.
#[no_mangle]
pub extern "system" fn Java_dev_aurakai_auraframefx_ai_AuraController_processNeuralRequest<
    'local,
>(
    mut env: JNIEnv<'local>,
    _this: JObject<'local>,
    request: JString<'local>,
) -> jstring {
    let response = match env.get_string(&request) {
        Ok(request) => {
            let request: String = request.into();
            bridge::process_to_json(global_core(), &request)
        }
        Err(e) => bridge::error_document(&GenesisError::InvalidInput(e.to_string())),
    };

    new_jstring(&mut env, &response)
}

/// `MemoryManager.optimizeAIMemory(): Boolean`
#[no_mangle]
pub extern "system" fn Java_dev_aurakai_auraframefx_ai_memory_MemoryManager_optimizeAIMemory<
    'local,
>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) -> jboolean {
    to_jboolean(global_core().optimize().is_ok())
}

/// `GenesisSystemHooks.enableNativeHooks()`
#[no_mangle]
pub extern "system" fn Java_dev_aurakai_auraframefx_xposed_GenesisSystemHooks_enableNativeHooks<
    'local,
>(
    _env: JNIEnv<'local>,
    _this: JObject<'local>,
) {
    global_core().enable_hooks();
}
