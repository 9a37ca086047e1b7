//! C ABI surface
//!
//! Every string returned by [`specula_tokenize`] is owned by the caller and
//! must be released with [`specula_free_string`]. [`specula_version`] returns
//! a static string that must not be freed.

use crate::{error_json, tokenize, BridgeError};
use std::ffi::{CStr, CString};
use std::os::raw::c_char;

static VERSION: &str = concat!(env!("CARGO_PKG_VERSION"), "\0");

/// Owned C string for `json`, or null if it cannot be represented
fn into_c_string(json: String) -> *mut c_char {
    match CString::new(json) {
        Ok(c_string) => c_string.into_raw(),
        Err(error) => {
            let fallback = error_json(&BridgeError::InteriorNul(error));
            CString::new(fallback)
                .map(CString::into_raw)
                .unwrap_or(std::ptr::null_mut())
        }
    }
}

/// Tokenize a NUL-terminated UTF-8 source text
///
/// # Safety
///
/// `source` must be null or point to a NUL-terminated string that stays
/// valid for the duration of the call.
#[no_mangle]
pub unsafe extern "C" fn specula_tokenize(source: *const c_char) -> *mut c_char {
    if source.is_null() {
        return into_c_string(error_json(&BridgeError::NullInput));
    }

    let json = match CStr::from_ptr(source).to_str() {
        Ok(text) => tokenize(text),
        Err(error) => error_json(&BridgeError::InvalidUtf8(error)),
    };
    into_c_string(json)
}

/// Release a string returned by [`specula_tokenize`]
///
/// # Safety
///
/// `ptr` must be null or a pointer obtained from [`specula_tokenize`] that
/// has not been freed yet.
#[no_mangle]
pub unsafe extern "C" fn specula_free_string(ptr: *mut c_char) {
    if ptr.is_null() {
        return;
    }
    drop(CString::from_raw(ptr));
}

/// Library version as a static NUL-terminated string
#[no_mangle]
pub extern "C" fn specula_version() -> *const c_char {
    VERSION.as_ptr().cast()
}
