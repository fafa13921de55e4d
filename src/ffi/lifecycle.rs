//! Handle ownership for C hosts.
//!
//! A handle starts unseeded. Every `tl_*` call that needs a grid reports
//! status 5 until `tl_seed` succeeds on it.

use crate::engine::Engine;

/// Allocates an unseeded [`Engine`] and hands ownership to the caller.
///
/// Pair with `tl_destroy`; the handle is never null.
#[no_mangle]
pub extern "C" fn tl_create() -> *mut Engine {
    Box::into_raw(Box::new(Engine::new()))
}

/// Releases a handle from `tl_create`. Null is ignored.
///
/// # Safety
/// `ptr` is null or came from `tl_create` and has not been released yet.
/// The host must drop every copy of it afterwards.
#[no_mangle]
pub unsafe extern "C" fn tl_destroy(ptr: *mut Engine) {
    if ptr.is_null() {
        return;
    }
    drop(Box::from_raw(ptr));
}

/// Steps taken since the last seed. An unseeded or null handle reads as 0,
/// the same value a fresh seed reports.
///
/// # Safety
/// `ptr` is null or a live handle from `tl_create`.
#[no_mangle]
pub unsafe extern "C" fn tl_get_generation(ptr: *const Engine) -> u64 {
    match ptr.as_ref() {
        Some(engine) => engine.current_generation().unwrap_or(0),
        None => 0,
    }
}
