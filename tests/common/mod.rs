//! Shared helpers for boundary integration tests

#![allow(dead_code)]

use handlebridge::ffi::{hb_context_create, hb_shutdown};
use parking_lot::{Mutex, MutexGuard};
use std::os::raw::c_char;

/// Serializes tests that use the process-wide service
static SERVICE_LOCK: Mutex<()> = parking_lot::const_mutex(());

/// Take the service lock and start from a torn-down service
pub fn fresh_service() -> MutexGuard<'static, ()> {
    let guard = SERVICE_LOCK.lock();
    hb_shutdown();
    guard
}

/// Publish a context through the C ABI, panicking on failure
pub fn create_context(degree: u64, moduli: &[u64]) -> u64 {
    let mut handle = 0;
    let code = unsafe {
        hb_context_create(degree, moduli.as_ptr(), moduli.len() as u64, &mut handle)
    };
    assert_eq!(code, 0, "hb_context_create failed");
    handle
}

/// Run both phases of the fill protocol through `call`
///
/// Returns the text without its terminator.
pub fn read_text<F>(mut call: F) -> String
where
    F: FnMut(*mut c_char, *mut u64) -> u32,
{
    let mut length = 0u64;
    assert_eq!(call(std::ptr::null_mut(), &mut length), 0, "size query failed");

    let mut buffer = vec![0x7f as c_char; length as usize];
    assert_eq!(call(buffer.as_mut_ptr(), &mut length), 0, "fill failed");

    let bytes: Vec<u8> = buffer.iter().map(|&b| b as u8).collect();
    let end = bytes
        .iter()
        .position(|&b| b == 0)
        .expect("fill wrote no terminator");
    String::from_utf8(bytes[..end].to_vec()).expect("fill wrote invalid UTF-8")
}
