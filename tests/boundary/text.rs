//! Text fill protocol through the C ABI

use crate::common::*;
use handlebridge::ffi::*;
use handlebridge::global;
use std::os::raw::c_char;

#[test]
fn test_context_description_round_trip() {
    let _guard = fresh_service();

    let handle = create_context(8, &[17, 257]);
    let text = read_text(|out, len| unsafe { hb_context_to_string(handle, out, len) });

    let expected = global::current()
        .resolve_context(handlebridge::Handle::from_raw(handle))
        .unwrap()
        .description();
    assert_eq!(text, expected);
    hb_shutdown();
}

#[test]
fn test_short_buffer_reports_required_size() {
    let _guard = fresh_service();

    let handle = create_context(8, &[17]);
    let mut buffer = [0x33 as c_char; 8];
    let mut length = buffer.len() as u64;

    let code = unsafe { hb_context_to_string(handle, buffer.as_mut_ptr(), &mut length) };
    assert_eq!(code, Status::InsufficientBuffer.code());
    assert!(buffer.iter().all(|&b| b == 0x33));

    // Retry with the reported size
    let mut buffer = vec![0x33 as c_char; length as usize];
    let code = unsafe { hb_context_to_string(handle, buffer.as_mut_ptr(), &mut length) };
    assert_eq!(code, 0);
    assert_eq!(buffer[length as usize - 1], 0);
    hb_shutdown();
}

#[test]
fn test_capacity_zero_fill_clears_whole_buffer() {
    let _guard = fresh_service();

    let mut modulus = std::ptr::null_mut();
    let mut buffer = [0x33 as c_char; 16];
    let mut length = buffer.len() as u64;
    unsafe {
        hb_modulus_create(17, &mut modulus);
        assert_eq!(
            hb_modulus_to_string(modulus, buffer.as_mut_ptr(), &mut length),
            0
        );
        hb_modulus_destroy(modulus);
    }
    assert_eq!(buffer[0] as u8, b'1');
    assert_eq!(buffer[1] as u8, b'7');
    assert!(buffer[2..].iter().all(|&b| b == 0));
    hb_shutdown();
}

#[test]
fn test_to_string_null_length() {
    let _guard = fresh_service();

    let handle = create_context(8, &[17]);
    let code =
        unsafe { hb_context_to_string(handle, std::ptr::null_mut(), std::ptr::null_mut()) };
    assert_eq!(code, Status::InvalidPointer.code());
    hb_shutdown();
}
