//! Handle arrays through the C ABI

use crate::common::*;
use handlebridge::ffi::*;
use handlebridge::Modulus;

/// Size query then fill, returning the caller-owned pointers
fn coeff_modulus(handle: u64) -> Vec<*mut Modulus> {
    let mut length = 0u64;
    unsafe {
        assert_eq!(
            hb_context_coeff_modulus(handle, &mut length, std::ptr::null_mut()),
            0
        );
        let mut slots = vec![std::ptr::null_mut(); length as usize];
        assert_eq!(
            hb_context_coeff_modulus(handle, &mut length, slots.as_mut_ptr()),
            0
        );
        slots
    }
}

fn value_of(modulus: *const Modulus) -> u64 {
    let mut value = 0;
    assert_eq!(unsafe { hb_modulus_value(modulus, &mut value) }, 0);
    value
}

#[test]
fn test_emitted_array_matches_chain() {
    let _guard = fresh_service();

    let chain = [17u64, 257, 65537, 0x1F_FFFF_FFFF];
    let handle = create_context(1024, &chain);
    let slots = coeff_modulus(handle);

    assert_eq!(slots.len(), chain.len());
    let values: Vec<u64> = slots.iter().map(|&p| value_of(p)).collect();
    assert_eq!(values, chain);
    for slot in slots {
        assert_eq!(unsafe { hb_modulus_destroy(slot) }, 0);
    }
    hb_shutdown();
}

#[test]
fn test_emitted_copies_are_independent() {
    let _guard = fresh_service();

    let handle = create_context(8, &[17, 257]);
    let first = coeff_modulus(handle);
    let second = coeff_modulus(handle);

    assert_ne!(first[0], second[0]);
    unsafe {
        assert_eq!(hb_modulus_set_value(first[0], 97), 0);
    }
    assert_eq!(value_of(second[0]), 17);

    // Copies survive the context and the service
    hb_shutdown();
    assert_eq!(value_of(first[1]), 257);

    for slot in first.into_iter().chain(second) {
        unsafe { hb_modulus_destroy(slot) };
    }
}

#[test]
fn test_array_of_dead_handle() {
    let _guard = fresh_service();

    let handle = create_context(8, &[17]);
    assert_eq!(hb_context_destroy(handle), 0);

    let mut length = 3u64;
    let code =
        unsafe { hb_context_coeff_modulus(handle, &mut length, std::ptr::null_mut()) };
    assert_eq!(code, Status::InvalidHandle.code());
    assert_eq!(length, 3);
    hb_shutdown();
}

#[test]
fn test_pool_descriptors() {
    let _guard = fresh_service();

    let mut global_pool = std::ptr::null_mut();
    let mut own = std::ptr::null_mut();
    let mut is_global = false;
    unsafe {
        assert_eq!(hb_pool_resolve(std::ptr::null(), &mut global_pool), 0);
        assert_eq!(hb_pool_is_global(global_pool, &mut is_global), 0);
        assert!(is_global);

        assert_eq!(hb_pool_create(&mut own), 0);
        assert_eq!(hb_pool_is_global(own, &mut is_global), 0);
        assert!(!is_global);

        let mut bytes = 1;
        assert_eq!(hb_pool_alloc_byte_count(own, &mut bytes), 0);
        assert_eq!(bytes, 0);

        assert_eq!(hb_pool_destroy(own), 0);
        assert_eq!(hb_pool_destroy(global_pool), 0);
    }
    hb_shutdown();
}
