//! Concurrent boundary calls

use crate::common::*;
use handlebridge::ffi::*;
use std::sync::{Arc, Barrier};
use std::thread;

const THREADS: usize = 8;

#[test]
fn test_parallel_create_resolve_destroy() {
    let _guard = fresh_service();

    let barrier = Arc::new(Barrier::new(THREADS));
    let workers: Vec<_> = (0..THREADS)
        .map(|i| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let mut handles = Vec::new();
                for _ in 0..50 {
                    handles.push(create_context(8, &[17 + 2 * i as u64]));
                }
                for &handle in &handles {
                    let text =
                        read_text(|out, len| unsafe { hb_context_to_string(handle, out, len) });
                    assert!(text.contains(&(17 + 2 * i as u64).to_string()));
                    assert_eq!(hb_context_destroy(handle), 0);
                }
                handles
            })
        })
        .collect();

    let mut all: Vec<u64> = workers
        .into_iter()
        .flat_map(|w| w.join().unwrap())
        .collect();
    let total = all.len();
    all.sort_unstable();
    all.dedup();
    assert_eq!(all.len(), total);
    assert!(handlebridge::global::current().contexts().is_empty());
    hb_shutdown();
}

#[test]
fn test_destroy_races_with_resolution() {
    let _guard = fresh_service();

    let handle = create_context(8, &[17, 257]);
    let barrier = Arc::new(Barrier::new(THREADS + 1));

    let readers: Vec<_> = (0..THREADS)
        .map(|_| {
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                for _ in 0..200 {
                    let mut length = 0u64;
                    let code = unsafe {
                        hb_context_coeff_modulus(handle, &mut length, std::ptr::null_mut())
                    };
                    // Either the context was still live or it was already gone
                    assert!(
                        (code == 0 && length == 2) || code == Status::InvalidHandle.code(),
                        "unexpected code {code}"
                    );
                }
            })
        })
        .collect();

    barrier.wait();
    assert_eq!(hb_context_destroy(handle), 0);
    for reader in readers {
        reader.join().unwrap();
    }
    hb_shutdown();
}
