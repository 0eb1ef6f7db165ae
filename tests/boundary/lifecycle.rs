//! Service lifecycle through the C ABI

use crate::common::*;
use handlebridge::ffi::*;
use handlebridge::{global, BridgeConfig, ZeroFill};
use std::ffi::CString;
use std::io::Write;

#[test]
fn test_initialize_then_shutdown_releases_handles() {
    let _guard = fresh_service();

    assert_eq!(unsafe { hb_initialize(std::ptr::null()) }, 0);
    let handle = create_context(8, &[17]);

    let mut live = false;
    unsafe { hb_context_is_live(handle, &mut live) };
    assert!(live);

    assert_eq!(hb_shutdown(), 0);

    // Nothing is installed any more, so the handle is dead
    unsafe { hb_context_is_live(handle, &mut live) };
    assert!(!live);
    assert_eq!(hb_context_destroy(handle), Status::InvalidHandle.code());
    hb_shutdown();
}

#[test]
fn test_read_only_calls_leave_initialization_to_the_host() {
    let _guard = fresh_service();

    let name = read_text(|out, len| unsafe { hb_status_name(0, out, len) });
    assert_eq!(name, "success");

    let mut is_global = false;
    let mut live = true;
    let mut modulus = std::ptr::null_mut();
    unsafe {
        assert_eq!(hb_pool_is_global(std::ptr::null(), &mut is_global), 0);
        assert_eq!(hb_context_is_live(1, &mut live), 0);
        assert_eq!(hb_modulus_create(17, &mut modulus), 0);
    }
    assert!(is_global);
    assert!(!live);
    let text = read_text(|out, len| unsafe { hb_modulus_to_string(modulus, out, len) });
    assert_eq!(text, "17");
    unsafe { hb_modulus_destroy(modulus) };
    assert!(!global::is_installed());

    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "zero_fill = \"required\"").unwrap();
    let path = CString::new(file.path().to_str().unwrap()).unwrap();

    assert_eq!(unsafe { hb_initialize(path.as_ptr()) }, 0);
    assert_eq!(global::current().config().zero_fill, ZeroFill::Required);
    hb_shutdown();
}

#[test]
fn test_handles_not_reissued_after_reinstall() {
    let _guard = fresh_service();

    let before = create_context(8, &[17]);
    hb_shutdown();
    let after = create_context(8, &[17]);

    assert_ne!(before, after);
    hb_shutdown();
}

#[test]
fn test_initialize_with_written_default_config() {
    let _guard = fresh_service();

    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(handlebridge::CONFIG_FILE_NAME);
    BridgeConfig::write_default_if_missing(&path).unwrap();
    let c_path = CString::new(path.to_str().unwrap()).unwrap();

    assert_eq!(unsafe { hb_initialize(c_path.as_ptr()) }, 0);
    assert_eq!(global::current().config().zero_fill, ZeroFill::Capacity);
    hb_shutdown();
}

#[test]
fn test_initialize_missing_file() {
    let _guard = fresh_service();

    let dir = tempfile::tempdir().unwrap();
    let path = CString::new(dir.path().join("absent.toml").to_str().unwrap()).unwrap();

    assert_eq!(
        unsafe { hb_initialize(path.as_ptr()) },
        Status::InvalidArgument.code()
    );
    assert!(!global::is_installed());
}

#[test]
fn test_status_names() {
    let _guard = fresh_service();

    for code in 0..=7u32 {
        let name = read_text(|out, len| unsafe { hb_status_name(code, out, len) });
        assert_eq!(name, Status::from_code(code).unwrap().as_str());
    }
    hb_shutdown();
}
