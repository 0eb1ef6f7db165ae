//! Service lifecycle and status names

use crate::guard::{out_arg, run, str_arg, text_buffer};
use handlebridge_core::{BridgeError, Result, Status};
use handlebridge_marshal::try_fill_string;
use handlebridge_service::{global, init_tracing, BridgeConfig, BridgeService};
use std::os::raw::c_char;
use std::path::Path;

/// Install the process-wide service
///
/// `config_path` names a `handlebridge.toml`; null selects the defaults.
/// Also installs a tracing subscriber at the configured level unless the
/// host already set one.
///
/// Fails with `InvalidState` if a service is already installed.
///
/// # Safety
///
/// `config_path` must be null or a valid NUL-terminated string.
#[no_mangle]
pub unsafe extern "C" fn hb_initialize(config_path: *const c_char) -> u32 {
    run("hb_initialize", || -> Result<()> {
        let config = if config_path.is_null() {
            BridgeConfig::default()
        } else {
            BridgeConfig::from_file(Path::new(str_arg(config_path, "config_path")?))?
        };
        init_tracing(&config)?;
        global::install(BridgeService::new(config)?)?;
        Ok(())
    })
}

/// Tear down the process-wide service, releasing every live handle
///
/// Call only after all other boundary calls have ceased. Succeeds when no
/// service is installed.
#[no_mangle]
pub extern "C" fn hb_shutdown() -> u32 {
    run("hb_shutdown", || {
        global::teardown();
        Status::Success
    })
}

/// Write the name of a status code through the fill protocol
///
/// # Safety
///
/// `length` must be valid for reads and writes. `out` must be null or valid
/// for writes of `*length` bytes.
#[no_mangle]
pub unsafe extern "C" fn hb_status_name(code: u32, out: *mut c_char, length: *mut u64) -> u32 {
    run("hb_status_name", || -> Result<()> {
        let length = out_arg(length, "length")?;
        let status = Status::from_code(code)
            .ok_or_else(|| BridgeError::invalid_argument(format!("unknown status code {code}")))?;
        let buffer = text_buffer(out, *length)?;
        try_fill_string(status.as_str(), buffer, length, global::zero_fill())
    })
}
