//! Elevated privilege check for operations that write sysfs and /etc.

#[cfg(unix)]
pub(super) fn is_root() -> bool {
    // SAFETY: geteuid has no preconditions and cannot fail.
    unsafe { libc::geteuid() == 0 }
}

#[cfg(not(unix))]
pub(super) fn is_root() -> bool {
    false
}
