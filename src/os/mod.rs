//! Operating system entropy channel
//!
//! This is the only place in the crate that talks to the platform's
//! randomness provider. Each submodule exposes the same function,
//! `sys_random`, selected at compile time, so the rest of the crate stays
//! portable.
//!
//! All exposed functions are safe wrappers around low-level OS APIs and
//! report failures as `std::io::Error` instead of aborting.

#[cfg(target_os = "macos")]
mod macos;

#[cfg(target_os = "macos")]
pub(crate) use macos::sys_random;

#[cfg(target_os = "linux")]
mod linux;

#[cfg(target_os = "linux")]
pub(crate) use linux::sys_random;

#[cfg(target_os = "windows")]
mod windows;

#[cfg(target_os = "windows")]
pub(crate) use windows::sys_random;

#[cfg(not(any(target_os = "linux", target_os = "macos", target_os = "windows")))]
compile_error!("no operating system entropy backend for this target");
