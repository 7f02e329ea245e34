//! tftfont CLI library.
//!
//! Command implementations behind the `tftfont` binary: font inspection,
//! text measurement, PNG rendering and catalog checks. Each command prints
//! either colored human output or, with `--json`, one serialized document
//! on stdout.

pub mod commands;
