//! Byte-order probing and big/little swaps.
//!
//! Thin wrappers over the standard `swap_bytes`/`to_bits` primitives, kept
//! so binary file formats read through this crate have one place to go for
//! endianness concerns. All functions are `const` and branch-free.

/// Host byte order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endianness {
    /// Least significant byte first
    Little,
    /// Most significant byte first
    Big,
}

/// Returns the byte order of the compilation target.
#[must_use]
pub const fn host_order() -> Endianness {
    if cfg!(target_endian = "big") { Endianness::Big } else { Endianness::Little }
}

/// Swaps a `u16` between big- and little-endian representation.
#[must_use]
pub const fn swap_u16(n: u16) -> u16 {
    n.swap_bytes()
}

/// Swaps an `i16` between big- and little-endian representation.
#[must_use]
pub const fn swap_i16(n: i16) -> i16 {
    n.swap_bytes()
}

/// Swaps a `u32` between big- and little-endian representation.
#[must_use]
pub const fn swap_u32(n: u32) -> u32 {
    n.swap_bytes()
}

/// Swaps an `i32` between big- and little-endian representation.
#[must_use]
pub const fn swap_i32(n: i32) -> i32 {
    n.swap_bytes()
}

/// Swaps a `u64` between big- and little-endian representation.
#[must_use]
pub const fn swap_u64(n: u64) -> u64 {
    n.swap_bytes()
}

/// Swaps an `i64` between big- and little-endian representation.
#[must_use]
pub const fn swap_i64(n: i64) -> i64 {
    n.swap_bytes()
}

/// Swaps an `f32`'s bytes between big- and little-endian representation.
#[must_use]
pub const fn swap_f32(f: f32) -> f32 {
    f32::from_bits(f.to_bits().swap_bytes())
}

/// Swaps an `f64`'s bytes between big- and little-endian representation.
#[must_use]
pub const fn swap_f64(f: f64) -> f64 {
    f64::from_bits(f.to_bits().swap_bytes())
}
