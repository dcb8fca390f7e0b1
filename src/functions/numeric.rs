//! Checks for whether a string holds a number of a given width. Integers follow [`str::parse`]
//! exactly, so surrounding whitespace is rejected. Floating point checks ignore surrounding
//! whitespace.

/// Returns true if `s` parses as an [`i32`].
pub fn is_integer(s: &str) -> bool {
    s.parse::<i32>().is_ok()
}

/// Returns true if `s` parses as an [`i64`].
pub fn is_long(s: &str) -> bool {
    s.parse::<i64>().is_ok()
}

/// Returns true if `s` parses as an [`i16`].
pub fn is_short(s: &str) -> bool {
    s.parse::<i16>().is_ok()
}

/// Returns true if `s` parses as an [`i8`].
pub fn is_byte(s: &str) -> bool {
    s.parse::<i8>().is_ok()
}

/// Returns true if `s` parses as an [`f64`], including `NaN` and `inf`.
pub fn is_double(s: &str) -> bool {
    s.trim().parse::<f64>().is_ok()
}

/// Returns true if `s` parses as an [`f32`], including `NaN` and `inf`.
pub fn is_float(s: &str) -> bool {
    s.trim().parse::<f32>().is_ok()
}
