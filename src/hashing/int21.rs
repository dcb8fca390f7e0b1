const LANE_BITS: u32 = 21;
const LANE_MASK: i64 = 0x1F_FFFF;
const LOW_MASK: i32 = 0xF_FFFF;
const SIGN_BIT: i32 = 0x10_0000;

/// The smallest coordinate which can be packed without loss.
pub const MIN: i32 = -(1 << 20);
/// The largest coordinate which can be packed without loss.
pub const MAX: i32 = (1 << 20) - 1;

/// Packs the sign bit and 20 least significant bits of each coordinate into a key, with `x` in
/// the most significant lane.
pub const fn key(x: i32, y: i32, z: i32) -> i64 {
    (lane(x) << (2 * LANE_BITS)) | (lane(y) << LANE_BITS) | lane(z)
}

/// Returns the first (`x`) coordinate of a key.
pub const fn key1(key: i64) -> i32 {
    unlane(key >> (2 * LANE_BITS))
}

/// Returns the second (`y`) coordinate of a key.
pub const fn key2(key: i64) -> i32 {
    unlane(key >> LANE_BITS)
}

/// Returns the third (`z`) coordinate of a key.
pub const fn key3(key: i64) -> i32 {
    unlane(key)
}

/// Returns all three coordinates of a key.
pub const fn unpack(key: i64) -> (i32, i32, i32) {
    (key1(key), key2(key), key3(key))
}

const fn lane(value: i32) -> i64 {
    // Move the sign bit down to bit 20, beside the low bits.
    (((value >> 11) & SIGN_BIT) | (value & LOW_MASK)) as i64
}

const fn unlane(lane: i64) -> i32 {
    let lane = lane & LANE_MASK;
    // Sign extend from bit 20.
    (lane - ((lane & SIGN_BIT as i64) << 1)) as i32
}
