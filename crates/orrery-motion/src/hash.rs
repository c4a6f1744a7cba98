//! Stateless integer hashes used wherever a value must depend only on its
//! coordinates (seed, index, frame) and never on evaluation order.

#[inline]
pub fn hash2(a: u32, b: u32, seed: u32) -> u32 {
    let mut h = a.wrapping_mul(0x85eb_ca6b) ^ b.wrapping_mul(0xc2b2_ae35) ^ seed.wrapping_mul(0x27d4_eb2d);
    h ^= h >> 16;
    h = h.wrapping_mul(0x7feb_352d);
    h ^= h >> 15;
    h = h.wrapping_mul(0x846c_a68b);
    h ^= h >> 16;
    h
}

/// Uniform value in `[0, 1)` for the lattice point `(a, b)`.
#[inline]
pub fn rand01(seed: u32, a: u32, b: u32, salt: u32) -> f32 {
    let h = hash2(a, b, (seed ^ salt).wrapping_add(0x9E37_79B9));
    ((h & 0x00FF_FFFF) as f32) / 16_777_216.0
}

/// Uniform value in `[-1, 1)`.
#[inline]
pub fn rand_signed(seed: u32, a: u32, b: u32, salt: u32) -> f32 {
    rand01(seed, a, b, salt) * 2.0 - 1.0
}

/// Folds a 64-bit master seed and an entity index into a per-entity seed.
#[inline]
pub fn derive_seed(master: u64, index: u32) -> u32 {
    let lo = master as u32;
    let hi = (master >> 32) as u32;
    hash2(index, hi, lo ^ 0x5EED_0001)
}
