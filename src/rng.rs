//! Squirrel5 positional hash. Stateless: the same (position, seed) always mixes to the
//! same word, so a "random table" can be read at any index without walking a sequence.

pub const SQ5_BIT_NOISE1: u32 = 0xD2A8_0A3F; // 11010010101010000000101000111111
pub const SQ5_BIT_NOISE2: u32 = 0xA884_F197; // 10101000100001001111000110010111
pub const SQ5_BIT_NOISE3: u32 = 0x6C73_6F4B; // 01101100011100110110111101001011
pub const SQ5_BIT_NOISE4: u32 = 0xB79F_3ABB; // 10110111100111110011101010111011
pub const SQ5_BIT_NOISE5: u32 = 0x1B56_C4F5; // 00011011010101101100010011110101

/// Scramble a signed position and a seed into 32 well-mixed bits.
///
/// All steps wrap modulo 2^32. Existing noise fields depend on this exact sequence,
/// so any change here changes every derived value.
#[inline]
pub fn mix_hash(position: i32, seed: u32) -> u32 {
    let mut bits = position as u32;
    bits = bits.wrapping_mul(SQ5_BIT_NOISE1);
    bits = bits.wrapping_add(seed);
    bits ^= bits >> 9;
    bits = bits.wrapping_add(SQ5_BIT_NOISE2);
    bits ^= bits >> 11;
    bits = bits.wrapping_mul(SQ5_BIT_NOISE3);
    bits ^= bits >> 13;
    bits = bits.wrapping_add(SQ5_BIT_NOISE4);
    bits ^= bits >> 15;
    bits = bits.wrapping_mul(SQ5_BIT_NOISE5);
    bits ^= bits >> 17;
    bits
}

/// Derive a seed from text by chaining every byte through `mix_hash`.
/// Stable across platforms and toolchains, unlike `std`'s hashers.
pub fn seed_from_str(text: &str) -> u32 {
    text.bytes()
        .fold(text.len() as u32, |acc, b| mix_hash(b as i32, acc))
}
