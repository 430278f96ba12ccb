use std::fmt;
use num_enum::TryFromPrimitive;

/// CRC-32/IEEE-802.3 over `tag ‖ data`, without concatenating the two.
pub fn chunk_crc32(tag: &[u8; 4], data: &[u8]) -> u32 {
    use crc32fast::Hasher;
    let mut hasher = Hasher::new();
    hasher.update(tag);
    hasher.update(data);
    hasher.finalize()
}

pub fn enum_name_or_hex<T>(raw: T::Primitive) -> String
where
    T: TryFromPrimitive + fmt::Debug,
    T::Primitive: fmt::LowerHex,
{
    match T::try_from_primitive(raw) {
        Ok(variant) => format!("{:?}", variant),
        Err(_) => format!("0x{:x}", raw),
    }
}

/// Render bytes as a quoted ASCII literal when printable, hex otherwise.
pub fn fmt_bytes(b: &[u8]) -> String {
    if b.iter().all(|&c| c.is_ascii_graphic() || c == b' ') {
        format!("b\"{}\"", String::from_utf8_lossy(b))
    } else {
        format!("0x{}", hex::encode(b))
    }
}

/// Percentage of `original` saved by shrinking it to `reduced`.
/// Returns 0.0 for an empty original.
pub fn reduction_percent(original: usize, reduced: usize) -> f64 {
    if original == 0 {
        return 0.0;
    }
    let saved = original.saturating_sub(reduced) as f64;
    saved / original as f64 * 100.0
}
