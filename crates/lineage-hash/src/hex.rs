use crate::HashError;

/// ASCII byte to nibble value (255 = not a hex digit).
const NIBBLE: [u8; 256] = {
    let mut table = [255u8; 256];
    let mut i = 0usize;
    while i < 256 {
        let b = i as u8;
        table[i] = match b {
            b'0'..=b'9' => b - b'0',
            b'a'..=b'f' => b - b'a' + 10,
            b'A'..=b'F' => b - b'A' + 10,
            _ => 255,
        };
        i += 1;
    }
    table
};

const DIGITS: &[u8; 16] = b"0123456789abcdef";

/// Lowercase hex rendering of `bytes`.
pub fn encode(bytes: &[u8]) -> String {
    let mut out = String::with_capacity(bytes.len() * 2);
    for &b in bytes {
        out.push(DIGITS[(b >> 4) as usize] as char);
        out.push(DIGITS[(b & 0x0f) as usize] as char);
    }
    out
}

/// Decode `hex` into `buf`. The input must be exactly `buf.len() * 2`
/// characters; upper and lower case digits are both accepted.
pub fn decode_into(hex: &str, buf: &mut [u8]) -> Result<(), HashError> {
    let raw = hex.as_bytes();
    if raw.len() != buf.len() * 2 {
        return Err(HashError::InvalidHexLength {
            expected: buf.len() * 2,
            actual: raw.len(),
        });
    }
    for (i, pair) in raw.chunks_exact(2).enumerate() {
        let hi = nibble(pair[0], i * 2)?;
        let lo = nibble(pair[1], i * 2 + 1)?;
        buf[i] = (hi << 4) | lo;
    }
    Ok(())
}

/// Whether `s` is non-empty and consists only of hex digits.
pub fn is_hex(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| NIBBLE[b as usize] != 255)
}

fn nibble(byte: u8, position: usize) -> Result<u8, HashError> {
    match NIBBLE[byte as usize] {
        255 => Err(HashError::InvalidHex {
            position,
            character: byte as char,
        }),
        v => Ok(v),
    }
}
