//! Telegram's zero-run compression.
//!
//! A run of `n` zero bytes is stored as `0x00, n`. Everything else is copied
//! as-is. Persistent ids are mostly small integers, so this typically halves
//! their length.

/// Longest run written as a single `0x00, n` pair. TDLib stops at 250, and we
/// produce the same bytes it does.
pub const MAX_RUN: u8 = 250;

/// Expand every `0x00, n` pair into `n` zero bytes.
///
/// A zero in the last position has no count byte and is kept as a literal
/// zero, the same way TDLib's `zero_decode` treats it.
pub fn decode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len() * 2);
    let mut i = 0;
    while i < data.len() {
        match (data[i], data.get(i + 1)) {
            (0, Some(&count)) => {
                out.resize(out.len() + count as usize, 0);
                i += 2;
            }
            (b, _) => {
                out.push(b);
                i += 1;
            }
        }
    }
    out
}

/// Compress zero runs. The exact inverse of [`decode`].
pub fn encode(data: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(data.len());
    let mut zeros = 0u8;
    for &b in data {
        if b == 0 {
            zeros += 1;
            if zeros == MAX_RUN {
                out.extend([0, zeros]);
                zeros = 0;
            }
        } else {
            if zeros > 0 {
                out.extend([0, zeros]);
                zeros = 0;
            }
            out.push(b);
        }
    }
    if zeros > 0 {
        out.extend([0, zeros]);
    }
    out
}
