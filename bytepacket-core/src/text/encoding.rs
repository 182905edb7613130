use alloc::string::String;

/// A text encoding that converts between characters and bytes.
///
/// Implementors provide the per-character operations and both decoders.
/// The string and slice encoders have default implementations.
/// Decoders are lossy: malformed input becomes U+FFFD rather than an
/// error.
pub trait TextEncoding {
    /// Number of bytes `c` occupies once encoded.
    fn char_len(&self, c: char) -> usize;

    /// Encode `c` at the start of `out`, returning the bytes written.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than [`char_len`](Self::char_len).
    fn encode_char(&self, c: char, out: &mut [u8]) -> usize;

    /// Decode `bytes` into a new string.
    fn decode(&self, bytes: &[u8]) -> String;

    /// Decode `bytes` into the start of `out` without allocating,
    /// returning the characters produced.
    ///
    /// Must produce the same characters as [`decode`](Self::decode).
    ///
    /// # Panics
    ///
    /// Panics if `out` cannot hold every decoded character.
    fn decode_into(&self, bytes: &[u8], out: &mut [char]) -> usize;

    /// Number of bytes `text` occupies once encoded.
    fn byte_count(&self, text: &str) -> usize {
        text.chars().map(|c| self.char_len(c)).sum()
    }

    /// Number of bytes `chars` occupy once encoded.
    fn byte_count_chars(&self, chars: &[char]) -> usize {
        chars.iter().map(|&c| self.char_len(c)).sum()
    }

    /// Encode `text` at the start of `out`, returning the bytes written.
    fn encode(&self, text: &str, out: &mut [u8]) -> usize {
        text.chars().fold(0, |n, c| n + self.encode_char(c, &mut out[n..]))
    }

    /// Encode `chars` at the start of `out`, returning the bytes written.
    fn encode_chars(&self, chars: &[char], out: &mut [u8]) -> usize {
        chars.iter().fold(0, |n, &c| n + self.encode_char(c, &mut out[n..]))
    }
}

/// UTF-8.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf8;

impl TextEncoding for Utf8 {
    #[inline]
    fn char_len(&self, c: char) -> usize {
        c.len_utf8()
    }

    #[inline]
    fn encode_char(&self, c: char, out: &mut [u8]) -> usize {
        c.encode_utf8(&mut out[..c.len_utf8()]).len()
    }

    fn decode(&self, bytes: &[u8]) -> String {
        String::from_utf8_lossy(bytes).into_owned()
    }

    // One U+FFFD per invalid run, matching from_utf8_lossy.
    fn decode_into(&self, bytes: &[u8], out: &mut [char]) -> usize {
        let mut n = 0;
        for chunk in bytes.utf8_chunks() {
            for c in chunk.valid().chars() {
                out[n] = c;
                n += 1;
            }
            if !chunk.invalid().is_empty() {
                out[n] = char::REPLACEMENT_CHARACTER;
                n += 1;
            }
        }
        n
    }

    #[inline]
    fn byte_count(&self, text: &str) -> usize {
        text.len()
    }

    fn encode(&self, text: &str, out: &mut [u8]) -> usize {
        out[..text.len()].copy_from_slice(text.as_bytes());
        text.len()
    }
}

/// UTF-16, little-endian code units, no byte order mark.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Utf16Le;

impl TextEncoding for Utf16Le {
    #[inline]
    fn char_len(&self, c: char) -> usize {
        c.len_utf16() * 2
    }

    fn encode_char(&self, c: char, out: &mut [u8]) -> usize {
        let mut units = [0u16; 2];
        let units = c.encode_utf16(&mut units);
        for (i, unit) in units.iter().enumerate() {
            out[i * 2..i * 2 + 2].copy_from_slice(&unit.to_le_bytes());
        }
        units.len() * 2
    }

    fn decode(&self, bytes: &[u8]) -> String {
        utf16_chars(bytes).collect()
    }

    fn decode_into(&self, bytes: &[u8], out: &mut [char]) -> usize {
        let mut n = 0;
        for c in utf16_chars(bytes) {
            out[n] = c;
            n += 1;
        }
        n
    }
}

/// Lossy UTF-16LE decode. A trailing odd byte becomes one U+FFFD.
fn utf16_chars(bytes: &[u8]) -> impl Iterator<Item = char> + '_ {
    let pairs = bytes.chunks_exact(2);
    let odd = (!pairs.remainder().is_empty()).then_some(char::REPLACEMENT_CHARACTER);
    char::decode_utf16(pairs.map(|pair| u16::from_le_bytes([pair[0], pair[1]])))
        .map(|unit| unit.unwrap_or(char::REPLACEMENT_CHARACTER))
        .chain(odd)
}

/// 7-bit ASCII. Characters outside the range encode as `?`, bytes above
/// `0x7F` decode as `?`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Ascii;

impl TextEncoding for Ascii {
    #[inline]
    fn char_len(&self, _c: char) -> usize {
        1
    }

    #[inline]
    fn encode_char(&self, c: char, out: &mut [u8]) -> usize {
        out[0] = if c.is_ascii() { c as u8 } else { b'?' };
        1
    }

    fn decode(&self, bytes: &[u8]) -> String {
        bytes
            .iter()
            .map(|&b| if b.is_ascii() { char::from(b) } else { '?' })
            .collect()
    }

    fn decode_into(&self, bytes: &[u8], out: &mut [char]) -> usize {
        for (slot, &b) in out[..bytes.len()].iter_mut().zip(bytes) {
            *slot = if b.is_ascii() { char::from(b) } else { '?' };
        }
        bytes.len()
    }
}
