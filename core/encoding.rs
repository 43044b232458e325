use encoding_rs::{Encoding, UTF_8, WINDOWS_1251};

/// Decoders tried in priority order; the first strict decode wins.
pub static ENCODING_CANDIDATES: &[&Encoding] = &[UTF_8, WINDOWS_1251];

/// File contents decoded to text, tagged with the encoding that produced it
/// so a rewrite can use the same one.
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    pub encoding: &'static Encoding,
}

pub fn decode(raw: &[u8]) -> Option<DecodedText> {
    for &candidate in ENCODING_CANDIDATES {
        // A BOM is kept as content so the rewrite round-trips byte-for-byte.
        let (text, had_errors) = candidate.decode_without_bom_handling(raw);
        if !had_errors {
            return Some(DecodedText {
                text: text.into_owned(),
                encoding: candidate,
            });
        }
    }
    None
}

/// Encodes `text` with the encoding it was decoded with. `None` when some
/// character is not representable in it; callers must not fall back to
/// another encoding.
pub fn encode(text: &str, encoding: &'static Encoding) -> Option<Vec<u8>> {
    let (bytes, _, had_unmappable) = encoding.encode(text);
    if had_unmappable {
        return None;
    }
    Some(bytes.into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_utf8_decodes_with_the_first_candidate() {
        let decoded = decode(b"int main() {}\n").unwrap();
        assert_eq!(decoded.text, "int main() {}\n");
        assert_eq!(decoded.encoding, UTF_8);
    }

    #[test]
    fn non_utf8_bytes_fall_back_to_windows_1251() {
        // "Привет" in windows-1251, not valid UTF-8.
        let raw = [0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2];
        let decoded = decode(&raw).unwrap();
        assert_eq!(decoded.text, "Привет");
        assert_eq!(decoded.encoding, WINDOWS_1251);
    }

    #[test]
    fn fallback_decode_round_trips() {
        let raw = [0xCF, 0xF0, 0xE8, 0xE2, 0xE5, 0xF2, b'\n'];
        let decoded = decode(&raw).unwrap();
        let encoded = encode(&decoded.text, decoded.encoding).unwrap();
        assert_eq!(encoded, raw);
    }

    #[test]
    fn utf8_bom_is_kept_as_content_and_round_trips() {
        let raw = b"\xEF\xBB\xBFint x;\n";
        let decoded = decode(raw).unwrap();
        assert_eq!(decoded.encoding, UTF_8);
        assert!(decoded.text.starts_with('\u{feff}'));
        let encoded = encode(&decoded.text, decoded.encoding).unwrap();
        assert_eq!(encoded, raw);
    }

    #[test]
    fn cyrillic_text_is_not_representable_after_utf8_decode_promotion() {
        // Text decoded as UTF-8 re-encodes as UTF-8; windows-1251 text
        // re-encodes as windows-1251. Characters outside windows-1251
        // surface as an encode failure instead of being replaced.
        assert!(encode("日本語", WINDOWS_1251).is_none());
        assert!(encode("日本語", UTF_8).is_some());
    }

    #[test]
    fn empty_input_is_utf8() {
        let decoded = decode(b"").unwrap();
        assert_eq!(decoded.text, "");
        assert_eq!(decoded.encoding, UTF_8);
    }
}
