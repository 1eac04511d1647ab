/// Short code to emoji mapping
const DICT_SIZE: usize = 21; // number of entries in the short-code dictionary

// The emoji table, mapping short codes to emoji strings. Some emojis are
// more than one code point (variation selectors), so values are &str.
pub const EMOJI_MAP: [(&str, &str); DICT_SIZE] = [
    (":smile:", "😊"),
    (":party:", "🎉"),
    (":rocket:", "🚀"),
    (":heart:", "❤️"),
    (":thumbsup:", "👍"),
    (":fire:", "🔥"),
    (":sunglasses:", "😎"),
    (":wink:", "😉"),
    (":cry:", "😢"),
    (":laughing:", "😆"),
    (":clap:", "👏"),
    (":thinking:", "🤔"),
    (":star:", "⭐"),
    (":sun:", "☀️"),
    (":moon:", "🌙"),
    (":earth:", "🌍"),
    (":check:", "✅"),
    (":x:", "❌"),
    (":warning:", "⚠️"),
    (":coffee:", "☕"),
    (":muscle:", "💪"),
];

// Create a lookup map for short code to emoji
lazy_static::lazy_static! {
    static ref EMOJI_LOOKUP: std::collections::HashMap<&'static str, &'static str> = {
        let mut map = std::collections::HashMap::with_capacity(DICT_SIZE);
        for &(code, emoji) in EMOJI_MAP.iter() {
            map.insert(code, emoji);
        }
        map
    };
}

/// Look up the emoji for a single short code
pub fn emoji_for(code: &str) -> Option<&'static str> {
    EMOJI_LOOKUP.get(code).copied()
}
