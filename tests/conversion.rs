use emoji_converter::{convert, convert_bytes, emoji_for, EmojiError, EMOJI_MAP};

#[test]
fn converts_sentence_with_multiple_codes() {
    let sample = "Hello :smile: Welcome :party: Let's code :rocket: and grab :coffee:";
    assert_eq!(
        convert(sample),
        "Hello 😊 Welcome 🎉 Let's code 🚀 and grab ☕"
    );
}

#[test]
fn leaves_text_without_codes_unchanged() {
    assert_eq!(convert("No codes here!"), "No codes here!");
}

#[test]
fn converts_adjacent_codes_independently() {
    assert_eq!(convert(":heart: :thumbsup: :fire:"), "❤️ 👍 🔥");
}

#[test]
fn unknown_code_passes_through() {
    assert_eq!(
        convert("still typing :nonexistent: here"),
        "still typing :nonexistent: here"
    );
}

#[test]
fn every_code_converts_to_its_emoji() {
    for (code, emoji) in EMOJI_MAP {
        assert_eq!(convert(code), emoji, "wrong emoji for {}", code);
    }
}

#[test]
fn lookup_hits_and_misses() {
    assert_eq!(emoji_for(":coffee:"), Some("☕"));
    assert_eq!(emoji_for("coffee"), None);
}

#[test]
fn rejects_bytes_that_are_not_text() {
    let err = convert_bytes(&[0xc3, 0x28]).unwrap_err();
    assert!(matches!(err, EmojiError::InvalidInputType(_)));
}

#[test]
fn converts_codes_embedded_in_words() {
    // Codes are matched as literal substrings, not whole tokens
    assert_eq!(convert("done:check:done"), "done✅done");
}
