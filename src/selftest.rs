use crate::convert::{convert, convert_bytes};

/// Execute a small test suite to validate conversions and error handling
///
/// Any failed assertion panics and terminates the run abnormally.
pub fn run() {
    let sample = "Hello :smile: Welcome :party: Let's code :rocket: and grab :coffee:";
    let expected = "Hello 😊 Welcome 🎉 Let's code 🚀 and grab ☕";
    assert_eq!(convert(sample), expected, "Basic conversion failed");

    let unchanged = "No codes here!";
    assert_eq!(
        convert(unchanged),
        unchanged,
        "Text without codes should stay the same"
    );

    let combined = ":heart: :thumbsup: :fire:";
    assert_eq!(
        convert(combined),
        "❤️ 👍 🔥",
        "Multiple codes conversion failed"
    );

    // Invalid UTF-8, the non-text negative case
    let not_text = [0x31, 0x32, 0x33, 0xff];
    assert!(
        convert_bytes(&not_text).is_err(),
        "Non-text input should be rejected"
    );

    println!("All tests passed!");
}
