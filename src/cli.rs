use clap::Parser;

#[derive(Parser, Debug)]
#[clap(about = "Convert emoji short codes (e.g., :smile:) to Unicode emojis")]
pub struct Args {
    /// Text to convert; if omitted, a sample sentence is used
    pub text: Option<String>,

    /// Run the built-in test suite instead of converting text
    #[clap(long)]
    pub test: bool,
}
