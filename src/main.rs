mod cli;

use clap::Parser;
use cli::Args;
use emoji_converter::convert::convert;
use emoji_converter::selftest;

const SAMPLE_TEXT: &str =
    "Hello :smile: Welcome :party: Let's launch with :rocket: and celebrate :clap:";

fn main() {
    let args = Args::parse();

    if args.test {
        selftest::run();
        return;
    }

    let text = args.text.unwrap_or_else(|| SAMPLE_TEXT.to_string());
    println!("{}", convert(&text));
}
