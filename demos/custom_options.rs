//! Customizing output with PropertiesOptions.
//!
//! Run with: cargo run --example custom_options

use serde_jprops::{
    to_string_with_options, to_writer_with_options, CommentEscaping, PropertiesOptions, Separator,
    Timestamp, Zone,
};
use std::error::Error;
use std::io;

fn main() -> Result<(), Box<dyn Error>> {
    let pairs = vec![
        ("server.host", "example.org"),
        ("server.port", "8443"),
        ("app.title", "Café ☕"),
        ("app.banner", "  padded"),
    ];

    println!("Default separator, no timestamp:");
    let plain = PropertiesOptions::new().without_timestamp();
    println!("{}", to_string_with_options(&pairs, plain)?);

    println!("Colon separator, sorted keys, header comment:");
    let sorted = PropertiesOptions::new()
        .with_separator(Separator::Colon)
        .with_sort_keys(true)
        .with_comments("Server settings\n! generated, do not edit")
        .without_timestamp();
    println!("{}", to_string_with_options(&pairs, sorted)?);

    println!("Fixed timestamp in Berlin, Latin-1 comments:");
    let stamped = PropertiesOptions::new()
        .with_comments("Größe")
        .with_comment_escaping(CommentEscaping::Latin1)
        .with_timestamp(Timestamp::Unix(1_473_703_254))
        .with_time_zone(Zone::Named(chrono_tz::Europe::Berlin));
    to_writer_with_options(io::stdout().lock(), &pairs, stamped)?;

    Ok(())
}
