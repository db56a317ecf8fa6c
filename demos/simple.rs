//! Your first `.properties` file.
//!
//! Run with: cargo run --example simple

use serde::Serialize;
use std::error::Error;

#[derive(Debug, Serialize)]
struct Config {
    name: String,
    version: String,
    greeting: String,
    debug: bool,
}

fn main() -> Result<(), Box<dyn Error>> {
    let config = Config {
        name: "MyApp".to_string(),
        version: "1.0.0".to_string(),
        greeting: " Grüß Gott!".to_string(),
        debug: true,
    };

    // Default options: a timestamp comment for now, in the local zone
    let text = serde_jprops::to_string(&config)?;
    println!("{}", text);

    Ok(())
}
