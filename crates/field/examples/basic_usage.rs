//! Basic usage example for quill-field

use std::time::Duration;

use quill_field::{RuleEngine, RuleId, TextField};

#[tokio::main]
async fn main() {
    let mut field = TextField::new(RuleEngine::default())
        .with_rules(&[RuleId::NotEmpty, RuleId::Email])
        .on_result(|valid, message| {
            if valid {
                println!("✓ {message}");
            } else {
                println!("✗ {message}");
            }
        });

    // Simulate a user typing an address.
    for text in ["user", "user@", "user@example", "user@example.com"] {
        field.set_text(text);
        tokio::time::sleep(Duration::from_millis(200)).await;
    }

    // Wait out the typing pause; the timer surfaces the final verdict.
    tokio::time::sleep(Duration::from_millis(1500)).await;

    match field.error_message() {
        Some(error) => println!("inline error: {error}"),
        None => println!("field is clean"),
    }
}
