use std::fs;

use gamehub::models::game::GameSummary;

/// Convenience func to get a fixture from the standard path, as a string
#[allow(dead_code)]
pub fn fixture(s: &str) -> String {
    fs::read_to_string(format!("test/fixtures/{}", s)).unwrap()
}

/// A game with only the required fields filled in
#[allow(dead_code)]
pub fn game(id: u64, name: &str) -> GameSummary {
    let raw = format!(r#"{{"id": {}, "name": "{}", "rating": 4.0}}"#, id, name);
    serde_json::from_str(&raw).unwrap()
}
