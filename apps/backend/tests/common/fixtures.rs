//! Request bodies shared across API tests.

use serde_json::{json, Value};

/// Juan 3:16, with verse markup as it arrives from the verse source.
pub const JOHN_3_16: &str = "<sup>16</sup> Porque de tal manera amó Dios al mundo, \
     que ha dado a su Hijo unigénito, para que todo aquel que en él cree, \
     no se pierda, mas tenga vida eterna.";

pub fn grade_request(target: &str, attempt: &str) -> Value {
    json!({ "target": target, "attempt": attempt })
}

pub fn chunks_request(text: &str, words_per_chunk: Option<usize>, seed: u64) -> Value {
    json!({ "text": text, "words_per_chunk": words_per_chunk, "seed": seed })
}

pub fn citation_replay_request(reference: &str, ids: &[&str]) -> Value {
    json!({ "reference": reference, "ids": ids })
}
