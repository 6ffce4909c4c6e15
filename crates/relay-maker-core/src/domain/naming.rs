//! Naming-convention transforms.
//!
//! Every derived identifier of a bundle is built from the five primitives in
//! this module. They are total functions over arbitrary strings: there is no
//! error path, and the empty string maps to the empty string.
//!
//! ## Normalization
//!
//! All transforms start from [`normalize`]: lowercase, then each `-` or `_`
//! becomes a single space. Runs of separators are **not** merged, so
//! `"a--b"` normalizes to `"a  b"` and kebabs to `"a--b"`. Generated
//! packages depend on this exact output, keep it byte-stable.
//!
//! | Input           | pascal         | kebab           | snake           |
//! |-----------------|----------------|-----------------|-----------------|
//! | "my example"    | "MyExample"    | "my-example"    | "my_example"    |
//! | "My-Example"    | "MyExample"    | "my-example"    | "my_example"    |
//! | "dbp relay foo" | "DbpRelayFoo"  | "dbp-relay-foo" | "dbp_relay_foo" |
//! | "a__b"          | "AB"           | "a--b"          | "a__b"          |

/// Lowercase `input` and turn every `-` and `_` into a space.
pub fn normalize(input: &str) -> String {
    input
        .chars()
        .flat_map(char::to_lowercase)
        .map(|c| if c == '-' || c == '_' { ' ' } else { c })
        .collect()
}

/// `"my example"` → `"MyExample"`.
///
/// Words are delimited by whitespace after normalization; only spaces are
/// removed afterwards, other whitespace stays in place.
pub fn pascal(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut at_word_start = true;

    for c in normalize(input).chars() {
        if at_word_start {
            out.extend(c.to_uppercase());
        } else {
            out.push(c);
        }
        at_word_start = is_word_delimiter(c);
    }

    out.retain(|c| c != ' ');
    out
}

/// `"My Example"` → `"my-example"`.
pub fn kebab(input: &str) -> String {
    normalize(input).replace(' ', "-")
}

/// `"My Example"` → `"my_example"`.
pub fn snake(input: &str) -> String {
    normalize(input).replace(' ', "_")
}

/// Append a literal `s`. Irregular plurals are not handled.
pub fn plural(input: &str) -> String {
    format!("{input}s")
}

fn is_word_delimiter(c: char) -> bool {
    matches!(c, ' ' | '\t' | '\r' | '\n' | '\x0B' | '\x0C')
}
