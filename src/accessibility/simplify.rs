//! Plain-language rewrite of question text.
//!
//! This is a fixed table of literal phrase replacements, applied in order.
//! Text that contains none of the phrases comes back unchanged.

/// Phrase replacements, applied top to bottom.
pub const SUBSTITUTIONS: &[(&str, &str)] = &[
    ("Which data structure uses", "Which one uses"),
    ("FIFO (First In First Out)", "first in, first out"),
    ("LIFO (Last In First Out)", "last in, first out"),
    ("What is the time complexity of", "How fast is"),
    ("Binary Search", "searching a sorted list by halves"),
    ("What will be the output of", "What is"),
    ("What does AI stand for?", "What is the full name of AI?"),
    ("data structure", "way to store data"),
];

/// Apply every substitution in [`SUBSTITUTIONS`] to `text`.
pub fn simplify_text(text: &str) -> String {
    SUBSTITUTIONS
        .iter()
        .fold(text.to_string(), |acc, (from, to)| acc.replace(from, to))
}
