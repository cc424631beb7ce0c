//! Fixed question bank.

use crate::accessibility::option_letter;

/// A multiple-choice question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    pub id: u32,
    pub text: &'static str,
    pub options: &'static [&'static str],
}

impl Question {
    /// Whether `option` is one of this question's answers.
    pub fn has_option(&self, option: &str) -> bool {
        self.options.iter().any(|o| *o == option)
    }

    /// Full narration: question text followed by the lettered options.
    pub fn narration(&self) -> String {
        let mut text = self.text.to_string();
        for (index, option) in self.options.iter().enumerate() {
            if let Some(letter) = option_letter(index) {
                text.push_str(&format!(" Option {}: {}.", letter.to_ascii_uppercase(), option));
            }
        }
        text
    }
}

pub static QUESTIONS: &[Question] = &[
    Question {
        id: 1,
        text: "Which data structure uses FIFO (First In First Out)?",
        options: &["Stack", "Queue", "Binary Tree", "Graph"],
    },
    Question {
        id: 2,
        text: "Which data structure uses LIFO (Last In First Out)?",
        options: &["Stack", "Queue", "Array", "Heap"],
    },
    Question {
        id: 3,
        text: "What is the time complexity of Binary Search?",
        options: &["O(n)", "O(log n)", "O(n²)", "O(1)"],
    },
    Question {
        id: 4,
        text: "What will be the output of 2 + 3 * 4?",
        options: &["20", "14", "24", "10"],
    },
    Question {
        id: 5,
        text: "What does AI stand for?",
        options: &[
            "Artificial Intelligence",
            "Automated Interface",
            "Advanced Input",
            "Algorithmic Interaction",
        ],
    },
];
