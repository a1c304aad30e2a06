//! Speech recognizer infrastructure adapters

mod console;

pub use console::ConsoleRecognizer;
