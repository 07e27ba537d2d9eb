//! Image-generation prompts for tarot cards.
//!
//! Each card becomes one text file whose name is derived from its place in
//! the deck and whose body combines the arcana's visual style, the card's
//! pattern, and a few concrete details lifted from its examples.

/// Error types for prompt writing.
pub mod error;
/// Prompt text and file-name construction.
pub mod prompt;
/// File-name slugs.
pub mod slug;
/// Visual vocabulary per arcana, suit and rank.
pub mod style;
/// Writing prompt files to disk.
pub mod writer;

/// Re-export error types.
pub use error::{PromptError, PromptResult};
/// Re-export prompt types.
pub use prompt::{CardPrompt, build_prompts};
/// Re-export the slug helper.
pub use slug::slugify;
/// Re-export the file writer.
pub use writer::write_prompts;
