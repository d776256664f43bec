mod dictionary_loader;
pub use dictionary_loader::load as load_dictionary;

mod document;
pub use document::{PuzzleDocument, WordEntry};

mod error;
pub use error::ExternalError;
