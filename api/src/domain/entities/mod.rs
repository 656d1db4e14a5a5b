//! Domain entities
//!
//! Pure domain models representing core concepts.

pub mod category;
pub mod page;
pub mod palette;
pub mod word_count;

pub use category::Category;
pub use page::Page;
pub use palette::Palette;
pub use word_count::WordCount;
