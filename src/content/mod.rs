//! Content module - post models, rich text, and response validation

mod post;
pub mod richtext;
pub mod schema;

pub use post::{ContentBlock, PageCursor, PaginationResult, PostDetail, PostSummary};
pub use richtext::{BlockKind, InlineFormat, InlineStyle, RichTextSpan};
