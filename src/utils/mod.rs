//! Text helpers shared by the expression, pattern and clause renderers.

pub mod escape;
pub mod keywords;
pub mod padding;

pub use escape::{escape_identifier, escape_string};
pub use keywords::is_reserved_keyword;
pub use padding::pad_block;
