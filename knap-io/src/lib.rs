mod error;
pub use error::*;
mod hash;
pub use hash::*;
mod json;
pub use json::*;
mod source;
pub use source::*;
mod text;
pub use text::*;
