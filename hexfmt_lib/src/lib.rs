//! Configurable hex dump rendering.
//!
//! ```
//! use hexfmt_lib::{render, Options};
//!
//! let dump = render(&b"hello"[..], &Options::default());
//! assert_eq!(
//!     dump,
//!     "00000000: 6865 6c6c 6f                             hello\n"
//! );
//! ```

mod dump;
mod escape;
mod line;
mod numeral;
mod options;
mod source;

pub use dump::render;
pub use numeral::numeral_width;
pub use options::Options;
pub use source::Source;
