#![allow(ambiguous_glob_reexports)]

pub mod cancel_stream;
pub mod create_stream;
pub mod initialize;
pub mod view;
pub mod withdraw;

pub use cancel_stream::*;
pub use create_stream::*;
pub use initialize::*;
pub use view::*;
pub use withdraw::*;
