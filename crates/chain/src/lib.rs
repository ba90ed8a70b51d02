mod chain;
mod cursor;
mod dispatch;
mod error;
mod iter;
mod source;


pub use chain::*;
pub use cursor::*;
pub use dispatch::*;
pub use error::*;
pub use iter::*;
pub use source::*;
