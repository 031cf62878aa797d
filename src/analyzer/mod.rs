mod bulk;
mod single;
mod types;

pub use bulk::*;
pub use single::*;
pub use types::*;
