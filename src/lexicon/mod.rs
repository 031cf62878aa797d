mod mood;
mod scorer;

pub use mood::*;
pub use scorer::*;
