mod catalog;
mod change;
mod money;
mod product;

pub use catalog::*;
pub use change::*;
pub use money::*;
pub use product::*;
