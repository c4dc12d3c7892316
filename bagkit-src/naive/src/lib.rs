#[doc(inline)]
pub use assoc_bag::{self, *};
