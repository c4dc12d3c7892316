#[doc(inline)]
pub use avl_bag::{self, *};
