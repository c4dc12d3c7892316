#[doc(inline)]
pub use ds;
#[doc(inline)]
pub use naive;
#[doc(inline)]
pub use random;
