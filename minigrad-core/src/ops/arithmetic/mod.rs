// Primitive arithmetic carries its own tag; the rest are compositions.
pub mod add;
pub mod div;
pub mod mul;
pub mod neg;
pub mod pow;
pub mod sub;

pub use add::add_op;
pub use div::div_op;
pub use mul::mul_op;
pub use neg::neg_op;
pub use pow::pow_op;
pub use sub::sub_op;

pub(crate) use add::add_values;
pub(crate) use mul::mul_values;
pub(crate) use neg::neg_values;
pub(crate) use pow::pow_values;
pub(crate) use sub::sub_values;
