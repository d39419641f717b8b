mod email;

pub use email::*;
