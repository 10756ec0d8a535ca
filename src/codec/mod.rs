//!
//! Encoders and decoders for the fixed-layout structures exchanged with guests
//!

mod wire_value;
mod vectors;
mod element_record;

pub use self::wire_value::*;
pub use self::element_record::*;
