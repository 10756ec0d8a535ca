use super::wire_value::*;

///
/// The 8 byte record used to describe an element to the guest: `(descriptor: i32, kind: i32)`
///
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
pub struct ElementRecord {
    pub descriptor: i32,
    pub kind:       i32,
}

impl WireValue for ElementRecord {
    const WIRE_SIZE: usize = 8;

    fn encode(&self, target: &mut Vec<u8>) {
        target.extend(self.descriptor.to_le_bytes());
        target.extend(self.kind.to_le_bytes());
    }

    fn decode(bytes: &[u8]) -> Option<Self> {
        Some(ElementRecord {
            descriptor: i32_at(bytes, 0)?,
            kind:       i32_at(bytes, 4)?,
        })
    }
}
