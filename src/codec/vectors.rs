use super::wire_value::*;
use crate::scene::*;

impl WireValue for Vec3 {
    const WIRE_SIZE: usize = 12;

    fn encode(&self, target: &mut Vec<u8>) {
        target.extend(self.x.to_le_bytes());
        target.extend(self.y.to_le_bytes());
        target.extend(self.z.to_le_bytes());
    }

    fn decode(bytes: &[u8]) -> Option<Self> {
        Some(Vec3 {
            x: f32_at(bytes, 0)?,
            y: f32_at(bytes, 4)?,
            z: f32_at(bytes, 8)?,
        })
    }
}

impl WireValue for Quaternion {
    const WIRE_SIZE: usize = 16;

    fn encode(&self, target: &mut Vec<u8>) {
        target.extend(self.x.to_le_bytes());
        target.extend(self.y.to_le_bytes());
        target.extend(self.z.to_le_bytes());
        target.extend(self.w.to_le_bytes());
    }

    fn decode(bytes: &[u8]) -> Option<Self> {
        Some(Quaternion {
            x: f32_at(bytes, 0)?,
            y: f32_at(bytes, 4)?,
            z: f32_at(bytes, 8)?,
            w: f32_at(bytes, 12)?,
        })
    }
}

impl WireValue for Rgba {
    const WIRE_SIZE: usize = 16;

    fn encode(&self, target: &mut Vec<u8>) {
        target.extend(self.r.to_le_bytes());
        target.extend(self.g.to_le_bytes());
        target.extend(self.b.to_le_bytes());
        target.extend(self.a.to_le_bytes());
    }

    fn decode(bytes: &[u8]) -> Option<Self> {
        Some(Rgba {
            r: f32_at(bytes, 0)?,
            g: f32_at(bytes, 4)?,
            b: f32_at(bytes, 8)?,
            a: f32_at(bytes, 12)?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use crate::error::*;
    use crate::memory::*;

    #[test]
    fn position_layout() {
        let mut memory = vec![0u8; 16];

        write_value(&mut memory, 4, &Vec3::new(1.0, -2.0, 0.5)).unwrap();

        assert!(read_f32(&memory, 4) == Ok(1.0));
        assert!(read_f32(&memory, 8) == Ok(-2.0));
        assert!(read_f32(&memory, 12) == Ok(0.5));
        assert!(read_value::<Vec3>(&memory, 4) == Ok(Vec3::new(1.0, -2.0, 0.5)));
    }

    #[test]
    fn rotation_is_xyzw() {
        let mut memory = vec![0u8; 16];

        write_value(&mut memory, 0, &Quaternion::new(0.1, 0.2, 0.3, 0.9)).unwrap();

        assert!(read_f32(&memory, 12) == Ok(0.9));
    }

    #[test]
    fn partial_color_write_is_refused() {
        // Only the first three components would fit: nothing should be written
        let mut memory = vec![0u8; 24];

        assert!(write_value(&mut memory, 12, &Rgba::new(1.0, 1.0, 1.0, 1.0)) == Err(MemoryError::OutOfBounds));
        assert!(memory == vec![0u8; 24]);
    }

    #[test]
    fn read_past_end() {
        let memory = vec![0u8; 20];

        assert!(read_value::<Quaternion>(&memory, 8) == Err(MemoryError::OutOfBounds));
    }
}
