///
/// A 3-component vector, used for positions and scales
///
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Vec3 {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

///
/// A rotation, as a quaternion
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Quaternion {
    pub x: f32,
    pub y: f32,
    pub z: f32,
    pub w: f32,
}

///
/// A color with an alpha channel, components in the range 0-1
///
#[derive(Copy, Clone, PartialEq, Debug, Default)]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

///
/// The scale of an element: hosts may store a single scalar or a per-axis scale
///
#[derive(Copy, Clone, PartialEq, Debug)]
pub enum Scale {
    Uniform(f32),
    Axes(Vec3),
}

impl Vec3 {
    pub const fn new(x: f32, y: f32, z: f32) -> Vec3 {
        Vec3 { x, y, z }
    }

    pub const fn splat(value: f32) -> Vec3 {
        Vec3 { x: value, y: value, z: value }
    }
}

impl Quaternion {
    pub const IDENTITY: Quaternion = Quaternion { x: 0.0, y: 0.0, z: 0.0, w: 1.0 };

    pub const fn new(x: f32, y: f32, z: f32, w: f32) -> Quaternion {
        Quaternion { x, y, z, w }
    }
}

impl Default for Quaternion {
    fn default() -> Quaternion {
        Quaternion::IDENTITY
    }
}

impl Rgba {
    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Rgba {
        Rgba { r, g, b, a }
    }
}

impl Scale {
    ///
    /// The per-axis scale (a uniform scale is broadcast to all three axes)
    ///
    pub fn as_vec3(&self) -> Vec3 {
        match self {
            Scale::Uniform(scale)   => Vec3::splat(*scale),
            Scale::Axes(axes)       => *axes,
        }
    }
}

impl Default for Scale {
    fn default() -> Scale {
        Scale::Uniform(1.0)
    }
}
