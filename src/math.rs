#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec2 {
    pub x: f64,
    pub y: f64,
}

impl Vec2 {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length_squared(&self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    /// Angle against the +x axis, in (-PI, PI].
    pub fn angle(&self) -> f64 {
        self.y.atan2(self.x)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub const UP: Self = Self {
        x: 0.0,
        y: 1.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn dot(self, other: Self) -> f64 {
        self.x * other.x + self.y * other.y + self.z * other.z
    }

    pub fn cross(self, other: Self) -> Self {
        Self::new(
            self.y * other.z - self.z * other.y,
            self.z * other.x - self.x * other.z,
            self.x * other.y - self.y * other.x,
        )
    }

    pub fn length(self) -> f64 {
        self.dot(self).sqrt()
    }

    /// None when the vector is too short to carry a direction.
    pub fn normalized(self) -> Option<Self> {
        let len = self.length();
        (len > f64::EPSILON).then(|| Self::new(self.x / len, self.y / len, self.z / len))
    }
}

impl std::ops::Sub for Vec3 {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self::new(self.x - other.x, self.y - other.y, self.z - other.z)
    }
}

/// Local frame of the selection surface: origin plus orthonormal
/// right/up axes, with forward pointing at whatever the surface faces.
/// Pointing vectors live in the right/up plane.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PlaneFrame {
    pub origin: Vec3,
    pub right: Vec3,
    pub up: Vec3,
    pub forward: Vec3,
}

impl PlaneFrame {
    /// Frame of a surface sitting at `origin`, turned toward `target`.
    /// Falls back to world axes when the two points coincide or the view
    /// direction is vertical.
    pub fn facing(origin: Vec3, target: Vec3) -> Self {
        let forward = (target - origin)
            .normalized()
            .unwrap_or(Vec3::new(0.0, 0.0, 1.0));
        let right = Vec3::UP
            .cross(forward)
            .normalized()
            .unwrap_or(Vec3::new(1.0, 0.0, 0.0));
        let up = forward.cross(right);
        Self {
            origin,
            right,
            up,
            forward,
        }
    }

    pub fn project(&self, point: Vec3) -> Vec2 {
        let rel = point - self.origin;
        Vec2::new(rel.dot(self.right), rel.dot(self.up))
    }
}

/// The viewpoint pulled down (or up) to the height of `origin`, so a
/// surface turned toward it stays upright instead of tilting.
pub fn level_with(origin: Vec3, viewpoint: Vec3) -> Vec3 {
    Vec3::new(viewpoint.x, origin.y, viewpoint.z)
}
