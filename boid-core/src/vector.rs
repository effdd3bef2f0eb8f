/// A 2D vector used for position, velocity and steering forces.
///
/// The `&mut self` methods mutate in place and hand back the receiver so they
/// can be chained. Degenerate input (zero divisor, zero length) is a no-op.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Vector2D {
    pub x: f32,
    pub y: f32,
}

impl Vector2D {
    pub fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }

    pub fn zero() -> Self {
        Self { x: 0.0, y: 0.0 }
    }

    /// Unit vector pointing at `angle` radians.
    pub fn from_angle(angle: f32) -> Self {
        let (sin, cos) = math::sin_cos(angle);
        Self { x: cos, y: sin }
    }

    pub fn add(&mut self, other: Vector2D) -> &mut Self {
        self.x += other.x;
        self.y += other.y;
        self
    }

    pub fn subtract(&mut self, other: Vector2D) -> &mut Self {
        self.x -= other.x;
        self.y -= other.y;
        self
    }

    pub fn scale(&mut self, n: f32) -> &mut Self {
        self.x *= n;
        self.y *= n;
        self
    }

    pub fn divide(&mut self, n: f32) -> &mut Self {
        if n != 0.0 {
            self.x /= n;
            self.y /= n;
        }
        self
    }

    pub fn magnitude_squared(&self) -> f32 {
        self.x * self.x + self.y * self.y
    }

    pub fn magnitude(&self) -> f32 {
        math::sqrt(self.magnitude_squared())
    }

    pub fn normalize(&mut self) -> &mut Self {
        let mag = self.magnitude();
        self.divide(mag)
    }

    pub fn set_magnitude(&mut self, n: f32) -> &mut Self {
        self.normalize().scale(n)
    }

    /// Rescale down to `max` when longer than it. Compares squared lengths so
    /// the common in-range case skips the square root.
    pub fn limit_magnitude(&mut self, max: f32) -> &mut Self {
        if self.magnitude_squared() > max * max {
            self.set_magnitude(max);
        }
        self
    }

    /// Angle of the vector in radians, as used to orient a rendered boid.
    pub fn heading(&self) -> f32 {
        math::atan2(self.y, self.x)
    }

    pub fn distance(a: Vector2D, b: Vector2D) -> f32 {
        Self::difference(a, b).magnitude()
    }

    pub fn difference(a: Vector2D, b: Vector2D) -> Vector2D {
        Vector2D::new(a.x - b.x, a.y - b.y)
    }
}

impl core::ops::Add for Vector2D {
    type Output = Self;

    fn add(mut self, other: Self) -> Self {
        Vector2D::add(&mut self, other);
        self
    }
}

impl core::ops::Sub for Vector2D {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Vector2D::difference(self, other)
    }
}

impl core::ops::Mul<f32> for Vector2D {
    type Output = Self;

    fn mul(mut self, scalar: f32) -> Self {
        self.scale(scalar);
        self
    }
}

impl core::ops::Div<f32> for Vector2D {
    type Output = Self;

    fn div(mut self, scalar: f32) -> Self {
        self.divide(scalar);
        self
    }
}

impl core::ops::AddAssign for Vector2D {
    fn add_assign(&mut self, other: Self) {
        Vector2D::add(self, other);
    }
}

impl core::ops::SubAssign for Vector2D {
    fn sub_assign(&mut self, other: Self) {
        self.subtract(other);
    }
}

mod math {
    #[cfg(feature = "std")]
    pub fn sqrt(x: f32) -> f32 {
        x.sqrt()
    }

    #[cfg(not(feature = "std"))]
    pub fn sqrt(x: f32) -> f32 {
        libm::sqrtf(x)
    }

    #[cfg(feature = "std")]
    pub fn atan2(y: f32, x: f32) -> f32 {
        y.atan2(x)
    }

    #[cfg(not(feature = "std"))]
    pub fn atan2(y: f32, x: f32) -> f32 {
        libm::atan2f(y, x)
    }

    #[cfg(feature = "std")]
    pub fn sin_cos(angle: f32) -> (f32, f32) {
        angle.sin_cos()
    }

    #[cfg(not(feature = "std"))]
    pub fn sin_cos(angle: f32) -> (f32, f32) {
        libm::sincosf(angle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_vector2d_new() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.x, 3.0);
        assert_eq!(v.y, 4.0);
    }

    #[test]
    fn test_vector2d_magnitude() {
        let v = Vector2D::new(3.0, 4.0);
        assert_eq!(v.magnitude(), 5.0);
        assert_eq!(v.magnitude_squared(), 25.0);
    }

    #[test]
    fn test_vector2d_normalize() {
        let mut v = Vector2D::new(3.0, 4.0);
        v.normalize();
        assert!((v.magnitude() - 1.0).abs() < 0.0001);
    }

    #[test]
    fn test_normalize_zero_is_noop() {
        let mut v = Vector2D::zero();
        v.normalize();
        assert_eq!(v, Vector2D::zero());
    }

    #[test]
    fn test_divide_by_zero_is_noop() {
        let mut v = Vector2D::new(1.5, -2.0);
        v.divide(0.0);
        assert_eq!(v, Vector2D::new(1.5, -2.0));
        assert_eq!(Vector2D::new(1.5, -2.0) / 0.0, Vector2D::new(1.5, -2.0));
    }

    #[test]
    fn test_chaining() {
        let mut v = Vector2D::new(1.0, 1.0);
        v.add(Vector2D::new(1.0, 2.0))
            .subtract(Vector2D::new(0.0, 1.0))
            .scale(3.0)
            .divide(2.0);
        assert_eq!(v, Vector2D::new(3.0, 3.0));
    }

    #[test]
    fn test_set_magnitude() {
        let mut v = Vector2D::new(0.0, 2.0);
        v.set_magnitude(4.0);
        assert_eq!(v, Vector2D::new(0.0, 4.0));

        let mut zero = Vector2D::zero();
        zero.set_magnitude(4.0);
        assert_eq!(zero, Vector2D::zero());
    }

    #[test]
    fn test_limit_magnitude() {
        let mut long = Vector2D::new(30.0, 40.0);
        long.limit_magnitude(5.0);
        assert!((long.magnitude() - 5.0).abs() < 0.0001);
        assert!((long.x - 3.0).abs() < 0.0001);

        let mut short = Vector2D::new(0.3, 0.4);
        short.limit_magnitude(5.0);
        assert_eq!(short, Vector2D::new(0.3, 0.4));

        let mut any = Vector2D::new(-7.0, 2.5);
        any.limit_magnitude(0.0);
        assert!(any.magnitude() <= 1e-6);
    }

    #[test]
    fn test_heading() {
        assert_eq!(Vector2D::new(1.0, 0.0).heading(), 0.0);
        let up = Vector2D::new(0.0, 1.0).heading();
        assert!((up - core::f32::consts::FRAC_PI_2).abs() < 0.0001);
    }

    #[test]
    fn test_from_angle() {
        let v = Vector2D::from_angle(core::f32::consts::PI);
        assert!((v.x + 1.0).abs() < 0.0001);
        assert!(v.y.abs() < 0.0001);
    }

    #[test]
    fn test_distance_and_difference() {
        let a = Vector2D::new(4.0, 6.0);
        let b = Vector2D::new(1.0, 2.0);
        assert_eq!(Vector2D::distance(a, b), 5.0);
        assert_eq!(Vector2D::difference(a, b), Vector2D::new(3.0, 4.0));
        // operands are untouched
        assert_eq!(a, Vector2D::new(4.0, 6.0));
    }

    #[test]
    fn test_vector2d_operations() {
        let v1 = Vector2D::new(1.0, 2.0);
        let v2 = Vector2D::new(3.0, 4.0);

        let sum = v1 + v2;
        assert_eq!(sum, Vector2D::new(4.0, 6.0));

        let diff = v2 - v1;
        assert_eq!(diff, Vector2D::new(2.0, 2.0));

        let scaled = v1 * 2.0;
        assert_eq!(scaled, Vector2D::new(2.0, 4.0));

        let mut acc = v1;
        acc += v2;
        acc -= v1;
        assert_eq!(acc, v2);
    }
}
