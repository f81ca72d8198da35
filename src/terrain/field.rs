//! Dense scalar field over the map grid.

/// A `width × height` grid of `f32` values stored in row-major order.
///
/// Fields are handed from stage to stage by value. A stage that needs to keep
/// a copy must `clone()` it explicitly.
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    width: usize,
    height: usize,
    values: Vec<f32>,
}

impl ScalarField {
    /// Creates a field filled with zeros.
    pub fn new(width: usize, height: usize) -> Self {
        Self::filled(width, height, 0.0)
    }

    /// Creates a field with every cell set to `value`.
    pub fn filled(width: usize, height: usize, value: f32) -> Self {
        Self {
            width,
            height,
            values: vec![value; width * height],
        }
    }

    /// Wraps existing row-major values.
    ///
    /// # Panics
    /// Panics if `values.len() != width * height`.
    pub fn from_values(width: usize, height: usize, values: Vec<f32>) -> Self {
        assert_eq!(values.len(), width * height, "field size mismatch");
        Self { width, height, values }
    }

    pub fn width(&self) -> usize {
        self.width
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    #[inline]
    pub fn index(&self, x: usize, y: usize) -> usize {
        y * self.width + x
    }

    #[inline]
    pub fn get(&self, x: usize, y: usize) -> f32 {
        self.values[self.index(x, y)]
    }

    #[inline]
    pub fn set(&mut self, x: usize, y: usize, value: f32) {
        let i = self.index(x, y);
        self.values[i] = value;
    }

    pub fn values(&self) -> &[f32] {
        &self.values
    }

    pub fn values_mut(&mut self) -> &mut [f32] {
        &mut self.values
    }

    /// Consumes the field and returns its raw values.
    pub fn into_values(self) -> Vec<f32> {
        self.values
    }

    /// Iterates rows as slices of length `width`.
    pub fn rows(&self) -> impl Iterator<Item = &[f32]> {
        self.values.chunks(self.width.max(1))
    }

    /// Returns `(min, max)`; `(0.0, 0.0)` for an empty field.
    pub fn min_max(&self) -> (f32, f32) {
        if self.values.is_empty() {
            return (0.0, 0.0);
        }
        self.values
            .iter()
            .fold((f32::INFINITY, f32::NEG_INFINITY), |(lo, hi), &v| (lo.min(v), hi.max(v)))
    }

    /// Affinely rescales the field onto [0, 1] using its observed range.
    ///
    /// A flat field (`max == min`) maps every cell to 0.
    pub fn normalize(&mut self) {
        let (min, max) = self.min_max();
        let range = if max - min == 0.0 { 1.0 } else { max - min };
        for v in &mut self.values {
            *v = (*v - min) / range;
        }
    }

    /// Builder form of [`ScalarField::normalize`].
    pub fn normalized(mut self) -> Self {
        self.normalize();
        self
    }

    /// Returns true if every value lies in [0, 1].
    pub fn is_unit_range(&self) -> bool {
        self.values.iter().all(|v| (0.0..=1.0).contains(v))
    }
}
