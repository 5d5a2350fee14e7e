//! Generic numeric point.

use num_traits::AsPrimitive;

use super::traits::Point;

/// A point over any primitive numeric type `N`.
///
/// `LabeledPoint` only ever consumes it through [`NumberPoint::values`], so
/// the element type just has to narrow to `f32` and widen to `f64`.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct NumberPoint<N> {
    values: Vec<N>,
}

impl<N> NumberPoint<N> {
    pub fn new(values: Vec<N>) -> Self {
        NumberPoint { values }
    }

    pub fn values(&self) -> &[N] {
        &self.values
    }
}

impl<N> Point for NumberPoint<N>
where
    N: AsPrimitive<f64>,
{
    fn dimensions(&self) -> usize {
        self.values.len()
    }

    fn get_value(&self, dim: usize) -> f64 {
        self.values[dim].as_()
    }
}
