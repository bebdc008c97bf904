/// Time primitives
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Time(pub f64); // seconds

impl Time {
    pub fn zero() -> Self {
        Time(0.0)
    }
}
