pub mod distribution;
pub mod field;

pub use distribution::{
    ChargeDistribution, DistributionError, PointCharge, fibonacci_sphere, generate,
};
pub use field::{FieldSample, field_at, sample, superpose, theoretical_field_at};
#[cfg(feature = "parallel")]
pub use field::field_at_parallel;
