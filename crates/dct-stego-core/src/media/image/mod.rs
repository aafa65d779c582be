pub mod capacity;
pub mod coefficient;
pub mod dct;
pub mod plane;

pub use capacity::{CapacityError, CapacityPlan};
pub use coefficient::CoefficientEncoder;
pub use dct::{Block, BlockTransformer, CoefficientMatrix};
pub use plane::CarrierPlane;
