/// Services layer - the pure decision core
pub mod age;
pub mod classifier;
pub mod decider;
pub mod evaluator;

pub use age::{age_in_days, FutureTimestamp};
pub use classifier::{classify, Classification};
pub use decider::decide;
pub use evaluator::PolicyEvaluator;
