//! Game rules that are independent of any adapter.

pub mod policy;

pub use policy::ErrorPolicy;
