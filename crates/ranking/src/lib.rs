//! Descriptor ranking.
//!
//! Completion accounting per descriptor and the weakest-first order the
//! session hands questions out in.

#![warn(missing_docs)]

pub mod counts;
pub mod order;

pub use counts::DescriptorCounts;
pub use order::DescriptorRanking;
