// Text normalization: tokenizing, stemming and sentence segmentation.

pub mod sentences;
pub mod snowball;
pub mod traits;
