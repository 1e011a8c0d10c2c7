// Ordered sample segmentation
// 有序样本分段

#![cfg_attr(docsrs, feature(doc_cfg))]

mod bands;
mod decile;
mod error;
mod segment;

pub use bands::{Bands, LOAD_PHASES};
pub use decile::{DECILES, Decile, Small};
pub use error::{Error, Result};
pub use segment::{SegKey, Segment, Segmenter};
