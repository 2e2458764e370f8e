pub mod comparator;
pub mod pipeline;
pub mod sequence;
pub mod sort;

pub mod prelude {
    pub use crate::comparator::{
        Comparator, ComparatorExt, comparing, natural_order, reverse_order,
    };
    pub use crate::pipeline::Pipeline;
    pub use crate::sequence::Sequence;
}
