mod intern;
mod split;

pub use intern::Interner;
pub use split::int_size;
pub use split::split_bins;
pub use split::SplitTable;
