pub mod options;
pub use options::{EmptySumPolicy, MulOptions};
