pub mod round;
pub mod score;
pub mod stats;
pub mod tee;
pub mod timestamp;

pub use round::*;
pub use score::*;
pub use stats::*;
pub use tee::*;
pub use timestamp::*;
