mod peek_limit;
mod start_from;

pub use peek_limit::*;
pub use start_from::*;
