pub mod boost_state;
pub mod claim_state;

pub use boost_state::*;
pub use claim_state::*;
