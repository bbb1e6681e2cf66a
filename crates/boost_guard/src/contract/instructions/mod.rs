pub mod claim;
pub mod create;
pub mod deposit;
pub mod withdraw;

pub use claim::*;
pub use create::*;
pub use deposit::*;
pub use withdraw::*;
