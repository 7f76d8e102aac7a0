pub mod program;
pub mod report;
pub mod profile;
pub mod hacktivity;
pub mod company;

pub use program::*;
pub use report::*;
pub use profile::*;
pub use hacktivity::*;
pub use company::*;
