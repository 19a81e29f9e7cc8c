pub mod authority;
pub mod gate;
pub mod keywords;

pub use crate::domain::model::{Group, KeywordEntry};
pub use crate::domain::ports::{ConfigProvider, GroupRepository, TokenGenerator, TokenStore};
pub use crate::utils::error::Result;
