pub mod assignment;
pub mod code_mapping;
pub mod submission;
pub mod user;

pub use assignment::Entity as Assignment;
pub use code_mapping::{CodeFile, CodeMapping, CodeMappingError};
pub use submission::Entity as Submission;
pub use user::Entity as User;
