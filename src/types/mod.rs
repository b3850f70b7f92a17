//! Response bodies shared by handlers and error conversion.

mod response;

pub use response::{MessageResponse, UserList};
