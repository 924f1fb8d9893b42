mod command;
mod error;
mod mailer;
mod notification;
mod submission;
mod value_object;

pub use command::*;
pub use error::*;
pub use mailer::*;
pub use notification::*;
pub use submission::*;
pub use value_object::*;
