pub mod message;
pub mod notifier;
pub mod options;
pub mod payload;
pub mod severity;

mod client;

pub use message::Message;
pub use notifier::Notifier;
pub use options::Options;
pub use severity::Severity;
