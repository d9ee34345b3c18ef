mod js_literal;
mod page;

pub use js_literal::OptionRenderer;
pub use page::{HostPage, RecordingPage};
