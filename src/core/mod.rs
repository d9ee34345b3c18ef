pub mod expression;
pub mod tree;
pub mod value;

pub use expression::RawExpression;
pub use tree::OptionTree;
pub use value::OptionValue;
