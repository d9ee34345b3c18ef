use std::fmt::Write as _;

use smallvec::SmallVec;

use crate::core::{OptionTree, OptionValue};
use crate::error::{ChartError, ChartResult};

/// Serializes option trees into JavaScript object literals.
///
/// Output is compact JSON except for raw expressions, which are written
/// verbatim. Keys keep tree insertion order. Unset entries are skipped inside
/// objects and written as `null` inside arrays.
#[derive(Debug, Clone, Copy, Default)]
pub struct OptionRenderer;

impl OptionRenderer {
    pub fn render(tree: &OptionTree) -> ChartResult<String> {
        let mut writer = LiteralWriter::default();
        writer.write_tree(tree)?;
        Ok(writer.out)
    }

    pub fn render_value(value: &OptionValue) -> ChartResult<String> {
        let mut writer = LiteralWriter::default();
        writer.write_value(value)?;
        Ok(writer.out)
    }
}

#[derive(Debug, Clone, Copy)]
enum PathSegment<'a> {
    Key(&'a str),
    Index(usize),
}

#[derive(Default)]
struct LiteralWriter<'a> {
    out: String,
    path: SmallVec<[PathSegment<'a>; 8]>,
}

impl<'a> LiteralWriter<'a> {
    fn write_tree(&mut self, tree: &'a OptionTree) -> ChartResult<()> {
        self.out.push('{');
        let mut first = true;
        for (key, value) in tree {
            if value.is_unset() {
                continue;
            }
            if !first {
                self.out.push(',');
            }
            first = false;

            self.write_string(key);
            self.out.push(':');
            self.path.push(PathSegment::Key(key.as_str()));
            self.write_value(value)?;
            self.path.pop();
        }
        self.out.push('}');
        Ok(())
    }

    fn write_value(&mut self, value: &'a OptionValue) -> ChartResult<()> {
        match value {
            OptionValue::Unset | OptionValue::Null => self.out.push_str("null"),
            OptionValue::Bool(true) => self.out.push_str("true"),
            OptionValue::Bool(false) => self.out.push_str("false"),
            OptionValue::Number(number) => {
                let _ = write!(self.out, "{number}");
            }
            OptionValue::Float(number) => self.write_float(*number)?,
            OptionValue::String(text) => self.write_string(text),
            OptionValue::Array(values) => {
                self.out.push('[');
                for (index, item) in values.iter().enumerate() {
                    if index > 0 {
                        self.out.push(',');
                    }
                    self.path.push(PathSegment::Index(index));
                    self.write_value(item)?;
                    self.path.pop();
                }
                self.out.push(']');
            }
            OptionValue::Tree(tree) => self.write_tree(tree)?,
            OptionValue::Raw(expression) => self.out.push_str(expression.expression()),
        }
        Ok(())
    }

    fn write_float(&mut self, number: f64) -> ChartResult<()> {
        if !number.is_finite() {
            return Err(ChartError::serialization(
                self.path_string(),
                format!("{number} is not representable in JSON"),
            ));
        }
        let encoded = serde_json::to_string(&number)
            .map_err(|e| ChartError::serialization(self.path_string(), e.to_string()))?;
        self.out.push_str(&encoded);
        Ok(())
    }

    fn write_string(&mut self, text: &str) {
        // `</` would close an enclosing <script> element early.
        let encoded = serde_json::Value::from(text).to_string();
        self.out.push_str(&encoded.replace("</", "<\\/"));
    }

    fn path_string(&self) -> String {
        let mut rendered = String::new();
        for segment in &self.path {
            match segment {
                PathSegment::Key(key) if is_plain_key(key) => {
                    if !rendered.is_empty() {
                        rendered.push('.');
                    }
                    rendered.push_str(key);
                }
                PathSegment::Key(key) => {
                    let _ = write!(rendered, "[{}]", serde_json::Value::from(*key));
                }
                PathSegment::Index(index) => {
                    let _ = write!(rendered, "[{index}]");
                }
            }
        }
        rendered
    }
}

/// Keys that read unambiguously in a dotted path.
fn is_plain_key(key: &str) -> bool {
    !key.is_empty() && !key.contains(['.', '[', ']', '"'])
}
