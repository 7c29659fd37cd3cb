use super::CodecError;
use super::node::Node;

const INDENT_WIDTH: usize = 4;

/// Prints a lowered [`Node`] tree in either of the two neutral layouts.
///
/// The pretty layout is computed structurally from the node tree — never by
/// re-scanning printed text — so the compaction rules cannot be broken by
/// incidental whitespace:
///
/// 1. Arrays whose elements are all numeric (3-vectors, bond index pairs)
///    print on one line.
/// 2. Each element of the `atoms` and `bonds` arrays prints as a one-line
///    object, while the array itself stays multi-line with one element per
///    line. Empty arrays print as `[]`.
///
/// Floats are truncated to the configured decimal width in both layouts;
/// this is intentional lossy rounding for readability and diffability.
pub(crate) struct JsonPrinter {
    decimals: usize,
}

/// Keys whose array elements are forced onto one line each in pretty output.
const RECORD_ARRAY_KEYS: [&str; 2] = ["atoms", "bonds"];

impl JsonPrinter {
    pub(crate) fn new(decimals: usize) -> Self {
        Self { decimals }
    }

    /// Renders the machine-to-machine layout: sorted keys, tight separators,
    /// no insignificant whitespace.
    pub(crate) fn compact(&self, node: &Node) -> Result<String, CodecError> {
        let mut out = String::new();
        self.write_flat(node, false, &mut out)?;
        Ok(out)
    }

    /// Renders the indented human-readable layout with the compaction rules.
    pub(crate) fn pretty(&self, node: &Node) -> Result<String, CodecError> {
        let mut out = String::new();
        self.write_indented(node, 0, &mut out)?;
        Ok(out)
    }

    /// Writes a node on a single line. `spaced` selects the `", "`/`": "`
    /// separators used inside pretty output; compact output uses the tight
    /// forms.
    fn write_flat(&self, node: &Node, spaced: bool, out: &mut String) -> Result<(), CodecError> {
        let (comma, colon) = if spaced { (", ", ": ") } else { (",", ":") };
        match node {
            Node::Array(items) => {
                out.push('[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.push_str(comma);
                    }
                    self.write_flat(item, spaced, out)?;
                }
                out.push(']');
            }
            Node::Object(fields) => {
                out.push('{');
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        out.push_str(comma);
                    }
                    write_string(key, out);
                    out.push_str(colon);
                    self.write_flat(value, spaced, out)?;
                }
                out.push('}');
            }
            scalar => self.write_scalar(scalar, out)?,
        }
        Ok(())
    }

    /// Writes a node in the indented layout. `depth` is the indentation level
    /// of the node's closing delimiter.
    fn write_indented(&self, node: &Node, depth: usize, out: &mut String) -> Result<(), CodecError> {
        match node {
            Node::Object(fields) if !fields.is_empty() => {
                out.push_str("{\n");
                for (i, (key, value)) in fields.iter().enumerate() {
                    if i > 0 {
                        out.push_str(",\n");
                    }
                    push_indent(depth + 1, out);
                    write_string(key, out);
                    out.push_str(": ");
                    self.write_entry_value(key, value, depth + 1, out)?;
                }
                out.push('\n');
                push_indent(depth, out);
                out.push('}');
            }
            Node::Object(_) => out.push_str("{}"),
            Node::Array(items) if !items.is_empty() => {
                if items.iter().all(Node::is_numeric) {
                    self.write_flat(node, true, out)?;
                } else {
                    self.write_multiline_array(items, depth, false, out)?;
                }
            }
            Node::Array(_) => out.push_str("[]"),
            scalar => self.write_scalar(scalar, out)?,
        }
        Ok(())
    }

    /// Writes the value side of an object entry, applying the key-driven
    /// record-array rule for `atoms` and `bonds`.
    fn write_entry_value(
        &self,
        key: &str,
        value: &Node,
        depth: usize,
        out: &mut String,
    ) -> Result<(), CodecError> {
        match value {
            Node::Array(items) if !items.is_empty() => {
                if items.iter().all(Node::is_numeric) {
                    self.write_flat(value, true, out)
                } else {
                    let one_line_elements = RECORD_ARRAY_KEYS.contains(&key);
                    self.write_multiline_array(items, depth, one_line_elements, out)
                }
            }
            other => self.write_indented(other, depth, out),
        }
    }

    fn write_multiline_array(
        &self,
        items: &[Node],
        depth: usize,
        one_line_elements: bool,
        out: &mut String,
    ) -> Result<(), CodecError> {
        out.push_str("[\n");
        for (i, item) in items.iter().enumerate() {
            if i > 0 {
                out.push_str(",\n");
            }
            push_indent(depth + 1, out);
            if one_line_elements {
                self.write_flat(item, true, out)?;
            } else {
                self.write_indented(item, depth + 1, out)?;
            }
        }
        out.push('\n');
        push_indent(depth, out);
        out.push(']');
        Ok(())
    }

    fn write_scalar(&self, node: &Node, out: &mut String) -> Result<(), CodecError> {
        match node {
            Node::Int(value) => out.push_str(&value.to_string()),
            Node::Float(value) => {
                if !value.is_finite() {
                    return Err(CodecError::Encode(format!(
                        "float value {value} has no JSON representation"
                    )));
                }
                out.push_str(&format!("{value:.prec$}", prec = self.decimals));
            }
            Node::Str(value) => write_string(value, out),
            Node::Array(_) | Node::Object(_) => unreachable!("containers handled by callers"),
        }
        Ok(())
    }
}

fn push_indent(depth: usize, out: &mut String) {
    for _ in 0..depth * INDENT_WIDTH {
        out.push(' ');
    }
}

fn write_string(value: &str, out: &mut String) {
    out.push('"');
    for c in value.chars() {
        match c {
            '"' => out.push_str("\\\""),
            '\\' => out.push_str("\\\\"),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 => {
                out.push_str(&format!("\\u{:04x}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::models::atom::Atom;
    use crate::core::models::bond::Bond;
    use crate::core::models::molecule::Molecule;
    use nalgebra::Point3;

    fn carbon_monoxide_node() -> Node {
        Node::from_molecule(&Molecule::from_parts(
            vec![
                Atom::new("C", Point3::new(0.0, 0.0, 0.0)),
                Atom::new("O", Point3::new(1.2, 0.0, 0.0)),
            ],
            vec![Bond::new(0, 1, 2)],
        ))
    }

    #[test]
    fn compact_layout_has_no_insignificant_whitespace() {
        let printer = JsonPrinter::new(3);
        let text = printer.compact(&carbon_monoxide_node()).unwrap();
        assert_eq!(
            text,
            "{\"atoms\":[{\"element\":\"C\",\"location\":[0.000,0.000,0.000]},\
             {\"element\":\"O\",\"location\":[1.200,0.000,0.000]}],\
             \"bonds\":[{\"atoms\":[0,1],\"order\":2}]}"
        );
    }

    #[test]
    fn pretty_layout_puts_each_record_and_vector_on_one_line() {
        let printer = JsonPrinter::new(3);
        let text = printer.pretty(&carbon_monoxide_node()).unwrap();
        let expected = "\
{
    \"atoms\": [
        {\"element\": \"C\", \"location\": [0.000, 0.000, 0.000]},
        {\"element\": \"O\", \"location\": [1.200, 0.000, 0.000]}
    ],
    \"bonds\": [
        {\"atoms\": [0, 1], \"order\": 2}
    ]
}";
        assert_eq!(text, expected);
    }

    #[test]
    fn empty_record_arrays_stay_inline() {
        let printer = JsonPrinter::new(3);
        let text = printer
            .pretty(&Node::from_molecule(&Molecule::new()))
            .unwrap();
        assert_eq!(text, "{\n    \"atoms\": [],\n    \"bonds\": []\n}");
    }

    #[test]
    fn float_width_follows_the_configured_precision() {
        let node = Node::Float(1.23456789);
        assert_eq!(JsonPrinter::new(3).compact(&node).unwrap(), "1.235");
        assert_eq!(JsonPrinter::new(6).compact(&node).unwrap(), "1.234568");
    }

    #[test]
    fn non_finite_floats_are_a_hard_encode_error() {
        let printer = JsonPrinter::new(3);
        assert!(matches!(
            printer.compact(&Node::Float(f64::NAN)),
            Err(CodecError::Encode(_))
        ));
        assert!(matches!(
            printer.pretty(&Node::Float(f64::INFINITY)),
            Err(CodecError::Encode(_))
        ));
    }

    #[test]
    fn strings_are_escaped() {
        let printer = JsonPrinter::new(3);
        let node = Node::Str("a\"b\\c\nd".to_string());
        assert_eq!(printer.compact(&node).unwrap(), "\"a\\\"b\\\\c\\nd\"");
    }

    #[test]
    fn generic_non_record_arrays_keep_the_indented_layout() {
        let mut fields = std::collections::BTreeMap::new();
        fields.insert(
            "rows".to_string(),
            Node::Array(vec![Node::Str("x".to_string()), Node::Str("y".to_string())]),
        );
        let printer = JsonPrinter::new(3);
        let text = printer.pretty(&Node::Object(fields)).unwrap();
        assert_eq!(
            text,
            "{\n    \"rows\": [\n        \"x\",\n        \"y\"\n    ]\n}"
        );
    }
}
