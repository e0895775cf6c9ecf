//! XML serialization of record payloads.
//!
//! The XML-based products (CRM, Creator, Support) expect records in a
//! `<root><row no="1"><FL val="Field">value</FL></row></root>` structure,
//! embedded as a request parameter. The exact tag case, CDATA wrapping and
//! sub-record support differ per product and are captured by [`XmlFormat`].
//!
//! Values and attribute names are written verbatim: no XML escaping is
//! applied. A field name containing `"` or a Support value containing `<`
//! produces a malformed document. The remote parsers accept this input as-is,
//! so the behavior is kept and covered by tests.

use std::fmt::Write as _;

use serde_json::Value;

use crate::clients::record::{Record, RecordPayload};

/// Product-specific XML conventions.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct XmlFormat {
    /// Tag used for each field (`FL` or `fl`).
    pub field_tag: &'static str,
    /// Whether scalar values are wrapped in `<![CDATA[...]]>`.
    pub cdata: bool,
    /// Tag for sub-records when a field holds an array of objects.
    ///
    /// `None` renders such fields as plain scalars.
    pub sub_record_tag: Option<&'static str>,
}

impl XmlFormat {
    /// CRM: `<FL>` with CDATA, `<product>` sub-records for line items.
    pub const CRM: Self = Self {
        field_tag: "FL",
        cdata: true,
        sub_record_tag: Some("product"),
    };

    /// Creator: `<FL>` with CDATA, no sub-records.
    pub const CREATOR: Self = Self {
        field_tag: "FL",
        cdata: true,
        sub_record_tag: None,
    };

    /// Support: lowercase `<fl>`, raw values.
    pub const SUPPORT: Self = Self {
        field_tag: "fl",
        cdata: false,
        sub_record_tag: None,
    };
}

/// Serializes a payload under `root_tag` using the given format.
///
/// Rows are numbered from 1 in payload order.
///
/// # Example
///
/// ```rust
/// use zoho_api::clients::{serialize, RecordPayload, XmlFormat};
/// use serde_json::json;
///
/// let payload = RecordPayload::from_value(json!({"Company": "Acme"})).unwrap();
/// assert_eq!(
///     serialize("Leads", &payload, XmlFormat::CRM),
///     r#"<Leads><row no="1"><FL val="Company"><![CDATA[Acme]]></FL></row></Leads>"#
/// );
/// ```
#[must_use]
pub fn serialize(root_tag: &str, payload: &RecordPayload, format: XmlFormat) -> String {
    let mut xml = format!("<{root_tag}>");
    write_rows(&mut xml, "row", payload.records(), format, true);
    let _ = write!(xml, "</{root_tag}>");
    xml
}

fn write_rows(xml: &mut String, row_tag: &str, records: &[Record], format: XmlFormat, nested: bool) {
    for (index, record) in records.iter().enumerate() {
        let _ = write!(xml, r#"<{row_tag} no="{}">"#, index + 1);
        for (name, value) in record {
            let tag = format.field_tag;
            match (nested, format.sub_record_tag, sub_records(value)) {
                (true, Some(sub_tag), Some(items)) => {
                    let _ = write!(xml, r#"<{tag} val="{name}">"#);
                    write_rows(xml, sub_tag, &items, format, false);
                    let _ = write!(xml, "</{tag}>");
                }
                _ if format.cdata => {
                    let _ = write!(xml, r#"<{tag} val="{name}"><![CDATA[{}]]></{tag}>"#, scalar_text(value));
                }
                _ => {
                    let _ = write!(xml, r#"<{tag} val="{name}">{}</{tag}>"#, scalar_text(value));
                }
            }
        }
        let _ = write!(xml, "</{row_tag}>");
    }
}

/// Returns the entries of an array whose items are all objects.
fn sub_records(value: &Value) -> Option<Vec<Record>> {
    let Value::Array(items) = value else {
        return None;
    };
    items
        .iter()
        .map(|item| item.as_object().cloned())
        .collect()
}

/// Renders a field value as element text.
pub(crate) fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        Value::Null => String::new(),
        Value::Number(n) => n.to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Array(_) | Value::Object(_) => value.to_string(),
    }
}
