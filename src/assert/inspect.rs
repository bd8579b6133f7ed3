// Serializer turning any `Serialize` value into an inspectable `serde_json::Value`
//
// Values JSON has no literal for are kept apart from `null` and from each other
// as single-entry objects under a reserved `$` key. Object keys that already
// start with `$` gain one more, so user data never reads as a tag.

use serde::Serialize;
use serde::ser::{self, Error as _};
use serde_json::{Map, Number, Value};

/// `NaN`, `inf` or `-inf`
pub const FLOAT_TAG: &str = "$float";
/// Decimal digits of an integer outside the 64-bit range
pub const INT_TAG: &str = "$int";
pub const SOME_TAG: &str = "$some";
/// Name of a unit struct
pub const UNIT_TAG: &str = "$unit";

type Error = serde_json::Error;

pub fn to_value<T: Serialize + ?Sized>(value: &T) -> Result<Value, Error> {
    value.serialize(Inspector)
}

/// A value stored under one of the reserved tags
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Special<'a> {
    Float(&'a str),
    Int(&'a str),
    Some(&'a Value),
    Unit(&'a str),
}

pub fn special(value: &Value) -> Option<Special<'_>> {
    let Value::Object(map) = value else {
        return None;
    };
    if map.len() != 1 {
        return None;
    }

    let (key, inner) = map.iter().next()?;
    match (key.as_str(), inner) {
        (FLOAT_TAG, Value::String(text)) => Some(Special::Float(text)),
        (INT_TAG, Value::String(digits)) => Some(Special::Int(digits)),
        (SOME_TAG, inner) => Some(Special::Some(inner)),
        (UNIT_TAG, Value::String(name)) => Some(Special::Unit(name)),
        _ => None,
    }
}

fn tagged(tag: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(tag.to_string(), value);
    Value::Object(map)
}

pub fn escape_key(key: String) -> String {
    if key.starts_with('$') {
        format!("${}", key)
    } else {
        key
    }
}

pub fn unescape_key(key: &str) -> &str {
    key.strip_prefix('$')
        .filter(|rest| rest.starts_with('$'))
        .unwrap_or(key)
}

/// Object key under which `value` is stored when it is used as a map key
pub fn key_text(value: &Value) -> String {
    match value {
        Value::String(s) => escape_key(s.clone()),
        other => escape_key(render(other)),
    }
}

/// Compact display form: JSON, with tagged values written the way Rust
/// prints them (`NaN`, `Some(1)`, `Marker`)
pub fn render(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, None);
    out
}

/// Like [`render`], indented two spaces per level
pub fn render_pretty(value: &Value) -> String {
    let mut out = String::new();
    write_value(&mut out, value, Some(0));
    out
}

fn write_value(out: &mut String, value: &Value, depth: Option<usize>) {
    if let Some(special) = special(value) {
        match special {
            Special::Float(text) | Special::Int(text) | Special::Unit(text) => out.push_str(text),
            Special::Some(inner) => {
                out.push_str("Some(");
                write_value(out, inner, depth);
                out.push(')');
            }
        }
        return;
    }

    match value {
        Value::Array(items) => {
            write_entries(out, ('[', ']'), items.iter().map(|item| (None, item)), depth)
        }
        Value::Object(map) => write_entries(
            out,
            ('{', '}'),
            map.iter().map(|(key, item)| (Some(unescape_key(key)), item)),
            depth,
        ),
        scalar => out.push_str(&scalar.to_string()),
    }
}

fn write_entries<'a>(
    out: &mut String,
    (open, close): (char, char),
    entries: impl ExactSizeIterator<Item = (Option<&'a str>, &'a Value)>,
    depth: Option<usize>,
) {
    out.push(open);
    if entries.len() == 0 {
        out.push(close);
        return;
    }

    let inner = depth.map(|d| d + 1);
    for (i, (key, item)) in entries.enumerate() {
        if i > 0 {
            out.push(',');
        }
        if let Some(level) = inner {
            out.push('\n');
            out.push_str(&"  ".repeat(level));
        }
        if let Some(key) = key {
            out.push_str(&Value::String(key.to_string()).to_string());
            out.push(':');
            if inner.is_some() {
                out.push(' ');
            }
        }
        write_value(out, item, inner);
    }

    if let Some(level) = depth {
        out.push('\n');
        out.push_str(&"  ".repeat(level));
    }
    out.push(close);
}

struct Inspector;

impl ser::Serializer for Inspector {
    type Ok = Value;
    type Error = Error;

    type SerializeSeq = SeqInspector;
    type SerializeTuple = SeqInspector;
    type SerializeTupleStruct = SeqInspector;
    type SerializeTupleVariant = VariantInspector<SeqInspector>;
    type SerializeMap = MapInspector;
    type SerializeStruct = MapInspector;
    type SerializeStructVariant = VariantInspector<MapInspector>;

    fn serialize_bool(self, v: bool) -> Result<Value, Error> {
        Ok(Value::Bool(v))
    }

    fn serialize_i8(self, v: i8) -> Result<Value, Error> {
        Ok(Value::from(v))
    }

    fn serialize_i16(self, v: i16) -> Result<Value, Error> {
        Ok(Value::from(v))
    }

    fn serialize_i32(self, v: i32) -> Result<Value, Error> {
        Ok(Value::from(v))
    }

    fn serialize_i64(self, v: i64) -> Result<Value, Error> {
        Ok(Value::from(v))
    }

    fn serialize_i128(self, v: i128) -> Result<Value, Error> {
        if let Ok(n) = i64::try_from(v) {
            Ok(Value::from(n))
        } else if let Ok(n) = u64::try_from(v) {
            Ok(Value::from(n))
        } else {
            Ok(tagged(INT_TAG, Value::String(v.to_string())))
        }
    }

    fn serialize_u8(self, v: u8) -> Result<Value, Error> {
        Ok(Value::from(v))
    }

    fn serialize_u16(self, v: u16) -> Result<Value, Error> {
        Ok(Value::from(v))
    }

    fn serialize_u32(self, v: u32) -> Result<Value, Error> {
        Ok(Value::from(v))
    }

    fn serialize_u64(self, v: u64) -> Result<Value, Error> {
        Ok(Value::from(v))
    }

    fn serialize_u128(self, v: u128) -> Result<Value, Error> {
        match u64::try_from(v) {
            Ok(n) => Ok(Value::from(n)),
            Err(_) => Ok(tagged(INT_TAG, Value::String(v.to_string()))),
        }
    }

    fn serialize_f32(self, v: f32) -> Result<Value, Error> {
        self.serialize_f64(f64::from(v))
    }

    fn serialize_f64(self, v: f64) -> Result<Value, Error> {
        match Number::from_f64(v) {
            Some(n) => Ok(Value::Number(n)),
            None => Ok(tagged(FLOAT_TAG, Value::String(v.to_string()))),
        }
    }

    fn serialize_char(self, v: char) -> Result<Value, Error> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_str(self, v: &str) -> Result<Value, Error> {
        Ok(Value::String(v.to_string()))
    }

    fn serialize_bytes(self, v: &[u8]) -> Result<Value, Error> {
        Ok(Value::Array(v.iter().map(|b| Value::from(*b)).collect()))
    }

    fn serialize_none(self) -> Result<Value, Error> {
        Ok(Value::Null)
    }

    fn serialize_some<T: ?Sized + Serialize>(self, value: &T) -> Result<Value, Error> {
        Ok(tagged(SOME_TAG, value.serialize(Inspector)?))
    }

    fn serialize_unit(self) -> Result<Value, Error> {
        Ok(Value::Null)
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<Value, Error> {
        Ok(tagged(UNIT_TAG, Value::String(name.to_string())))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
    ) -> Result<Value, Error> {
        Ok(Value::String(variant.to_string()))
    }

    fn serialize_newtype_struct<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        value: &T,
    ) -> Result<Value, Error> {
        value.serialize(self)
    }

    fn serialize_newtype_variant<T: ?Sized + Serialize>(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        value: &T,
    ) -> Result<Value, Error> {
        Ok(variant_object(variant, value.serialize(Inspector)?))
    }

    fn serialize_seq(self, len: Option<usize>) -> Result<SeqInspector, Error> {
        Ok(SeqInspector {
            items: Vec::with_capacity(len.unwrap_or(0)),
        })
    }

    fn serialize_tuple(self, len: usize) -> Result<SeqInspector, Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_struct(
        self,
        _name: &'static str,
        len: usize,
    ) -> Result<SeqInspector, Error> {
        self.serialize_seq(Some(len))
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        len: usize,
    ) -> Result<VariantInspector<SeqInspector>, Error> {
        Ok(VariantInspector {
            variant,
            inner: self.serialize_seq(Some(len))?,
        })
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<MapInspector, Error> {
        Ok(MapInspector::default())
    }

    fn serialize_struct(self, _name: &'static str, _len: usize) -> Result<MapInspector, Error> {
        Ok(MapInspector::default())
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        variant: &'static str,
        _len: usize,
    ) -> Result<VariantInspector<MapInspector>, Error> {
        Ok(VariantInspector {
            variant,
            inner: MapInspector::default(),
        })
    }
}

fn variant_object(variant: &str, value: Value) -> Value {
    let mut map = Map::new();
    map.insert(escape_key(variant.to_string()), value);
    Value::Object(map)
}

struct SeqInspector {
    items: Vec<Value>,
}

impl ser::SerializeSeq for SeqInspector {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        self.items.push(value.serialize(Inspector)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        Ok(Value::Array(self.items))
    }
}

impl ser::SerializeTuple for SeqInspector {
    type Ok = Value;
    type Error = Error;

    fn serialize_element<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, Error> {
        ser::SerializeSeq::end(self)
    }
}

impl ser::SerializeTupleStruct for SeqInspector {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        ser::SerializeSeq::serialize_element(self, value)
    }

    fn end(self) -> Result<Value, Error> {
        ser::SerializeSeq::end(self)
    }
}

#[derive(Default)]
struct MapInspector {
    map: Map<String, Value>,
    next_key: Option<String>,
}

impl ser::SerializeMap for MapInspector {
    type Ok = Value;
    type Error = Error;

    fn serialize_key<T: ?Sized + Serialize>(&mut self, key: &T) -> Result<(), Error> {
        self.next_key = Some(key_text(&key.serialize(Inspector)?));
        Ok(())
    }

    fn serialize_value<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        let key = self
            .next_key
            .take()
            .ok_or_else(|| Error::custom("map value serialized before its key"))?;
        self.map.insert(key, value.serialize(Inspector)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        Ok(Value::Object(self.map))
    }
}

impl ser::SerializeStruct for MapInspector {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Error> {
        self.map
            .insert(escape_key(key.to_string()), value.serialize(Inspector)?);
        Ok(())
    }

    fn end(self) -> Result<Value, Error> {
        Ok(Value::Object(self.map))
    }
}

struct VariantInspector<S> {
    variant: &'static str,
    inner: S,
}

impl ser::SerializeTupleVariant for VariantInspector<SeqInspector> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(&mut self, value: &T) -> Result<(), Error> {
        ser::SerializeSeq::serialize_element(&mut self.inner, value)
    }

    fn end(self) -> Result<Value, Error> {
        Ok(variant_object(self.variant, Value::Array(self.inner.items)))
    }
}

impl ser::SerializeStructVariant for VariantInspector<MapInspector> {
    type Ok = Value;
    type Error = Error;

    fn serialize_field<T: ?Sized + Serialize>(
        &mut self,
        key: &'static str,
        value: &T,
    ) -> Result<(), Error> {
        ser::SerializeStruct::serialize_field(&mut self.inner, key, value)
    }

    fn end(self) -> Result<Value, Error> {
        Ok(variant_object(self.variant, Value::Object(self.inner.map)))
    }
}
