use rusqlite::ToSql;
use rusqlite::types::{ToSqlOutput, Value as SqlValue};
use serde_json::Value;

/// Binds a request field exactly as the client sent it.
///
/// Absent and `null` become NULL, strings become TEXT, integers INTEGER,
/// other numbers REAL, booleans 0/1. Objects and arrays are bound as their
/// JSON text; column affinity and constraints take it from there.
#[derive(Debug, Clone, Copy)]
pub struct JsonParam<'a>(pub Option<&'a Value>);

impl ToSql for JsonParam<'_> {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        let value = match self.0 {
            None | Some(Value::Null) => SqlValue::Null,
            Some(Value::String(s)) => return Ok(ToSqlOutput::from(s.as_str())),
            Some(Value::Bool(b)) => SqlValue::Integer(i64::from(*b)),
            Some(Value::Number(n)) => match n.as_i64() {
                Some(i) => SqlValue::Integer(i),
                None => SqlValue::Real(n.as_f64().unwrap_or(f64::NAN)),
            },
            Some(other @ (Value::Array(_) | Value::Object(_))) => SqlValue::Text(other.to_string()),
        };
        Ok(ToSqlOutput::Owned(value))
    }
}
