use std::fmt;

use calamine::Data;

/// Valor de uma célula depois de carregado da planilha.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Empty,
    Text(String),
    Number(f64),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn is_empty(&self) -> bool {
        matches!(self, Value::Empty)
    }
}

impl From<&Data> for Value {
    fn from(cell: &Data) -> Self {
        match cell {
            Data::Empty => Value::Empty,
            Data::String(s) if s.is_empty() => Value::Empty,
            Data::String(s) => Value::Text(s.clone()),
            Data::Float(n) => Value::Number(*n),
            Data::Int(n) => Value::Number(*n as f64),
            // datas viram o número serial do Excel
            Data::DateTime(dt) => Value::Number(dt.as_f64()),
            Data::Bool(b) => Value::Text(b.to_string()),
            Data::Error(e) => Value::Text(format!("{e:?}")),
            Data::DateTimeIso(s) | Data::DurationIso(s) => Value::Text(s.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Empty => Ok(()),
            Value::Text(s) => f.write_str(s),
            Value::Number(n) if n.fract() == 0.0 => write!(f, "{n:.0}"),
            Value::Number(n) => write!(f, "{n}"),
        }
    }
}

fn column_number_to_name(mut column: usize) -> String {
    // 1 -> A, 26 -> Z, 27 -> AA ...
    let mut name = String::new();
    while column > 0 {
        let rem = ((column - 1) % 26) as u8;
        name.insert(0, (b'A' + rem) as char);
        column = (column - 1) / 26;
    }
    name
}

/// Endereço A1 a partir de coluna e linha 1-based.
pub fn cell_ref(col_1_based: usize, row_1_based: usize) -> String {
    format!("{}{}", column_number_to_name(col_1_based), row_1_based)
}
