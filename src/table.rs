use std::path::Path;

use calamine::{Data, Range, Reader, open_workbook_auto};
use tracing::debug;

use crate::cells::Value;
use crate::error::{ReportError, Result};

pub type Row = Vec<Value>;

/// Tabela carregada de uma aba: cabeçalho + linhas com o mesmo número de colunas.
#[derive(Debug, Clone, PartialEq)]
pub struct Table {
    pub columns: Vec<String>,
    pub rows: Vec<Row>,
}

impl Table {
    pub fn new(columns: Vec<String>, rows: Vec<Row>) -> Self {
        Table { columns, rows }
    }

    /// Abre o arquivo e lê a aba `sheet_name`, usando a primeira linha como cabeçalho.
    pub fn load(path: &Path, sheet_name: &str) -> Result<Table> {
        if !path.exists() {
            return Err(ReportError::FileNotFound {
                path: path.to_path_buf(),
            });
        }

        let mut workbook = open_workbook_auto(path).map_err(|source| ReportError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        if !workbook.sheet_names().iter().any(|name| name == sheet_name) {
            return Err(ReportError::SheetNotFound {
                sheet: sheet_name.to_string(),
            });
        }

        let range = workbook
            .worksheet_range(sheet_name)
            .map_err(|source| ReportError::Read {
                path: path.to_path_buf(),
                source,
            })?;

        Table::from_range(&range, sheet_name)
    }

    pub fn from_range(range: &Range<Data>, sheet_name: &str) -> Result<Table> {
        let mut rows = range.rows();
        let header = rows.next().ok_or_else(|| ReportError::EmptySheet {
            sheet: sheet_name.to_string(),
        })?;

        let columns: Vec<String> = header
            .iter()
            .enumerate()
            .map(|(col, cell)| {
                let name = Value::from(cell).to_string().trim().to_string();
                if name.is_empty() {
                    format!("Unnamed: {col}")
                } else {
                    name
                }
            })
            .collect();

        // linhas totalmente vazias no meio da aba são ignoradas
        let rows: Vec<Row> = rows
            .map(|row| row.iter().map(Value::from).collect::<Row>())
            .filter(|row| !row.iter().all(Value::is_empty))
            .collect();

        debug!(
            sheet = sheet_name,
            columns = columns.len(),
            rows = rows.len(),
            "aba carregada"
        );
        Ok(Table { columns, rows })
    }

    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|c| c == name)
    }

    pub fn require_column(&self, name: &str) -> Result<usize> {
        self.column_index(name)
            .ok_or_else(|| ReportError::MissingColumn {
                column: name.to_string(),
            })
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Número de linha na planilha (1-based, contando o cabeçalho) de um índice de dados.
    pub fn sheet_row(index: usize) -> usize {
        index + 2
    }
}
