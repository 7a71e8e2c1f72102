use std::path::PathBuf;

use thiserror::Error;

/// Falhas possíveis ao ler, transformar ou gravar uma planilha de relatório.
#[derive(Error, Debug)]
pub enum ReportError {
    /// O arquivo de entrada não existe.
    #[error("Arquivo não encontrado no caminho: {}", path.display())]
    FileNotFound { path: PathBuf },

    /// O arquivo existe mas não pôde ser lido como planilha.
    #[error("Não foi possível ler a planilha {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: calamine::Error,
    },

    #[error("Aba '{sheet}' não encontrada")]
    SheetNotFound { sheet: String },

    /// A aba existe mas não tem nem a linha de cabeçalho.
    #[error("Aba '{sheet}' vazia ou sem cabeçalho")]
    EmptySheet { sheet: String },

    #[error("Coluna '{column}' não encontrada")]
    MissingColumn { column: String },

    /// Valor não numérico numa coluna usada em cálculo.
    #[error("Valor inválido na linha {row}, coluna '{column}': {value}")]
    InvalidCell {
        row: usize,
        column: String,
        value: String,
    },

    #[error("Não foi possível salvar o arquivo {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: umya_spreadsheet::XlsxError,
    },
}

pub type Result<T> = std::result::Result<T, ReportError>;
