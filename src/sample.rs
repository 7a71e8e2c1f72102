use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::{error, info};

use crate::cells::cell_ref;
use crate::config::ReportConfig;
use crate::error::ReportError;

pub const DEFAULT_SAMPLE_PATH: &str = "dados_vendas.xlsx";

const SAMPLE_HEADERS: [&str; 4] = ["Item", "Região", "Vendas", "Custo"];

const SAMPLE_ROWS: [(&str, &str, f64, f64); 5] = [
    ("A", "Norte", 150.50, 50.00),
    ("B", "Sul", 230.75, 100.50),
    ("C", "Leste", 95.00, 40.00),
    ("D", "Oeste", 450.20, 200.00),
    ("E", "Norte", 180.00, 75.00),
];

/// Grava a planilha de exemplo em `path`, sobrescrevendo o que existir.
pub fn write_sample(path: &Path) -> Result<(), ReportError> {
    write_sample_with(path, &ReportConfig::default())
}

pub fn write_sample_with(path: &Path, config: &ReportConfig) -> Result<(), ReportError> {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();
    sheet.set_name(config.input_sheet.as_str());

    for (i, header) in SAMPLE_HEADERS.iter().enumerate() {
        let addr = cell_ref(i + 1, 1);
        sheet.get_cell_mut(addr.as_str()).set_value(*header);
    }

    for (row_idx, (item, region, sales, cost)) in SAMPLE_ROWS.iter().enumerate() {
        let row = row_idx + 2;
        sheet
            .get_cell_mut(cell_ref(1, row).as_str())
            .set_value(*item);
        sheet
            .get_cell_mut(cell_ref(2, row).as_str())
            .set_value(*region);
        sheet
            .get_cell_mut(cell_ref(3, row).as_str())
            .set_value_number(*sales);
        sheet
            .get_cell_mut(cell_ref(4, row).as_str())
            .set_value_number(*cost);
    }

    umya_spreadsheet::writer::xlsx::write(&book, path).map_err(|source| ReportError::Write {
        path: path.to_path_buf(),
        source,
    })
}

/// Como [`write_sample`], mas só registra a falha no log.
pub fn generate_sample(path: &Path) {
    match write_sample(path) {
        Ok(()) => info!("Arquivo de exemplo criado em: {}", path.display()),
        Err(err) => error!("Ocorreu um erro ao criar o arquivo de exemplo: {err}"),
    }
}

pub fn run(args: impl IntoIterator<Item = std::ffi::OsString>) -> Result<()> {
    let mut args = args.into_iter();
    let _exe = args.next();

    let output = args
        .next()
        .map(PathBuf::from)
        .unwrap_or_else(|| PathBuf::from(DEFAULT_SAMPLE_PATH));

    write_sample(&output)?;
    println!("Arquivo de exemplo criado em: {}", output.display());
    Ok(())
}
