use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use anyhow::Result;
use regex::{NoExpand, Regex};
use tracing::{error, info};
use umya_spreadsheet::Spreadsheet;
use umya_spreadsheet::structs::HorizontalAlignmentValues;

use crate::cells::{Value, cell_ref};
use crate::config::ReportConfig;
use crate::error::ReportError;
use crate::table::{Row, Table};

static XLSX_SUFFIX: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\.xlsx$").expect("valid regex"));

/// `vendas.xlsx` -> `vendas_relatorio_final.xlsx`, na mesma pasta.
/// Sem a extensão `.xlsx` o sufixo é anexado ao nome inteiro.
pub fn output_path_for(input: &Path, config: &ReportConfig) -> PathBuf {
    let file_name = input
        .file_name()
        .map(|s| s.to_string_lossy().to_string())
        .unwrap_or_else(|| "relatorio.xlsx".to_string());

    let new_name = if XLSX_SUFFIX.is_match(&file_name) {
        XLSX_SUFFIX.replace(&file_name, NoExpand(config.output_suffix.as_str()))
            .to_string()
    } else {
        format!("{file_name}{}", config.output_suffix)
    };
    input.with_file_name(new_name)
}

/// Calcula a coluna de margem (vendas - custo) quando as duas colunas existem.
/// Uma coluna de margem já presente na entrada é sobrescrita; sem vendas ou custo
/// a tabela volta intacta.
pub fn add_profit_margin(table: &mut Table, config: &ReportConfig) -> Result<(), ReportError> {
    let (Some(sales_col), Some(cost_col)) = (
        table.column_index(&config.sales_column),
        table.column_index(&config.cost_column),
    ) else {
        info!(
            "Colunas '{}'/'{}' ausentes, margem não calculada",
            config.sales_column, config.cost_column
        );
        return Ok(());
    };

    let mut margins = Vec::with_capacity(table.len());
    for (idx, row) in table.rows.iter().enumerate() {
        let sales = numeric_cell(row, sales_col, idx, &config.sales_column)?;
        let cost = numeric_cell(row, cost_col, idx, &config.cost_column)?;
        margins.push(match (sales, cost) {
            (Some(s), Some(c)) => Value::Number(s - c),
            _ => Value::Empty,
        });
    }

    match table.column_index(&config.profit_column) {
        Some(profit_col) => {
            for (row, margin) in table.rows.iter_mut().zip(margins) {
                if row.len() <= profit_col {
                    row.resize(profit_col + 1, Value::Empty);
                }
                row[profit_col] = margin;
            }
        }
        None => {
            table.columns.push(config.profit_column.clone());
            for (row, margin) in table.rows.iter_mut().zip(margins) {
                row.push(margin);
            }
        }
    }
    Ok(())
}

fn numeric_cell(
    row: &Row,
    col: usize,
    idx: usize,
    column: &str,
) -> Result<Option<f64>, ReportError> {
    match row.get(col) {
        None | Some(Value::Empty) => Ok(None),
        Some(Value::Number(n)) => Ok(Some(*n)),
        Some(Value::Text(s)) => Err(ReportError::InvalidCell {
            row: Table::sheet_row(idx),
            column: column.to_string(),
            value: s.clone(),
        }),
    }
}

/// Mantém só as linhas com margem positiva, na ordem original.
pub fn filter_profitable(table: &Table, config: &ReportConfig) -> Result<Table, ReportError> {
    let profit_col = table.require_column(&config.profit_column)?;
    let rows = table
        .rows
        .iter()
        .filter(|row| {
            row.get(profit_col)
                .and_then(Value::as_number)
                .is_some_and(|margin| margin > 0.0)
        })
        .cloned()
        .collect();
    Ok(Table::new(table.columns.clone(), rows))
}

/// Soma das vendas, ignorando células vazias.
pub fn total_sales(table: &Table, config: &ReportConfig) -> Result<f64, ReportError> {
    let sales_col = table.require_column(&config.sales_column)?;
    let mut total = 0.0;
    for (idx, row) in table.rows.iter().enumerate() {
        if let Some(n) = numeric_cell(row, sales_col, idx, &config.sales_column)? {
            total += n;
        }
    }
    Ok(total)
}

/// Linha "Total": vendas somadas, custo e margem zerados, demais colunas vazias.
/// O rótulo vai na primeira coluna que não é monetária.
pub fn summary_row(table: &Table, total: f64, config: &ReportConfig) -> Row {
    let money = config.currency_columns();
    let label_col = table
        .columns
        .iter()
        .position(|name| !money.contains(&name.as_str()));

    table
        .columns
        .iter()
        .enumerate()
        .map(|(idx, name)| {
            if *name == config.sales_column {
                Value::Number(total)
            } else if *name == config.cost_column || *name == config.profit_column {
                Value::Number(0.0)
            } else if Some(idx) == label_col {
                Value::text(config.summary_label.as_str())
            } else {
                Value::Empty
            }
        })
        .collect()
}

/// Margem, filtro e linha de resumo sobre a tabela carregada.
pub fn build_report_table(mut table: Table, config: &ReportConfig) -> Result<Table, ReportError> {
    add_profit_margin(&mut table, config)?;
    let mut report = filter_profitable(&table, config)?;
    // o total usa a tabela antes do filtro
    let total = total_sales(&table, config)?;
    report.rows.push(summary_row(&table, total, config));
    info!(
        entrada = table.len(),
        mantidas = report.len() - 1,
        total_vendas = total,
        "tabela do relatório montada"
    );
    Ok(report)
}

/// Monta a pasta de trabalho final: cabeçalho em negrito e centralizado,
/// formato de moeda nas colunas monetárias encontradas pelo nome.
pub fn render_report(table: &Table, config: &ReportConfig) -> Spreadsheet {
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();
    sheet.set_name(config.output_sheet.as_str());

    let mut header_style = umya_spreadsheet::Style::default();
    header_style.get_font_mut().set_bold(true);
    header_style
        .get_alignment_mut()
        .set_horizontal(HorizontalAlignmentValues::Center);

    let mut currency_style = umya_spreadsheet::Style::default();
    currency_style
        .get_number_format_mut()
        .set_format_code(config.currency_format.as_str());

    for (i, header) in table.columns.iter().enumerate() {
        let addr = cell_ref(i + 1, 1);
        sheet.get_cell_mut(addr.as_str()).set_value(header.as_str());
        sheet
            .get_cell_mut(addr.as_str())
            .set_style(header_style.clone());
    }

    let currency_cols: Vec<usize> = config
        .currency_columns()
        .iter()
        .filter_map(|name| table.column_index(name))
        .collect();

    for (row_idx, row) in table.rows.iter().enumerate() {
        let row_num = Table::sheet_row(row_idx);
        for (col_idx, value) in row.iter().enumerate() {
            let addr = cell_ref(col_idx + 1, row_num);
            match value {
                Value::Empty => {}
                Value::Text(s) => {
                    sheet.get_cell_mut(addr.as_str()).set_value(s.as_str());
                }
                Value::Number(n) => {
                    sheet.get_cell_mut(addr.as_str()).set_value_number(*n);
                }
            }
            if currency_cols.contains(&col_idx) {
                sheet
                    .get_cell_mut(addr.as_str())
                    .set_style(currency_style.clone());
            }
        }
    }

    book
}

/// Lê, transforma e grava o relatório. Devolve o caminho do arquivo gerado.
pub fn update_report(path: &Path) -> Result<PathBuf, ReportError> {
    update_report_with(path, &ReportConfig::default())
}

pub fn update_report_with(path: &Path, config: &ReportConfig) -> Result<PathBuf, ReportError> {
    let table = Table::load(path, &config.input_sheet)?;
    let report = build_report_table(table, config)?;
    let book = render_report(&report, config);

    let output_path = output_path_for(path, config);
    umya_spreadsheet::writer::xlsx::write(&book, &output_path).map_err(|source| {
        ReportError::Write {
            path: output_path.clone(),
            source,
        }
    })?;
    Ok(output_path)
}

/// Versão que nunca falha: qualquer erro vira mensagem no log.
pub fn update_spreadsheet(path: &Path) {
    info!("Iniciando a atualização da planilha: {}", path.display());
    match update_report(path) {
        Ok(output) => info!("Relatório gerado com sucesso: {}", output.display()),
        Err(ReportError::FileNotFound { path }) => {
            error!("Erro: Arquivo não encontrado no caminho: {}", path.display())
        }
        Err(err) => error!("Ocorreu um erro durante a atualização: {err}"),
    }
}

pub fn run(args: impl IntoIterator<Item = std::ffi::OsString>) -> Result<()> {
    let mut args = args.into_iter();
    let _exe = args.next();

    let Some(input) = args.next() else {
        println!("Informe o arquivo como argumento, por exemplo: relatorio dados_vendas.xlsx");
        return Ok(());
    };

    let input_path = PathBuf::from(input);
    info!("Iniciando a atualização da planilha: {}", input_path.display());
    let out = update_report(&input_path)?;
    println!("Relatório gerado com sucesso: {}", out.display());
    Ok(())
}
