use calamine::{Data, Reader, open_workbook_auto};
use relatorios::{ReportError, update_report, update_spreadsheet, write_sample};
use umya_spreadsheet::structs::HorizontalAlignmentValues;

#[test]
fn sample_to_report_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("dados_vendas.xlsx");
    write_sample(&input).unwrap();

    let output = update_report(&input).unwrap();
    assert_eq!(output, dir.path().join("dados_vendas_relatorio_final.xlsx"));
    assert!(output.exists());

    let mut workbook = open_workbook_auto(&output).unwrap();
    let range = workbook.worksheet_range("Relatório Semanal").unwrap();
    let rows: Vec<&[Data]> = range.rows().collect();

    // cabeçalho + 5 linhas + total
    assert_eq!(rows.len(), 7);
    assert_eq!(
        rows[0],
        &[
            Data::String("Item".into()),
            Data::String("Região".into()),
            Data::String("Vendas".into()),
            Data::String("Custo".into()),
            Data::String("Margem de Lucro".into()),
        ]
    );
    assert_eq!(rows[4][0], Data::String("D".into()));

    let total = &rows[6];
    assert_eq!(total[0], Data::String("Total".into()));
    match total[2] {
        Data::Float(v) => assert!((v - 1106.45).abs() < 1e-9),
        ref other => panic!("unexpected total: {other:?}"),
    }
    assert_eq!(total[3], Data::Float(0.0));
    assert_eq!(total[4], Data::Float(0.0));
}

#[test]
fn report_cells_carry_currency_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("vendas.xlsx");
    write_sample(&input).unwrap();
    let output = update_report(&input).unwrap();

    let book = umya_spreadsheet::reader::xlsx::read(&output).unwrap();
    let sheet = book.get_sheet_by_name("Relatório Semanal").unwrap();
    let format_of = |addr: &str| {
        sheet
            .get_cell(addr)
            .and_then(|c| c.get_style().get_number_format())
            .map(|nf| nf.get_format_code().to_string())
    };

    for addr in ["C2", "D4", "E6", "C7"] {
        assert_eq!(format_of(addr).as_deref(), Some("R$ #,##0.00"), "{addr}");
    }
    assert_eq!(sheet.get_value("A7"), "Total");

    let header = sheet.get_cell("A1").unwrap().get_style();
    assert_eq!(header.get_font().map(|f| f.get_bold().clone()), Some(true));
    assert!(matches!(
        header.get_alignment().map(|a| a.get_horizontal().clone()),
        Some(HorizontalAlignmentValues::Center)
    ));
}

#[test]
fn missing_input_is_file_not_found() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("nada.xlsx");

    let err = update_report(&input).unwrap_err();
    assert!(matches!(err, ReportError::FileNotFound { .. }));

    // modo silencioso só registra a falha
    update_spreadsheet(&input);
    assert!(!dir.path().join("nada_relatorio_final.xlsx").exists());
}

#[test]
fn missing_sheet_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("outra.xlsx");
    let book = umya_spreadsheet::new_file();
    umya_spreadsheet::writer::xlsx::write(&book, &input).unwrap();

    let err = update_report(&input).unwrap_err();
    assert!(matches!(err, ReportError::SheetNotFound { sheet } if sheet == "Dados Brutos"));
    assert!(!dir.path().join("outra_relatorio_final.xlsx").exists());
}

#[test]
fn silent_mode_absorbs_other_failures() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sem_aba.xlsx");
    let book = umya_spreadsheet::new_file();
    umya_spreadsheet::writer::xlsx::write(&book, &input).unwrap();

    update_spreadsheet(&input);
    assert!(!dir.path().join("sem_aba_relatorio_final.xlsx").exists());

    // arquivo que não é planilha
    let garbage = dir.path().join("lixo.xlsx");
    std::fs::write(&garbage, b"nao sou um xlsx").unwrap();
    assert!(matches!(
        update_report(&garbage).unwrap_err(),
        ReportError::Read { .. }
    ));
    update_spreadsheet(&garbage);
    assert!(!dir.path().join("lixo_relatorio_final.xlsx").exists());
}

#[test]
fn sheet_without_cost_fails_without_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = dir.path().join("sem_custo.xlsx");
    let mut book = umya_spreadsheet::new_file();
    let sheet = book.get_active_sheet_mut();
    sheet.set_name("Dados Brutos");
    sheet.get_cell_mut("A1").set_value("Item");
    sheet.get_cell_mut("B1").set_value("Vendas");
    sheet.get_cell_mut("A2").set_value("A");
    sheet.get_cell_mut("B2").set_value_number(10.0);
    umya_spreadsheet::writer::xlsx::write(&book, &input).unwrap();

    let err = update_report(&input).unwrap_err();
    assert!(matches!(err, ReportError::MissingColumn { column } if column == "Margem de Lucro"));
    assert!(!dir.path().join("sem_custo_relatorio_final.xlsx").exists());
}
