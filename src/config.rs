/// Nomes de abas, colunas e formatos usados pelo gerador e pelo relatório.
#[derive(Debug, Clone)]
pub struct ReportConfig {
    pub input_sheet: String,
    pub output_sheet: String,
    pub sales_column: String,
    pub cost_column: String,
    pub profit_column: String,
    /// Rótulo gravado na primeira coluna da linha de resumo.
    pub summary_label: String,
    pub currency_format: String,
    /// Substitui o `.xlsx` final no nome do arquivo de saída.
    pub output_suffix: String,
}

impl ReportConfig {
    /// Colunas que recebem formato de moeda no relatório.
    pub fn currency_columns(&self) -> [&str; 3] {
        [
            self.sales_column.as_str(),
            self.cost_column.as_str(),
            self.profit_column.as_str(),
        ]
    }
}

impl Default for ReportConfig {
    fn default() -> Self {
        ReportConfig {
            input_sheet: "Dados Brutos".to_string(),
            output_sheet: "Relatório Semanal".to_string(),
            sales_column: "Vendas".to_string(),
            cost_column: "Custo".to_string(),
            profit_column: "Margem de Lucro".to_string(),
            summary_label: "Total".to_string(),
            currency_format: "R$ #,##0.00".to_string(),
            output_suffix: "_relatorio_final.xlsx".to_string(),
        }
    }
}
