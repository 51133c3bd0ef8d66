// 📋 Company Model - one row of the Fundamentus export + display rules
//
// Numeric cells coerce leniently: an empty or unparseable cell becomes None
// and renders as blank, it never fails the whole load.

use crate::br_number::{format_br_float, format_br_int};
use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// CSV ROW MODEL
// ============================================================================

/// A company as exported by the Fundamentus scraper, plus the allocation
/// outputs computed by this dashboard.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Company {
    #[serde(rename = "ticker", default)]
    pub ticker: String,

    #[serde(rename = "empresa", default)]
    pub empresa: String,

    #[serde(rename = "setor", default)]
    pub setor: String,

    #[serde(rename = "subsetor", default)]
    pub subsetor: String,

    #[serde(rename = "roic_clean", default, deserialize_with = "lenient_f64")]
    pub roic: Option<f64>,

    #[serde(
        rename = "earnings_yield_clean",
        default,
        deserialize_with = "lenient_f64"
    )]
    pub earnings_yield: Option<f64>,

    #[serde(rename = "rank_roic", default, deserialize_with = "lenient_f64")]
    pub rank_roic: Option<f64>,

    #[serde(rename = "rank_ey", default, deserialize_with = "lenient_f64")]
    pub rank_ey: Option<f64>,

    #[serde(
        rename = "magic_formula_rank",
        default,
        deserialize_with = "lenient_f64"
    )]
    pub magic_formula_rank: Option<f64>,

    #[serde(rename = "cotacao", default, deserialize_with = "lenient_f64")]
    pub cotacao: Option<f64>,

    #[serde(rename = "vol_med_2m", default, deserialize_with = "lenient_f64")]
    pub vol_med_2m: Option<f64>,

    #[serde(rename = "pl", default, deserialize_with = "lenient_f64")]
    pub pl: Option<f64>,

    #[serde(rename = "pvp", default, deserialize_with = "lenient_f64")]
    pub pvp: Option<f64>,

    #[serde(rename = "div_yield", default, deserialize_with = "lenient_f64")]
    pub div_yield: Option<f64>,

    #[serde(rename = "lpa", default, deserialize_with = "lenient_f64")]
    pub lpa: Option<f64>,

    #[serde(rename = "_30_dias", default, deserialize_with = "lenient_f64")]
    pub ret_30_dias: Option<f64>,

    #[serde(rename = "_12_meses", default, deserialize_with = "lenient_f64")]
    pub ret_12_meses: Option<f64>,

    #[serde(rename = "marg_liquida", default, deserialize_with = "lenient_f64")]
    pub marg_liquida: Option<f64>,

    #[serde(rename = "data_execucao", default)]
    pub data_execucao: Option<String>,

    // ========================================================================
    // ALLOCATION OUTPUTS (computed, re-derived on every change)
    // ========================================================================
    #[serde(rename = "qtd_acoes", default, deserialize_with = "lenient_f64_zero")]
    pub qtd_acoes: f64,

    #[serde(
        rename = "valor_alocado",
        default,
        deserialize_with = "lenient_f64_zero"
    )]
    pub valor_alocado: f64,

    #[serde(
        rename = "peso_carteira",
        default,
        deserialize_with = "lenient_f64_zero"
    )]
    pub peso_carteira: f64,

    /// Included in the allocation pass; toggled per company on the dashboard
    #[serde(skip)]
    pub selected_for_allocation: bool,
}

impl Company {
    /// Execution date of the scrape, taken from the leading `YYYY-MM-DD` of
    /// the exported timestamp.
    pub fn execution_date(&self) -> Option<NaiveDate> {
        let raw = self.data_execucao.as_deref()?;
        let prefix = raw.get(..10)?;
        NaiveDate::parse_from_str(prefix, "%Y-%m-%d").ok()
    }
}

/// Coerce a numeric cell: anything unparseable becomes None. Accepts real
/// numbers too, so serialized reports deserialize back.
fn lenient_f64<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Cell {
        Number(f64),
        Text(String),
    }

    let cell = Option::<Cell>::deserialize(deserializer)?;
    Ok(cell.and_then(|c| match c {
        Cell::Number(n) => Some(n),
        Cell::Text(s) => s.trim().parse::<f64>().ok(),
    }))
}

/// Same coercion for columns that default to 0.0 when absent.
fn lenient_f64_zero<'de, D>(deserializer: D) -> Result<f64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(lenient_f64(deserializer)?.unwrap_or(0.0))
}

// ============================================================================
// COLUMN CATALOG & DISPLAY RULES
// ============================================================================

/// Every displayable column of the ranking table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Column {
    Ticker,
    Empresa,
    Setor,
    Subsetor,
    Roic,
    EarningsYield,
    RankRoic,
    RankEy,
    MagicFormulaRank,
    Cotacao,
    VolMed2m,
    Pl,
    Pvp,
    DivYield,
    Lpa,
    Ret30Dias,
    Ret12Meses,
    MargLiquida,
    ValorAlocado,
    QtdAcoes,
    PesoCarteira,
}

impl Column {
    pub const ALL: [Column; 21] = [
        Column::Ticker,
        Column::Empresa,
        Column::Setor,
        Column::Subsetor,
        Column::Roic,
        Column::EarningsYield,
        Column::RankRoic,
        Column::RankEy,
        Column::MagicFormulaRank,
        Column::Cotacao,
        Column::VolMed2m,
        Column::Pl,
        Column::Pvp,
        Column::DivYield,
        Column::Lpa,
        Column::Ret30Dias,
        Column::Ret12Meses,
        Column::MargLiquida,
        Column::ValorAlocado,
        Column::QtdAcoes,
        Column::PesoCarteira,
    ];

    /// Rótulo de exibição no painel
    pub fn label(&self) -> &'static str {
        match self {
            Column::Ticker => "Ticker",
            Column::Empresa => "Empresa",
            Column::Setor => "Setor",
            Column::Subsetor => "Subsetor",
            Column::Roic => "ROIC (%)",
            Column::EarningsYield => "EY (%)",
            Column::RankRoic => "Rank ROIC",
            Column::RankEy => "Rank EY",
            Column::MagicFormulaRank => "Rank MF",
            Column::Cotacao => "Cotação (R$)",
            Column::VolMed2m => "Vol. Médio 2M (R$)",
            Column::Pl => "P/L",
            Column::Pvp => "P/VP",
            Column::DivYield => "Div. Yield (%)",
            Column::Lpa => "LPA (R$)",
            Column::Ret30Dias => "Ret. 30D (%)",
            Column::Ret12Meses => "Ret. 12M (%)",
            Column::MargLiquida => "Margem Líquida (%)",
            Column::ValorAlocado => "Valor Alocado (R$)",
            Column::QtdAcoes => "Qtd. Ações",
            Column::PesoCarteira => "% na Carteira",
        }
    }

    /// Columns shown when the dashboard opens.
    pub fn default_visible(&self) -> bool {
        matches!(
            self,
            Column::Ticker
                | Column::Empresa
                | Column::Setor
                | Column::Cotacao
                | Column::VolMed2m
                | Column::Roic
                | Column::EarningsYield
                | Column::MagicFormulaRank
                | Column::ValorAlocado
                | Column::QtdAcoes
                | Column::PesoCarteira
        )
    }

    /// The allocation trio is pinned: it always renders and cannot be
    /// toggled off.
    pub fn pinned(&self) -> bool {
        matches!(
            self,
            Column::ValorAlocado | Column::QtdAcoes | Column::PesoCarteira
        )
    }

    /// Render one cell of the table for this column.
    pub fn render(&self, company: &Company) -> String {
        match self {
            Column::Ticker => company.ticker.clone(),
            Column::Empresa => company.empresa.clone(),
            Column::Setor => company.setor.clone(),
            Column::Subsetor => company.subsetor.clone(),
            Column::Roic => float_cell(company.roic),
            Column::EarningsYield => float_cell(company.earnings_yield),
            Column::RankRoic => rank_cell(company.rank_roic),
            Column::RankEy => rank_cell(company.rank_ey),
            Column::MagicFormulaRank => rank_cell(company.magic_formula_rank),
            Column::Cotacao => currency_cell(company.cotacao),
            Column::VolMed2m => match company.vol_med_2m {
                Some(v) => format!("R$ {}", format_br_int(v)),
                None => String::new(),
            },
            Column::Pl => float_cell(company.pl),
            Column::Pvp => float_cell(company.pvp),
            Column::DivYield => percent_cell(company.div_yield),
            Column::Lpa => currency_cell(company.lpa),
            Column::Ret30Dias => percent_cell(company.ret_30_dias),
            Column::Ret12Meses => percent_cell(company.ret_12_meses),
            Column::MargLiquida => percent_cell(company.marg_liquida),
            Column::ValorAlocado => format!("R$ {}", format_br_float(company.valor_alocado, 2)),
            Column::QtdAcoes => format_br_int(company.qtd_acoes),
            Column::PesoCarteira => format!("{}%", format_br_float(company.peso_carteira, 2)),
        }
    }
}

fn float_cell(value: Option<f64>) -> String {
    value.map(|v| format_br_float(v, 2)).unwrap_or_default()
}

fn percent_cell(value: Option<f64>) -> String {
    value
        .map(|v| format!("{}%", format_br_float(v, 2)))
        .unwrap_or_default()
}

fn currency_cell(value: Option<f64>) -> String {
    value
        .map(|v| format!("R$ {}", format_br_float(v, 2)))
        .unwrap_or_default()
}

fn rank_cell(value: Option<f64>) -> String {
    value.map(|v| (v.trunc() as i64).to_string()).unwrap_or_default()
}

/// Render the execution date as dd/mm/aaaa, "N/A" when absent.
pub fn render_execution_date(date: Option<NaiveDate>) -> String {
    match date {
        Some(d) => d.format("%d/%m/%Y").to_string(),
        None => "N/A".to_string(),
    }
}

// ============================================================================
// TESTS
// ============================================================================
