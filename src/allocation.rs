// 💰 Allocation Engine - split an investment across the selected companies
//
// Ideal slice = total / selected count; each slice buys whole lots at the
// current quote, so the real allocation never matches the ideal exactly and
// the leftover is reported.

use crate::br_number::format_br_float;
use crate::company::Company;
use crate::ranking::RankingParams;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Seed text for the investment input field.
pub const DEFAULT_INVESTMENT_TEXT: &str = "10.000";

// ============================================================================
// PURCHASE LOT
// ============================================================================

/// B3 purchase modes: fractional market (single shares) or standard lots of
/// 100 shares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PurchaseLot {
    Fractional,
    Standard,
}

impl PurchaseLot {
    pub fn lot_size(&self) -> f64 {
        match self {
            PurchaseLot::Fractional => 1.0,
            PurchaseLot::Standard => 100.0,
        }
    }

    /// Label shown on the panel
    pub fn label(&self) -> &'static str {
        match self {
            PurchaseLot::Fractional => "Fracionário (1+ ações)",
            PurchaseLot::Standard => "Padrão (100+ ações)",
        }
    }

    pub fn toggle(&self) -> PurchaseLot {
        match self {
            PurchaseLot::Fractional => PurchaseLot::Standard,
            PurchaseLot::Standard => PurchaseLot::Fractional,
        }
    }
}

// ============================================================================
// ALLOCATION PASS
// ============================================================================

/// Recompute qtd_acoes / valor_alocado / peso_carteira for every company.
///
/// Deselected companies and companies without a positive quote keep zeros.
/// Weights are relative to the total actually allocated, not the total asked
/// for.
pub fn allocate(companies: &mut [Company], total_investment: f64, lot: PurchaseLot) {
    for company in companies.iter_mut() {
        company.qtd_acoes = 0.0;
        company.valor_alocado = 0.0;
        company.peso_carteira = 0.0;
    }

    let selected = companies
        .iter()
        .filter(|c| c.selected_for_allocation)
        .count();

    if total_investment <= 0.0 || selected == 0 {
        return;
    }

    let ideal_per_company = total_investment / selected as f64;
    let lot_size = lot.lot_size();

    for company in companies
        .iter_mut()
        .filter(|c| c.selected_for_allocation)
    {
        let Some(cotacao) = company.cotacao else {
            continue;
        };
        if cotacao <= 0.0 {
            continue;
        }

        let ideal_shares = ideal_per_company / cotacao;
        let shares = ((ideal_shares / lot_size).round() * lot_size).max(0.0);

        company.qtd_acoes = shares;
        company.valor_alocado = shares * cotacao;
    }

    let total_allocated: f64 = companies.iter().map(|c| c.valor_alocado).sum();
    if total_allocated > 0.0 {
        for company in companies.iter_mut() {
            company.peso_carteira = company.valor_alocado / total_allocated * 100.0;
        }
    }
}

// ============================================================================
// SUMMARY & REPORT
// ============================================================================

/// Totals shown under the table (and exported by report mode).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationSummary {
    pub total_investment: f64,
    pub companies_selected: usize,
    pub ideal_per_company: f64,
    pub total_allocated: f64,
    pub unallocated: f64,
}

impl AllocationSummary {
    pub fn compute(companies: &[Company], total_investment: f64) -> Self {
        let selected: Vec<&Company> = companies
            .iter()
            .filter(|c| c.selected_for_allocation)
            .collect();
        let total_allocated: f64 = selected.iter().map(|c| c.valor_alocado).sum();
        let companies_selected = selected.len();

        let ideal_per_company = if companies_selected > 0 {
            total_investment / companies_selected as f64
        } else {
            0.0
        };

        AllocationSummary {
            total_investment,
            companies_selected,
            ideal_per_company,
            total_allocated,
            unallocated: total_investment - total_allocated,
        }
    }

    /// Display lines for the summary panel, in the BR convention.
    pub fn lines(&self) -> Vec<String> {
        vec![
            format!(
                "Valor a Investir: R$ {}",
                format_br_float(self.total_investment, 2)
            ),
            format!(
                "Número de Empresas Selecionadas para Alocação: {}",
                self.companies_selected
            ),
            format!(
                "Valor Alocado por Empresa (Ideal): R$ {}",
                format_br_float(self.ideal_per_company, 2)
            ),
            format!(
                "Valor Total Alocado (Real): R$ {}",
                format_br_float(self.total_allocated, 2)
            ),
            format!(
                "Diferença (Não Alocado): R$ {}",
                format_br_float(self.unallocated, 2)
            ),
        ]
    }
}

/// Full allocation run, serialized by report mode.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AllocationReport {
    pub execution_date: Option<NaiveDate>,
    pub params: RankingParams,
    pub purchase_lot: PurchaseLot,
    pub summary: AllocationSummary,
    pub companies: Vec<Company>,
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn company(ticker: &str, cotacao: Option<f64>, selected: bool) -> Company {
        let header = "ticker,empresa,setor,subsetor,roic_clean,earnings_yield_clean,\
rank_roic,rank_ey,magic_formula_rank,cotacao,vol_med_2m,pl,pvp,div_yield,lpa,\
_30_dias,_12_meses,marg_liquida,data_execucao";
        let quote_cell = cotacao.map(|v| v.to_string()).unwrap_or_default();
        let row = format!(
            "{ticker},Empresa {ticker},Setor,Sub,10,10,1,1,1,{quote_cell},90000000,5,1,2,1,0,0,10,2024-06-01"
        );
        let csv_text = format!("{header}\n{row}\n");
        let mut rdr = csv::Reader::from_reader(csv_text.as_bytes());
        let mut company: Company = rdr.deserialize().next().unwrap().unwrap();
        company.selected_for_allocation = selected;
        company
    }

    #[test]
    fn test_fractional_allocation_splits_evenly() {
        let mut companies = vec![
            company("AAAA3", Some(10.0), true),
            company("BBBB3", Some(25.0), true),
        ];
        allocate(&mut companies, 1000.0, PurchaseLot::Fractional);

        // Ideal slice is 500 per company
        assert_eq!(companies[0].qtd_acoes, 50.0);
        assert_eq!(companies[0].valor_alocado, 500.0);
        assert_eq!(companies[1].qtd_acoes, 20.0);
        assert_eq!(companies[1].valor_alocado, 500.0);
    }

    #[test]
    fn test_standard_lot_rounds_to_hundreds() {
        let mut companies = vec![company("AAAA3", Some(4.0), true)];
        allocate(&mut companies, 900.0, PurchaseLot::Standard);

        // 225 ideal shares round to 2 lots of 100
        assert_eq!(companies[0].qtd_acoes, 200.0);
        assert_eq!(companies[0].valor_alocado, 800.0);
    }

    #[test]
    fn test_standard_lot_can_round_to_zero() {
        let mut companies = vec![company("AAAA3", Some(50.0), true)];
        allocate(&mut companies, 1000.0, PurchaseLot::Standard);

        // 20 ideal shares are closer to 0 lots than to 1
        assert_eq!(companies[0].qtd_acoes, 0.0);
        assert_eq!(companies[0].valor_alocado, 0.0);
    }

    #[test]
    fn test_deselected_companies_keep_zeros() {
        let mut companies = vec![
            company("AAAA3", Some(10.0), true),
            company("OUT_3", Some(10.0), false),
        ];
        allocate(&mut companies, 1000.0, PurchaseLot::Fractional);

        assert_eq!(companies[1].qtd_acoes, 0.0);
        assert_eq!(companies[1].valor_alocado, 0.0);
        assert_eq!(companies[1].peso_carteira, 0.0);
        // The whole amount flows to the selected company
        assert_eq!(companies[0].valor_alocado, 1000.0);
    }

    #[test]
    fn test_missing_quote_is_skipped() {
        let mut companies = vec![
            company("AAAA3", None, true),
            company("BBBB3", Some(10.0), true),
        ];
        allocate(&mut companies, 1000.0, PurchaseLot::Fractional);

        assert_eq!(companies[0].qtd_acoes, 0.0);
        // Slice stays 500 (two selected), it is not redistributed
        assert_eq!(companies[1].valor_alocado, 500.0);
    }

    #[test]
    fn test_weights_sum_to_one_hundred() {
        let mut companies = vec![
            company("AAAA3", Some(10.0), true),
            company("BBBB3", Some(20.0), true),
            company("CCCC3", Some(30.0), true),
        ];
        allocate(&mut companies, 3000.0, PurchaseLot::Fractional);

        let weights: f64 = companies.iter().map(|c| c.peso_carteira).sum();
        assert!((weights - 100.0).abs() < 1e-9);
    }

    #[test]
    fn test_zero_investment_is_a_no_op() {
        let mut companies = vec![company("AAAA3", Some(10.0), true)];
        companies[0].valor_alocado = 123.0; // stale value from a previous pass
        allocate(&mut companies, 0.0, PurchaseLot::Fractional);

        assert_eq!(companies[0].qtd_acoes, 0.0);
        assert_eq!(companies[0].valor_alocado, 0.0);
    }

    #[test]
    fn test_summary_totals() {
        let mut companies = vec![
            company("AAAA3", Some(10.0), true),
            company("BBBB3", Some(25.0), true),
        ];
        allocate(&mut companies, 1001.0, PurchaseLot::Fractional);
        let summary = AllocationSummary::compute(&companies, 1001.0);

        assert_eq!(summary.companies_selected, 2);
        assert_eq!(summary.ideal_per_company, 500.5);
        assert_eq!(summary.total_allocated, 1000.0);
        assert!((summary.unallocated - 1.0).abs() < 1e-9);
    }

    #[test]
    fn test_summary_lines_use_br_convention() {
        let mut companies = vec![company("AAAA3", Some(10.0), true)];
        allocate(&mut companies, 10000.0, PurchaseLot::Fractional);
        let summary = AllocationSummary::compute(&companies, 10000.0);
        let lines = summary.lines();

        assert_eq!(lines[0], "Valor a Investir: R$ 10.000,00");
        assert_eq!(lines[1], "Número de Empresas Selecionadas para Alocação: 1");
    }

    #[test]
    fn test_purchase_lot_helpers() {
        assert_eq!(PurchaseLot::Fractional.lot_size(), 1.0);
        assert_eq!(PurchaseLot::Standard.lot_size(), 100.0);
        assert_eq!(PurchaseLot::Fractional.toggle(), PurchaseLot::Standard);
        assert_eq!(PurchaseLot::Standard.toggle(), PurchaseLot::Fractional);
        assert_eq!(PurchaseLot::Fractional.label(), "Fracionário (1+ ações)");
    }
}
