// 🏆 Magic Formula Ranking - filter by liquidity, order by combined rank
//
// Greenblatt's combined rank (rank ROIC + rank EY) is precomputed in the
// export; this module only filters, orders and cuts the list.

use crate::company::Company;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Bounds for how many companies the panel lists.
pub const MIN_TOP_N: usize = 1;
pub const MAX_TOP_N: usize = 50;

/// Seed text for the minimum-volume input field.
pub const DEFAULT_MIN_VOLUME_TEXT: &str = "20.000.000";

/// Ranking controls: how many companies and how liquid they must be.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RankingParams {
    pub top_n: usize,
    pub min_volume: f64,
}

impl Default for RankingParams {
    fn default() -> Self {
        RankingParams {
            top_n: 20,
            min_volume: 20_000_000.0,
        }
    }
}

/// Apply the ranking: drop illiquid companies (unknown volume counts as
/// illiquid), order by combined rank ascending (best first, unranked last),
/// keep the top N and pre-select every survivor for allocation.
pub fn rank_companies(companies: &[Company], params: &RankingParams) -> Vec<Company> {
    let mut ranked: Vec<Company> = companies
        .iter()
        .filter(|c| c.vol_med_2m.map_or(false, |v| v >= params.min_volume))
        .cloned()
        .collect();

    ranked.sort_by(|a, b| match (a.magic_formula_rank, b.magic_formula_rank) {
        (Some(x), Some(y)) => x.partial_cmp(&y).unwrap_or(Ordering::Equal),
        (Some(_), None) => Ordering::Less,
        (None, Some(_)) => Ordering::Greater,
        (None, None) => Ordering::Equal,
    });

    ranked.truncate(params.top_n.clamp(MIN_TOP_N, MAX_TOP_N));

    for company in &mut ranked {
        company.selected_for_allocation = true;
    }

    ranked
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn company(ticker: &str, rank: Option<f64>, volume: Option<f64>) -> Company {
        let header = "ticker,empresa,setor,subsetor,roic_clean,earnings_yield_clean,\
rank_roic,rank_ey,magic_formula_rank,cotacao,vol_med_2m,pl,pvp,div_yield,lpa,\
_30_dias,_12_meses,marg_liquida,data_execucao";
        let rank_cell = rank.map(|r| r.to_string()).unwrap_or_default();
        let vol_cell = volume.map(|v| v.to_string()).unwrap_or_default();
        let row = format!(
            "{ticker},Empresa {ticker},Setor,Sub,10,10,1,1,{rank_cell},10.0,{vol_cell},5,1,2,1,0,0,10,2024-06-01"
        );
        let csv_text = format!("{header}\n{row}\n");
        let mut rdr = csv::Reader::from_reader(csv_text.as_bytes());
        rdr.deserialize().next().unwrap().unwrap()
    }

    #[test]
    fn test_min_volume_filter() {
        let companies = vec![
            company("AAAA3", Some(1.0), Some(50_000_000.0)),
            company("BBBB3", Some(2.0), Some(5_000_000.0)),
            company("CCCC3", Some(3.0), None),
        ];
        let ranked = rank_companies(&companies, &RankingParams::default());

        let tickers: Vec<&str> = ranked.iter().map(|c| c.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["AAAA3"]);
    }

    #[test]
    fn test_sorted_by_combined_rank_ascending() {
        let companies = vec![
            company("CCCC3", Some(30.0), Some(90_000_000.0)),
            company("AAAA3", Some(2.0), Some(90_000_000.0)),
            company("BBBB3", Some(15.0), Some(90_000_000.0)),
        ];
        let ranked = rank_companies(&companies, &RankingParams::default());

        let tickers: Vec<&str> = ranked.iter().map(|c| c.ticker.as_str()).collect();
        assert_eq!(tickers, vec!["AAAA3", "BBBB3", "CCCC3"]);
    }

    #[test]
    fn test_unranked_companies_sink_to_the_bottom() {
        let companies = vec![
            company("NONE3", None, Some(90_000_000.0)),
            company("AAAA3", Some(5.0), Some(90_000_000.0)),
        ];
        let ranked = rank_companies(&companies, &RankingParams::default());

        assert_eq!(ranked[0].ticker, "AAAA3");
        assert_eq!(ranked[1].ticker, "NONE3");
    }

    #[test]
    fn test_top_n_cut_and_preselection() {
        let companies: Vec<Company> = (1..=30)
            .map(|i| company(&format!("TK{i:02}"), Some(i as f64), Some(90_000_000.0)))
            .collect();

        let params = RankingParams {
            top_n: 10,
            ..RankingParams::default()
        };
        let ranked = rank_companies(&companies, &params);

        assert_eq!(ranked.len(), 10);
        assert!(ranked.iter().all(|c| c.selected_for_allocation));
        assert_eq!(ranked[0].ticker, "TK01");
        assert_eq!(ranked[9].ticker, "TK10");
    }

    #[test]
    fn test_top_n_clamped_to_slider_bounds() {
        let companies: Vec<Company> = (1..=60)
            .map(|i| company(&format!("TK{i:02}"), Some(i as f64), Some(90_000_000.0)))
            .collect();

        let params = RankingParams {
            top_n: 500,
            ..RankingParams::default()
        };
        assert_eq!(rank_companies(&companies, &params).len(), MAX_TOP_N);

        let params = RankingParams {
            top_n: 0,
            ..RankingParams::default()
        };
        assert_eq!(rank_companies(&companies, &params).len(), MIN_TOP_N);
    }

    #[test]
    fn test_default_params_match_panel_seed() {
        let params = RankingParams::default();
        assert_eq!(params.top_n, 20);
        assert_eq!(params.min_volume, 20_000_000.0);
        assert_eq!(
            crate::br_number::parse_br_number(DEFAULT_MIN_VOLUME_TEXT),
            Some(params.min_volume)
        );
    }
}
