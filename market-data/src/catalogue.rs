//! Built-in ETF catalogue used for search

use common::model::market::{EtfListing, Market};

const DOMESTIC: &[(&str, &str)] = &[
    ("069500", "KODEX 200"),
    ("371460", "TIGER 미국필라델피아반도체나스닥"),
    ("272580", "KODEX 2차전지산업"),
    ("091160", "KODEX 반도체"),
    ("091170", "KODEX 은행"),
    ("091180", "KODEX 자동차"),
    ("091190", "KODEX 화학"),
    ("091200", "KODEX 철강"),
    ("091210", "KODEX 건설"),
    ("091220", "KODEX 에너지화학"),
    ("360750", "TIGER 미국S&P500"),
    ("133690", "TIGER 미국나스닥100"),
    ("379800", "KODEX 미국S&P500"),
    ("381170", "TIGER 미국대형TOP10 INDXX"),
];

const OVERSEAS: &[(&str, &str)] = &[
    ("SPY", "SPDR S&P 500 ETF Trust"),
    ("IVV", "iShares CORE S&P 500 ETF"),
    ("VOO", "Vanguard S&P 500 ETF"),
    ("QQQ", "Invesco QQQ Trust"),
    ("VTI", "Vanguard Total Stock Market ETF"),
    ("VEA", "Vanguard FTSE Developed Markets ETF"),
    ("VWO", "Vanguard FTSE Emerging Markets ETF"),
    ("EFA", "iShares MSCI EAFE ETF"),
    ("EEM", "iShares MSCI Emerging Markets ETF"),
    ("IWM", "iShares Russell 2000 ETF"),
];

const FEATURED: &[(&str, &str)] = &[
    ("SPY", "SPDR S&P 500 ETF Trust"),
    ("QQQ", "Invesco QQQ Trust"),
    ("069500", "KODEX 200"),
    ("371460", "TIGER 미국필라델피아반도체나스닥"),
    ("272580", "KODEX 2차전지산업"),
];

/// Listings of one market segment
pub fn listings(market: Market) -> &'static [(&'static str, &'static str)] {
    match market {
        Market::Domestic => DOMESTIC,
        Market::Overseas => OVERSEAS,
    }
}

/// Case-insensitive substring search on ticker or name. An empty keyword matches nothing.
pub fn search(keyword: &str, market: Market) -> Vec<EtfListing> {
    let keyword = keyword.trim().to_lowercase();
    if keyword.is_empty() {
        return Vec::new();
    }

    listings(market)
        .iter()
        .filter(|(ticker, name)| {
            ticker.to_lowercase().contains(&keyword) || name.to_lowercase().contains(&keyword)
        })
        .map(|(ticker, name)| EtfListing {
            ticker: ticker.to_string(),
            name: name.to_string(),
        })
        .collect()
}

/// ETFs highlighted on the dashboard, in display order
pub fn featured() -> Vec<EtfListing> {
    FEATURED
        .iter()
        .map(|(ticker, name)| EtfListing {
            ticker: ticker.to_string(),
            name: name.to_string(),
        })
        .collect()
}
