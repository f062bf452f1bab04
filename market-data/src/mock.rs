//! Static mock data served when the vendor is unavailable

use chrono::{DateTime, Duration, NaiveDate, Utc};
use common::decimal::dec;
use common::model::etf::{EtfHoldingsSnapshot, EtfPriceSnapshot, Holding, UPDATE_DATE_FORMAT};
use common::model::fees::{DividendInfo, EtfFeesDividend, FeeSchedule, PerformanceSummary};
use common::model::history::{EtfPriceHistory, PricePoint};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rust_decimal::Decimal;

/// Tickers with bespoke mock compositions
pub const SEEDED_TICKERS: [&str; 3] = ["396500", "371460", "463710"];

const SEEDED_UPDATE_DATE: &str = "2025-10-01";

/// Mock composition for `ticker`, or the zeroed "Unknown ETF" snapshot
pub fn mock_holdings(ticker: &str, today: NaiveDate) -> EtfHoldingsSnapshot {
    seeded_holdings(ticker).unwrap_or_else(|| EtfHoldingsSnapshot::unknown(ticker, today))
}

fn seeded_holdings(ticker: &str) -> Option<EtfHoldingsSnapshot> {
    let (etf_name, nav, holdings) = match ticker {
        "396500" => (
            "TIGER 글로벌클린에너지SOLACTIVE",
            dec!(12345.67),
            vec![
                Holding::new("005930", "삼성전자", dec!(25.5), 12345, 892_345_000),
                Holding::new("000660", "SK하이닉스", dec!(20.1), 54321, 789_012_000),
                Holding::new("035420", "NAVER", dec!(15.0), 9876, 678_901_000),
                Holding::new("035720", "카카오", dec!(12.5), 6543, 567_890_000),
                Holding::new("051910", "LG화학", dec!(10.0), 3210, 456_789_000),
            ],
        ),
        "371460" => (
            "TIGER 차이나전기차SOLACTIVE",
            dec!(23456.78),
            vec![
                Holding::new("005930", "삼성전자", dec!(30.0), 20000, 1_200_000_000),
                Holding::new("000660", "SK하이닉스", dec!(25.0), 15000, 900_000_000),
                Holding::new("035420", "NAVER", dec!(20.0), 10000, 600_000_000),
                Holding::new("035720", "카카오", dec!(15.0), 5000, 300_000_000),
            ],
        ),
        "463710" => (
            "ACE 글로벌친환경에너지",
            dec!(34567.89),
            vec![
                Holding::new("005930", "삼성전자", dec!(40.0), 30000, 1_800_000_000),
                Holding::new("000660", "SK하이닉스", dec!(30.0), 20000, 1_200_000_000),
                Holding::new("035420", "NAVER", dec!(20.0), 10000, 600_000_000),
            ],
        ),
        _ => return None,
    };

    Some(EtfHoldingsSnapshot {
        ticker: ticker.to_string(),
        etf_name: etf_name.to_string(),
        nav,
        total_holdings: holdings.len() as i64,
        update_date: SEEDED_UPDATE_DATE.to_string(),
        holdings,
    })
}

/// Deterministic mock quote for `ticker`
pub fn mock_price(ticker: &str, timestamp: DateTime<Utc>) -> EtfPriceSnapshot {
    let base = 30_000 + ticker.parse::<i64>().map(|n| n % 10_000).unwrap_or(0);

    EtfPriceSnapshot {
        ticker: ticker.to_string(),
        name: format!("ETF {}", ticker),
        current_price: base,
        change_price: 500,
        change_rate: dec!(1.59),
        volume: 1_500_000,
        trading_value: 48_000_000_000,
        high: base + 500,
        low: base - 500,
        open: base - 100,
        previous_close: base - 500,
        timestamp,
    }
}

/// Number of mock candles for `period`; anything unrecognised gets a year
pub fn mock_history_len(period: &str) -> i64 {
    match period {
        "1m" => 30,
        "3m" => 90,
        "6m" => 180,
        _ => 365,
    }
}

fn history_base_price(ticker: &str) -> Decimal {
    Decimal::from(match ticker {
        "069500" => 32_000,
        "360750" => 15_000,
        "379800" => 12_000,
        "448630" => 18_000,
        "371460" => 25_000,
        "272580" => 28_000,
        _ => 20_000,
    })
}

/// `price` moved by `bp` basis points, to two decimal places
fn shifted(price: Decimal, bp: i64) -> Decimal {
    (price * (Decimal::ONE + Decimal::new(bp, 4))).round_dp(2)
}

/// Mock daily candles ending on `today`, oldest first.
///
/// A random walk of at most 2% a day from a per-ticker base price, seeded by
/// the ticker and period so the same request always draws the same series.
pub fn mock_price_history(ticker: &str, period: &str, today: NaiveDate) -> EtfPriceHistory {
    let days = mock_history_len(period);
    let seed = ticker
        .bytes()
        .chain(period.bytes())
        .fold(days as u64, |acc, b| acc.wrapping_mul(31).wrapping_add(u64::from(b)));
    let mut rng = StdRng::seed_from_u64(seed);

    let mut current = history_base_price(ticker);
    let price_history = (0..days)
        .map(|i| {
            current = shifted(current, rng.gen_range(-200..=200));
            PricePoint {
                date: (today - Duration::days(days - i - 1)).format(UPDATE_DATE_FORMAT).to_string(),
                open: current,
                high: shifted(current, rng.gen_range(0..=300)),
                low: shifted(current, -rng.gen_range(0..=300)),
                close: shifted(current, rng.gen_range(-200..=200)),
                volume: rng.gen_range(100_000..=1_000_000),
            }
        })
        .collect();

    EtfPriceHistory {
        ticker: ticker.to_string(),
        period: period.to_string(),
        price_history,
    }
}

/// Fee and dividend figures for `ticker`, with generic figures for unlisted tickers
pub fn mock_fees_dividend(ticker: &str) -> EtfFeesDividend {
    // (name, [management, custody, total expense], yield, last dividend, [ytd, 1y, 3y, 5y])
    let (name, fees, dividend_yield, last_dividend, returns) = match ticker {
        "069500" => (Some("KODEX 200"), [dec!(0.05), dec!(0.01), dec!(0.06)], dec!(2.8), 180, [dec!(7.2), dec!(11.5), dec!(14.8), dec!(17.3)]),
        "360750" => (Some("TIGER 미국S&P500"), [dec!(0.08), dec!(0.02), dec!(0.10)], dec!(1.8), 120, [dec!(9.1), dec!(13.2), dec!(16.5), dec!(19.1)]),
        "379800" => (Some("KODEX 미국S&P500TR"), [dec!(0.06), dec!(0.015), dec!(0.075)], dec!(2.1), 140, [dec!(8.7), dec!(12.8), dec!(15.9), dec!(18.4)]),
        "448630" => (Some("SOL 미국S&P500"), [dec!(0.07), dec!(0.018), dec!(0.088)], dec!(1.9), 125, [dec!(8.9), dec!(13.0), dec!(16.2), dec!(18.7)]),
        "371460" => (Some("TIGER 미국필라델피아반도체나스닥"), [dec!(0.10), dec!(0.025), dec!(0.125)], dec!(0.8), 50, [dec!(15.2), dec!(22.1), dec!(28.5), dec!(35.2)]),
        "272580" => (Some("KODEX 2차전지산업"), [dec!(0.09), dec!(0.02), dec!(0.11)], dec!(1.2), 80, [dec!(12.5), dec!(18.7), dec!(25.3), dec!(32.1)]),
        _ => (None, [dec!(0.05), dec!(0.01), dec!(0.06)], dec!(2.5), 150, [dec!(8.5), dec!(12.3), dec!(15.7), dec!(18.2)]),
    };
    let [management_fee, custody_fee, total_expense_ratio] = fees;
    let [ytd_return, one_year_return, three_year_return, five_year_return] = returns;

    EtfFeesDividend {
        ticker: ticker.to_string(),
        etf_name: name.map(str::to_string).unwrap_or_else(|| format!("ETF {}", ticker)),
        fees: FeeSchedule {
            management_fee,
            custody_fee,
            total_expense_ratio,
            trading_fee: dec!(0.015),
            redemption_fee: Decimal::ZERO,
        },
        dividend: DividendInfo {
            dividend_yield,
            last_dividend,
            dividend_date: "2025-09-30".to_string(),
            payment_frequency: "quarterly".to_string(),
            next_dividend_date: "2025-12-31".to_string(),
        },
        performance: PerformanceSummary {
            ytd_return,
            one_year_return,
            three_year_return,
            five_year_return,
        },
        update_date: SEEDED_UPDATE_DATE.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 1, 15).unwrap()
    }

    #[test]
    fn test_seeded_lengths() {
        let lengths: Vec<usize> = SEEDED_TICKERS
            .iter()
            .map(|t| mock_holdings(t, today()).holdings.len())
            .collect();
        assert_eq!(lengths, vec![5, 4, 3]);
    }

    #[test]
    fn test_seeded_snapshot_is_exact() {
        let snapshot = mock_holdings("371460", today());
        assert_eq!(snapshot.etf_name, "TIGER 차이나전기차SOLACTIVE");
        assert_eq!(snapshot.nav, dec!(23456.78));
        assert_eq!(snapshot.total_holdings, 4);
        assert_eq!(snapshot.update_date, "2025-10-01");
        assert_eq!(
            snapshot.holdings[3],
            Holding::new("035720", "카카오", dec!(15.0), 5000, 300_000_000)
        );
    }

    #[test]
    fn test_unknown_ticker_is_zeroed() {
        let snapshot = mock_holdings("069500", today());
        assert_eq!(snapshot.ticker, "069500");
        assert_eq!(snapshot.etf_name, "Unknown ETF");
        assert_eq!(snapshot.nav, Decimal::ZERO);
        assert_eq!(snapshot.total_holdings, 0);
        assert_eq!(snapshot.update_date, "2026-01-15");
        assert!(snapshot.holdings.is_empty());
    }

    #[test]
    fn test_mock_price_is_deterministic() {
        let now = Utc::now();
        let price = mock_price("069500", now);
        assert_eq!(price.current_price, 39_500);
        assert_eq!(price.high, 40_000);
        assert_eq!(price.previous_close, 39_000);
        assert_eq!(price, mock_price("069500", now));
    }

    #[test]
    fn test_mock_history_is_repeatable() {
        let first = mock_price_history("069500", "3m", today());
        assert_eq!(first, mock_price_history("069500", "3m", today()));
        assert_ne!(first.price_history, mock_price_history("360750", "3m", today()).price_history);
    }

    #[test]
    fn test_mock_history_length_and_dates() {
        let history = mock_price_history("069500", "1m", today());
        assert_eq!(history.ticker, "069500");
        assert_eq!(history.period, "1m");
        assert_eq!(history.price_history.len(), 30);
        assert_eq!(history.price_history[0].date, "2025-12-17");
        assert_eq!(history.price_history[29].date, "2026-01-15");

        assert_eq!(mock_price_history("069500", "6m", today()).price_history.len(), 180);
        assert_eq!(mock_price_history("069500", "2y", today()).price_history.len(), 365);
    }

    #[test]
    fn test_mock_history_stays_near_base() {
        let history = mock_price_history("371460", "1m", today());
        let first = &history.price_history[0];
        assert!(first.open >= dec!(24500) && first.open <= dec!(25500));

        for point in &history.price_history {
            assert!(point.low <= point.open && point.open <= point.high);
            assert!((100_000..=1_000_000).contains(&point.volume));
            assert_eq!(point.close, point.close.round_dp(2));
        }
    }

    #[test]
    fn test_fees_for_listed_and_unlisted_tickers() {
        let kodex = mock_fees_dividend("069500");
        assert_eq!(kodex.etf_name, "KODEX 200");
        assert_eq!(kodex.fees.total_expense_ratio, dec!(0.06));
        assert_eq!(kodex.dividend.last_dividend, 180);
        assert_eq!(kodex.performance.five_year_return, dec!(17.3));

        let other = mock_fees_dividend("091230");
        assert_eq!(other.etf_name, "ETF 091230");
        assert_eq!(other.dividend.dividend_yield, dec!(2.5));
        assert_eq!(other.dividend.payment_frequency, "quarterly");
        assert_eq!(other.fees.redemption_fee, Decimal::ZERO);
        assert_eq!(other.update_date, "2025-10-01");
    }
}
