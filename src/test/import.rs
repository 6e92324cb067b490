#[cfg(test)]
mod tests {
    use std::{fs, path::PathBuf};

    use rust_decimal_macros::dec;
    use tempfile::TempDir;

    use crate::{
        db::{
            HoldingRepository, QuoteRepository, TransactionRepository,
            import::{load_snapshot, read_holdings, read_quotes, read_transactions},
            utils::{parse_date, parse_decimal},
        },
        models::{HoldingKind, TransactionKind},
        services::ValuationService,
        test::fixtures::day,
    };

    const INVESTMENTS: &str = "\
InvestorId;InvestmentId;InvestmentType;ISIN;City;FundInvestor
INV1;I1;Stock;S1;;
INV1;I2;Estate;;CityA;
INV1;I3;Fonds;;;
FUND;I4;stock;S2;;I3
INV2;I5;Crypto;;;
";

    const TRANSACTIONS: &str = "\
InvestmentId;Type;Date;Value
I1;Shares;2021-01-01;5
I1;Shares;2021-01-05;3
I2;Estate;2021-01-02;100
I2;Building;2021-01-03;50
I2;Estate;2021-02-01;120
I3;Percentage;2021-01-01;0.5
I4;Shares;2021-01-01;8
I1;Shares;not-a-date;1000
";

    const QUOTES: &str = "\
ISIN;Date;PricePerShare
S1;2021-01-01;100.5
S1;2021-01-02 00:00:00;10
S2;2020-12-31;10
S2;2021-01-01;abc
";

    fn write(dir: &TempDir, name: &str, contents: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn holdings_are_parsed_with_legacy_labels() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "Investments.csv", INVESTMENTS);

        let holdings = read_holdings(&path, b';').unwrap();

        assert_eq!(holdings.len(), 5);
        assert_eq!(*holdings[0].kind(), HoldingKind::Equity);
        assert_eq!(holdings[0].instrument_id().as_deref(), Some("S1"));
        assert_eq!(*holdings[0].fund_id(), None);
        assert_eq!(holdings[1].city().as_deref(), Some("CityA"));
        assert_eq!(*holdings[1].instrument_id(), None);
        assert_eq!(*holdings[2].kind(), HoldingKind::Fund);
        assert_eq!(*holdings[3].kind(), HoldingKind::Equity);
        assert_eq!(holdings[3].fund_id().as_deref(), Some("I3"));
        assert_eq!(
            *holdings[4].kind(),
            HoldingKind::Other("Crypto".to_string())
        );
    }

    #[test]
    fn malformed_transaction_rows_are_skipped() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "Transactions.csv", TRANSACTIONS);

        let transactions = read_transactions(&path, b';').unwrap();

        assert_eq!(transactions.len(), 7);
        assert_eq!(*transactions[0].kind(), TransactionKind::Shares);
        assert_eq!(*transactions[5].amount(), dec!(0.5));
        assert!(transactions.iter().all(|t| *t.amount() != dec!(1000)));
    }

    #[test]
    fn quotes_accept_trailing_time() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "Quotes.csv", QUOTES);

        let quotes = read_quotes(&path, b';').unwrap();

        assert_eq!(quotes.len(), 3);
        assert_eq!(*quotes[1].date(), day("2021-01-02"));
    }

    #[test]
    fn missing_file_is_an_error() {
        let dir = TempDir::new().unwrap();

        let result = read_holdings(&dir.path().join("missing.csv"), b';');

        assert!(result.is_err());
    }

    #[test]
    fn other_delimiters_are_supported() {
        let dir = TempDir::new().unwrap();
        let path = write(
            &dir,
            "Quotes.csv",
            "ISIN,Date,PricePerShare\nS1,2021-01-01,42\n",
        );

        let quotes = read_quotes(&path, b',').unwrap();

        assert_eq!(quotes.len(), 1);
        assert_eq!(*quotes[0].price(), dec!(42));
    }

    #[test]
    fn loaded_snapshot_values_portfolio() {
        let dir = TempDir::new().unwrap();
        let investments = write(&dir, "Investments.csv", INVESTMENTS);
        let transactions = write(&dir, "Transactions.csv", TRANSACTIONS);
        let quotes = write(&dir, "Quotes.csv", QUOTES);

        let store = load_snapshot(&investments, &transactions, &quotes, b';').unwrap();
        assert_eq!(store.holdings_by_investor("INV1").unwrap().len(), 3);
        assert_eq!(store.holdings_by_fund("I3").unwrap().len(), 1);
        assert_eq!(
            store
                .transactions_by_holding("I1", day("2021-01-31"))
                .unwrap()
                .len(),
            2
        );
        assert_eq!(
            store.latest_quote("S1", day("2021-01-31")).unwrap(),
            Some(dec!(10))
        );

        let service = ValuationService::from_store(std::sync::Arc::new(store));
        let value = service.calculate_portfolio_value("INV1", day("2021-01-31"));

        // I1: 8 shares * 10, I2: 100 + 50, I3: 0.5 * (8 * 10)
        assert_eq!(value, dec!(270));
    }

    #[test]
    fn parse_helpers() {
        assert_eq!(parse_date(" 2021-03-04 ").unwrap(), day("2021-03-04"));
        assert_eq!(
            parse_date("2021-03-04T10:11:12").unwrap(),
            day("2021-03-04")
        );
        assert!(parse_date("04.03.2021").is_err());
        assert_eq!(parse_decimal("-1.25", "value").unwrap(), dec!(-1.25));
        assert!(parse_decimal("1,25", "value").is_err());
    }
}
