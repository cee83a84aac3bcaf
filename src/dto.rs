use rust_decimal::Decimal;
use rust_decimal::RoundingStrategy;
use serde::de::Deserializer;
use serde::{Deserialize, Serialize};

use crate::Account;

#[derive(Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum OperationType {
    Open,
    Deposit,
    Withdrawal,
}

/// One row of an operations file: `type,holder,amount`.
#[derive(Debug, Serialize, Deserialize, PartialEq)]
pub struct Operation {
    #[serde(rename = "type")]
    pub op_type: OperationType,
    pub holder: String,
    #[serde(deserialize_with = "deserialize_decimal_4dp")]
    pub amount: Option<Decimal>,
}

fn deserialize_decimal_4dp<'de, D>(deserializer: D) -> Result<Option<Decimal>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<Decimal>::deserialize(deserializer)
        .map(|opt_dec| opt_dec.map(|dec| dec.round_dp_with_strategy(4, RoundingStrategy::ToZero)))
}

/// Output row with the final balance of one holder. Trailing zeros are dropped.
#[derive(Debug, Serialize, PartialEq)]
pub struct BalanceRow {
    pub holder: String,
    pub balance: Decimal,
}

impl From<&Account> for BalanceRow {
    fn from(account: &Account) -> Self {
        Self {
            holder: account.holder_name().to_owned(),
            balance: account.balance().normalize(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn parse_csv_row(row: &str) -> Result<Operation, csv::Error> {
        let data_with_header = format!("type,holder,amount\n{}", row);
        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(data_with_header.as_bytes());
        reader.deserialize().next().unwrap()
    }

    #[test]
    fn test_parse_open() {
        assert_eq!(
            parse_csv_row("open,Maria Silva,").unwrap(),
            Operation {
                op_type: OperationType::Open,
                holder: "Maria Silva".to_owned(),
                amount: None,
            }
        );
    }

    #[test]
    fn test_parse_deposit() {
        assert_eq!(
            parse_csv_row("deposit, Maria Silva , 20.50").unwrap(),
            Operation {
                op_type: OperationType::Deposit,
                holder: "Maria Silva".to_owned(),
                amount: Some(dec!(20.50)),
            }
        );
    }

    #[test]
    fn test_parse_withdrawal() {
        assert_eq!(
            parse_csv_row("withdrawal,João da Paz,1.5").unwrap(),
            Operation {
                op_type: OperationType::Withdrawal,
                holder: "João da Paz".to_owned(),
                amount: Some(dec!(1.5)),
            }
        );
    }

    #[test]
    fn test_parse_negative_amount() {
        assert_eq!(
            parse_csv_row("deposit,Maria Silva,-3").unwrap().amount,
            Some(dec!(-3))
        );
    }

    #[test]
    fn test_parse_invalid_amount_format() {
        assert!(parse_csv_row("deposit,Maria Silva,abc").is_err());
    }

    #[test]
    fn test_parse_invalid_operation_type() {
        assert!(parse_csv_row("transfer,Maria Silva,1.0").is_err());
        assert!(parse_csv_row("Deposit,Maria Silva,1.0").is_err());
    }

    #[test]
    fn test_rounds_to_4_decimal_places() {
        assert_eq!(
            parse_csv_row("deposit,Maria Silva,0.12345").unwrap().amount,
            Some(dec!(0.1234))
        );
        assert_eq!(
            parse_csv_row("withdrawal,Maria Silva,0.123499999")
                .unwrap()
                .amount,
            Some(dec!(0.1234))
        );
    }

    #[test]
    fn test_balance_row_from_account() {
        let mut account = Account::new("Fulano de Tal");
        account.deposit(dec!(7.25));
        assert_eq!(
            BalanceRow::from(&account),
            BalanceRow {
                holder: "Fulano de Tal".to_owned(),
                balance: dec!(7.25),
            }
        );
    }
}
