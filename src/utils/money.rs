use async_graphql::{InputValueError, InputValueResult, Scalar, ScalarType, Value};
use bigdecimal::BigDecimal;
use serde::{Deserialize, Serialize};
use std::ops::{Add, AddAssign};
use std::str::FromStr;

/// Decimal amount of money.
///
/// Rendered to clients as a string so no precision is lost, but accepted as
/// either a string or a number.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, PartialOrd, sqlx::Type)]
#[serde(transparent)]
#[sqlx(transparent)]
pub struct Money(pub BigDecimal);

impl Money {
    pub fn zero() -> Self {
        Money(BigDecimal::from(0))
    }

    pub fn is_zero(&self) -> bool {
        self.0 == BigDecimal::from(0)
    }

    pub fn is_negative(&self) -> bool {
        self.0 < BigDecimal::from(0)
    }
}

impl Default for Money {
    fn default() -> Self {
        Self::zero()
    }
}

impl From<i32> for Money {
    fn from(value: i32) -> Self {
        Money(BigDecimal::from(value))
    }
}

impl FromStr for Money {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        BigDecimal::from_str(s.trim())
            .map(Money)
            .map_err(|_| format!("'{}' is not a valid amount", s))
    }
}

impl std::fmt::Display for Money {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Add<&Money> for Money {
    type Output = Money;

    fn add(self, rhs: &Money) -> Self::Output {
        Money(self.0 + &rhs.0)
    }
}

impl AddAssign<&Money> for Money {
    fn add_assign(&mut self, rhs: &Money) {
        self.0 += &rhs.0;
    }
}

#[Scalar(name = "Money")]
impl ScalarType for Money {
    fn parse(value: Value) -> InputValueResult<Self> {
        let parsed = match &value {
            Value::String(s) => s.parse::<Money>(),
            Value::Number(n) => n.to_string().parse::<Money>(),
            _ => return Err(InputValueError::expected_type(value)),
        };

        parsed.map_err(InputValueError::custom)
    }

    fn to_value(&self) -> Value {
        Value::String(self.0.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_strings_and_numbers() {
        let from_string = <Money as ScalarType>::parse(Value::String("12.50".into())).unwrap();
        assert_eq!(from_string, "12.5".parse::<Money>().unwrap());

        let from_number =
            <Money as ScalarType>::parse(Value::Number(serde_json::Number::from(7))).unwrap();
        assert_eq!(from_number, Money::from(7));
    }

    #[test]
    fn rejects_garbage() {
        assert!(<Money as ScalarType>::parse(Value::String("ten".into())).is_err());
        assert!(<Money as ScalarType>::parse(Value::Boolean(true)).is_err());
    }

    #[test]
    fn adds_up() {
        let mut total = Money::zero();
        total += &Money::from(3);
        let total = total + &"0.25".parse::<Money>().unwrap();
        assert_eq!(total, "3.25".parse::<Money>().unwrap());
        assert!(!total.is_zero());
        assert!(Money::default().is_zero());
    }

    #[test]
    fn serializes_as_json_string() {
        let json = serde_json::to_value(Money::from(5)).unwrap();
        assert_eq!(json, serde_json::json!("5"));
        let back: Money = serde_json::from_value(serde_json::json!(2.5)).unwrap();
        assert_eq!(back, "2.5".parse::<Money>().unwrap());
    }
}
