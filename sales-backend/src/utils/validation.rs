// src/utils/validation.rs

//! 共通バリデーション定数とカスタムバリデーション関数

use rust_decimal::Decimal;
use std::borrow::Cow;
use validator::ValidationError;

/// 部署の制約
pub mod department {
    pub const NAME_MIN_LENGTH: u64 = 1;
    pub const NAME_MAX_LENGTH: u64 = 60;
}

/// 販売員の制約
pub mod seller {
    use rust_decimal::Decimal;

    pub const NAME_MIN_LENGTH: u64 = 3;
    pub const NAME_MAX_LENGTH: u64 = 60;

    /// 基本給の下限 100.00
    pub const BASE_SALARY_MIN: Decimal = Decimal::from_parts(10000, 0, 0, false, 2);
    /// 基本給の上限 50000.00
    pub const BASE_SALARY_MAX: Decimal = Decimal::from_parts(5000000, 0, 0, false, 2);
}

/// 金額カラム numeric(12,2) の制約
pub mod money {
    use rust_decimal::Decimal;

    pub const MAX_SCALE: u32 = 2;
    /// 9999999999.99
    pub const AMOUNT_MAX: Decimal = Decimal::from_parts(3_567_587_327, 232, 0, false, 2);
}

fn error_with_message(code: &'static str, message: String) -> ValidationError {
    let mut error = ValidationError::new(code);
    error.message = Some(Cow::from(message));
    error
}

// 末尾のゼロは丸めに影響しないので正規化してから桁数を見る
fn exceeds_money_scale(value: &Decimal) -> bool {
    value.normalize().scale() > money::MAX_SCALE
}

/// 基本給が許容範囲内かをバリデーション
pub fn validate_base_salary(value: &Decimal) -> Result<(), ValidationError> {
    if exceeds_money_scale(value) {
        return Err(error_with_message(
            "base_salary_scale",
            format!(
                "Base Salary must have at most {} decimal places",
                money::MAX_SCALE
            ),
        ));
    }
    if *value < seller::BASE_SALARY_MIN || *value > seller::BASE_SALARY_MAX {
        return Err(error_with_message(
            "base_salary_range",
            format!(
                "Base Salary must be from {} to {}",
                seller::BASE_SALARY_MIN,
                seller::BASE_SALARY_MAX
            ),
        ));
    }
    Ok(())
}

/// 売上金額が負でなく numeric(12,2) に収まるかをバリデーション
pub fn validate_non_negative_amount(value: &Decimal) -> Result<(), ValidationError> {
    if value.is_sign_negative() && !value.is_zero() {
        return Err(error_with_message(
            "negative_amount",
            "Amount must not be negative".to_string(),
        ));
    }
    if exceeds_money_scale(value) {
        return Err(error_with_message(
            "amount_scale",
            format!("Amount must have at most {} decimal places", money::MAX_SCALE),
        ));
    }
    if *value > money::AMOUNT_MAX {
        return Err(error_with_message(
            "amount_max",
            format!("Amount must not exceed {}", money::AMOUNT_MAX),
        ));
    }
    Ok(())
}

/// 空白のみの名前を拒否
pub fn validate_not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(error_with_message(
            "blank",
            "Name must not be blank".to_string(),
        ));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_base_salary_bounds_are_inclusive() {
        assert!(validate_base_salary(&Decimal::new(10000, 2)).is_ok());
        assert!(validate_base_salary(&Decimal::new(5000000, 2)).is_ok());
        assert!(validate_base_salary(&Decimal::new(9999, 2)).is_err());
        assert!(validate_base_salary(&Decimal::new(5000001, 2)).is_err());
    }

    #[test]
    fn test_base_salary_error_message() {
        let error = validate_base_salary(&Decimal::new(1, 0)).unwrap_err();
        assert_eq!(
            error.message.unwrap().to_string(),
            "Base Salary must be from 100.00 to 50000.00"
        );
    }

    #[test]
    fn test_non_negative_amount() {
        assert!(validate_non_negative_amount(&Decimal::ZERO).is_ok());
        assert!(validate_non_negative_amount(&Decimal::new(1999, 2)).is_ok());
        assert!(validate_non_negative_amount(&Decimal::new(-1, 2)).is_err());
    }

    #[test]
    fn test_amount_fits_numeric_column() {
        assert!(validate_non_negative_amount(&money::AMOUNT_MAX).is_ok());
        assert_eq!(money::AMOUNT_MAX.to_string(), "9999999999.99");

        let error =
            validate_non_negative_amount(&Decimal::new(10_000_000_000_000, 2)).unwrap_err();
        assert_eq!(error.code, "amount_max");
        assert_eq!(
            error.message.unwrap().to_string(),
            "Amount must not exceed 9999999999.99"
        );
    }

    #[test]
    fn test_money_scale_is_limited_to_cents() {
        let error = validate_non_negative_amount(&Decimal::new(12345, 3)).unwrap_err();
        assert_eq!(error.code, "amount_scale");
        // 末尾ゼロだけの余分な桁は許容
        assert!(validate_non_negative_amount(&Decimal::new(12300, 3)).is_ok());

        let error = validate_base_salary(&Decimal::new(1000001, 3)).unwrap_err();
        assert_eq!(error.code, "base_salary_scale");
        assert!(validate_base_salary(&Decimal::new(1000000, 3)).is_ok());
    }

    #[test]
    fn test_not_blank() {
        assert!(validate_not_blank("Books").is_ok());
        assert!(validate_not_blank("   ").is_err());
    }
}
