//! 價格模型

use serde::{Deserialize, Serialize};
use std::fmt;
use std::iter::Sum;
use std::ops::{Add, AddAssign, Mul};

/// 單項價格：成本與加價後的最終售價
///
/// `final_price` 一律由加價公式從某個成本推導而來；零值表示該工序不適用。
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Price {
    /// 成本
    pub cost: f64,

    /// 最終售價（含加價）
    pub final_price: f64,
}

impl Price {
    /// 零價格
    pub const ZERO: Price = Price {
        cost: 0.0,
        final_price: 0.0,
    };

    /// 創建新的價格
    pub fn new(cost: f64, final_price: f64) -> Self {
        Self { cost, final_price }
    }

    /// 檢查是否為零（工序不適用）
    pub fn is_zero(&self) -> bool {
        self.cost == 0.0 && self.final_price == 0.0
    }

    /// 按數量縮放（訂單彙總用）
    pub fn scale(&self, factor: f64) -> Price {
        Price {
            cost: self.cost * factor,
            final_price: self.final_price * factor,
        }
    }
}

impl Add for Price {
    type Output = Price;

    fn add(self, rhs: Price) -> Price {
        Price {
            cost: self.cost + rhs.cost,
            final_price: self.final_price + rhs.final_price,
        }
    }
}

impl AddAssign for Price {
    fn add_assign(&mut self, rhs: Price) {
        self.cost += rhs.cost;
        self.final_price += rhs.final_price;
    }
}

impl Mul<f64> for Price {
    type Output = Price;

    fn mul(self, rhs: f64) -> Price {
        self.scale(rhs)
    }
}

impl Sum for Price {
    fn sum<I: Iterator<Item = Price>>(iter: I) -> Price {
        iter.fold(Price::ZERO, |acc, p| acc + p)
    }
}

impl fmt::Display for Price {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2} -> {:.2}", self.cost, self.final_price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_componentwise_sum() {
        let total: Price = [Price::new(10.0, 15.0), Price::new(2.5, 4.0), Price::ZERO]
            .into_iter()
            .sum();

        assert_eq!(total, Price::new(12.5, 19.0));
    }

    #[test]
    fn test_scale() {
        let price = Price::new(100.0, 150.0).scale(13.0);

        assert_eq!(price.cost, 1300.0);
        assert_eq!(price.final_price, 1950.0);
    }

    #[test]
    fn test_zero_means_not_applicable() {
        assert!(Price::ZERO.is_zero());
        assert!(Price::default().is_zero());
        assert!(!Price::new(0.0, 0.01).is_zero());
    }

    #[test]
    fn test_display() {
        assert_eq!(Price::new(31.363, 68.999).to_string(), "31.36 -> 69.00");
    }
}
