//! 切口模型

use crate::{QuoteError, Result};
use serde::{Deserialize, Serialize};

/// 矩形斷面的基準邊
///
/// 斜切角度以哪條邊為基準量測；圓形斷面忽略此欄位。
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum Side {
    /// 高度邊（預設）
    #[default]
    Height,
    /// 寬度邊
    Width,
}

/// 切口描述：角度、基準邊、焊接覆蓋比例、重複次數
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Cut {
    /// 切割角度（度），必須落在開區間 0°..180°
    pub angle_deg: f64,

    /// 角度量測的基準邊
    pub side: Side,

    /// 切口長度中需於組裝後焊接的比例，0.0..=1.0
    pub welding_ratio: f64,

    /// 重複次數
    pub count: u32,
}

impl Cut {
    /// 創建新的切口；0° 與 180° 為奇異角度，構造時即拒絕
    pub fn new(angle_deg: f64) -> Result<Self> {
        if !(angle_deg > 0.0 && angle_deg < 180.0) {
            return Err(QuoteError::InvalidCutAngle(angle_deg));
        }
        Ok(Self {
            angle_deg,
            side: Side::default(),
            welding_ratio: 0.0,
            count: 1,
        })
    }

    /// 建構器模式：設置基準邊
    pub fn with_side(mut self, side: Side) -> Self {
        self.side = side;
        self
    }

    /// 建構器模式：設置焊接覆蓋比例（夾限到 0.0..=1.0）
    pub fn with_welding_ratio(mut self, ratio: f64) -> Self {
        self.welding_ratio = ratio.clamp(0.0, 1.0);
        self
    }

    /// 建構器模式：設置重複次數（至少 1）
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count.max(1);
        self
    }

    /// 角度（弧度）
    pub fn angle_rad(&self) -> f64 {
        self.angle_deg.to_radians()
    }

    /// 檢查是否為直角切口
    pub fn is_square(&self) -> bool {
        self.angle_deg == 90.0
    }
}

impl Default for Cut {
    /// 預設為直角切口
    fn default() -> Self {
        Self {
            angle_deg: 90.0,
            side: Side::default(),
            welding_ratio: 0.0,
            count: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_default_is_square() {
        let cut = Cut::default();

        assert!(cut.is_square());
        assert_eq!(cut.welding_ratio, 0.0);
        assert_eq!(cut.count, 1);
    }

    #[rstest]
    #[case(0.0)]
    #[case(180.0)]
    #[case(-45.0)]
    #[case(270.0)]
    fn test_degenerate_angle_rejected(#[case] angle: f64) {
        assert!(matches!(
            Cut::new(angle),
            Err(QuoteError::InvalidCutAngle(a)) if a == angle
        ));
    }

    #[rstest]
    #[case(0.1)]
    #[case(45.0)]
    #[case(90.0)]
    #[case(179.9)]
    fn test_open_interval_accepted(#[case] angle: f64) {
        assert!(Cut::new(angle).is_ok());
    }

    #[test]
    fn test_welding_ratio_clamped() {
        let cut = Cut::default().with_welding_ratio(1.7);
        assert_eq!(cut.welding_ratio, 1.0);

        let cut = Cut::default().with_welding_ratio(-0.3);
        assert_eq!(cut.welding_ratio, 0.0);
    }

    #[test]
    fn test_count_at_least_one() {
        assert_eq!(Cut::default().with_count(0).count, 1);
        assert_eq!(Cut::default().with_count(4).count, 4);
    }
}
