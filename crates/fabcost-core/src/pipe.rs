//! 型材模型與斷面幾何

use crate::cut::{Cut, Side};
use serde::{Deserialize, Serialize};
use std::f64::consts::PI;

/// 型材相關單價
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize)]
pub struct PipeCosts {
    /// 材料（每單位長度）
    pub material: f64,

    /// 切入固定費（每道切口 / 每孔面）
    pub incut: f64,

    /// 切割（每單位切割長度）
    pub cutting: f64,

    /// 搬運（每單位管長）
    pub carrying: f64,
}

/// 斷面形狀
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum Section {
    /// 圓管
    Round { diameter: f64 },
    /// 矩形管
    Rect { width: f64, height: f64 },
}

/// 型材：斷面 + 壁厚 + 單價
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Pipe {
    /// 斷面形狀
    pub section: Section,

    /// 壁厚
    pub thickness: f64,

    /// 單價
    pub costs: PipeCosts,
}

impl Pipe {
    /// 創建圓管型材
    pub fn round(diameter: f64, thickness: f64, costs: PipeCosts) -> Self {
        Self {
            section: Section::Round { diameter },
            thickness,
            costs,
        }
    }

    /// 創建矩形管型材
    pub fn rect(width: f64, height: f64, thickness: f64, costs: PipeCosts) -> Self {
        Self {
            section: Section::Rect { width, height },
            thickness,
            costs,
        }
    }

    /// 斷面周長
    pub fn perimeter(&self) -> f64 {
        match self.section {
            Section::Round { diameter } => diameter * PI,
            Section::Rect { width, height } => (width + height) * 2.0,
        }
    }

    /// 一道切口移除的材料長度
    ///
    /// 圓管：周長 / sin(角度)。
    /// 矩形管直角切：周長；斜切時基準邊原長保留，另一邊拉伸為斜邊
    /// `另一邊 / sin(角度)`，結果為 `(基準邊 + 斜邊) × 2`。
    /// 90° 時無論基準邊為何皆退化為周長。
    pub fn cut_length(&self, cut: &Cut) -> f64 {
        match self.section {
            Section::Round { .. } => self.perimeter() / cut.angle_rad().sin(),
            Section::Rect { width, height } => {
                if cut.is_square() {
                    return self.perimeter();
                }
                let (reference, other) = match cut.side {
                    Side::Height => (height, width),
                    Side::Width => (width, height),
                };
                let hypotenuse = other / cut.angle_rad().sin();
                (reference + hypotenuse) * 2.0
            }
        }
    }

    /// 一道折彎切口移除的材料長度
    ///
    /// 以名義角度的一半作三角形角度，基準邊拉伸為斜邊
    /// `基準邊 / sin(半角)`，結果為 `(斜邊×2 + 另一邊) × 2`。
    /// 圓管不折彎，恆為 0。
    pub fn bent_cut_length(&self, cut: &Cut) -> f64 {
        match self.section {
            Section::Round { .. } => 0.0,
            Section::Rect { width, height } => {
                let (reference, other) = match cut.side {
                    Side::Height => (height, width),
                    Side::Width => (width, height),
                };
                let half_angle = cut.angle_rad() / 2.0;
                let hypotenuse = reference / half_angle.sin();
                (hypotenuse * 2.0 + other) * 2.0
            }
        }
    }
}
