//! 孔模型

use serde::{Deserialize, Serialize};
use std::f64::consts::PI;
use std::fmt;

/// 孔形狀
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub enum HoleShape {
    /// 圓孔
    Round { diameter: f64 },
    /// 矩形孔
    Rect { width: f64, height: f64 },
    /// 自訂輪廓（直接給定切割長度）
    Custom { length: f64 },
}

impl HoleShape {
    /// 單一輪廓的切割長度
    pub fn cut_length(&self) -> f64 {
        match *self {
            HoleShape::Round { diameter } => diameter * PI,
            HoleShape::Rect { width, height } => (width + height) * 2.0,
            HoleShape::Custom { length } => length,
        }
    }
}

/// 孔：形狀 + 重複數量 + 是否貫通
///
/// 貫通孔兩面都要切，切割長度與切入次數皆加倍。
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Hole {
    /// 形狀
    pub shape: HoleShape,

    /// 重複數量（至少 1）
    pub count: u32,

    /// 是否貫通
    pub through: bool,
}

impl Hole {
    /// 創建圓孔
    pub fn round(diameter: f64) -> Self {
        Self {
            shape: HoleShape::Round { diameter },
            count: 1,
            through: false,
        }
    }

    /// 創建矩形孔
    pub fn rect(width: f64, height: f64) -> Self {
        Self {
            shape: HoleShape::Rect { width, height },
            count: 1,
            through: false,
        }
    }

    /// 創建自訂輪廓孔
    pub fn custom(length: f64) -> Self {
        Self {
            shape: HoleShape::Custom { length },
            count: 1,
            through: false,
        }
    }

    /// 建構器模式：設置重複數量（至少 1）
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count.max(1);
        self
    }

    /// 建構器模式：設置為貫通孔
    pub fn as_through(mut self) -> Self {
        self.through = true;
        self
    }

    /// 單一輪廓的切割長度
    pub fn cut_length(&self) -> f64 {
        self.shape.cut_length()
    }

    /// 切割道次：數量 × 面數
    pub fn passes(&self) -> u32 {
        self.count * if self.through { 2 } else { 1 }
    }

    /// 對管件總切割長度的貢獻
    pub fn cutting_length(&self) -> f64 {
        self.cut_length() * self.passes() as f64
    }
}

impl fmt::Display for Hole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.through {
            write!(f, "貫通")?;
        }
        match self.shape {
            HoleShape::Round { diameter } => write!(f, "ø{diameter}")?,
            HoleShape::Rect { width, height } => write!(f, "{width}x{height}")?,
            HoleShape::Custom { length } => write!(f, "異形 L={length}")?,
        }
        if self.count > 1 {
            write!(f, " x {}", self.count)?;
        }
        Ok(())
    }
}
