//! # Fabcost Core
//!
//! 核心資料模型與類型定義：單價表、加價係數、切口、孔、型材斷面幾何

pub mod costs;
pub mod cut;
pub mod hole;
pub mod multipliers;
pub mod pipe;
pub mod price;

// Re-export 主要類型
pub use costs::Costs;
pub use cut::{Cut, Side};
pub use hole::{Hole, HoleShape};
pub use multipliers::Multipliers;
pub use pipe::{Pipe, PipeCosts, Section};
pub use price::Price;

/// 報價錯誤類型
#[derive(Debug, thiserror::Error)]
pub enum QuoteError {
    #[error("項目「{0}」要求噴漆但沒有可噴漆面積")]
    PaintedWithoutArea(String),

    #[error("無效的切割角度: {0}°（必須落在開區間 0°..180°）")]
    InvalidCutAngle(f64),

    #[error("無效的最低切割費: {0}（必須為正數）")]
    InvalidMinimumCuttingCost(f64),
}

pub type Result<T> = std::result::Result<T, QuoteError>;
