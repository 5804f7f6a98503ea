//! 加價係數模型

use crate::Price;
use serde::{Deserialize, Serialize};

/// 加價係數鏈
///
/// 工費與材料費各乘其係數後相加，再依序乘以管理係數與稅率係數。
/// 這是全系統唯一的加價公式，所有工序價格一律經由 [`Multipliers::price`] 產生。
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct Multipliers {
    /// 工費係數
    pub work: f64,

    /// 材料費係數
    pub materials: f64,

    /// 管理係數
    pub manager: f64,

    /// 稅率係數
    pub vat: f64,
}

impl Multipliers {
    /// 創建新的係數鏈
    pub fn new(work: f64, materials: f64, manager: f64, vat: f64) -> Self {
        Self {
            work,
            materials,
            manager,
            vat,
        }
    }

    /// 由工費成本與材料費成本組出單項價格
    ///
    /// `cost = work + materials`；
    /// `final = (work×工費係數 + materials×材料係數) × 管理係數 × 稅率係數`
    pub fn price(&self, work_cost: f64, materials_cost: f64) -> Price {
        Price {
            cost: work_cost + materials_cost,
            final_price: (work_cost * self.work + materials_cost * self.materials)
                * self.manager
                * self.vat,
        }
    }
}

impl Default for Multipliers {
    /// 預設為全 1.0（不加價）
    fn default() -> Self {
        Self::new(1.0, 1.0, 1.0, 1.0)
    }
}
