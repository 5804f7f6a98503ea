//! 最低切割費分攤計算

use serde::{Deserialize, Serialize};

/// 分攤計算結果
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CuttingAllocation {
    /// 原始切割成本合計
    pub raw_total: f64,

    /// 套用最低消費後的合計
    pub adjusted_total: f64,

    /// 各權重對應的分攤額（與輸入同序同長）
    pub shares: Vec<f64>,
}

/// 切割費分攤計算器
///
/// 切割按機時計費，但工廠對整張訂單收取最低切割費；不足最低消費時，
/// 差額須按各項目自身切割成本占比攤回，而非整單加收一筆。
pub struct CuttingAllocator;

impl CuttingAllocator {
    /// 套用最低消費並按比例分攤
    ///
    /// 合計為零（整單無切割需求）時不觸發最低消費，全部分攤額為 0。
    pub fn allocate(weights: &[f64], minimum: f64) -> CuttingAllocation {
        let raw_total: f64 = weights.iter().sum();
        if raw_total <= 0.0 {
            return CuttingAllocation {
                raw_total,
                adjusted_total: 0.0,
                shares: vec![0.0; weights.len()],
            };
        }

        let adjusted_total = raw_total.max(minimum);
        CuttingAllocation {
            raw_total,
            adjusted_total,
            shares: Self::distribute(adjusted_total, weights),
        }
    }

    /// 將給定總額按權重占比分配
    pub fn distribute(total: f64, weights: &[f64]) -> Vec<f64> {
        let raw_total: f64 = weights.iter().sum();
        if raw_total <= 0.0 {
            return vec![0.0; weights.len()];
        }
        weights.iter().map(|w| total / raw_total * w).collect()
    }
}
