//! 工序單價表

use serde::{Deserialize, Serialize};

/// 工序單價配置
///
/// 每次報價運行構造一次，之後唯讀。長度類單價的單位須與圖面長度單位一致
/// （通常為 mm），面積類單價同理（mm²）。
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Costs {
    /// 焊接（每單位焊縫長度）
    pub welding: f64,

    /// 雜項輔料（每件）
    pub sundry: f64,

    /// 清潔（每單位面積）
    pub cleaning: f64,

    /// 焊縫清理（每單位管長）
    pub weld_cleaning: f64,

    /// 噴漆工費（每單位面積）
    pub painting: f64,

    /// 油漆材料（每單位面積）
    pub paint: f64,

    /// 鉚接（每處）
    pub riveting: f64,

    /// 折彎（每道）
    pub bending: f64,

    /// 沉孔（每孔）
    pub countersink: f64,

    /// 攻牙（每孔）
    pub threading: f64,

    /// 設計工時（每小時）
    pub project_hour: f64,

    /// 烘乾（每單位面積）
    pub drying: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_all_zero() {
        let costs = Costs::default();

        assert_eq!(costs.welding, 0.0);
        assert_eq!(costs.project_hour, 0.0);
        assert_eq!(costs.drying, 0.0);
    }

    #[test]
    fn test_partial_literal_construction() {
        let costs = Costs {
            welding: 600.0 / 1000.0,
            painting: 260.0 / 1_000_000.0,
            paint: 280.0 / 1_000_000.0,
            ..Default::default()
        };

        assert_eq!(costs.welding, 0.6);
        assert_eq!(costs.riveting, 0.0);
    }
}
