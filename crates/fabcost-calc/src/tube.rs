//! 管件模型：單一物理管段的切割、焊接、折彎彙總

use fabcost_core::{Costs, Cut, Hole, Multipliers, Pipe, Price};
use serde::{Deserialize, Serialize};

/// 管件：一段型材及其切口、孔、折彎
///
/// 幾何取值（切割長度、焊縫長度、面積等）皆為單支數值；
/// 行級成本由擁有它的項目乘上 `count` 彙總。
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tube {
    /// 型材
    pub pipe: Pipe,

    /// 管長
    pub length: f64,

    /// 同規格支數（至少 1）
    pub count: u32,

    /// 材料是否由我方供應（否則為客供料，材料費為 0）
    pub is_ours: bool,

    /// 是否焊縫清理
    pub is_weld_cleaned: bool,

    /// 是否清潔
    pub is_cleaned: bool,

    /// 是否折彎加工（關閉時折彎道次不計費）
    pub is_bended: bool,

    /// 孔清單
    pub holes: Vec<Hole>,

    /// 左端切口
    pub left_cut: Option<Cut>,

    /// 右端切口
    pub right_cut: Option<Cut>,

    /// 折彎切口清單
    pub bent_cuts: Vec<Cut>,

    /// 額外折彎道次（不經切口的折彎）
    pub extra_bending_count: u32,

    /// 計算結果（行級價格）
    pub price: Price,
}

impl Tube {
    /// 創建新的管件
    pub fn new(pipe: Pipe, length: f64) -> Self {
        Self {
            pipe,
            length,
            count: 1,
            is_ours: true,
            is_weld_cleaned: false,
            is_cleaned: false,
            is_bended: false,
            holes: Vec::new(),
            left_cut: None,
            right_cut: None,
            bent_cuts: Vec::new(),
            extra_bending_count: 0,
            price: Price::ZERO,
        }
    }

    /// 建構器模式：設置支數（至少 1）
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count.max(1);
        self
    }

    /// 建構器模式：設置左端切口
    pub fn with_left_cut(mut self, cut: Cut) -> Self {
        self.left_cut = Some(cut);
        self
    }

    /// 建構器模式：設置右端切口
    pub fn with_right_cut(mut self, cut: Cut) -> Self {
        self.right_cut = Some(cut);
        self
    }

    /// 建構器模式：添加孔
    pub fn with_hole(mut self, hole: Hole) -> Self {
        self.holes.push(hole);
        self
    }

    /// 建構器模式：添加折彎切口
    pub fn with_bent_cut(mut self, cut: Cut) -> Self {
        self.bent_cuts.push(cut);
        self.is_bended = true;
        self
    }

    /// 建構器模式：設置額外折彎道次
    pub fn with_extra_bending_count(mut self, count: u32) -> Self {
        self.extra_bending_count = count;
        self.is_bended = true;
        self
    }

    /// 建構器模式：設置為客供料
    pub fn customer_material(mut self) -> Self {
        self.is_ours = false;
        self
    }

    /// 建構器模式：設置焊縫清理
    pub fn weld_cleaned(mut self) -> Self {
        self.is_weld_cleaned = true;
        self
    }

    /// 建構器模式：設置清潔
    pub fn cleaned(mut self) -> Self {
        self.is_cleaned = true;
        self
    }

    fn end_cuts(&self) -> impl Iterator<Item = &Cut> {
        self.left_cut.iter().chain(self.right_cut.iter())
    }

    /// 單支總切割長度：孔 + 折彎切口 + 兩端切口
    pub fn cutting_length(&self) -> f64 {
        let holes: f64 = self.holes.iter().map(Hole::cutting_length).sum();
        let bends: f64 = self
            .bent_cuts
            .iter()
            .map(|c| self.pipe.bent_cut_length(c) * c.count as f64)
            .sum();
        let ends: f64 = self
            .end_cuts()
            .map(|c| self.pipe.cut_length(c) * c.count as f64)
            .sum();
        holes + bends + ends
    }

    /// 單支切入次數：端切口 + 折彎切口 + 孔道次
    pub fn incuts_count(&self) -> u32 {
        let ends: u32 = self.end_cuts().map(|c| c.count).sum();
        let bends: u32 = self.bent_cuts.iter().map(|c| c.count).sum();
        let holes: u32 = self.holes.iter().map(Hole::passes).sum();
        ends + bends + holes
    }

    /// 單支切割成本：切入固定費 + 長度計費
    pub fn cutting_cost(&self) -> f64 {
        self.incuts_count() as f64 * self.pipe.costs.incut
            + self.cutting_length() * self.pipe.costs.cutting
    }

    /// 單支焊縫長度：端切口按覆蓋比例，折彎切口焊縫沿半道
    pub fn welding_length(&self) -> f64 {
        let ends: f64 = self
            .end_cuts()
            .map(|c| self.pipe.cut_length(c) * c.welding_ratio * c.count as f64)
            .sum();
        let bends: f64 = self
            .bent_cuts
            .iter()
            .map(|c| self.pipe.bent_cut_length(c) / 2.0 * c.count as f64)
            .sum();
        ends + bends
    }

    /// 單支表面積
    pub fn area(&self) -> f64 {
        self.length * self.pipe.perimeter()
    }

    /// 單支材料費（客供料為 0）
    pub fn pipe_cost(&self) -> f64 {
        if self.is_ours {
            self.pipe.costs.material * self.length
        } else {
            0.0
        }
    }

    /// 單支搬運費
    pub fn carrying_cost(&self) -> f64 {
        self.pipe.costs.carrying * self.length
    }

    /// 折彎道次（未啟用折彎加工時為 0）
    pub fn bending_count(&self) -> u32 {
        if !self.is_bended {
            return 0;
        }
        self.bent_cuts.iter().map(|c| c.count).sum::<u32>() + self.extra_bending_count
    }

    /// 計算行級價格
    ///
    /// `allocated_cutting_cost` 為上層分攤下來的行級切割成本，
    /// `project_cost` 為分攤的設計費；其餘工費按旗標取行級數值。
    pub fn calculate_price(
        &mut self,
        allocated_cutting_cost: f64,
        project_cost: f64,
        costs: &Costs,
        multipliers: &Multipliers,
    ) -> Price {
        let line = self.count as f64;

        let mut work = allocated_cutting_cost + project_cost;
        if self.is_weld_cleaned {
            work += self.length * line * costs.weld_cleaning;
        }
        if self.is_cleaned {
            work += self.area() * line * costs.cleaning;
        }

        let materials = self.pipe_cost() * line;

        self.price = multipliers.price(work, materials);
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use fabcost_core::{PipeCosts, Side};
    use std::f64::consts::PI;

    fn laser_costs() -> PipeCosts {
        PipeCosts {
            material: 1018.0 / 1000.0,
            incut: 5.0,
            cutting: 34.0 / 1000.0,
            carrying: 75.0 / 1000.0,
        }
    }

    /// 圓管 ø100 × 4500，兩端直角切：切割長度兩個周長，切入 2 次
    #[test]
    fn test_round_tube_two_square_cuts() {
        let pipe = Pipe::round(100.0, 4.0, laser_costs());
        let tube = Tube::new(pipe, 4500.0)
            .with_left_cut(Cut::default())
            .with_right_cut(Cut::default());

        let expected_length = 100.0 * PI * 2.0;
        assert!((tube.cutting_length() - expected_length).abs() < 1e-9);
        assert_eq!(tube.incuts_count(), 2);

        // 2×5 + 628.32×0.034 ≈ 31.36
        let expected_cost = 2.0 * 5.0 + expected_length * 0.034;
        assert!((tube.cutting_cost() - expected_cost).abs() < 1e-9);
        assert!((tube.cutting_cost() - 31.36).abs() < 0.01);
    }

    #[test]
    fn test_hole_contribution() {
        let pipe = Pipe::rect(100.0, 100.0, 4.0, laser_costs());
        let tube = Tube::new(pipe, 647.0)
            .with_hole(Hole::rect(98.0, 398.0))
            .with_hole(Hole::round(8.0).with_count(4));

        let expected = (98.0 + 398.0) * 2.0 + 8.0 * PI * 4.0;
        assert!((tube.cutting_length() - expected).abs() < 1e-9);
        assert_eq!(tube.incuts_count(), 5);
    }

    #[test]
    fn test_welding_length_by_ratio() {
        let pipe = Pipe::rect(100.0, 100.0, 4.0, laser_costs());
        let tube = Tube::new(pipe, 4500.0)
            .with_left_cut(Cut::new(45.0).unwrap().with_welding_ratio(0.5))
            .with_right_cut(Cut::default().with_welding_ratio(1.0));

        let left = pipe.cut_length(&Cut::new(45.0).unwrap()) * 0.5;
        let right = pipe.perimeter();
        assert!((tube.welding_length() - (left + right)).abs() < 1e-9);
    }

    #[test]
    fn test_bent_cut_welds_half_seam() {
        let pipe = Pipe::rect(100.0, 50.0, 3.0, laser_costs());
        let bend = Cut::default().with_side(Side::Height);
        let tube = Tube::new(pipe, 1000.0).with_bent_cut(bend);

        let expected = pipe.bent_cut_length(&bend) / 2.0;
        assert!((tube.welding_length() - expected).abs() < 1e-9);
        assert_eq!(tube.bending_count(), 1);
    }

    #[test]
    fn test_bending_gated_by_flag() {
        let pipe = Pipe::rect(100.0, 50.0, 3.0, laser_costs());
        let mut tube = Tube::new(pipe, 1000.0)
            .with_bent_cut(Cut::default())
            .with_extra_bending_count(2);
        assert_eq!(tube.bending_count(), 3);

        // 折彎切口仍計入切割長度，但道次不計費
        tube.is_bended = false;
        assert_eq!(tube.bending_count(), 0);
        assert!(tube.cutting_length() > 0.0);
    }

    #[test]
    fn test_customer_material_has_no_pipe_cost() {
        let pipe = Pipe::round(30.0, 3.5, laser_costs());
        let ours = Tube::new(pipe, 2000.0);
        let customer = Tube::new(pipe, 2000.0).customer_material();

        assert!((ours.pipe_cost() - 1.018 * 2000.0).abs() < 1e-9);
        assert_eq!(customer.pipe_cost(), 0.0);
    }

    #[test]
    fn test_calculate_price_line_level() {
        let pipe = Pipe::round(100.0, 4.0, laser_costs());
        let mut tube = Tube::new(pipe, 1000.0).with_count(2).weld_cleaned();
        let costs = Costs {
            weld_cleaning: 90.0 / 1000.0,
            ..Default::default()
        };
        let multipliers = Multipliers::new(2.0, 1.3, 1.1, 1.2);

        let price = tube.calculate_price(50.0, 10.0, &costs, &multipliers);

        // 工費 = 50 + 10 + 1000×2×0.09 = 240；材料 = 1.018×1000×2 = 2036
        let work = 240.0;
        let materials = 2036.0;
        assert!((price.cost - (work + materials)).abs() < 1e-9);
        let expected_final = (work * 2.0 + materials * 1.3) * 1.1 * 1.2;
        assert!((price.final_price - expected_final).abs() < 1e-9);
        assert_eq!(tube.price, price);
    }
}
