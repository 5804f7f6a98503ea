//! 訂單模型與報價主入口

use crate::allocation::CuttingAllocator;
use crate::item::Item;
use chrono::NaiveDate;
use fabcost_core::{Costs, Multipliers, Price, QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 預設最低切割費
pub const DEFAULT_MINIMUM_CUTTING_COST: f64 = 500.0;

/// 訂單：項目清單與整單最低切割費
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// 訂單編號
    pub number: u32,

    /// 訂單名稱
    pub name: String,

    /// 報價日期
    pub date: Option<NaiveDate>,

    /// 整單最低切割費（必須為正數）
    pub minimum_cutting_cost: f64,

    /// 項目清單
    pub items: Vec<Item>,

    /// 計算結果：整單合計（各項目合計 × 數量）
    pub price: Price,
}

impl Order {
    /// 創建新的訂單
    pub fn new(number: u32, name: String) -> Self {
        Self {
            number,
            name,
            date: None,
            minimum_cutting_cost: DEFAULT_MINIMUM_CUTTING_COST,
            items: Vec::new(),
            price: Price::ZERO,
        }
    }

    /// 建構器模式：設置報價日期
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// 建構器模式：設置最低切割費
    pub fn with_minimum_cutting_cost(mut self, minimum: f64) -> Self {
        self.minimum_cutting_cost = minimum;
        self
    }

    /// 建構器模式：設置項目清單
    pub fn with_items(mut self, items: Vec<Item>) -> Self {
        self.items = items;
        self
    }

    /// 添加項目
    pub fn add_item(&mut self, item: impl Into<Item>) {
        self.items.push(item.into());
    }

    /// 整單切入次數
    pub fn incuts_count(&self) -> u32 {
        self.items.iter().map(|i| i.incuts_count() * i.count()).sum()
    }

    /// 整單切割長度
    pub fn cutting_length(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.cutting_length() * i.count() as f64)
            .sum()
    }

    /// 整單原始切割成本
    pub fn cutting_cost(&self) -> f64 {
        self.items
            .iter()
            .map(|i| i.cutting_cost() * i.count() as f64)
            .sum()
    }

    /// 報價主入口：兩趟計算
    ///
    /// 第一趟彙總各項目的原始切割成本並套用整單最低消費；第二趟把
    /// （可能經最低消費調整的）總額按占比攤回各項目，驅動其逐工序計價。
    /// 對固定輸入為純函數：可重跑、結果逐位元一致。
    pub fn calculate(&mut self, costs: &Costs, multipliers: &Multipliers) -> Result<Price> {
        if self.minimum_cutting_cost <= 0.0 {
            return Err(QuoteError::InvalidMinimumCuttingCost(
                self.minimum_cutting_cost,
            ));
        }

        let start_time = std::time::Instant::now();
        tracing::info!("開始訂單 {} 報價計算：項目 {} 筆", self.number, self.items.len());

        // 第一趟：彙總切割成本需求
        let weights: Vec<f64> = self
            .items
            .iter()
            .map(|i| i.cutting_cost() * i.count() as f64)
            .collect();
        let allocation = CuttingAllocator::allocate(&weights, self.minimum_cutting_cost);
        tracing::debug!(
            "切割成本彙總：原始 {:.2}，調整後 {:.2}",
            allocation.raw_total,
            allocation.adjusted_total
        );

        // 第二趟：攤回並逐項目計價
        let floor = self.minimum_cutting_cost;
        let mut total = Price::ZERO;
        for (item, share) in self.items.iter_mut().zip(allocation.shares.iter()) {
            let unit_share = *share / item.count() as f64;
            let item_total = item.calculate_price(unit_share, floor, costs, multipliers)?;
            tracing::debug!("項目「{}」合計 {}", item.name(), item_total);
            total += item_total * item.count() as f64;
        }

        self.price = total;
        tracing::info!(
            "訂單 {} 報價完成：{}，耗時 {:?}",
            self.number,
            total,
            start_time.elapsed()
        );
        Ok(total)
    }
}

impl fmt::Display for Order {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "訂單 #{} {}", self.number, self.name)?;
        if let Some(date) = self.date {
            write!(f, " ({date})")?;
        }
        writeln!(f)?;
        for item in &self.items {
            writeln!(f, "{item}")?;
        }
        write!(f, "整單合計: {}", self.price)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::item::{AssemblyItem, Operation, SheetItem};
    use crate::tube::Tube;
    use fabcost_core::{Cut, Pipe, PipeCosts};

    /// 切入固定費設為整數、長度計費歸零，讓原始切割成本可精確指定
    fn fixed_fee_pipe(incut: f64) -> Pipe {
        Pipe::rect(
            100.0,
            100.0,
            4.0,
            PipeCosts {
                material: 0.0,
                incut,
                cutting: 0.0,
                carrying: 0.0,
            },
        )
    }

    /// 原始切割成本恰為 `incut × 切口數` 的項目
    fn item_with_cutting(name: &str, incut: f64, cuts: u32) -> Item {
        let mut tube = Tube::new(fixed_fee_pipe(incut), 1000.0).with_left_cut(Cut::default());
        if cuts == 2 {
            tube = tube.with_right_cut(Cut::default());
        }
        AssemblyItem::new(name.to_string()).with_tube(tube).into()
    }

    #[test]
    fn test_floor_redistributed_proportionally() {
        // 原始成本 200 + 100 = 300 < 500：攤回 (333.33, 166.67)
        let mut order = Order::new(1, "測試單".to_string())
            .with_items(vec![
                item_with_cutting("甲", 100.0, 2),
                item_with_cutting("乙", 100.0, 1),
            ]);

        order.calculate(&Costs::default(), &Multipliers::default()).unwrap();

        let first = order.items[0].prices()[&Operation::Cutting].cost;
        let second = order.items[1].prices()[&Operation::Cutting].cost;
        assert!((first - 500.0 * 200.0 / 300.0).abs() < 1e-9);
        assert!((second - 500.0 * 100.0 / 300.0).abs() < 1e-9);
        assert!((first + second - 500.0).abs() < 1e-9);
    }

    #[test]
    fn test_no_redistribution_above_floor() {
        // 原始成本 400 + 600 = 1000 > 500：各項目照實入帳，合計守恆
        let mut order = Order::new(2, "測試單".to_string())
            .with_items(vec![
                item_with_cutting("甲", 200.0, 2),
                item_with_cutting("乙", 300.0, 2),
            ]);

        order.calculate(&Costs::default(), &Multipliers::default()).unwrap();

        assert_eq!(order.items[0].prices()[&Operation::Cutting].cost, 400.0);
        assert_eq!(order.items[1].prices()[&Operation::Cutting].cost, 600.0);
    }

    #[test]
    fn test_item_count_scales_weight_not_unit_share() {
        // 數量 2 的項目以行級權重參與分攤，但入帳的是單件口徑
        let mut order = Order::new(3, "測試單".to_string()).with_items(vec![
            Item::from(
                AssemblyItem::new("甲".to_string())
                    .with_count(2)
                    .with_tube(
                        Tube::new(fixed_fee_pipe(300.0), 1000.0).with_left_cut(Cut::default()),
                    ),
            ),
        ]);

        order.calculate(&Costs::default(), &Multipliers::default()).unwrap();

        // 行級 600 > 500：無調整，單件入帳 300，整單合計 600
        assert_eq!(order.items[0].prices()[&Operation::Cutting].cost, 300.0);
        assert_eq!(order.price.cost, 600.0);
    }

    #[test]
    fn test_all_sheet_order_skips_floor() {
        let mut order = Order::new(4, "純鈑金單".to_string()).with_items(vec![
            Item::from(SheetItem::new("法蘭".to_string(), 300.0)),
            Item::from(SheetItem::new("蓋板".to_string(), 150.0)),
        ]);

        let total = order
            .calculate(&Costs::default(), &Multipliers::default())
            .unwrap();

        // 零切割需求：不觸發最低消費，切割項全零
        for item in &order.items {
            assert!(item.prices()[&Operation::Cutting].is_zero());
        }
        assert_eq!(total.cost, 450.0);
    }

    #[test]
    fn test_invalid_minimum_rejected() {
        let mut order = Order::new(5, "壞配置".to_string()).with_minimum_cutting_cost(0.0);

        assert!(matches!(
            order.calculate(&Costs::default(), &Multipliers::default()),
            Err(QuoteError::InvalidMinimumCuttingCost(m)) if m == 0.0
        ));
    }

    #[test]
    fn test_recalculate_is_idempotent() {
        let mut order = Order::new(6, "重算".to_string()).with_items(vec![
            item_with_cutting("甲", 100.0, 2),
            item_with_cutting("乙", 100.0, 1),
        ]);
        let costs = Costs {
            welding: 0.6,
            project_hour: 500.0,
            ..Default::default()
        };
        let multipliers = Multipliers::new(2.0, 1.3, 1.1, 1.2);

        let first = order.calculate(&costs, &multipliers).unwrap();
        let first_maps: Vec<_> = order.items.iter().map(|i| i.prices().clone()).collect();

        let second = order.calculate(&costs, &multipliers).unwrap();
        let second_maps: Vec<_> = order.items.iter().map(|i| i.prices().clone()).collect();

        // 未改動圖的重算須逐位元一致
        assert_eq!(first, second);
        assert_eq!(first_maps, second_maps);
    }
}
