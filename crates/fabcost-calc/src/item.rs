//! 訂單項目模型：管組焊件與鈑金件

use crate::allocation::CuttingAllocator;
use crate::tube::Tube;
use fabcost_core::{Costs, Multipliers, Price, QuoteError, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// 工序名稱（價格表鍵，宣告順序即報表順序）
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum Operation {
    /// 切割
    Cutting,
    /// 管材
    Pipe,
    /// 板材
    Sheet,
    /// 焊接
    Welding,
    /// 折彎
    Bending,
    /// 鉚接
    Riveting,
    /// 焊縫清理
    WeldCleaning,
    /// 運輸
    Transport,
    /// 設計
    Project,
    /// 清潔
    Cleaning,
    /// 噴漆
    Painting,
    /// 烘乾
    Drying,
    /// 雜項輔料
    Sundries,
    /// 搬運
    Carrying,
    /// 沉孔
    Countersink,
    /// 攻牙
    Threading,
    /// 合計
    Total,
}

impl Operation {
    /// 報表用中文名稱
    pub fn label(&self) -> &'static str {
        match self {
            Operation::Cutting => "切割",
            Operation::Pipe => "管材",
            Operation::Sheet => "板材",
            Operation::Welding => "焊接",
            Operation::Bending => "折彎",
            Operation::Riveting => "鉚接",
            Operation::WeldCleaning => "焊縫清理",
            Operation::Transport => "運輸",
            Operation::Project => "設計",
            Operation::Cleaning => "清潔",
            Operation::Painting => "噴漆",
            Operation::Drying => "烘乾",
            Operation::Sundries => "雜項輔料",
            Operation::Carrying => "搬運",
            Operation::Countersink => "沉孔",
            Operation::Threading => "攻牙",
            Operation::Total => "合計",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// 每件雜項焊縫折算的焊縫長度
const SUNDRY_WELD_LENGTH: f64 = 10.0;

/// 共用工序的計價輸入（單件口徑）
struct CommonOps {
    welding_length: f64,
    bending_count: u32,
    riveting_count: u32,
    sundries_count: u32,
    countersink_count: u32,
    threading_count: u32,
    area: f64,
    cleaned_area: f64,
    transport_cost: f64,
    project_hours: f64,
    units: f64,
    is_painted: bool,
}

/// 填入兩種項目共用的工序價格
fn price_common_operations(
    prices: &mut BTreeMap<Operation, Price>,
    ops: &CommonOps,
    costs: &Costs,
    multipliers: &Multipliers,
) {
    prices.insert(
        Operation::Welding,
        multipliers.price(ops.welding_length * costs.welding, 0.0),
    );
    prices.insert(
        Operation::Bending,
        multipliers.price(ops.bending_count as f64 * costs.bending, 0.0),
    );
    prices.insert(
        Operation::Riveting,
        multipliers.price(ops.riveting_count as f64 * costs.riveting, 0.0),
    );
    prices.insert(
        Operation::Transport,
        multipliers.price(ops.transport_cost / ops.units, 0.0),
    );
    prices.insert(
        Operation::Project,
        multipliers.price(costs.project_hour * ops.project_hours / ops.units, 0.0),
    );
    prices.insert(
        Operation::Cleaning,
        multipliers.price(ops.cleaned_area * costs.cleaning, 0.0),
    );
    if ops.is_painted {
        // 噴漆是唯一同時走工費與材料費兩條係數通道的工序
        prices.insert(
            Operation::Painting,
            multipliers.price(ops.area * costs.painting, ops.area * costs.paint),
        );
        prices.insert(
            Operation::Drying,
            multipliers.price(ops.area * costs.drying, 0.0),
        );
    } else {
        prices.insert(Operation::Painting, Price::ZERO);
        prices.insert(Operation::Drying, Price::ZERO);
    }
    prices.insert(
        Operation::Sundries,
        multipliers.price(0.0, ops.sundries_count as f64 * costs.sundry),
    );
    prices.insert(
        Operation::Countersink,
        multipliers.price(ops.countersink_count as f64 * costs.countersink, 0.0),
    );
    prices.insert(
        Operation::Threading,
        multipliers.price(ops.threading_count as f64 * costs.threading, 0.0),
    );
}

/// 切割工序的入帳成本
///
/// 有分攤額（項目確有切割需求）時照實入帳——最低消費已在訂單層按比例
/// 折入分攤額；無切割需求的項目依豁免旗標決定記 0 或記整筆最低消費。
fn cutting_line(allocated: f64, floor: f64, exempt: bool) -> f64 {
    if allocated > 0.0 {
        allocated
    } else if exempt {
        0.0
    } else {
        floor
    }
}

/// 鈑金件：面積與材料費直接給定，無切割需求
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SheetItem {
    /// 名稱
    pub name: String,

    /// 數量（整個項目的倍數，至少 1）
    pub count: u32,

    /// 板材材料費（單件）
    pub sheet_cost: f64,

    /// 板材面積（單件）
    pub sheet_area: f64,

    /// 是否噴漆
    pub is_painted: bool,

    /// 是否清潔
    pub is_cleaned: bool,

    /// 設計工時（整個項目，按數量攤提）
    pub project_hours: f64,

    /// 運輸費（整個項目，按數量攤提）
    pub transport_cost: f64,

    /// 手工指定的焊縫長度
    pub welding_length: f64,

    /// 雜項輔料件數
    pub sundries_count: u32,

    /// 雜項焊縫件數（每件折算 10 單位焊縫長度）
    pub sundry_welding_count: u32,

    /// 鉚接處數
    pub riveting_count: u32,

    /// 折彎道次
    pub bending_count: u32,

    /// 沉孔數
    pub countersink_count: u32,

    /// 攻牙數
    pub threading_count: u32,

    /// 是否豁免最低切割費（預設豁免：零切割需求不收最低消費）
    pub exempt_from_cutting_floor: bool,

    /// 計算結果：工序 → 價格
    pub prices: BTreeMap<Operation, Price>,
}

impl SheetItem {
    /// 創建新的鈑金件
    pub fn new(name: String, sheet_cost: f64) -> Self {
        Self {
            name,
            count: 1,
            sheet_cost,
            sheet_area: 0.0,
            is_painted: false,
            is_cleaned: false,
            project_hours: 0.0,
            transport_cost: 0.0,
            welding_length: 0.0,
            sundries_count: 0,
            sundry_welding_count: 0,
            riveting_count: 0,
            bending_count: 0,
            countersink_count: 0,
            threading_count: 0,
            exempt_from_cutting_floor: true,
            prices: BTreeMap::new(),
        }
    }

    /// 建構器模式：設置數量（至少 1）
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count.max(1);
        self
    }

    /// 建構器模式：設置面積
    pub fn with_area(mut self, area: f64) -> Self {
        self.sheet_area = area;
        self
    }

    /// 建構器模式：設置噴漆
    pub fn painted(mut self) -> Self {
        self.is_painted = true;
        self
    }

    /// 建構器模式：設置清潔
    pub fn cleaned(mut self) -> Self {
        self.is_cleaned = true;
        self
    }

    /// 建構器模式：設置設計工時
    pub fn with_project_hours(mut self, hours: f64) -> Self {
        self.project_hours = hours;
        self
    }

    /// 建構器模式：設置運輸費
    pub fn with_transport_cost(mut self, cost: f64) -> Self {
        self.transport_cost = cost;
        self
    }

    /// 建構器模式：設置手工焊縫長度
    pub fn with_welding_length(mut self, length: f64) -> Self {
        self.welding_length = length;
        self
    }

    /// 建構器模式：設置雜項輔料件數
    pub fn with_sundries(mut self, count: u32) -> Self {
        self.sundries_count = count;
        self
    }

    /// 建構器模式：設置雜項焊縫件數
    pub fn with_sundry_welding(mut self, count: u32) -> Self {
        self.sundry_welding_count = count;
        self
    }

    /// 建構器模式：設置鉚接處數
    pub fn with_riveting(mut self, count: u32) -> Self {
        self.riveting_count = count;
        self
    }

    /// 建構器模式：設置折彎道次
    pub fn with_bending(mut self, count: u32) -> Self {
        self.bending_count = count;
        self
    }

    /// 建構器模式：設置沉孔數
    pub fn with_countersink(mut self, count: u32) -> Self {
        self.countersink_count = count;
        self
    }

    /// 建構器模式：設置攻牙數
    pub fn with_threading(mut self, count: u32) -> Self {
        self.threading_count = count;
        self
    }

    /// 建構器模式：設置最低切割費豁免
    pub fn with_cutting_floor_exempt(mut self, exempt: bool) -> Self {
        self.exempt_from_cutting_floor = exempt;
        self
    }

    /// 單件面積
    pub fn area(&self) -> f64 {
        self.sheet_area
    }

    /// 單件焊縫長度合計（手工指定 + 雜項焊縫折算）
    pub fn total_welding_length(&self) -> f64 {
        self.welding_length + self.sundry_welding_count as f64 * SUNDRY_WELD_LENGTH
    }

    /// 計算單件各工序價格
    pub fn calculate_price(
        &mut self,
        allocated_cutting_cost: f64,
        cutting_floor: f64,
        costs: &Costs,
        multipliers: &Multipliers,
    ) -> Result<Price> {
        if self.is_painted && self.sheet_area <= 0.0 {
            return Err(QuoteError::PaintedWithoutArea(self.name.clone()));
        }

        let mut prices = BTreeMap::new();

        let cutting = cutting_line(
            allocated_cutting_cost,
            cutting_floor,
            self.exempt_from_cutting_floor,
        );
        prices.insert(Operation::Cutting, multipliers.price(cutting, 0.0));
        prices.insert(Operation::Sheet, multipliers.price(0.0, self.sheet_cost));

        let common = CommonOps {
            welding_length: self.total_welding_length(),
            bending_count: self.bending_count,
            riveting_count: self.riveting_count,
            sundries_count: self.sundries_count,
            countersink_count: self.countersink_count,
            threading_count: self.threading_count,
            area: self.sheet_area,
            cleaned_area: if self.is_cleaned { self.sheet_area } else { 0.0 },
            transport_cost: self.transport_cost,
            project_hours: self.project_hours,
            units: self.count.max(1) as f64,
            is_painted: self.is_painted,
        };
        price_common_operations(&mut prices, &common, costs, multipliers);

        let total: Price = prices.values().copied().sum();
        prices.insert(Operation::Total, total);
        self.prices = prices;
        Ok(total)
    }

    /// 單件合計價格
    pub fn total(&self) -> Price {
        self.prices
            .get(&Operation::Total)
            .copied()
            .unwrap_or_default()
    }
}

/// 管組焊件：擁有管件與鈑金子件，工序量由下而上彙總
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssemblyItem {
    /// 名稱
    pub name: String,

    /// 數量（整個項目的倍數，至少 1）
    pub count: u32,

    /// 管件清單
    pub tubes: Vec<Tube>,

    /// 鈑金子件清單
    pub sheets: Vec<SheetItem>,

    /// 是否噴漆
    pub is_painted: bool,

    /// 是否清潔（涵蓋所有管件與子件面積）
    pub is_cleaned: bool,

    /// 是否焊縫清理（涵蓋所有管件）
    pub is_weld_cleaned: bool,

    /// 設計工時（整個項目，按數量攤提）
    pub project_hours: f64,

    /// 運輸費（整個項目，按數量攤提）
    pub transport_cost: f64,

    /// 手工指定的焊縫長度
    pub welding_length: f64,

    /// 項目層級的雜項輔料件數
    pub sundries_count: u32,

    /// 雜項焊縫件數（每件折算 10 單位焊縫長度）
    pub sundry_welding_count: u32,

    /// 項目層級的鉚接處數
    pub riveting_count: u32,

    /// 項目層級的折彎道次
    pub bending_count: u32,

    /// 項目層級的沉孔數
    pub countersink_count: u32,

    /// 項目層級的攻牙數
    pub threading_count: u32,

    /// 是否豁免最低切割費（預設豁免）
    pub exempt_from_cutting_floor: bool,

    /// 計算結果：工序 → 價格
    pub prices: BTreeMap<Operation, Price>,
}

impl AssemblyItem {
    /// 創建新的管組焊件
    pub fn new(name: String) -> Self {
        Self {
            name,
            count: 1,
            tubes: Vec::new(),
            sheets: Vec::new(),
            is_painted: false,
            is_cleaned: false,
            is_weld_cleaned: false,
            project_hours: 0.0,
            transport_cost: 0.0,
            welding_length: 0.0,
            sundries_count: 0,
            sundry_welding_count: 0,
            riveting_count: 0,
            bending_count: 0,
            countersink_count: 0,
            threading_count: 0,
            exempt_from_cutting_floor: true,
            prices: BTreeMap::new(),
        }
    }

    /// 建構器模式：設置數量（至少 1）
    pub fn with_count(mut self, count: u32) -> Self {
        self.count = count.max(1);
        self
    }

    /// 建構器模式：添加管件
    pub fn with_tube(mut self, tube: Tube) -> Self {
        self.tubes.push(tube);
        self
    }

    /// 建構器模式：添加鈑金子件
    pub fn with_sheet(mut self, sheet: SheetItem) -> Self {
        self.sheets.push(sheet);
        self
    }

    /// 建構器模式：設置噴漆
    pub fn painted(mut self) -> Self {
        self.is_painted = true;
        self
    }

    /// 建構器模式：設置清潔
    pub fn cleaned(mut self) -> Self {
        self.is_cleaned = true;
        self
    }

    /// 建構器模式：設置焊縫清理
    pub fn weld_cleaned(mut self) -> Self {
        self.is_weld_cleaned = true;
        self
    }

    /// 建構器模式：設置設計工時
    pub fn with_project_hours(mut self, hours: f64) -> Self {
        self.project_hours = hours;
        self
    }

    /// 建構器模式：設置運輸費
    pub fn with_transport_cost(mut self, cost: f64) -> Self {
        self.transport_cost = cost;
        self
    }

    /// 建構器模式：設置手工焊縫長度
    pub fn with_welding_length(mut self, length: f64) -> Self {
        self.welding_length = length;
        self
    }

    /// 建構器模式：設置雜項輔料件數
    pub fn with_sundries(mut self, count: u32) -> Self {
        self.sundries_count = count;
        self
    }

    /// 建構器模式：設置雜項焊縫件數
    pub fn with_sundry_welding(mut self, count: u32) -> Self {
        self.sundry_welding_count = count;
        self
    }

    /// 建構器模式：設置鉚接處數
    pub fn with_riveting(mut self, count: u32) -> Self {
        self.riveting_count = count;
        self
    }

    /// 建構器模式：設置折彎道次
    pub fn with_bending(mut self, count: u32) -> Self {
        self.bending_count = count;
        self
    }

    /// 建構器模式：設置沉孔數
    pub fn with_countersink(mut self, count: u32) -> Self {
        self.countersink_count = count;
        self
    }

    /// 建構器模式：設置攻牙數
    pub fn with_threading(mut self, count: u32) -> Self {
        self.threading_count = count;
        self
    }

    /// 建構器模式：設置最低切割費豁免
    pub fn with_cutting_floor_exempt(mut self, exempt: bool) -> Self {
        self.exempt_from_cutting_floor = exempt;
        self
    }

    /// 添加管件
    pub fn add_tube(&mut self, tube: Tube) {
        self.tubes.push(tube);
    }

    /// 添加鈑金子件
    pub fn add_sheet(&mut self, sheet: SheetItem) {
        self.sheets.push(sheet);
    }

    /// 單件總切割長度
    pub fn cutting_length(&self) -> f64 {
        self.tubes
            .iter()
            .map(|t| t.cutting_length() * t.count as f64)
            .sum()
    }

    /// 單件原始切割成本
    pub fn cutting_cost(&self) -> f64 {
        self.tubes
            .iter()
            .map(|t| t.cutting_cost() * t.count as f64)
            .sum()
    }

    /// 單件切入次數
    pub fn incuts_count(&self) -> u32 {
        self.tubes.iter().map(|t| t.incuts_count() * t.count).sum()
    }

    /// 單件焊縫長度合計：管件 + 子件 + 手工指定 + 雜項焊縫折算
    pub fn total_welding_length(&self) -> f64 {
        let tubes: f64 = self
            .tubes
            .iter()
            .map(|t| t.welding_length() * t.count as f64)
            .sum();
        let sheets: f64 = self
            .sheets
            .iter()
            .map(|s| s.total_welding_length() * s.count as f64)
            .sum();
        tubes
            + sheets
            + self.welding_length
            + self.sundry_welding_count as f64 * SUNDRY_WELD_LENGTH
    }

    /// 單件表面積：管件 + 子件
    pub fn area(&self) -> f64 {
        let tubes: f64 = self.tubes.iter().map(|t| t.area() * t.count as f64).sum();
        let sheets: f64 = self
            .sheets
            .iter()
            .map(|s| s.sheet_area * s.count as f64)
            .sum();
        tubes + sheets
    }

    /// 單件折彎道次合計
    pub fn total_bending_count(&self) -> u32 {
        let tubes: u32 = self.tubes.iter().map(|t| t.bending_count() * t.count).sum();
        let sheets: u32 = self.sheets.iter().map(|s| s.bending_count * s.count).sum();
        self.bending_count + tubes + sheets
    }

    /// 單件鉚接處數合計
    pub fn total_riveting_count(&self) -> u32 {
        let sheets: u32 = self.sheets.iter().map(|s| s.riveting_count * s.count).sum();
        self.riveting_count + sheets
    }

    /// 單件雜項輔料件數合計
    pub fn total_sundries_count(&self) -> u32 {
        let sheets: u32 = self.sheets.iter().map(|s| s.sundries_count * s.count).sum();
        self.sundries_count + sheets
    }

    /// 單件沉孔數合計
    pub fn total_countersink_count(&self) -> u32 {
        let sheets: u32 = self
            .sheets
            .iter()
            .map(|s| s.countersink_count * s.count)
            .sum();
        self.countersink_count + sheets
    }

    /// 單件攻牙數合計
    pub fn total_threading_count(&self) -> u32 {
        let sheets: u32 = self.sheets.iter().map(|s| s.threading_count * s.count).sum();
        self.threading_count + sheets
    }

    /// 需焊縫清理的管長（項目旗標涵蓋全部管件，管件旗標單獨加入）
    fn weld_cleaned_length(&self) -> f64 {
        self.tubes
            .iter()
            .filter(|t| self.is_weld_cleaned || t.is_weld_cleaned)
            .map(|t| t.length * t.count as f64)
            .sum()
    }

    /// 需清潔的面積
    fn cleaned_area(&self) -> f64 {
        let tubes: f64 = self
            .tubes
            .iter()
            .filter(|t| self.is_cleaned || t.is_cleaned)
            .map(|t| t.area() * t.count as f64)
            .sum();
        let sheets: f64 = if self.is_cleaned {
            self.sheets
                .iter()
                .map(|s| s.sheet_area * s.count as f64)
                .sum()
        } else {
            0.0
        };
        tubes + sheets
    }

    /// 計算單件各工序價格
    ///
    /// 先遞迴計算鈑金子件（無切割分攤），再把自身分攤到的切割成本按
    /// 比例下發給各管件，最後逐工序入帳並彙總。
    pub fn calculate_price(
        &mut self,
        allocated_cutting_cost: f64,
        cutting_floor: f64,
        costs: &Costs,
        multipliers: &Multipliers,
    ) -> Result<Price> {
        for sheet in &mut self.sheets {
            sheet.calculate_price(0.0, cutting_floor, costs, multipliers)?;
        }

        if self.is_painted {
            for sheet in &self.sheets {
                if sheet.sheet_area <= 0.0 {
                    return Err(QuoteError::PaintedWithoutArea(sheet.name.clone()));
                }
            }
            if self.area() <= 0.0 {
                return Err(QuoteError::PaintedWithoutArea(self.name.clone()));
            }
        }

        let mut prices = BTreeMap::new();

        let cutting = cutting_line(
            allocated_cutting_cost,
            cutting_floor,
            self.exempt_from_cutting_floor,
        );
        prices.insert(Operation::Cutting, multipliers.price(cutting, 0.0));

        let units = self.count.max(1) as f64;
        let project_unit_cost = costs.project_hour * self.project_hours / units;

        // 切割分攤與設計費下發到管件，供逐行報表使用
        let weights: Vec<f64> = self
            .tubes
            .iter()
            .map(|t| t.cutting_cost() * t.count as f64)
            .collect();
        let tube_shares = CuttingAllocator::distribute(cutting, &weights);
        let project_share = if self.tubes.is_empty() {
            0.0
        } else {
            project_unit_cost / self.tubes.len() as f64
        };
        for (tube, share) in self.tubes.iter_mut().zip(tube_shares) {
            tube.calculate_price(share, project_share, costs, multipliers);
        }

        let pipe_materials: f64 = self
            .tubes
            .iter()
            .map(|t| t.pipe_cost() * t.count as f64)
            .sum();
        prices.insert(Operation::Pipe, multipliers.price(0.0, pipe_materials));

        let sheet_materials: f64 = self
            .sheets
            .iter()
            .map(|s| s.sheet_cost * s.count as f64)
            .sum();
        prices.insert(Operation::Sheet, multipliers.price(0.0, sheet_materials));

        prices.insert(
            Operation::WeldCleaning,
            multipliers.price(self.weld_cleaned_length() * costs.weld_cleaning, 0.0),
        );

        let carrying: f64 = self
            .tubes
            .iter()
            .map(|t| t.carrying_cost() * t.count as f64)
            .sum();
        prices.insert(Operation::Carrying, multipliers.price(carrying, 0.0));

        let common = CommonOps {
            welding_length: self.total_welding_length(),
            bending_count: self.total_bending_count(),
            riveting_count: self.total_riveting_count(),
            sundries_count: self.total_sundries_count(),
            countersink_count: self.total_countersink_count(),
            threading_count: self.total_threading_count(),
            area: self.area(),
            cleaned_area: self.cleaned_area(),
            transport_cost: self.transport_cost,
            project_hours: self.project_hours,
            units,
            is_painted: self.is_painted,
        };
        price_common_operations(&mut prices, &common, costs, multipliers);

        let total: Price = prices.values().copied().sum();
        prices.insert(Operation::Total, total);
        self.prices = prices;
        Ok(total)
    }

    /// 單件合計價格
    pub fn total(&self) -> Price {
        self.prices
            .get(&Operation::Total)
            .copied()
            .unwrap_or_default()
    }
}

/// 訂單項目：管組焊件或鈑金件
#[derive(Debug, Clone, Serialize, Deserialize)]
pub enum Item {
    /// 管組焊件
    Assembly(AssemblyItem),
    /// 鈑金件
    Sheet(SheetItem),
}

impl Item {
    /// 名稱
    pub fn name(&self) -> &str {
        match self {
            Item::Assembly(item) => &item.name,
            Item::Sheet(item) => &item.name,
        }
    }

    /// 數量
    pub fn count(&self) -> u32 {
        match self {
            Item::Assembly(item) => item.count,
            Item::Sheet(item) => item.count,
        }
    }

    /// 單件原始切割成本（鈑金件恆為 0）
    pub fn cutting_cost(&self) -> f64 {
        match self {
            Item::Assembly(item) => item.cutting_cost(),
            Item::Sheet(_) => 0.0,
        }
    }

    /// 單件總切割長度（鈑金件恆為 0）
    pub fn cutting_length(&self) -> f64 {
        match self {
            Item::Assembly(item) => item.cutting_length(),
            Item::Sheet(_) => 0.0,
        }
    }

    /// 單件切入次數（鈑金件恆為 0）
    pub fn incuts_count(&self) -> u32 {
        match self {
            Item::Assembly(item) => item.incuts_count(),
            Item::Sheet(_) => 0,
        }
    }

    /// 計算單件各工序價格
    pub fn calculate_price(
        &mut self,
        allocated_cutting_cost: f64,
        cutting_floor: f64,
        costs: &Costs,
        multipliers: &Multipliers,
    ) -> Result<Price> {
        match self {
            Item::Assembly(item) => {
                item.calculate_price(allocated_cutting_cost, cutting_floor, costs, multipliers)
            }
            Item::Sheet(item) => {
                item.calculate_price(allocated_cutting_cost, cutting_floor, costs, multipliers)
            }
        }
    }

    /// 工序價格表
    pub fn prices(&self) -> &BTreeMap<Operation, Price> {
        match self {
            Item::Assembly(item) => &item.prices,
            Item::Sheet(item) => &item.prices,
        }
    }

    /// 單件合計價格
    pub fn total(&self) -> Price {
        match self {
            Item::Assembly(item) => item.total(),
            Item::Sheet(item) => item.total(),
        }
    }
}

impl From<AssemblyItem> for Item {
    fn from(item: AssemblyItem) -> Self {
        Item::Assembly(item)
    }
}

impl From<SheetItem> for Item {
    fn from(item: SheetItem) -> Self {
        Item::Sheet(item)
    }
}

impl fmt::Display for Item {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.count() > 1 {
            writeln!(f, "{} x {}", self.name(), self.count())?;
        } else {
            writeln!(f, "{}", self.name())?;
        }
        for (operation, price) in self.prices() {
            if *operation == Operation::Total || price.is_zero() {
                continue;
            }
            writeln!(f, "  {operation}: {price}")?;
        }
        write!(f, "  {}: {}", Operation::Total, self.total())
    }
}
