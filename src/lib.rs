//! # Fabcost
//!
//! 金屬加工訂單的成本與報價計算：管組焊件與鈑金件的逐工序計價、
//! 整單最低切割費的按比例分攤、工費/材料費雙通道加價鏈。
//!
//! 使用方式：由下而上組好 `Pipe` → `Tube` → `Item` → `Order` 物件圖，
//! 然後呼叫一次 [`Order::calculate`]，再從各項目讀回工序價格表。

pub use fabcost_calc::{
    AssemblyItem, CuttingAllocation, CuttingAllocator, Item, Operation, Order, SheetItem, Tube,
    DEFAULT_MINIMUM_CUTTING_COST,
};
pub use fabcost_core::{
    Costs, Cut, Hole, HoleShape, Multipliers, Pipe, PipeCosts, Price, QuoteError, Result, Section,
    Side,
};
