//! 完整報價示例：管組焊件 + 鈑金子件 + 最低切割費分攤

use chrono::NaiveDate;
use fabcost::{
    AssemblyItem, Costs, Cut, Hole, Item, Multipliers, Order, Pipe, PipeCosts, Result, SheetItem,
    Tube,
};

fn beam(pipe: Pipe, length: f64) -> Result<Tube> {
    Ok(Tube::new(pipe, length)
        .weld_cleaned()
        .cleaned()
        .with_left_cut(Cut::new(45.0)?.with_welding_ratio(0.5))
        .with_right_cut(Cut::default().with_welding_ratio(1.0))
        .with_hole(Hole::rect(98.0, 398.0))
        .with_hole(Hole::round(8.0).with_count(4)))
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    // 方管 100×100×4
    let pipe = Pipe::rect(
        100.0,
        100.0,
        4.0,
        PipeCosts {
            material: 1018.0 / 1000.0,
            incut: 5.0,
            cutting: 34.0 / 1000.0,
            carrying: 75.0 / 1000.0,
        },
    );

    let costs = Costs {
        welding: 600.0 / 1000.0,
        sundry: 5.0,
        cleaning: 1000.0 / 1_000_000.0,
        weld_cleaning: 90.0 / 1000.0,
        painting: 260.0 / 1_000_000.0,
        paint: 280.0 / 1_000_000.0,
        riveting: 10.0,
        bending: 15.0,
        countersink: 8.0,
        threading: 12.0,
        project_hour: 500.0,
        drying: 100.0 / 1_000_000.0,
    };
    let multipliers = Multipliers::new(2.0, 1.3, 1.1, 1.2);

    let item = AssemblyItem::new("主梁 4500".to_string())
        .with_count(13)
        .with_project_hours(1.0)
        .with_transport_cost(450.0)
        .painted()
        .weld_cleaned()
        .with_tube(beam(pipe, 4500.0)?)
        .with_tube(beam(pipe, 647.0)?)
        .with_sheet(SheetItem::new("法蘭".to_string(), 300.0).with_area(90_000.0))
        .with_sheet(SheetItem::new("封板".to_string(), 150.0).with_area(10_000.0))
        .with_sheet(
            SheetItem::new("支架".to_string(), 75.0)
                .with_area(30_000.0)
                .with_bending(2)
                .with_sundries(4)
                .with_riveting(4),
        );

    let mut order = Order::new(1, "樣品架".to_string())
        .with_date(NaiveDate::from_ymd_opt(2026, 8, 7).expect("合法日期"))
        .with_items(vec![Item::Assembly(item)]);

    order.calculate(&costs, &multipliers)?;
    println!("{order}\n");

    // 報價圖可直接序列化存檔
    println!("{}", serde_json::to_string_pretty(&order)?);

    Ok(())
}
