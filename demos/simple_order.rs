//! 簡單報價示例：單支圓管，兩端直角切

use fabcost::{AssemblyItem, Costs, Cut, Item, Multipliers, Order, Pipe, PipeCosts, Tube};

fn main() -> anyhow::Result<()> {
    println!("=== 簡單報價示例 ===\n");

    // 圓管 ø100 × 4500，雷射切割計費
    let pipe = Pipe::round(
        100.0,
        3.5,
        PipeCosts {
            material: 30.0 / 1000.0,
            incut: 5.0,
            cutting: 34.0 / 1000.0,
            carrying: 75.0 / 1000.0,
        },
    );

    let tube = Tube::new(pipe, 4500.0)
        .with_left_cut(Cut::default())
        .with_right_cut(Cut::default());

    println!("切割長度: {:.2} mm", tube.cutting_length());
    println!("切入次數: {}", tube.incuts_count());
    println!("切割成本: {:.2}", tube.cutting_cost());

    let item = AssemblyItem::new("圓管".to_string()).with_tube(tube);
    let mut order = Order::new(1, "示例訂單".to_string()).with_items(vec![Item::Assembly(item)]);

    let costs = Costs {
        welding: 600.0 / 1000.0,
        ..Default::default()
    };
    let multipliers = Multipliers::new(2.0, 1.3, 1.1, 1.2);

    // 單支管的切割成本不足最低消費，整單補足到 500
    let total = order.calculate(&costs, &multipliers)?;
    println!("\n{order}");
    println!("\n成本 {:.2} -> 報價 {:.2}", total.cost, total.final_price);

    Ok(())
}
