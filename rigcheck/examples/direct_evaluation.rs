//! Example: assembling a selection in code and calling the evaluator
//! directly (no catalog file, no build file).

use rigcheck::{evaluate, BuildSelection, Category, Component};

fn main() {
    let mut cpu = Component::new("cpu-9800x3d", "AMD Ryzen 7 9800X3D", Category::Cpu);
    cpu.socket = Some("AM5".to_string());
    cpu.tdp = Some(120);

    let mut mb = Component::new("mb-x670e", "ASUS ROG STRIX X670E-E", Category::Motherboard);
    mb.socket = Some("AM5".to_string());
    mb.ram_type = Some("DDR5".to_string());
    mb.ram_speed = Some(6400);

    let mut psu = Component::new("psu-550", "Generic 550W", Category::Psu);
    psu.psu_wattage = Some(550);

    let mut gpu = Component::new("gpu-4080", "NVIDIA RTX 4080 Super", Category::Gpu);
    gpu.tdp = Some(320);
    gpu.gpu_length_mm = Some(310);

    let selection = BuildSelection::new().with(cpu).with(mb).with(psu).with(gpu);
    let result = evaluate(&selection);

    println!(
        "Estimated draw: {}W across {} components",
        result.estimated_power_w,
        selection.len()
    );
    for issue in &result.issues {
        println!("  [issue] {}", issue);
    }
    if result.is_valid {
        println!("No compatibility issues found.");
    } else {
        std::process::exit(1);
    }
}
