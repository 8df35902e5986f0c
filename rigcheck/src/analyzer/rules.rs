//! The compatibility evaluator: a fixed, ordered set of pure checks.
//!
//! Each check runs independently (no short-circuiting) and only fires when
//! both operand components are present *and* the specific fields it compares
//! are set on both sides. An absent field means "rule does not apply" —
//! a partial build is a legal input and an empty selection is a valid build.
//!
//! The rule set is closed: seven checks, evaluated in a fixed order, so the
//! issue list is deterministic for a given selection.

use serde::Serialize;

use crate::catalog::schema::{BuildSelection, Category};

/// Flat wattage added on top of CPU+GPU TDP to cover motherboard, storage,
/// and fan draw. Only applied once the build actually has a CPU.
pub const BASELINE_DRAW_W: u32 = 75;

/// Headroom multiplier for the PSU sufficiency check: the supply should be
/// rated for at least 1.5x the estimated draw.
const PSU_HEADROOM_NUM: u32 = 3;
const PSU_HEADROOM_DEN: u32 = 2;

/// Result of evaluating one build selection.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct EvaluationResult {
    pub is_valid: bool,
    /// Human-readable issues, in rule-evaluation order.
    pub issues: Vec<String>,
    pub estimated_power_w: u32,
}

/// Estimate total power draw in watts.
///
/// CPU and GPU contribute their TDP when set; a present CPU additionally
/// anchors a flat [`BASELINE_DRAW_W`] for the rest of the system.
pub fn estimate_power(selection: &BuildSelection) -> u32 {
    let cpu = selection.get(Category::Cpu);
    let gpu = selection.get(Category::Gpu);

    let mut total = 0;
    if let Some(tdp) = cpu.and_then(|c| c.tdp) {
        total += tdp;
    }
    if let Some(tdp) = gpu.and_then(|g| g.tdp) {
        total += tdp;
    }
    if cpu.is_some() {
        total += BASELINE_DRAW_W;
    }
    total
}

/// Evaluate a build selection against the full rule set.
///
/// Pure and infallible: missing categories skip the rules that involve them,
/// and the power estimate is computed and returned even when the build has
/// compatibility issues.
pub fn evaluate(selection: &BuildSelection) -> EvaluationResult {
    let estimated_power_w = estimate_power(selection);
    let mut issues = Vec::new();

    check_socket_match(selection, &mut issues);
    check_ram_type(selection, &mut issues);
    check_ram_speed(selection, &mut issues);
    check_psu_wattage(selection, estimated_power_w, &mut issues);
    check_gpu_clearance(selection, &mut issues);
    check_cooler_clearance(selection, &mut issues);
    check_cooler_capacity(selection, &mut issues);

    EvaluationResult {
        is_valid: issues.is_empty(),
        issues,
        estimated_power_w,
    }
}

fn check_socket_match(selection: &BuildSelection, issues: &mut Vec<String>) {
    let cpu = selection.get(Category::Cpu);
    let mb = selection.get(Category::Motherboard);
    if let (Some(cpu_socket), Some(mb_socket)) = (
        cpu.and_then(|c| c.socket.as_deref()),
        mb.and_then(|m| m.socket.as_deref()),
    ) {
        if cpu_socket != mb_socket {
            issues.push("CPU and Motherboard sockets do not match".to_string());
        }
    }
}

fn check_ram_type(selection: &BuildSelection, issues: &mut Vec<String>) {
    let mb = selection.get(Category::Motherboard);
    let ram = selection.get(Category::Ram);
    if let (Some(mb_type), Some(ram_type)) = (
        mb.and_then(|m| m.ram_type.as_deref()),
        ram.and_then(|r| r.ram_type.as_deref()),
    ) {
        if mb_type != ram_type {
            issues.push("RAM type incompatible with Motherboard".to_string());
        }
    }
}

// Faster-than-rated RAM would usually just downclock, but it is flagged as
// incompatible on purpose: the checker is conservative about mismatched
// spec sheets.
fn check_ram_speed(selection: &BuildSelection, issues: &mut Vec<String>) {
    let mb = selection.get(Category::Motherboard);
    let ram = selection.get(Category::Ram);
    if let (Some(mb_speed), Some(ram_speed)) = (
        mb.and_then(|m| m.ram_speed),
        ram.and_then(|r| r.ram_speed),
    ) {
        if ram_speed > mb_speed {
            issues.push("RAM speed exceeds motherboard maximum".to_string());
        }
    }
}

fn check_psu_wattage(selection: &BuildSelection, estimated_power_w: u32, issues: &mut Vec<String>) {
    if let Some(wattage) = selection.get(Category::Psu).and_then(|p| p.psu_wattage) {
        let required = estimated_power_w * PSU_HEADROOM_NUM / PSU_HEADROOM_DEN;
        if wattage < required {
            issues.push(format!("PSU wattage may be insufficient (needs ~{required}W)"));
        }
    }
}

fn check_gpu_clearance(selection: &BuildSelection, issues: &mut Vec<String>) {
    let case = selection.get(Category::Case);
    let gpu = selection.get(Category::Gpu);
    if let (Some(max_length), Some(length)) = (
        case.and_then(|c| c.case_gpu_max_length_mm),
        gpu.and_then(|g| g.gpu_length_mm),
    ) {
        if length > max_length {
            issues.push("GPU may not fit in the case (length)".to_string());
        }
    }
}

fn check_cooler_clearance(selection: &BuildSelection, issues: &mut Vec<String>) {
    let case = selection.get(Category::Case);
    let cooler = selection.get(Category::Cooler);
    if let (Some(max_height), Some(height)) = (
        case.and_then(|c| c.case_cooler_max_height_mm),
        cooler.and_then(|c| c.cooler_height_mm),
    ) {
        if height > max_height {
            issues.push("Cooler may be too tall for the case".to_string());
        }
    }
}

fn check_cooler_capacity(selection: &BuildSelection, issues: &mut Vec<String>) {
    let cooler = selection.get(Category::Cooler);
    let cpu = selection.get(Category::Cpu);
    if let (Some(rating), Some(tdp)) = (
        cooler.and_then(|c| c.cooler_tdp_rating),
        cpu.and_then(|c| c.tdp),
    ) {
        if rating < tdp {
            issues.push("Cooler TDP rating may be insufficient for CPU".to_string());
        }
    }
}

/// Static description of one compatibility rule, for listings.
pub struct RuleInfo {
    pub id: &'static str,
    pub summary: &'static str,
    pub detail: &'static str,
}

/// The full rule set, in evaluation order.
pub const RULES: &[RuleInfo] = &[
    RuleInfo {
        id: "socket_match",
        summary: "CPU and motherboard socket match",
        detail: "Sockets must be identical strings (e.g. AM4 vs LGA1700)",
    },
    RuleInfo {
        id: "ram_type",
        summary: "RAM type matches motherboard",
        detail: "DDR generation must match (DDR4 RAM on a DDR4 board)",
    },
    RuleInfo {
        id: "ram_speed",
        summary: "RAM speed within motherboard maximum",
        detail: "RAM rated faster than the board maximum is flagged",
    },
    RuleInfo {
        id: "psu_wattage",
        summary: "PSU wattage sufficient",
        detail: "PSU must be rated for at least 1.5x the estimated draw",
    },
    RuleInfo {
        id: "gpu_clearance",
        summary: "GPU fits the case",
        detail: "GPU length must not exceed the case GPU clearance",
    },
    RuleInfo {
        id: "cooler_clearance",
        summary: "Cooler fits the case",
        detail: "Cooler height must not exceed the case cooler clearance",
    },
    RuleInfo {
        id: "cooler_capacity",
        summary: "Cooler rated for CPU TDP",
        detail: "Cooler TDP rating must cover the CPU TDP",
    },
];
