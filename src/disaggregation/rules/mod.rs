//! Built-in disaggregation rules.
//!
//! # Categories
//!
//! - **Enabling works**: asbestos, demolition
//! - **Structure**: piling, RC frame, scaffold
//! - **Envelope**: SFS inner skin, masonry, windows, roofing
//! - **Fit-out**: flat fit-out, communal areas, electrical, plumbing
//! - **External**: external works
//! - **Fallback**: general construction
//!
//! # Location Extraction
//! Some rules pull a floor or level label out of the row name. When the
//! pattern misses, a fixed placeholder is used instead.
//!
//! # Phasing
//! Multi-task rules lay their tasks out as fractions of the row's date
//! range (see [`crate::models::DateRange::slice`]). Later phases carry a week offset.

use regex::Regex;
use std::sync::LazyLock;

use super::{DisaggregationRule, RowContext};
use crate::classify::trade_priority;
use crate::dates::parse_duration_weeks;
use crate::models::{Priority, Trade, TradeTask};

const FLOOR_TOKEN: &str =
    r"(?:ground|first|second|third|fourth|fifth|sixth|seventh|eighth|ninth|tenth|\d+(?:st|nd|rd|th))";

static SLAB_LEVELS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+(?:st|nd|rd|th))\s*-\s*(\d+(?:st|nd|rd|th))\s*floor\s*slab")
        .expect("invalid slab pattern")
});

static SCAFFOLD_LIFT: LazyLock<Regex> = LazyLock::new(|| {
    let level = format!(r"(?:{FLOOR_TOKEN}|roof)");
    Regex::new(&format!(
        r"(?i)\b({level}(?:\s+floor)?)\s+to\s+({level}(?:\s+(?:floor|level))?)\b"
    ))
    .expect("invalid scaffold pattern")
});

static SINGLE_FLOOR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(&format!(r"(?i)\b({FLOOR_TOKEN})\s+floor\b")).expect("invalid floor pattern")
});

static FLAT_BATCH: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(\d+)no\.\s*(\w+)\s*floor\s*flats").expect("invalid flat batch pattern")
});

/// "`<a>` - `<b>` Floor" from "... 4th - 5th floor slab", else "Structure".
fn slab_location(name: &str) -> String {
    SLAB_LEVELS
        .captures(name)
        .map(|c| format!("{} - {} Floor", &c[1], &c[2]))
        .unwrap_or_else(|| "Structure".to_string())
}

/// "`<a>` to `<b>`" from "... ground to roof level", else "Building perimeter".
fn scaffold_location(name: &str) -> String {
    SCAFFOLD_LIFT
        .captures(name)
        .map(|c| format!("{} to {}", &c[1], &c[2]))
        .unwrap_or_else(|| "Building perimeter".to_string())
}

/// "`<floor>` Floor" from "... 2nd floor", else "All floors".
fn floor_location(name: &str) -> String {
    SINGLE_FLOOR
        .captures(name)
        .map(|c| format!("{} Floor", &c[1]))
        .unwrap_or_else(|| "All floors".to_string())
}

/// Unit count and floor label from "7No. Second Floor Flats".
///
/// Defaults to one unit on "Floor" when the pattern misses.
fn flat_batch(name: &str) -> (u32, String) {
    match FLAT_BATCH.captures(name) {
        Some(c) => (c[1].parse().unwrap_or(1), c[2].to_string()),
        None => (1, "Floor".to_string()),
    }
}

// ======================== Enabling works ========================

/// Asbestos removal. Always first when present in the name.
#[derive(Debug, Clone, Copy)]
pub struct Asbestos;

impl DisaggregationRule for Asbestos {
    fn name(&self) -> &'static str {
        "asbestos"
    }

    fn description(&self) -> &'static str {
        "Licensed asbestos removal"
    }

    fn matches(&self, context: &RowContext<'_>) -> bool {
        context.has("asbestos")
    }

    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        vec![TradeTask::new(
            Trade::AsbestosSpecialist,
            format!("Asbestos removal: {}", context.title()),
            context.range,
            Priority::High,
        )
        .with_dependency("Site setup complete")
        .with_week(context.week_number)
        .with_estimate(160.0, 8000.0)]
    }
}

/// Demolition and soft strip (asbestos rows excluded).
#[derive(Debug, Clone, Copy)]
pub struct Demolition;

impl DisaggregationRule for Demolition {
    fn name(&self) -> &'static str {
        "demolition"
    }

    fn description(&self) -> &'static str {
        "Demolition and soft strip"
    }

    fn matches(&self, context: &RowContext<'_>) -> bool {
        context.has("demolition") && !context.has("asbestos")
    }

    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        vec![TradeTask::new(
            Trade::DemolitionSpecialist,
            format!("Demolition: {}", context.title()),
            context.range,
            Priority::Medium,
        )
        .with_dependency("Asbestos removal complete")
        .with_dependency("Services disconnected")
        .with_week(context.week_number)
        .with_estimate(320.0, 12000.0)]
    }
}

// ======================== Structure ========================

/// Piling, foundations and pile caps.
#[derive(Debug, Clone, Copy)]
pub struct Piling;

impl DisaggregationRule for Piling {
    fn name(&self) -> &'static str {
        "piling"
    }

    fn description(&self) -> &'static str {
        "Piling and foundations"
    }

    fn matches(&self, context: &RowContext<'_>) -> bool {
        context.has_any(&["piling", "foundation", "pilecaps"])
    }

    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        vec![TradeTask::new(
            Trade::StructuralEngineer,
            format!("Piling and foundations: {}", context.title()),
            context.range,
            Priority::High,
        )
        .with_location("Foundations")
        .with_dependency("Site clearance complete")
        .with_week(context.week_number)
        .with_estimate(480.0, 25000.0)]
    }
}

/// Reinforced concrete frame, slabs and sub-structures.
#[derive(Debug, Clone, Copy)]
pub struct ConcreteFrame;

impl DisaggregationRule for ConcreteFrame {
    fn name(&self) -> &'static str {
        "concrete_frame"
    }

    fn description(&self) -> &'static str {
        "Reinforced concrete frame and slabs"
    }

    fn matches(&self, context: &RowContext<'_>) -> bool {
        context.has_any(&["rc frame", "slab", "sub-structures"])
    }

    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        vec![TradeTask::new(
            Trade::ConcreteFinisher,
            format!("RC frame and slab: {}", context.title()),
            context.range,
            Priority::High,
        )
        .with_location(slab_location(context.title()))
        .with_dependency("Foundations complete")
        .with_week(context.week_number)
        .with_estimate(320.0, 15000.0)]
    }
}

/// Scaffold erection.
#[derive(Debug, Clone, Copy)]
pub struct Scaffold;

impl DisaggregationRule for Scaffold {
    fn name(&self) -> &'static str {
        "scaffold"
    }

    fn description(&self) -> &'static str {
        "Scaffold erection"
    }

    fn matches(&self, context: &RowContext<'_>) -> bool {
        context.has("scaffold")
    }

    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        vec![TradeTask::new(
            Trade::Scaffolder,
            format!("Scaffold erection: {}", context.title()),
            context.range,
            Priority::High,
        )
        .with_location(scaffold_location(context.title()))
        .with_dependency("Site setup complete")
        .with_week(context.week_number)
        .with_estimate(160.0, 6000.0)]
    }
}

// ======================== Envelope ========================

/// Steel-framed system inner skin (dry lined).
#[derive(Debug, Clone, Copy)]
pub struct SfsInnerSkin;

impl DisaggregationRule for SfsInnerSkin {
    fn name(&self) -> &'static str {
        "sfs_inner_skin"
    }

    fn description(&self) -> &'static str {
        "SFS inner skin and dry lining"
    }

    fn matches(&self, context: &RowContext<'_>) -> bool {
        context.has("sfs inner skin")
    }

    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        vec![TradeTask::new(
            Trade::DryLiner,
            format!("SFS inner skin: {}", context.title()),
            context.range,
            Priority::Medium,
        )
        .with_location(floor_location(context.title()))
        .with_dependency("RC frame complete")
        .with_week(context.week_number)
        .with_estimate(200.0, 8000.0)]
    }
}

/// Blockwork and brickwork (SFS rows excluded).
#[derive(Debug, Clone, Copy)]
pub struct Masonry;

impl DisaggregationRule for Masonry {
    fn name(&self) -> &'static str {
        "masonry"
    }

    fn description(&self) -> &'static str {
        "Brick and block masonry"
    }

    fn matches(&self, context: &RowContext<'_>) -> bool {
        context.has_any(&["blockwork", "brick"]) && !context.has("sfs")
    }

    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        vec![TradeTask::new(
            Trade::Bricklayer,
            format!("Blockwork and brickwork: {}", context.title()),
            context.range,
            Priority::Medium,
        )
        .with_dependency("RC frame complete")
        .with_week(context.week_number)
        .with_estimate(280.0, 12000.0)]
    }
}

/// Window installation.
#[derive(Debug, Clone, Copy)]
pub struct Windows;

impl DisaggregationRule for Windows {
    fn name(&self) -> &'static str {
        "windows"
    }

    fn description(&self) -> &'static str {
        "Window installation"
    }

    fn matches(&self, context: &RowContext<'_>) -> bool {
        context.has("windows")
    }

    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        vec![TradeTask::new(
            Trade::Glazier,
            format!("Window installation: {}", context.title()),
            context.range,
            Priority::Medium,
        )
        .with_location(floor_location(context.title()))
        .with_dependency("SFS inner skin complete")
        .with_week(context.week_number)
        .with_estimate(120.0, 5000.0)]
    }
}

/// Roofing, split into structure/covering then waterproofing.
#[derive(Debug, Clone, Copy)]
pub struct Roofing;

impl DisaggregationRule for Roofing {
    fn name(&self) -> &'static str {
        "roofing"
    }

    fn description(&self) -> &'static str {
        "Roof covering in two halves"
    }

    fn matches(&self, context: &RowContext<'_>) -> bool {
        context.has("roofing")
    }

    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        let week = context.week_number;
        vec![
            TradeTask::new(
                Trade::Roofer,
                format!("Roof structure and covering: {}", context.title()),
                context.range.first_half(),
                Priority::High,
            )
            .with_location("Roof")
            .with_dependency("RC frame complete")
            .with_week(week)
            .with_estimate(200.0, 12000.0),
            TradeTask::new(
                Trade::Roofer,
                format!("Roof waterproofing: {}", context.title()),
                context.range.second_half(),
                Priority::High,
            )
            .with_location("Roof")
            .with_dependency("Roof covering complete")
            .with_week(week + 2)
            .with_estimate(160.0, 8000.0),
        ]
    }
}

// ======================== Fit-out ========================

/// Fit-out of a batch of flats on one floor, in four overlapping phases.
///
/// | Phase | Trade | Range | Hours/unit | Value/unit |
/// |-------|-------|-------|-----------|-----------|
/// | 1st fix electrical | Electrician | 0 - 25% | 16 | 600 |
/// | 1st fix plumbing | Plumber | 12.5 - 62.5% | 20 | 800 |
/// | Dry lining and decoration | Dry Liner | 37.5 - 87.5% | 24 | 900 |
/// | 2nd fix and finishes | General Construction | 62.5 - 100% | 18 | 700 |
#[derive(Debug, Clone, Copy)]
pub struct FlatFitOut;

impl DisaggregationRule for FlatFitOut {
    fn name(&self) -> &'static str {
        "flat_fit_out"
    }

    fn description(&self) -> &'static str {
        "Flat fit-out in four overlapping trade phases"
    }

    fn matches(&self, context: &RowContext<'_>) -> bool {
        context.has("fit out") && context.has_any(&["flat", "floor"])
    }

    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        let (units, floor) = flat_batch(context.title());
        let location = format!("{floor} floor");
        let n = f64::from(units);
        let week = context.week_number;
        let range = context.range;

        vec![
            TradeTask::new(
                Trade::Electrician,
                format!("Electrical 1st fix: {units} flats, {location}"),
                range.slice(0.0, 0.25),
                Priority::High,
            )
            .with_location(location.clone())
            .with_dependency("Building watertight")
            .with_week(week)
            .with_estimate(n * 16.0, n * 600.0),
            TradeTask::new(
                Trade::Plumber,
                format!("Plumbing 1st fix: {units} flats, {location}"),
                range.slice(0.125, 0.625),
                Priority::High,
            )
            .with_location(location.clone())
            .with_dependency("Electrical 1st fix underway")
            .with_week(week)
            .with_estimate(n * 20.0, n * 800.0),
            TradeTask::new(
                Trade::DryLiner,
                format!("Drywall and decoration: {units} flats, {location}"),
                range.slice(0.375, 0.875),
                Priority::Medium,
            )
            .with_location(location.clone())
            .with_dependency("Electrical 1st fix complete")
            .with_dependency("Plumbing 1st fix complete")
            .with_week(week + 1)
            .with_estimate(n * 24.0, n * 900.0),
            TradeTask::new(
                Trade::GeneralConstruction,
                format!("2nd fix and finishes: {units} flats, {location}"),
                range.slice(0.625, 1.0),
                Priority::Medium,
            )
            .with_location(location)
            .with_dependency("Dry lining complete")
            .with_week(week + 2)
            .with_estimate(n * 18.0, n * 700.0),
        ]
    }
}

/// Communal areas: electrical first, fit-out overlapping from a quarter in.
#[derive(Debug, Clone, Copy)]
pub struct CommunalArea;

impl DisaggregationRule for CommunalArea {
    fn name(&self) -> &'static str {
        "communal_area"
    }

    fn description(&self) -> &'static str {
        "Communal electrics and finishes"
    }

    fn matches(&self, context: &RowContext<'_>) -> bool {
        context.has("communal area")
    }

    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        let week = context.week_number;
        vec![
            TradeTask::new(
                Trade::Electrician,
                format!("Communal electrical: {}", context.title()),
                context.range.first_half(),
                Priority::Medium,
            )
            .with_location("Communal areas")
            .with_dependency("Building watertight")
            .with_week(week)
            .with_estimate(80.0, 3000.0),
            TradeTask::new(
                Trade::GeneralConstruction,
                format!("Communal fit-out: {}", context.title()),
                context.range.slice(0.25, 1.0),
                Priority::Medium,
            )
            .with_location("Communal areas")
            .with_dependency("Communal electrical 1st fix complete")
            .with_week(week + 1)
            .with_estimate(120.0, 4500.0),
        ]
    }
}

/// Electrical installation, first fix then second fix.
#[derive(Debug, Clone, Copy)]
pub struct Electrical;

impl DisaggregationRule for Electrical {
    fn name(&self) -> &'static str {
        "electrical"
    }

    fn description(&self) -> &'static str {
        "Electrical first and second fix"
    }

    fn matches(&self, context: &RowContext<'_>) -> bool {
        context.has("electrical")
    }

    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        let week = context.week_number;
        vec![
            TradeTask::new(
                Trade::Electrician,
                format!("Electrical 1st fix: {}", context.title()),
                context.range.first_half(),
                Priority::High,
            )
            .with_dependency("Building watertight")
            .with_week(week)
            .with_estimate(120.0, 4500.0),
            TradeTask::new(
                Trade::Electrician,
                format!("Electrical 2nd fix: {}", context.title()),
                context.range.second_half(),
                Priority::Medium,
            )
            .with_dependency("Electrical 1st fix complete")
            .with_week(week + 1)
            .with_estimate(80.0, 3000.0),
        ]
    }
}

/// Plumbing installation, first fix then second fix.
#[derive(Debug, Clone, Copy)]
pub struct Plumbing;

impl DisaggregationRule for Plumbing {
    fn name(&self) -> &'static str {
        "plumbing"
    }

    fn description(&self) -> &'static str {
        "Plumbing first and second fix"
    }

    fn matches(&self, context: &RowContext<'_>) -> bool {
        context.has("plumbing")
    }

    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        let week = context.week_number;
        vec![
            TradeTask::new(
                Trade::Plumber,
                format!("Plumbing 1st fix: {}", context.title()),
                context.range.first_half(),
                Priority::High,
            )
            .with_dependency("Building watertight")
            .with_week(week)
            .with_estimate(100.0, 4000.0),
            TradeTask::new(
                Trade::Plumber,
                format!("Plumbing 2nd fix: {}", context.title()),
                context.range.second_half(),
                Priority::Medium,
            )
            .with_dependency("Plumbing 1st fix complete")
            .with_week(week + 1)
            .with_estimate(60.0, 2500.0),
        ]
    }
}

// ======================== External ========================

/// Hard and soft landscaping.
#[derive(Debug, Clone, Copy)]
pub struct ExternalWorks;

impl DisaggregationRule for ExternalWorks {
    fn name(&self) -> &'static str {
        "external_works"
    }

    fn description(&self) -> &'static str {
        "External works and landscaping"
    }

    fn matches(&self, context: &RowContext<'_>) -> bool {
        context.has("external works")
    }

    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        vec![TradeTask::new(
            Trade::Landscaper,
            format!("External works: {}", context.title()),
            context.range,
            Priority::Low,
        )
        .with_location("External")
        .with_dependency("Building substantially complete")
        .with_week(context.week_number)
        .with_estimate(200.0, 8000.0)]
    }
}

// ======================== Fallback ========================

/// One generic task over the full range. Claims every row.
///
/// Hours are `weeks * hours_per_week`, where weeks come from the row's
/// duration text, or its calendar span when that text is unusable.
/// Value is `hours * hourly_rate`.
#[derive(Debug, Clone, Copy)]
pub struct GeneralConstruction;

impl GeneralConstruction {
    fn weeks(context: &RowContext<'_>) -> f64 {
        parse_duration_weeks(&context.row.duration)
            .unwrap_or_else(|| f64::from(context.range.weeks_ceil()))
    }
}

impl DisaggregationRule for GeneralConstruction {
    fn name(&self) -> &'static str {
        "general_construction"
    }

    fn description(&self) -> &'static str {
        "Single general construction task"
    }

    fn matches(&self, _context: &RowContext<'_>) -> bool {
        true
    }

    fn expand(&self, context: &RowContext<'_>) -> Vec<TradeTask> {
        let hours = Self::weeks(context) * context.config.hours_per_week;
        let value = hours * context.config.hourly_rate;
        vec![TradeTask::new(
            Trade::GeneralConstruction,
            context.title(),
            context.range,
            trade_priority(&context.name),
        )
        .with_week(context.week_number)
        .with_estimate(hours, value)]
    }
}
