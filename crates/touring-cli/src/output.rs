//! Output formatting module

use serde::Serialize;
use touring_app::constants::Preset;
use touring_domain::model::{ComparisonTable, ScenarioBook, ScenarioSummary, MAX_SCENARIOS};
use touring_domain::service::{format_number, DEFAULT_FRACTION_DIGITS};
use touring_domain::{format_currency, format_delta, ComputedResult, Field};
use touring_types::{OutputFormat, Result};
use unicode_width::UnicodeWidthStr;

/// Fuel volume is shown to centiliters
const FUEL_FRACTION_DIGITS: usize = 2;

/// Terminal columns taken by `s` (wide CJK counts as two)
fn display_width(s: &str) -> usize {
    s.width()
}

fn pad(label: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(label));
    format!("{}{}", label, " ".repeat(fill))
}

fn pad_left(value: &str, width: usize) -> String {
    let fill = width.saturating_sub(display_width(value));
    format!("{}{}", " ".repeat(fill), value)
}

fn yen(value: f64) -> String {
    format!("{}円", format_currency(value))
}

fn print_json<T: Serialize + ?Sized>(value: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

pub fn render_breakdown(result: &ComputedResult) -> String {
    let inputs = &result.inputs;
    let mut out = String::new();
    let line = |out: &mut String, label: &str, value: String| {
        out.push_str(&format!("{} {}\n", pad(&format!("{}:", label), 18), value));
    };

    out.push_str("ツーリング費用の内訳\n");
    out.push_str("====================\n");
    let decimals = |value: f64| format_number(value, DEFAULT_FRACTION_DIGITS);
    line(&mut out, "距離", format!("{} km", decimals(inputs.distance)));
    line(&mut out, "燃費", format!("{} km/L", decimals(inputs.fuel_efficiency)));
    line(&mut out, "ガソリン単価", format!("{}/L", yen(inputs.gas_price)));
    line(&mut out, "人数", format!("{} 人", decimals(inputs.people)));
    let liters = format_number(result.fuel_liters, FUEL_FRACTION_DIGITS);
    line(&mut out, "給油量", format!("{} L", liters));
    out.push_str("--------------------\n");
    for (label, amount) in result.cost_items() {
        line(&mut out, label, yen(amount));
    }
    out.push_str("--------------------\n");
    line(&mut out, "合計", yen(result.total));
    line(&mut out, "1人あたり", yen(result.per_person));

    out.push_str("\n感度分析\n");
    line(&mut out, "距離 +10km", format_delta(result.sensitivity.distance_plus10));
    line(&mut out, "燃費 -1km/L", format_delta(result.sensitivity.fuel_efficiency_minus1));
    line(&mut out, "ガソリン +10円/L", format_delta(result.sensitivity.price_plus10));
    out
}

pub fn output_result(output_format: OutputFormat, result: &ComputedResult) -> Result<()> {
    if output_format == OutputFormat::Json {
        print_json(result)
    } else {
        print!("{}", render_breakdown(result));
        Ok(())
    }
}

#[derive(Serialize)]
struct PresetView<'a> {
    key: &'a str,
    label: &'a str,
    inputs: &'a touring_domain::TripInputs,
}

pub fn output_presets(output_format: OutputFormat, presets: &[Preset]) -> Result<()> {
    if output_format == OutputFormat::Json {
        let views: Vec<_> = presets
            .iter()
            .map(|p| PresetView {
                key: p.key,
                label: p.label,
                inputs: &p.inputs,
            })
            .collect();
        return print_json(&views);
    }

    println!("{} {}", pad("Preset", 14), "内容");
    println!("{}", "-".repeat(60));
    for preset in presets {
        let summary: Vec<String> = Field::ALL
            .into_iter()
            .map(|f| {
                let value = format_number(preset.inputs.get(f), DEFAULT_FRACTION_DIGITS);
                format!("{}={}", f.share_key(), value)
            })
            .collect();
        println!("{} {}", pad(preset.key, 14), preset.label);
        println!("{} {}", pad("", 14), summary.join(" "));
    }
    Ok(())
}

pub fn render_scenario_list(summaries: &[ScenarioSummary]) -> String {
    if summaries.is_empty() {
        return "保存したシナリオがまだありません。\n".to_string();
    }

    let mut out = format!("保存済み {}/{}\n", summaries.len(), MAX_SCENARIOS);
    for summary in summaries {
        out.push_str(&format!(
            "  {}  {}  合計 {} / 1人あたり {}\n",
            summary.id,
            pad(&summary.name, 24),
            yen(summary.total),
            yen(summary.per_person)
        ));
    }
    out
}

pub fn output_scenarios(output_format: OutputFormat, book: &ScenarioBook) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(book);
    }
    print!("{}", render_scenario_list(&book.summaries()));
    Ok(())
}

pub fn render_comparison(table: &ComparisonTable) -> String {
    if table.is_empty() {
        return "保存したシナリオがありません。\n".to_string();
    }

    const LABEL_WIDTH: usize = 12;
    let widths: Vec<usize> = table
        .names
        .iter()
        .enumerate()
        .map(|(i, name)| {
            let widest_value = table
                .rows
                .iter()
                .filter_map(|r| r.values.get(i))
                .map(|v| display_width(&yen(*v)))
                .max()
                .unwrap_or(0);
            display_width(name).max(widest_value)
        })
        .collect();

    let mut out = pad("項目", LABEL_WIDTH);
    for (name, width) in table.names.iter().zip(&widths) {
        out.push_str("  ");
        out.push_str(&pad_left(name, *width));
    }
    out.push('\n');

    let rule_width = LABEL_WIDTH + widths.iter().map(|w| w + 2).sum::<usize>();
    out.push_str(&"-".repeat(rule_width));
    out.push('\n');

    for row in &table.rows {
        out.push_str(&pad(row.label, LABEL_WIDTH));
        for (value, width) in row.values.iter().zip(&widths) {
            out.push_str("  ");
            out.push_str(&pad_left(&yen(*value), *width));
        }
        out.push('\n');
    }
    out
}

pub fn output_comparison(output_format: OutputFormat, table: &ComparisonTable) -> Result<()> {
    if output_format == OutputFormat::Json {
        return print_json(table);
    }
    print!("{}", render_comparison(table));
    Ok(())
}
