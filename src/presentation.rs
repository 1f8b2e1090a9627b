use crate::analysis::Analysis;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{CellAlignment, ContentArrangement, Table};
use configuration::MessageSet;
use core_types::{BreakEvenPoint, ChartSeries, Sample, SamplePoint};
use serde::Serialize;

/// Renders the full text report for one analysis in the chosen language.
pub fn render_analysis(analysis: &Analysis, messages: &MessageSet, preview_rows: usize) -> String {
    let mut out = String::new();
    out.push_str(&format!("{}\n{}\n\n", messages.title, messages.subtitle));

    out.push_str(&format!("{}\n{}\n\n", messages.inputs, inputs_table(analysis, messages)));

    out.push_str(&format!("{}\n", messages.results));
    out.push_str(&break_even_line(analysis, messages));
    out.push('\n');

    if preview_rows > 0 {
        out.push_str(&format!(
            "\n{} ({})\n{}\n",
            messages.chart_title,
            messages.money_axis,
            preview_table(&analysis.report.sample, messages, preview_rows)
        ));
    }

    out.push_str(&format!(
        "\n{}\n{}\n",
        messages.advice_header,
        messages.render_advice(analysis.tip)
    ));
    out.push_str(&format!("\n{}\n", messages.footer));
    out
}

/// The break-even sentence, or the explicit "no profit possible" message.
pub fn break_even_line(analysis: &Analysis, messages: &MessageSet) -> String {
    match analysis.report.break_even {
        Some(point) if analysis.report.break_even_in_range() => {
            messages.render_break_even(point.quantity)
        }
        Some(point) => format!(
            "{} {}",
            messages.render_break_even(point.quantity),
            messages.beyond_range
        ),
        None => messages.no_break_even.clone(),
    }
}

/// Everything a plotting front end needs: labels, the aligned series and the
/// optional break-even marker.
#[derive(Debug, Serialize)]
pub struct ChartPayload<'a> {
    pub title: &'a str,
    pub x_label: &'a str,
    pub y_label: &'a str,
    pub series_labels: [&'a str; 3],
    pub series: ChartSeries,
    pub break_even: Option<BreakEvenPoint>,
}

pub fn chart_payload<'a>(analysis: &Analysis, messages: &'a MessageSet) -> ChartPayload<'a> {
    ChartPayload {
        title: &messages.chart_title,
        x_label: &messages.quantity_axis,
        y_label: &messages.money_axis,
        series_labels: [&messages.revenue, &messages.costs, &messages.profit],
        series: analysis.report.sample.series(),
        break_even: analysis.report.break_even,
    }
}

fn inputs_table(analysis: &Analysis, messages: &MessageSet) -> Table {
    let economics = &analysis.report.economics;
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    for (label, value) in [
        (&messages.price, economics.price()),
        (&messages.unit_cost, economics.unit_cost()),
        (&messages.fixed_cost, economics.fixed_cost()),
        (&messages.max_quantity, analysis.report.max_quantity),
    ] {
        table.add_row(vec![label.clone(), format_amount(value)]);
    }
    right_align_column(&mut table, 1);
    table
}

/// A thinned view of the sampled series, `rows` lines at most.
pub fn preview_table(sample: &Sample, messages: &MessageSet, rows: usize) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec![
            messages.quantity_axis.clone(),
            messages.revenue.clone(),
            messages.costs.clone(),
            messages.profit.clone(),
        ]);

    for point in preview_points(sample, rows) {
        table.add_row(vec![
            format_amount(point.quantity),
            format_amount(point.revenue),
            format_amount(point.cost),
            format_amount(point.profit),
        ]);
    }
    for column in 0..4 {
        right_align_column(&mut table, column);
    }
    table
}

/// Picks up to `rows` points spread evenly across the sample, always keeping
/// the first and last point when at least two rows are requested.
pub fn preview_points(sample: &Sample, rows: usize) -> Vec<SamplePoint> {
    let points = sample.points();
    if rows == 0 || points.is_empty() {
        return Vec::new();
    }
    if rows >= points.len() {
        return points.to_vec();
    }
    if rows == 1 {
        return vec![points[0]];
    }

    let last = points.len() - 1;
    let mut indices: Vec<usize> = (0..rows)
        .map(|i| ((i * last) as f64 / (rows - 1) as f64).round() as usize)
        .collect();
    indices.dedup();
    indices.into_iter().map(|i| points[i]).collect()
}

fn right_align_column(table: &mut Table, index: usize) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(CellAlignment::Right);
    }
}

fn format_amount(value: f64) -> String {
    format!("{:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::analysis::{Pipeline, Scenario};
    use configuration::Language;
    use core_types::UnitEconomics;

    fn analyse(price: f64, unit_cost: f64, fixed_cost: f64, max_quantity: f64) -> Analysis {
        let config = configuration::load_defaults().unwrap();
        let scenario = Scenario {
            economics: UnitEconomics::new(price, unit_cost, fixed_cost).unwrap(),
            max_quantity,
        };
        Pipeline::from_config(&config).unwrap().run(&scenario).unwrap()
    }

    fn messages(language: Language) -> MessageSet {
        configuration::load_defaults()
            .unwrap()
            .messages
            .for_language(language)
            .clone()
    }

    #[test]
    fn break_even_is_rendered_with_two_decimals() {
        let analysis = analyse(2000.0, 1200.0, 400_000.0, 1000.0);
        let line = break_even_line(&analysis, &messages(Language::Ru));
        assert!(line.contains("500.00"), "{line}");
    }

    #[test]
    fn missing_break_even_shows_no_profit_message() {
        let analysis = analyse(1000.0, 1200.0, 400_000.0, 1000.0);
        let ru = messages(Language::Ru);
        assert_eq!(break_even_line(&analysis, &ru), ru.no_break_even);
    }

    #[test]
    fn break_even_past_the_chart_is_flagged() {
        let ru = messages(Language::Ru);

        let outside = analyse(1000.0, 900.0, 50_000.0, 100.0);
        let line = break_even_line(&outside, &ru);
        assert!(line.contains("500.00"), "{line}");
        assert!(line.ends_with(&ru.beyond_range), "{line}");

        let inside = analyse(2000.0, 1200.0, 400_000.0, 1000.0);
        assert!(!break_even_line(&inside, &ru).contains(&ru.beyond_range));
    }

    #[test]
    fn chart_payload_carries_aligned_series_and_marker() {
        let analysis = analyse(2000.0, 1200.0, 400_000.0, 1000.0);
        let kk = messages(Language::Kk);
        let payload = chart_payload(&analysis, &kk);

        assert_eq!(payload.y_label, kk.money_axis);
        assert_eq!(payload.series.quantity.len(), 500);
        assert_eq!(payload.series.profit.len(), payload.series.revenue.len());
        assert_eq!(payload.series.cost[0], 400_000.0);
        assert_eq!(payload.break_even.unwrap().quantity, 500.0);

        let json = serde_json::to_value(&payload).unwrap();
        assert_eq!(json["series_labels"][1], kk.costs.as_str());
        assert_eq!(json["series"]["quantity"].as_array().unwrap().len(), 500);
    }

    #[test]
    fn report_contains_the_localized_tip() {
        let analysis = analyse(1000.0, 900.0, 50_000.0, 100.0);
        let kk = messages(Language::Kk);
        let text = render_analysis(&analysis, &kk, 5);
        assert!(text.contains(&kk.tips.thin_margin));
        assert!(text.contains(&kk.chart_title));
        assert!(text.contains(&kk.money_axis));
        assert!(text.contains("100.00"));
    }

    #[test]
    fn zero_preview_rows_skip_the_series_table() {
        let analysis = analyse(2000.0, 1200.0, 400_000.0, 1000.0);
        let kk = messages(Language::Kk);
        let text = render_analysis(&analysis, &kk, 0);
        assert!(!text.contains(&kk.chart_title));
    }

    #[test]
    fn preview_keeps_both_endpoints() {
        let analysis = analyse(2000.0, 1200.0, 400_000.0, 1000.0);
        let points = preview_points(&analysis.report.sample, 5);
        assert_eq!(points.len(), 5);
        assert_eq!(points.first().unwrap().quantity, 0.0);
        assert_eq!(points.last().unwrap().quantity, 1000.0);
    }

    #[test]
    fn preview_never_exceeds_the_sample() {
        let analysis = analyse(2.0, 1.0, 1.0, 100.0);
        assert_eq!(preview_points(&analysis.report.sample, 10_000).len(), 500);
        assert_eq!(preview_points(&analysis.report.sample, 1).len(), 1);
        assert!(preview_points(&analysis.report.sample, 0).is_empty());
    }
}
