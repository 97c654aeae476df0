//! Text report for a price query

use super::format::{format_manwon, format_thousands};
use crate::model::{GroupedPrice, PriceDashboard};

const BAR_WIDTH: usize = 30;

pub fn generate_price_report(dashboard: &PriceDashboard) -> String {
    let selection = &dashboard.selection;

    let mut report = String::new();
    report.push_str("==================================================\n");
    report.push_str(&format!(
        "  📊 {} {} 평균 중고차 시세\n",
        selection.model,
        selection.view.label()
    ));
    report.push_str(&format!(
        "     {} / {}\n",
        selection.manufacturer, selection.model
    ));
    report.push_str("==================================================\n\n");

    let summary = match &dashboard.summary {
        Some(summary) if !dashboard.is_empty() => summary,
        _ => {
            report.push_str("【매물 없음】\n");
            report.push_str("  해당 조건의 매물이 없습니다.\n\n");
            report.push_str("==================================================\n");
            return report;
        }
    };

    report.push_str("【평균 시세 (만원)】\n");
    report.push_str(&render_bar_chart(&dashboard.series));
    report.push('\n');

    report.push_str("【📌 요약 정보】\n");
    report.push_str(&format!("  평균 연식:    {}년\n", summary.mean_year));
    report.push_str(&format!(
        "  평균 키로수:  {} km\n",
        format_thousands(summary.mean_mileage_km as i64)
    ));
    report.push_str(&format!("  매물 수:      {}건\n", summary.count));
    report.push('\n');

    if let Some(sentence) = &dashboard.sentence {
        report.push_str(&format!("  {}\n\n", sentence));
    }

    report.push_str("==================================================\n");
    report
}

/// Horizontal bars, one per group, scaled to the largest mean price
pub fn render_bar_chart(series: &[GroupedPrice]) -> String {
    let max_price = series
        .iter()
        .map(|g| g.mean_price)
        .fold(0.0_f64, f64::max);
    let label_width = series
        .iter()
        .map(|g| g.label.chars().count())
        .max()
        .unwrap_or(0);

    let mut chart = String::new();
    for group in series {
        let bar_len = if max_price > 0.0 {
            ((group.mean_price / max_price) * BAR_WIDTH as f64).round() as usize
        } else {
            0
        };
        let bar_len = if group.mean_price > 0.0 { bar_len.max(1) } else { 0 };
        let padding = label_width - group.label.chars().count();
        chart.push_str(&format!(
            "  {}{} {}{} {}만원 ({}건)\n",
            group.label,
            " ".repeat(padding),
            "█".repeat(bar_len),
            " ".repeat(BAR_WIDTH - bar_len.min(BAR_WIDTH)),
            format_manwon(group.mean_price),
            group.count
        ));
    }
    chart
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{GroupKey, ListingSummary, Selection};
    use sise_types::{SortDirection, ViewMode};

    fn grouped(year: i32, mean_price: f64, count: usize) -> GroupedPrice {
        let key = GroupKey::Year(year);
        GroupedPrice {
            key,
            label: key.label(),
            mean_price,
            count,
        }
    }

    fn empty_dashboard() -> PriceDashboard {
        PriceDashboard {
            selection: Selection::new("현대", "아반떼", ViewMode::Year),
            direction: SortDirection::Descending,
            listings: Vec::new(),
            series: Vec::new(),
            summary: None,
            sentence: None,
        }
    }

    #[test]
    fn test_bar_chart_scales_to_max() {
        let chart = render_bar_chart(&[grouped(2020, 1000.0, 1), grouped(2019, 500.0, 2)]);
        let lines: Vec<&str> = chart.lines().collect();
        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0].matches('█').count(), BAR_WIDTH);
        assert_eq!(lines[1].matches('█').count(), BAR_WIDTH / 2);
        assert!(lines[0].contains("1,000만원 (1건)"));
        assert!(lines[1].contains("500만원 (2건)"));
    }

    #[test]
    fn test_bar_chart_small_value_keeps_one_block() {
        let chart = render_bar_chart(&[grouped(2020, 10_000.0, 1), grouped(2005, 1.0, 1)]);
        let last = chart.lines().last().unwrap();
        assert_eq!(last.matches('█').count(), 1);
    }

    #[test]
    fn test_report_no_data() {
        let report = generate_price_report(&empty_dashboard());
        assert!(report.contains("해당 조건의 매물이 없습니다."));
        assert!(!report.contains("요약 정보"));
    }

    #[test]
    fn test_report_with_data() {
        let mut dashboard = empty_dashboard();
        dashboard.listings.push(crate::model::Listing {
            manufacturer: "현대".into(),
            model: "아반떼".into(),
            model_year: 2020,
            mileage_km: 35_000,
            price: 1600.0,
        });
        dashboard.series = vec![grouped(2020, 1600.0, 1)];
        dashboard.summary = Some(ListingSummary {
            mean_year: 2020,
            mean_mileage_km: 35_000,
            count: 1,
        });
        dashboard.sentence = Some("아반떼 평균 시세는 2020년식 1,600만원입니다.".into());

        let report = generate_price_report(&dashboard);
        assert!(report.contains("아반떼 연식별 평균 중고차 시세"));
        assert!(report.contains("평균 연식:    2020년"));
        assert!(report.contains("평균 키로수:  35,000 km"));
        assert!(report.contains("매물 수:      1건"));
        assert!(report.contains("2020년식 1,600만원입니다."));
    }
}
