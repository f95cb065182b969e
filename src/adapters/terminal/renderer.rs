//! Plain-text screens for the terminal wizard.
//!
//! Every function returns the screen as a `String`; the wizard decides where
//! it goes. Bars are drawn with block characters, the user's bucket solid
//! and the rest shaded.

use crate::application::session::LifeSession;
use crate::domain::comparison::{ComparisonData, DistributionPoint};
use crate::domain::reference::{Dimension, AGE_RANGES};
use crate::domain::report::LifeReport;

/// Shown under an empty milestone list.
pub const EMPTY_TRACK_PLACEHOLDER: &str = "暂无记录，请从上方选择并点击“+ 记录阶段”";

/// Closing line of every screen.
pub const FOOTER: &str = "Time is the only currency. Spend it wisely.";

/// Width of the one-line strip under each report milestone.
pub const STRIP_WIDTH: usize = 40;

/// Width of the tallest bar in the full distribution chart.
pub const CHART_WIDTH: usize = 30;

const USER_CELL: char = '█';
const OTHER_CELL: char = '░';

/// The input step: birth date, tab, selection and the active track.
pub fn render_input(session: &LifeSession) -> String {
    let tab = session.active_tab();
    let mut out = String::new();

    out.push_str("人生参照系\nLIFE BASELINE TRACKER\n\n");
    out.push_str(&format!(
        "出生日期  {}\n\n",
        session.profile().birth_date()
    ));

    out.push_str(&format!("添加{}里程碑\n", tab.short_label()));
    let tabs = Dimension::ALL
        .iter()
        .map(|d| {
            if *d == tab {
                format!("[{}]", d.tab_label())
            } else {
                format!(" {} ", d.tab_label())
            }
        })
        .collect::<Vec<_>>()
        .join(" ");
    out.push_str(&format!("{}\n", tabs));

    let ranges = AGE_RANGES
        .iter()
        .map(|label| {
            if session.selected_range().map(|r| r.label()) == Some(*label) {
                format!("[{}]", label)
            } else {
                format!(" {} ", label)
            }
        })
        .collect::<Vec<_>>()
        .join("");
    out.push_str(&format!("年龄区间 {}\n", ranges));

    out.push_str(&format!(
        "状态     {} ({})\n",
        tab.status_label(session.selected_status()),
        session.selected_status()
    ));
    if session.selected_range().is_some() {
        out.push_str("         + 记录阶段 (commit)\n\n");
    } else {
        out.push_str("         先选择一个年龄区间\n\n");
    }

    out.push_str(&render_track(session, tab));
    out.push('\n');
    out.push_str("生成我的人生参照报告 (report)\n");
    out
}

/// Numbered milestone list of one dimension; numbers feed `remove <n>`.
pub fn render_track(session: &LifeSession, dimension: Dimension) -> String {
    let mut out = format!("已记录轨迹（{}）\n", dimension.short_label());
    let milestones = session.profile().milestones(dimension);

    if milestones.is_empty() {
        out.push_str(&format!("  {}\n", EMPTY_TRACK_PLACEHOLDER));
        return out;
    }

    for (index, milestone) in milestones.iter().enumerate() {
        out.push_str(&format!(
            "  {:>2}. {:<6} {}\n",
            index + 1,
            milestone.age_range().label(),
            dimension.status_label(milestone.status_code())
        ));
    }
    out
}

/// Status options of a dimension with their codes.
pub fn render_options(dimension: Dimension) -> String {
    let mut out = format!("{}\n", dimension.tab_label());
    for option in dimension.status_options() {
        out.push_str(&format!("  {:<16} {}\n", option.value, option.label));
    }
    out
}

/// The report card: summary, then career and emotion tracks.
pub fn render_report(report: &LifeReport) -> String {
    let mut out = String::new();

    out.push_str("人生参照报告\n");
    out.push_str(&format!("Born: {}\n\n", report.profile().birth_date()));

    for line in report.ai_summary().lines() {
        out.push_str(&format!("┃ {}\n", line));
    }
    out.push('\n');

    for dimension in Dimension::REPORT_ORDER {
        let comparisons: Vec<&ComparisonData> = report.comparisons_for(dimension).collect();
        if comparisons.is_empty() {
            continue;
        }

        out.push_str(&format!("{}  · Track Line\n", dimension.track_title()));
        for comparison in comparisons {
            out.push_str(&render_comparison_line(comparison));
        }
        out.push('\n');
    }

    out.push_str("Life Reference System\n\n");
    out.push_str("重新探索 (back)  保存卡片 (export)\n");
    out
}

fn render_comparison_line(comparison: &ComparisonData) -> String {
    format!(
        "  {}  {}岁\n  {}  {}\n",
        comparison.status_label,
        comparison.age_range_label,
        render_strip(&comparison.distribution, STRIP_WIDTH),
        comparison.timing_category.label()
    )
}

/// One bar split in proportion to the bucket shares.
pub fn render_strip(distribution: &[DistributionPoint], width: usize) -> String {
    distribution
        .iter()
        .flat_map(|point| {
            let cell = if point.is_user_position {
                USER_CELL
            } else {
                OTHER_CELL
            };
            std::iter::repeat(cell).take(point.percentage.scaled_to(width))
        })
        .collect()
}

/// Full bar chart of one comparison with `{:.1}%` labels.
pub fn render_distribution_chart(comparison: &ComparisonData) -> String {
    let mut out = format!(
        "{} · {}岁 · {}\n",
        comparison.status_label,
        comparison.age_range_label,
        comparison.timing_category.label()
    );

    for point in &comparison.distribution {
        let cell = if point.is_user_position {
            USER_CELL
        } else {
            OTHER_CELL
        };
        let bar: String = std::iter::repeat(cell)
            .take(point.percentage.scaled_to(CHART_WIDTH))
            .collect();
        out.push_str(&format!(
            "  {:<6} {:<width$} {:.1}%{}\n",
            point.age_range,
            bar,
            f64::from(point.percentage.value()),
            if point.is_user_position { "  ← 你" } else { "" },
            width = CHART_WIDTH
        ));
    }
    out
}

/// Commands accepted by the wizard.
pub fn render_help() -> String {
    [
        "birth <YYYY-MM-DD>   设置出生日期",
        "tab <emotion|career> 切换维度",
        "range <10-15..56-60> 选择年龄区间",
        "status <code>        选择状态（见 options）",
        "commit               + 记录阶段",
        "remove <n>           删除当前维度第 n 条记录",
        "list                 查看两条轨迹",
        "options              查看当前维度的状态选项",
        "report               生成我的人生参照报告",
        "chart <n>            查看报告中第 n 条的完整分布",
        "back                 重新探索",
        "export [md|json]     保存卡片",
        "help                 显示本帮助",
        "quit                 退出",
    ]
    .join("\n")
        + "\n"
}
