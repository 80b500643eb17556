// src/report/html.rs
use std::collections::BTreeMap;
use std::fmt::Write;
use std::path::Path;

use crate::analyze::RushOverview;
use crate::error::RunError;
use crate::file::write_atomic;
use crate::history::{HistoryStore, PlayerRecord};
use crate::model::{Clan, Player};
use crate::rush::{Deficit, RushStatus};

/// Rows in the historical performance table.
pub const HISTORY_ROWS: usize = 30;
/// Heroes listed per player in the rushed-only table.
const HERO_CELLS: usize = 4;

const STYLE: &str = r#"
* { margin: 0; padding: 0; box-sizing: border-box; }
body { font-family: 'Segoe UI', Tahoma, Geneva, Verdana, sans-serif; background: linear-gradient(135deg, #1a1a2e 0%, #16213e 100%); color: #fff; min-height: 100vh; padding: 20px; }
.container { max-width: 1400px; margin: 0 auto; }
.header { text-align: center; padding: 30px; background: linear-gradient(135deg, #0f3460 0%, #16213e 100%); border-radius: 15px; margin-bottom: 20px; }
.header h1 { font-size: 2.5em; color: #e94560; margin-bottom: 10px; }
.header .clan-tag { color: #888; font-size: 1.1em; }
.stats-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(200px, 1fr)); gap: 20px; margin-bottom: 30px; }
.stat-card { background: linear-gradient(135deg, #1f4068 0%, #162447 100%); padding: 25px; border-radius: 12px; text-align: center; }
.stat-card .value { font-size: 2.5em; font-weight: bold; color: #e94560; }
.stat-card .label { color: #aaa; margin-top: 5px; font-size: 0.9em; }
.section { background: rgba(255,255,255,0.05); border-radius: 15px; padding: 25px; margin-bottom: 20px; }
.section h2 { color: #e94560; margin-bottom: 20px; padding-bottom: 10px; border-bottom: 2px solid #e94560; }
.charts-grid { display: grid; grid-template-columns: repeat(auto-fit, minmax(400px, 1fr)); gap: 20px; }
.chart-container { background: rgba(0,0,0,0.2); border-radius: 10px; padding: 20px; }
table { width: 100%; border-collapse: collapse; margin-top: 15px; }
th, td { padding: 12px; text-align: left; border-bottom: 1px solid rgba(255,255,255,0.1); }
th { background: rgba(233, 69, 96, 0.2); color: #e94560; font-weight: 600; }
.rush-status { padding: 5px 10px; border-radius: 20px; font-size: 0.85em; }
.rush-maxed { background: #27ae60; }
.rush-slight { background: #2ecc71; }
.rush-moderate { background: #f39c12; }
.rush-rushed { background: #e67e22; }
.rush-severe { background: #e74c3c; }
.tab-container { display: flex; gap: 10px; margin-bottom: 20px; }
.tab { padding: 10px 20px; background: rgba(255,255,255,0.1); border: none; color: #fff; border-radius: 8px; cursor: pointer; }
.tab:hover, .tab.active { background: #e94560; }
.tab-content { display: none; }
.tab-content.active { display: block; }
.footer { text-align: center; padding: 20px; color: #666; margin-top: 30px; }
"#;

const SCRIPT_TAIL: &str = r#"
function showTab(name, btn) {
    document.querySelectorAll('.tab-content').forEach(el => el.classList.remove('active'));
    document.querySelectorAll('.tab').forEach(el => el.classList.remove('active'));
    document.getElementById('tab-' + name).classList.add('active');
    btn.classList.add('active');
}
"#;

/// Escape text for element content and double-quoted attributes.
pub fn escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            c => out.push(c),
        }
    }
    out
}

/// CSS class for a status pill.
pub fn status_class(status: RushStatus) -> &'static str {
    match status {
        RushStatus::NewAccount | RushStatus::Maxed => "rush-maxed",
        RushStatus::SlightlyBehind => "rush-slight",
        RushStatus::ModeratelyRushed => "rush-moderate",
        RushStatus::Rushed => "rush-rushed",
        RushStatus::SeverelyRushed | RushStatus::SeverelyRushedHeroes => "rush-severe",
    }
}

/// Compact hero list: `Barbarian King:30/40, Archer Queen:25/40`.
fn hero_cells(deficits: &[Deficit]) -> String {
    deficits
        .iter()
        .take(HERO_CELLS)
        .map(|d| format!("{}:{}/{}", escape(&d.name), d.current, d.target))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Everything the page shows, precomputed.
pub struct DashboardInput<'a> {
    pub clan: &'a Clan,
    pub players: &'a [Player],
    pub rush: &'a RushOverview,
    pub history: &'a HistoryStore,
    /// Shown in the header and footer.
    pub generated_at: &'a str,
}

fn stat_card(out: &mut String, value: &str, label: &str) {
    let _ = write!(
        out,
        "\n      <div class=\"stat-card\"><div class=\"value\">{value}</div><div class=\"label\">{label}</div></div>"
    );
}

fn historical_rows(history: &HistoryStore) -> Vec<&PlayerRecord> {
    let mut v: Vec<&PlayerRecord> = history.players.values().collect();
    v.sort_by(|a, b| {
        b.avg_stars()
            .total_cmp(&a.avg_stars())
            .then(b.total_attacks.cmp(&a.total_attacks))
    });
    v.truncate(HISTORY_ROWS);
    v
}

/// Chart payloads as JSON arrays: (th labels, th counts, status labels, status counts).
fn chart_data(input: &DashboardInput<'_>) -> (String, String, String, String) {
    let mut th: BTreeMap<u32, usize> = BTreeMap::new();
    for p in input.players {
        *th.entry(p.town_hall_level).or_default() += 1;
    }
    let th_labels: Vec<String> = th.keys().rev().map(|t| format!("TH{t}")).collect();
    let th_values: Vec<usize> = th.values().rev().copied().collect();

    let status_labels: Vec<&str> = input.rush.statuses.iter().map(|(s, _)| s.label()).collect();
    let status_values: Vec<usize> = input.rush.statuses.iter().map(|(_, c)| *c).collect();

    let j = |v: serde_json::Result<String>| v.unwrap_or_else(|_| s!("[]"));
    (
        j(serde_json::to_string(&th_labels)),
        j(serde_json::to_string(&th_values)),
        j(serde_json::to_string(&status_labels)),
        j(serde_json::to_string(&status_values)),
    )
}

pub fn render_dashboard(input: &DashboardInput<'_>) -> String {
    let clan = input.clan;
    let name = escape(&clan.name);
    let hist_attacks: u64 = input.history.players.values().map(|p| u64::from(p.total_attacks)).sum();
    let hist_stars: u64 = input.history.players.values().map(|p| u64::from(p.total_stars)).sum();
    let avg_stars = if hist_attacks == 0 { 0.0 } else { hist_stars as f64 / hist_attacks as f64 };

    let mut out = String::with_capacity(32 * 1024);
    let _ = write!(
        out,
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n  <meta charset=\"UTF-8\">\n  \
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n  \
         <title>{name} - Clan Dashboard</title>\n  \
         <script src=\"https://cdn.jsdelivr.net/npm/chart.js\"></script>\n  <style>{STYLE}</style>\n</head>\n<body>\n\
         <div class=\"container\">\n  <div class=\"header\">\n    <h1>{name}</h1>\n    \
         <p class=\"clan-tag\">{} &bull; Level {}</p>\n    \
         <p style=\"margin-top: 10px; color: #aaa;\">Last Updated: {}</p>\n  </div>\n  <div class=\"stats-grid\">",
        escape(&clan.tag),
        clan.clan_level,
        escape(input.generated_at),
    );

    stat_card(&mut out, &clan.members.to_string(), "Members");
    stat_card(&mut out, &format!("{:.1}%", clan.win_rate()), "War Win Rate");
    stat_card(&mut out, &clan.war_wins.to_string(), "War Wins");
    stat_card(&mut out, &format!("{avg_stars:.2}"), "Avg Stars/Attack");
    stat_card(&mut out, &hist_attacks.to_string(), "Attacks Tracked");
    stat_card(&mut out, &input.rush.rushed.to_string(), "Rushed Players");

    out.push_str(
        "\n  </div>\n  <div class=\"section\">\n    <h2>Clan Composition</h2>\n    <div class=\"charts-grid\">\n      \
         <div class=\"chart-container\"><canvas id=\"thChart\"></canvas></div>\n      \
         <div class=\"chart-container\"><canvas id=\"rushChart\"></canvas></div>\n    </div>\n  </div>\n",
    );

    // Rush tables: all / rushed / not rushed
    out.push_str(
        "  <div class=\"section\">\n    <h2>Member Rush Analysis</h2>\n    <div class=\"tab-container\">\n      \
         <button class=\"tab active\" onclick=\"showTab('all', this)\">All Members</button>\n      \
         <button class=\"tab\" onclick=\"showTab('rushed', this)\">Rushed Only</button>\n      \
         <button class=\"tab\" onclick=\"showTab('maxed', this)\">Not Rushed</button>\n    </div>\n",
    );

    out.push_str(
        "    <div id=\"tab-all\" class=\"tab-content active\">\n      <table>\n        <thead><tr>\
         <th>#</th><th>Player</th><th>TH</th><th>Rush Score</th><th>Hero Deficit</th><th>Status</th>\
         </tr></thead>\n        <tbody>",
    );
    for (i, e) in input.rush.entries.iter().enumerate() {
        let _ = write!(
            out,
            "\n          <tr data-rushed=\"{}\"><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td><td>-{}</td>\
             <td><span class=\"rush-status {}\">{}</span></td></tr>",
            e.report.is_rushed,
            i + 1,
            escape(&e.name),
            e.th,
            e.report.rush_score,
            e.report.total_missing_hero_levels,
            status_class(e.report.status),
            e.report.status.label(),
        );
    }
    out.push_str("\n        </tbody>\n      </table>\n    </div>\n");

    out.push_str(
        "    <div id=\"tab-rushed\" class=\"tab-content\">\n      <table>\n        <thead><tr>\
         <th>#</th><th>Player</th><th>TH</th><th>Rush Score</th><th>Hero Deficit</th><th>Rushed Heroes</th>\
         </tr></thead>\n        <tbody>",
    );
    for (i, e) in input.rush.entries.iter().filter(|e| e.report.is_rushed).enumerate() {
        let _ = write!(
            out,
            "\n          <tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td><td>-{}</td>\
             <td style=\"font-size: 0.85em;\">{}</td></tr>",
            i + 1,
            escape(&e.name),
            e.th,
            e.report.rush_score,
            e.report.total_missing_hero_levels,
            hero_cells(&e.report.rushed_heroes),
        );
    }
    out.push_str("\n        </tbody>\n      </table>\n    </div>\n");

    out.push_str(
        "    <div id=\"tab-maxed\" class=\"tab-content\">\n      <table>\n        <thead><tr>\
         <th>#</th><th>Player</th><th>TH</th><th>Rush Score</th><th>Status</th>\
         </tr></thead>\n        <tbody>",
    );
    for (i, e) in input.rush.entries.iter().filter(|e| !e.report.is_rushed).enumerate() {
        let _ = write!(
            out,
            "\n          <tr><td>{}</td><td>{}</td><td>{}</td><td>{:.1}</td>\
             <td><span class=\"rush-status rush-maxed\">Not Rushed</span></td></tr>",
            i + 1,
            escape(&e.name),
            e.th,
            e.report.rush_score,
        );
    }
    out.push_str("\n        </tbody>\n      </table>\n    </div>\n  </div>\n");

    out.push_str(
        "  <div class=\"section\">\n    <h2>Historical War Performance</h2>\n    <table>\n      <thead><tr>\
         <th>#</th><th>Player</th><th>TH</th><th>Attacks</th><th>Stars</th><th>Avg Stars</th><th>3-Star %</th>\
         </tr></thead>\n      <tbody>",
    );
    for (i, p) in historical_rows(input.history).into_iter().enumerate() {
        let _ = write!(
            out,
            "\n        <tr><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{:.2}</td><td>{:.1}%</td></tr>",
            i + 1,
            escape(&p.name),
            p.current_th,
            p.total_attacks,
            p.total_stars,
            p.avg_stars(),
            p.three_star_rate(),
        );
    }
    out.push_str("\n      </tbody>\n    </table>\n  </div>\n");

    let (th_labels, th_values, status_labels, status_values) = chart_data(input);
    let _ = write!(
        out,
        "  <div class=\"footer\"><p>Generated by Clan Analyzer | {}</p></div>\n</div>\n<script>\n\
         new Chart(document.getElementById('thChart'), {{ type: 'bar', data: {{ labels: {th_labels}, \
         datasets: [{{ label: 'Players', data: {th_values}, backgroundColor: ['#e94560', '#f39c12', '#3498db', \
         '#2ecc71', '#9b59b6', '#1abc9c', '#e74c3c', '#34495e', '#f1c40f', '#95a5a6'] }}] }}, \
         options: {{ responsive: true, plugins: {{ title: {{ display: true, text: 'Town Hall Distribution', \
         color: '#fff' }}, legend: {{ display: false }} }}, scales: {{ y: {{ beginAtZero: true }} }} }} }});\n\
         new Chart(document.getElementById('rushChart'), {{ type: 'doughnut', data: {{ labels: {status_labels}, \
         datasets: [{{ data: {status_values}, backgroundColor: ['#27ae60', '#2ecc71', '#f39c12', '#e74c3c', \
         '#e67e22', '#95a5a6', '#34495e'] }}] }}, options: {{ responsive: true, plugins: {{ title: {{ display: true, \
         text: 'Rush Status Distribution', color: '#fff' }}, legend: {{ position: 'bottom' }} }} }} }});\n\
         {SCRIPT_TAIL}</script>\n</body>\n</html>\n",
        escape(input.generated_at),
    );
    out
}

pub fn write_dashboard(path: &Path, input: &DashboardInput<'_>) -> Result<(), RunError> {
    let html = render_dashboard(input);
    write_atomic(path, html.as_bytes())?;
    logf!("dashboard written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn escapes_markup() {
        assert_eq!(escape("<b>\"A&B\"</b>"), "&lt;b&gt;&quot;A&amp;B&quot;&lt;/b&gt;");
    }

    #[test]
    fn severe_statuses_share_a_class() {
        assert_eq!(status_class(RushStatus::SeverelyRushedHeroes), "rush-severe");
        assert_eq!(status_class(RushStatus::NewAccount), "rush-maxed");
    }
}
