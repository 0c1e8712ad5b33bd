//! Text renderers for coordinated frequency lists.
//!
//! Renderers only format what the engine returned. Timestamps and venue
//! details come from the caller so output is reproducible.

use serde::{Deserialize, Serialize};

use crate::{
    assignment::Assignment,
    engine::{analyzer::Analysis, occupancy::OccupancyMap},
    types::DeviceKind,
};

/// Caller-supplied context printed in export headers.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct ReportContext {
    /// Short venue slug used in file names.
    pub venue_id: Option<String>,
    /// Venue display name.
    pub venue_name: Option<String>,
    /// City of the venue.
    pub city: Option<String>,
    /// State of the venue.
    pub state: Option<String>,
    /// Pre-formatted generation timestamp.
    pub generated_at: String,
}

/// Downloadable export flavours.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExportFormat {
    /// Wireless Workbench frequency list.
    WwbList,
    /// Space-separated frequency list.
    FrequencyList,
    /// CSV with name, type, frequency and origin.
    FullReport,
}

impl ExportFormat {
    /// File extension without the dot.
    pub fn extension(self) -> &'static str {
        match self {
            Self::WwbList | Self::FrequencyList => "txt",
            Self::FullReport => "csv",
        }
    }

    /// MIME type for downloads.
    pub fn mime_type(self) -> &'static str {
        match self {
            Self::WwbList | Self::FrequencyList => "text/plain",
            Self::FullReport => "text/csv",
        }
    }

    /// `rf_scout_<flavour>_<venue id or "export">.<ext>`.
    pub fn file_name(self, venue_id: Option<&str>) -> String {
        let stem = match self {
            Self::WwbList => "wwb",
            Self::FrequencyList => "frequencies",
            Self::FullReport => "report",
        };
        format!(
            "rf_scout_{stem}_{}.{}",
            venue_id.unwrap_or("export"),
            self.extension()
        )
    }

    /// Renders `assignments` in this format.
    pub fn render(self, assignments: &[Assignment], ctx: &ReportContext) -> String {
        match self {
            Self::WwbList => wwb_frequency_list(assignments, ctx),
            Self::FrequencyList => frequency_list(assignments),
            Self::FullReport => csv_report(assignments),
        }
    }
}

/// Comment header followed by one frequency per line, for Wireless Workbench
/// import.
pub fn wwb_frequency_list(assignments: &[Assignment], ctx: &ReportContext) -> String {
    let mut out = format!(
        "// RF Scout Export for Wireless Workbench\n// Venue: {}\n// Generated: {}\n\n",
        ctx.venue_name.as_deref().unwrap_or("Unknown"),
        ctx.generated_at
    );
    let lines: Vec<String> = assignments.iter().map(|a| format!("{:.3}", a.value)).collect();
    out.push_str(&lines.join("\n"));
    out
}

/// Space-separated frequencies, three decimals each.
pub fn frequency_list(assignments: &[Assignment]) -> String {
    assignments
        .iter()
        .map(|a| format!("{:.3}", a.value))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Sennheiser WSM frequency list; values in kHz.
pub fn wsm_xml(assignments: &[Assignment]) -> String {
    let mut lines = vec![
        r#"<?xml version="1.0" encoding="UTF-8"?>"#.to_string(),
        "<FrequencyList>".to_string(),
    ];
    lines.extend(
        assignments
            .iter()
            .map(|a| format!(r#"  <Frequency value="{:.0}" unit="kHz" />"#, a.value * 1000.0)),
    );
    lines.push("</FrequencyList>".to_string());
    lines.join("\n")
}

/// `Name,Type,Frequency (MHz),Status` rows.
///
/// Unlabelled rows are named after their kind and 1-based plan position.
pub fn csv_report(assignments: &[Assignment]) -> String {
    let mut out = String::from("Name,Type,Frequency (MHz),Status\n");
    let rows: Vec<String> = assignments
        .iter()
        .enumerate()
        .map(|(idx, a)| {
            let name = a
                .label
                .clone()
                .unwrap_or_else(|| format!("{} {}", a.kind.display_prefix(), idx + 1));
            format!(
                "\"{}\",{},{:.3},{}",
                name.replace('"', "\"\""),
                a.kind.as_str(),
                a.value,
                a.origin.as_str()
            )
        })
        .collect();
    out.push_str(&rows.join("\n"));
    out
}

/// Sectioned plain-text coordination report.
pub fn detailed_report(
    assignments: &[Assignment],
    occupancy: &OccupancyMap<'_>,
    analysis: &Analysis,
    ctx: &ReportContext,
) -> String {
    let mut lines: Vec<String> = vec![
        "RF SCOUT COORDINATION REPORT".into(),
        "=============================".into(),
        String::new(),
        format!("Generated: {}", ctx.generated_at),
        format!(
            "Venue: {}",
            ctx.venue_name.as_deref().unwrap_or("Manual Location")
        ),
        format!(
            "Location: {}, {}",
            ctx.city.as_deref().unwrap_or("Unknown"),
            ctx.state.as_deref().unwrap_or("")
        ),
        String::new(),
        "ACTIVE TV CHANNELS".into(),
        "------------------".into(),
    ];
    let channels: Vec<String> = occupancy
        .active()
        .filter_map(|ch| occupancy.table().get(ch))
        .map(|info| format!("Ch {}: {}-{} MHz", info.channel, info.min, info.max))
        .collect();
    if channels.is_empty() {
        lines.push(String::new());
    }
    lines.extend(channels);

    lines.extend([
        String::new(),
        "COORDINATED FREQUENCIES".into(),
        "-----------------------".into(),
        String::new(),
        "WIRELESS MICROPHONES:".into(),
    ]);
    lines.extend(kind_lines(assignments, DeviceKind::Mic));
    lines.extend([String::new(), "IN-EAR MONITORS:".into()]);
    lines.extend(kind_lines(assignments, DeviceKind::Iem));

    lines.extend([
        String::new(),
        "ANALYSIS".into(),
        "--------".into(),
        format!("Issues: {}", analysis.issues.len()),
        format!("Warnings: {}", analysis.warnings.len()),
        format!("IM Products Calculated: {}", analysis.im_products.len()),
        String::new(),
        "NOTES".into(),
        "-----".into(),
        "- Always verify with RF scan at venue".into(),
        "- TV channels may vary - check local broadcasts".into(),
        "- Keep 4+ MHz separation between mics and IEMs".into(),
        String::new(),
        "=============================".into(),
        "Generated by RF Scout".into(),
    ]);
    lines.join("\n")
}

// numbered per kind, so the third mic is "3." even if IEMs come first
fn kind_lines(assignments: &[Assignment], kind: DeviceKind) -> impl Iterator<Item = String> + '_ {
    assignments
        .iter()
        .filter(move |a| a.kind == kind)
        .enumerate()
        .map(move |(i, a)| {
            let name = a
                .label
                .clone()
                .unwrap_or_else(|| format!("{} {}", kind.display_prefix(), i + 1));
            format!("  {}. {}: {:.3} MHz", i + 1, name, a.value)
        })
}
