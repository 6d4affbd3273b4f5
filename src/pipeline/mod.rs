//! Pipeline orchestration for timeline requests.
//!
//! Glue between the raw request shape the binary exchanges as JSON and the
//! core's structured inputs: normalize country codes, fill display names
//! from the catalogue, run the resolver, then the layout engine. The
//! library entry points stay deterministic; the wall clock is only
//! consulted when the request carries no `today` and the caller supplies no
//! override.

use crate::catalog;
use crate::error::Result;
use crate::layout::{self, FlagImage, LayoutConfig, TimelineOutput};
use crate::model::{CountryCode, ResidenceRow, VisitMap, VisitRecord, YearMonth};
use crate::resolver;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A complete layout request as exchanged with the input surface.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimelineRequest {
    pub birth: YearMonth,
    /// Anchor for "now"; defaults to the wall clock when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub today: Option<YearMonth>,
    #[serde(default)]
    pub visits: Vec<VisitInput>,
    /// Raw residence rows; an empty list means the residence section was
    /// never activated and no residence bars are drawn.
    #[serde(default)]
    pub residences: Vec<ResidenceInput>,
    /// Pre-fetched flag images by country code. The core performs no I/O;
    /// whatever is absent here renders label-only.
    #[serde(default)]
    pub flags: HashMap<String, FlagImage>,
}

/// One visited country with its first-visit date.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VisitInput {
    pub country: String,
    /// Display name override; the catalogue fills it in when absent.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    pub date: YearMonth,
}

/// One raw residence row; any field may be unset.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ResidenceInput {
    #[serde(default)]
    pub country: Option<String>,
    #[serde(default)]
    pub from: Option<YearMonth>,
    #[serde(default)]
    pub until: Option<YearMonth>,
}

/// Run a full request through resolver and layout engine.
///
/// `today_override` wins over the request's own `today`; both beat the wall
/// clock.
pub fn run(
    request: &TimelineRequest,
    today_override: Option<YearMonth>,
    config: &LayoutConfig,
) -> Result<TimelineOutput> {
    let today = today_override
        .or(request.today)
        .unwrap_or_else(YearMonth::today_utc);

    let mut visits = VisitMap::new();
    for input in &request.visits {
        let code = CountryCode::new(&input.country);
        let name = input
            .name
            .clone()
            .unwrap_or_else(|| catalog::display_name(&code));
        visits.insert(code.clone(), VisitRecord::new(code, name, input.date));
    }
    let available: Vec<CountryCode> = visits.keys().cloned().collect();

    // No rows at all means the residence section was never activated; the
    // resolver's default-row synthesis only applies once it is.
    let periods = if request.residences.is_empty() {
        Vec::new()
    } else {
        let rows: Vec<ResidenceRow> = request
            .residences
            .iter()
            .map(|input| ResidenceRow {
                country: input.country.as_deref().map(CountryCode::new),
                from: input.from,
                until: input.until,
            })
            .collect();
        resolver::resolve(request.birth, today, &rows, &available).periods(request.birth, today)
    };

    let flags: HashMap<CountryCode, FlagImage> = request
        .flags
        .iter()
        .map(|(code, image)| (CountryCode::new(code), *image))
        .collect();

    tracing::info!(
        visits = visits.len(),
        residence_periods = periods.len(),
        %today,
        "running timeline pipeline"
    );

    layout::layout(request.birth, &visits, &periods, &flags, today, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::TimelineError;

    fn ym(year: i32, month: u32) -> YearMonth {
        YearMonth::new(year, month)
    }

    #[test]
    fn request_roundtrips_through_json() {
        let json = r#"{
            "birth": {"year": 1990, "month": 1},
            "today": {"year": 2025, "month": 8},
            "visits": [
                {"country": "fr", "date": {"year": 2010, "month": 6}},
                {"country": "JP", "name": "Nippon", "date": {"year": 2019, "month": 3}}
            ],
            "residences": [
                {"country": "FR", "from": {"year": 2012, "month": 1}, "until": {"year": 2015, "month": 1}}
            ]
        }"#;
        let request: TimelineRequest = serde_json::from_str(json).unwrap();
        let output = run(&request, None, &LayoutConfig::default()).unwrap();

        assert_eq!(output.summary.countries_visited, 2);
        let names: Vec<&str> = output
            .layout
            .entries
            .iter()
            .map(|e| e.display_name.as_str())
            .collect();
        // Catalogue name for FR, explicit override for JP.
        assert_eq!(names, vec!["Nippon", "France"]);

        let france = &output.layout.entries[1];
        assert_eq!(france.residence_spans.len(), 1);
    }

    #[test]
    fn empty_visit_list_is_rejected_with_message() {
        let request = TimelineRequest {
            birth: ym(1990, 1),
            today: Some(ym(2025, 8)),
            visits: Vec::new(),
            residences: Vec::new(),
            flags: HashMap::new(),
        };
        let err = run(&request, None, &LayoutConfig::default()).unwrap_err();
        assert!(matches!(err, TimelineError::EmptySelection));
        assert!(!err.to_string().is_empty());
    }

    #[test]
    fn today_override_beats_request_today() {
        let request = TimelineRequest {
            birth: ym(1990, 1),
            today: Some(ym(2020, 1)),
            visits: vec![VisitInput {
                country: "FR".to_string(),
                name: None,
                date: ym(2010, 1),
            }],
            residences: Vec::new(),
            flags: HashMap::new(),
        };
        let output = run(&request, Some(ym(2025, 1)), &LayoutConfig::default()).unwrap();
        assert_eq!(output.layout.current_age, 35.0);
    }

    #[test]
    fn inactive_residence_section_draws_no_residence_bars() {
        let request = TimelineRequest {
            birth: ym(1990, 1),
            today: Some(ym(2025, 8)),
            visits: vec![VisitInput {
                country: "FR".to_string(),
                name: None,
                date: ym(2010, 1),
            }],
            residences: Vec::new(),
            flags: HashMap::new(),
        };
        let output = run(&request, None, &LayoutConfig::default()).unwrap();
        assert!(output.layout.entries[0].residence_spans.is_empty());
    }
}
