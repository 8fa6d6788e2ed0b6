//! Sample programme: Telfer House.
//!
//! A 35-line residential refurbishment programme in the shape an upstream
//! spreadsheet export produces. Useful for demos and as an end-to-end
//! regression input; it includes noise rows (no category, no dates) that
//! the analysis is expected to skip.

use chrono::NaiveDate;

use crate::models::{ParsedProgramme, ProgrammeBounds, ScheduleRow};

/// (name, duration, start, end, work type hint)
type Line = (&'static str, &'static str, &'static str, &'static str, Option<&'static str>);

const TELFER_HOUSE: &[Line] = &[
    ("Contract Start Date", "0d", "06/01/25", "06/01/25", None),
    ("Site Mobilisation", "2w", "06/01/25", "17/01/25", None),
    ("Pre-Commencement Planning Conditions Discharge", "8w", "06/01/25", "28/02/25", None),
    ("Measured Building Survey", "1w", "13/01/25", "17/01/25", None),
    ("Stage 4 Structural Design", "6w", "13/01/25", "21/02/25", None),
    ("Asbestos Removal", "3w", "20/01/25", "07/02/25", Some("demolition")),
    ("Soft Strip & Demolition", "4w", "10/02/25", "07/03/25", None),
    ("Piling", "3w", "10/03/25", "28/03/25", None),
    ("Pilecaps & Ground Beams", "3w", "31/03/25", "18/04/25", Some("structural")),
    ("RC Frame Sub-Structures", "4w", "21/04/25", "16/05/25", Some("structural")),
    ("RC Frame 1st - 2nd Floor Slab", "4w", "19/05/25", "13/06/25", Some("structural")),
    ("RC Frame 3rd - 4th Floor Slab", "4w", "16/06/25", "11/07/25", Some("structural")),
    ("Scaffold Ground to Roof Level", "6w", "16/06/25", "25/07/25", None),
    ("Windows Procurement", "4w", "02/06/25", "27/06/25", None),
    ("SFS Inner Skin Ground Floor", "3w", "14/07/25", "01/08/25", Some("structural")),
    ("SFS Inner Skin 1st Floor", "3w", "28/07/25", "15/08/25", Some("structural")),
    ("SFS Inner Skin 2nd Floor", "3w", "11/08/25", "29/08/25", Some("structural")),
    ("Roofing", "4w", "28/07/25", "22/08/25", None),
    ("Windows Ground Floor", "2w", "04/08/25", "15/08/25", Some("construction")),
    ("Windows 1st Floor", "2w", "18/08/25", "29/08/25", Some("construction")),
    ("External Brickwork", "8w", "18/08/25", "10/10/25", Some("construction")),
    ("Client Walkround", "1d", "05/09/25", "05/09/25", None),
    ("Electrical Mains & Distribution", "4w", "01/09/25", "26/09/25", None),
    ("Plumbing Risers & Drainage", "4w", "01/09/25", "26/09/25", None),
    ("Fit Out 7No. Ground Floor Flats", "22w", "15/09/25", "16/02/26", Some("construction")),
    ("Fit Out 7No. First Floor Flats", "22w", "29/09/25", "02/03/26", Some("construction")),
    ("Fit Out 7No. Second Floor Flats", "22w", "13/10/25", "16/03/26", Some("construction")),
    ("Communal Area Finishes", "6w", "12/01/26", "20/02/26", None),
    ("Lift Installation", "6w", "03/11/25", "12/12/25", Some("equipment")),
    ("Christmas Shutdown", "2w", "22/12/25", "02/01/26", None),
    ("Decoration & Painting", "4w", "02/02/26", "27/02/26", None),
    ("External Works & Landscaping", "6w", "02/02/26", "13/03/26", Some("site")),
    ("Building Control Approval", "1w", "09/03/26", "13/03/26", None),
    ("Practical Completion & Handover", "0d", "27/03/26", "27/03/26", None),
    ("Rectification Period", "52w", "TBC", "TBC", None),
];

const PROGRAMME_START: NaiveDate = match NaiveDate::from_ymd_opt(2025, 1, 6) {
    Some(date) => date,
    None => panic!("invalid programme start"),
};

const PROGRAMME_END: NaiveDate = match NaiveDate::from_ymd_opt(2026, 3, 27) {
    Some(date) => date,
    None => panic!("invalid programme end"),
};

/// The Telfer House programme.
pub fn telfer_house() -> ParsedProgramme {
    let bounds = ProgrammeBounds::new(PROGRAMME_START, PROGRAMME_END, 64);

    let rows = TELFER_HOUSE
        .iter()
        .zip(1u32..)
        .map(|(&(name, duration, start, end, hint), line)| {
            let row = ScheduleRow::new(line, name)
                .with_duration(duration)
                .with_dates(start, end);
            match hint {
                Some(h) => row.with_work_type(h),
                None => row,
            }
        })
        .collect();

    ParsedProgramme {
        project_name: "Telfer House".to_string(),
        rows,
        timeline: bounds,
    }
}
