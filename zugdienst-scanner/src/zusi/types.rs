//! Zusi file DTOs.
//!
//! These types map directly onto the two XML file kinds a service consists
//! of: the run log (`.trn`, one `<Zug>` with its `<FahrplanEintrag>` rows)
//! and the timetable (`.timetable.xml`, one or more `<Buchfahrplan>`
//! segments with their `<FplZeile>` rows). `Option` is used liberally
//! because Zusi omits attributes rather than writing empty ones.

use serde::Deserialize;

/// Root element of a run-log file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename = "Zusi")]
pub struct RunLogFile {
    /// The single train run the file describes.
    #[serde(rename = "Zug")]
    pub zug: Option<Zug>,
}

/// One train run: metadata plus the ordered stop events.
#[derive(Debug, Clone, Deserialize)]
pub struct Zug {
    /// Schedule-group label, used for exclusion filtering.
    #[serde(rename = "@FahrplanGruppe")]
    pub fahrplan_gruppe: Option<String>,

    /// Set (non-empty) for passenger services, absent for cargo.
    #[serde(rename = "@Zugtyp")]
    pub zugtyp: Option<String>,

    /// Ordered stop-event rows.
    #[serde(rename = "FahrplanEintrag", default)]
    pub eintraege: Vec<FahrplanEintrag>,
}

/// One stop event in the run log.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FahrplanEintrag {
    /// Operating-point name.
    #[serde(rename = "@Betrst")]
    pub betriebsstelle: Option<String>,

    /// Arrival timestamp.
    #[serde(rename = "@Ank")]
    pub ankunft: Option<String>,

    /// Departure timestamp.
    #[serde(rename = "@Abf")]
    pub abfahrt: Option<String>,

    /// Vehicle-formation action code. `"2"` marks a turnaround.
    #[serde(rename = "@FzgVerbandAktion")]
    pub fzg_verband_aktion: Option<String>,

    /// Operational events recorded at this point.
    #[serde(rename = "Ereignis", default)]
    pub ereignisse: Vec<Ereignis>,
}

/// An operational event marker on a stop event.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Ereignis {
    /// Event code, informational only.
    #[serde(rename = "@Er")]
    pub code: Option<String>,
}

/// Root element of a timetable file.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename = "Zusi")]
pub struct TimetableFile {
    /// Route segments; a through service spans more than one.
    #[serde(rename = "Buchfahrplan", default)]
    pub segmente: Vec<Buchfahrplan>,
}

/// One timetable segment: train metadata plus the dense row list.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct Buchfahrplan {
    /// Train category code (e.g. `ICE`, `RB`, `DGS`).
    #[serde(rename = "@Gattung")]
    pub gattung: Option<String>,

    /// Train number.
    #[serde(rename = "@Nummer")]
    pub nummer: Option<String>,

    /// Traction (Baureihe) code.
    #[serde(rename = "@BR")]
    pub br: Option<String>,

    /// Train length in metres, possibly fractional.
    #[serde(rename = "@Laenge")]
    pub laenge: Option<f64>,

    /// Train mass in kilograms.
    #[serde(rename = "@Masse")]
    pub masse: Option<f64>,

    /// Advertised itinerary label, e.g. `"Kassel Hbf - Hamburg-Altona"`.
    #[serde(rename = "@Zuglauf")]
    pub zuglauf: Option<String>,

    /// Ordered timetable rows, every point the line passes.
    #[serde(rename = "FplZeile", default)]
    pub zeilen: Vec<FplZeile>,
}

/// One timetable row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FplZeile {
    /// Cumulative running distance from the route origin, in metres.
    #[serde(rename = "@FplLaufweg")]
    pub laufweg: Option<f64>,

    /// Name sub-element, absent on pure signal rows.
    #[serde(rename = "FplName")]
    pub name: Option<FplName>,

    /// Arrival sub-element.
    #[serde(rename = "FplAnk")]
    pub ankunft: Option<FplAnk>,

    /// Departure sub-element.
    #[serde(rename = "FplAbf")]
    pub abfahrt: Option<FplAbf>,

    /// Icon marker: the row is an on-screen annotation.
    #[serde(rename = "FplIcon")]
    pub icon: Option<FplIcon>,

    /// Direction-reversal marker.
    #[serde(rename = "FplRichtungswechsel")]
    pub richtungswechsel: Option<FplRichtungswechsel>,
}

/// Name sub-element of a timetable row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FplName {
    /// The display name.
    #[serde(rename = "@FplNameText")]
    pub text: Option<String>,
}

/// Arrival sub-element of a timetable row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FplAnk {
    /// Arrival timestamp.
    #[serde(rename = "@Ank")]
    pub ank: Option<String>,
}

/// Departure sub-element of a timetable row.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FplAbf {
    /// Departure timestamp.
    #[serde(rename = "@Abf")]
    pub abf: Option<String>,
}

/// Icon marker sub-element.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FplIcon {
    /// Icon number, informational only.
    #[serde(rename = "@FplIcon")]
    pub nr: Option<i32>,
}

/// Direction-reversal marker sub-element. Presence is the signal.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct FplRichtungswechsel {}
