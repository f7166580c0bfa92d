//! Display units. The engine computes in cm; conversion only happens at the
//! edge, through a converter the caller passes in.

use serde::{Deserialize, Serialize};

const CM_PER_INCH: f64 = 2.54;
const MM_PER_CM: f64 = 10.0;

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    #[default]
    Cm,
    Mm,
    Inches,
}

impl Unit {
    pub fn label(self) -> &'static str {
        match self {
            Unit::Cm => "cm",
            Unit::Mm => "mm",
            Unit::Inches => "in",
        }
    }

    /// Formatter from cm to labelled text in this unit, for `dimensioning`.
    pub fn formatter(self) -> impl Fn(f64) -> String {
        move |cm| format_value(cm, self, true)
    }
}

impl std::str::FromStr for Unit {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "cm" => Ok(Unit::Cm),
            "mm" => Ok(Unit::Mm),
            "in" | "inch" | "inches" => Ok(Unit::Inches),
            other => Err(format!("unknown unit '{other}' (expected cm, mm or inches)")),
        }
    }
}

fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Convert between units. Results in mm are whole numbers; cm and inches keep two decimals.
pub fn convert(value: f64, from: Unit, to: Unit) -> f64 {
    if from == to {
        return value;
    }
    let cm = match from {
        Unit::Cm => value,
        Unit::Mm => value / MM_PER_CM,
        Unit::Inches => value * CM_PER_INCH,
    };
    match to {
        Unit::Cm => round2(cm),
        Unit::Mm => (cm * MM_PER_CM).round(),
        Unit::Inches => round2(cm / CM_PER_INCH),
    }
}

/// Render a cm value in `unit`: `"12.5 cm"`, `"125 mm"`, `"4.92\""`.
pub fn format_value(value_cm: f64, unit: Unit, show_unit: bool) -> String {
    let v = convert(value_cm, Unit::Cm, unit);
    let text = if unit == Unit::Mm {
        format!("{}", v.round())
    } else {
        format!("{}", round2(v))
    };
    match (show_unit, unit) {
        (false, _) => text,
        (true, Unit::Inches) => format!("{text}\""),
        (true, u) => format!("{text} {}", u.label()),
    }
}
