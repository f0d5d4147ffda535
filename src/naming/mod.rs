//! Tool naming rules
//!
//! Each known tool `type` maps to one NamingRule. A rule reads the geometry it
//! needs from the record and yields a RuleOutcome:
//! - Name: the canonical description for the tool
//! - PassThrough: keep the record as exported (special drills)
//! - Drop: no rule applies and the record is left out (unknown taper kinds)
//!
//! Types with no rule at all are passed through by the renamer.

pub mod format;
pub mod tables;

use crate::error::{CamError, Result};
use crate::library::ToolRecord;

use self::format::Measure;
use self::tables::{holder_style, relief_letter};

/// Point angle of a standard jobber drill
pub const STANDARD_DRILL_ANGLE: f64 = 118.0;

/// Point angle of a flat-bottom drill
pub const FLAT_DRILL_ANGLE: f64 = 180.0;

/// Result of applying a naming rule to one record
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RuleOutcome {
    Name(String),
    PassThrough,
    Drop,
}

/// The closed set of tool types that get canonical names
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NamingRule {
    FlatEndMill,
    Drill,
    TapRightHand,
    TapLeftHand,
    BullNoseEndMill,
    BallEndMill,
    TaperedMill,
    TurningGeneral,
    TurningBoring,
}

/// Sub-kind of a tapered mill, from `tapered-type`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaperKind {
    BullNose,
    Ball,
}

impl TaperKind {
    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "tapered_bull_nose" => Some(Self::BullNose),
            "tapered_ball" => Some(Self::Ball),
            _ => None,
        }
    }
}

impl NamingRule {
    /// Look up the rule for an exported `type` tag (exact match)
    pub fn for_type(tool_type: &str) -> Option<Self> {
        match tool_type {
            "flat end mill" => Some(Self::FlatEndMill),
            "drill" => Some(Self::Drill),
            "tap right hand" => Some(Self::TapRightHand),
            "tap left hand" => Some(Self::TapLeftHand),
            "bull nose end mill" => Some(Self::BullNoseEndMill),
            "ball end mill" => Some(Self::BallEndMill),
            "tapered mill" => Some(Self::TaperedMill),
            "turning general" => Some(Self::TurningGeneral),
            "turning boring" => Some(Self::TurningBoring),
            _ => None,
        }
    }

    pub fn apply(self, record: &ToolRecord) -> Result<RuleOutcome> {
        match self {
            Self::FlatEndMill => {
                let dia = record.geometry_measure("DC")?.round(2);
                let material = record.material()?;
                Ok(upper(format!("{} ENDMILL {}MM", material, dia)))
            }
            Self::Drill => {
                let angle = record.geometry_measure("SIG")?.as_f64();
                let dia = record.geometry_measure("DC")?.round(2);
                let material = record.material()?;
                if angle == STANDARD_DRILL_ANGLE {
                    Ok(upper(format!("{} DRILL {}MM", material, dia)))
                } else if angle == FLAT_DRILL_ANGLE {
                    Ok(upper(format!("{} FLAT DRILL {}MM", material, dia)))
                } else {
                    Ok(RuleOutcome::PassThrough)
                }
            }
            // Left-hand taps carry the right-hand label as well.
            Self::TapRightHand | Self::TapLeftHand => {
                let dia = record.geometry_measure("DC")?.round(2);
                let pitch = record.geometry_measure("TP")?;
                Ok(upper(format!("RIGHT HAND TAP M{} X {}MM", dia, pitch)))
            }
            Self::BullNoseEndMill => {
                let dia = record.geometry_measure("DC")?.round(2);
                let radius = record.geometry_measure("RE")?.round(2);
                let material = record.material()?;
                Ok(upper(format!("{} BULL ENDMILL {}MM R{}", material, dia, radius)))
            }
            Self::BallEndMill => {
                let dia = record.geometry_measure("DC")?.round(2);
                let material = record.material()?;
                Ok(upper(format!("{} FULL BALL ENDMILL {}MM", material, dia)))
            }
            Self::TaperedMill => {
                let kind = record.tapered_type()?.and_then(TaperKind::from_tag);
                match kind {
                    Some(TaperKind::BullNose) | Some(TaperKind::Ball) => {}
                    None => return Ok(RuleOutcome::Drop),
                }
                let dia = record.geometry_measure("DC")?.round(2);
                let radius = record.geometry_measure("RE")?.round(2);
                let taper = record.geometry_measure("TA")?.round(2);
                let material = record.material()?;
                Ok(upper(format!(
                    "{} TAPER ENDMILL D{} R{} - {}DEGREES",
                    material, dia, radius, taper
                )))
            }
            Self::TurningGeneral => {
                let insert = insert_code(record)?;
                Ok(RuleOutcome::Name(format!("OD TURN {} - R{}", insert.code, insert.radius)))
            }
            Self::TurningBoring => {
                let insert = insert_code(record)?;
                let width = record.holder_measure("W")?;
                let style_tag = record.holder_code("THSC")?;
                let style = holder_style(&style_tag).ok_or_else(|| CamError::UnknownHolderStyle {
                    record: record.label(),
                    style: style_tag.clone(),
                })?;
                let dmin = record.holder_measure("CW")?.plus_half(width);
                Ok(RuleOutcome::Name(format!(
                    "ID BORE {}MM Holder Type {} {} - R{} DMIN {}",
                    width, style, insert.code, insert.radius, dmin
                )))
            }
        }
    }
}

/// ISO-style insert designation shared by the turning rules
struct InsertCode {
    code: String,
    radius: Measure,
}

fn insert_code(record: &ToolRecord) -> Result<InsertCode> {
    // Inscribed circle is not part of the name but must be present.
    record.geometry_measure("INSD")?;
    let radius = record.geometry_measure("RE")?.round(2);
    let relief_code = record.geometry_code("RA")?;
    let relief = relief_letter(&relief_code).ok_or_else(|| CamError::UnknownReliefCode {
        record: record.label(),
        code: relief_code.clone(),
    })?;
    let tolerance = record.geometry_code("TC")?;
    let screw = record.geometry_code("SCTY")?;
    let size = record.geometry_code("SC")?;
    Ok(InsertCode {
        code: format!("{}{}{}{}", size, relief, tolerance, screw),
        radius,
    })
}

fn upper(name: String) -> RuleOutcome {
    RuleOutcome::Name(name.to_uppercase())
}
