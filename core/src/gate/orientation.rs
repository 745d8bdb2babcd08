/// Gate facings that need their own standoff or drawing treatment.
///
/// Classification is by exact equality on the authored degree value; the
/// planner only places standoffs correctly for these facings and for gates
/// close to straight-on.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum GateOrientation {
    /// -90 degrees.
    Quarter,
    /// -270 degrees.
    ThreeQuarter,
    /// -135 degrees.
    Diagonal,
    /// -178 degrees.
    Reverse,
    Other(f64),
}

/// Sign and lateral corrections applied to approach and exit waypoints.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrientationFix {
    pub sign_flip: f64,
    pub lateral_fix: f64,
}

impl OrientationFix {
    pub const IDENTITY: OrientationFix = OrientationFix {
        sign_flip: 1.0,
        lateral_fix: 0.0,
    };
}

impl GateOrientation {
    #[allow(clippy::float_cmp)]
    pub fn from_degrees(rotation: f64) -> Self {
        if rotation == -90.0 {
            Self::Quarter
        } else if rotation == -270.0 {
            Self::ThreeQuarter
        } else if rotation == -135.0 {
            Self::Diagonal
        } else if rotation == -178.0 {
            Self::Reverse
        } else {
            Self::Other(rotation)
        }
    }

    pub fn corrections(&self, gate_width: f64) -> OrientationFix {
        match self {
            Self::Quarter | Self::ThreeQuarter => OrientationFix {
                sign_flip: -1.0,
                lateral_fix: 0.0,
            },
            Self::Diagonal => OrientationFix {
                sign_flip: 1.0,
                lateral_fix: gate_width,
            },
            Self::Reverse | Self::Other(_) => OrientationFix::IDENTITY,
        }
    }

    /// Corner a `thickness x width` gate rectangle is anchored at before it is
    /// rotated about that corner. `origin` is already shifted into the launch frame.
    pub fn rect_anchor(
        &self,
        origin: (f64, f64),
        offset_y: f64,
        width: f64,
        thickness: f64,
    ) -> (f64, f64) {
        let (x, y) = origin;
        match self {
            Self::Quarter => (x - width / 2.0, y + thickness / 2.0),
            Self::ThreeQuarter => (x + width / 2.0, y - thickness / 2.0),
            // Fitted by eye for the -135 gates in the reference courses.
            Self::Diagonal => (x - width * 0.30, y + width * 0.40),
            Self::Reverse => (x + thickness / 2.0, y + width / 2.0 + offset_y),
            Self::Other(_) => (x - thickness / 2.0, y - width / 2.0 + offset_y),
        }
    }
}
