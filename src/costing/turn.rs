/// Degrees of turn over which the table penalty decays by `e`.
const DECAY_DEGREES: f64 = 45.0;

/// Folds an arbitrary angular difference into [0, 180] degrees.
///
/// Turns carry no handedness here: -0.3° folds to 0.3°, and 180.4°
/// folds to 179.6°.
pub fn fold_angle(angle: f64) -> f64 {
    let wrapped = (angle % 360.0).abs();

    if wrapped > 180.0 {
        360.0 - wrapped
    } else {
        wrapped
    }
}

/// Unsigned turn angle between the heading leaving one edge and the
/// heading entering the next, folded into [0, 180] degrees.
pub fn turn_angle(from_heading: f64, to_heading: f64) -> f64 {
    fold_angle(to_heading - from_heading)
}

/// Per-degree junction penalty lookup, fixed for the lifetime of a
/// model.
///
/// Entry `i` holds `factor · exp(-i / 45)`: the penalty peaks for a
/// straight-through movement and decays monotonically towards a full
/// reversal, reaching `factor · e⁻⁴` at 180°. A zero factor yields an
/// all-zero table.
#[derive(Clone, Debug)]
pub struct TurnCostTable {
    table: [f64; 181],
}

impl TurnCostTable {
    /// Builds the table for a non-negative penalty factor.
    pub fn new(turn_penalty_factor: f64) -> Self {
        let mut table = [0.0; 181];

        if turn_penalty_factor > 0.0 {
            for (degree, entry) in table.iter_mut().enumerate() {
                *entry = turn_penalty_factor * (-(degree as f64) / DECAY_DEGREES).exp();
            }
        }

        Self { table }
    }

    /// Penalty for a turn through `angle` degrees. Angles outside
    /// [0, 180] are folded before the lookup.
    pub fn penalty(&self, angle: f64) -> f64 {
        self.table[fold_angle(angle).round() as usize]
    }
}
